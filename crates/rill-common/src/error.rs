use std::fmt;

use serde::Serialize;

/// A lexical error with the 1-based line it was detected on.
///
/// Every lexical error is recoverable: the scanner reports it and keeps
/// going, so one pass can surface every malformed construct in a source
/// file at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
}

impl LexError {
    /// Create a new lexical error.
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        Self { kind, line }
    }
}

/// The specific kind of lexical error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    UnexpectedCharacter(char),
    /// A string literal was not closed before end of input.
    UnterminatedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character: {c:?}"),
            Self::UnterminatedString => write!(f, "unterminated string literal"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.kind)
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = LexError::new(LexErrorKind::UnexpectedCharacter('@'), 7);
        assert_eq!(err.to_string(), "[line 7] unexpected character: '@'");
    }

    #[test]
    fn lex_error_kind_display_all_variants() {
        assert_eq!(
            LexErrorKind::UnexpectedCharacter('#').to_string(),
            "unexpected character: '#'"
        );
        assert_eq!(
            LexErrorKind::UnterminatedString.to_string(),
            "unterminated string literal"
        );
    }
}
