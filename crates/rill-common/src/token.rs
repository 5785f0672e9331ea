use std::fmt;

use serde::Serialize;

/// A token produced by the Rill scanner.
///
/// Tokens borrow their lexeme from the source text they were scanned
/// from, so the source buffer must outlive the token stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The exact source slice this token matched. Empty only for `Eof`.
    pub lexeme: &'src str,
    /// Literal value for `NumberLiteral` and `StringLiteral`; `None` for
    /// every other kind.
    pub literal: Option<Literal<'src>>,
    /// 1-based source line the lexeme started on.
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Create a new token. Tokens are immutable after construction.
    pub fn new(
        kind: TokenKind,
        lexeme: &'src str,
        literal: Option<Literal<'src>>,
        line: u32,
    ) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Display for Token<'_> {
    /// Render `"<kind> <lexeme> <literal-or-nil>"` for diagnostics and
    /// token dumps. Not part of the token's identity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(lit) => write!(f, "{lit}"),
            None => write!(f, "nil"),
        }
    }
}

/// The literal value carried by a literal-category token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Literal<'src> {
    /// Floating-point interpretation of a number lexeme.
    Number(f64),
    /// Text strictly between the quotes of a string lexeme. No escape
    /// processing; embedded newlines are preserved as written.
    Str(&'src str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Every kind of token in the Rill language.
///
/// This enum is the complete vocabulary for the scanner: punctuation,
/// operators, literal categories, all 16 keywords, and the end-of-input
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    // ── Punctuation (10) ───────────────────────────────────────────────
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `*`
    Star,

    // ── Operators (9) ──────────────────────────────────────────────────
    /// `!`
    Bang,
    /// `!=`
    NotEq,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `/` (standalone; `//` starts a line comment and emits nothing)
    Slash,

    // ── Literals (3) ───────────────────────────────────────────────────
    /// Regular identifier, e.g. `foo`, `counter2`.
    Ident,
    /// String literal, e.g. `"hello"`. May span lines.
    StringLiteral,
    /// Number literal, e.g. `42`, `3.14`.
    NumberLiteral,

    // ── Keywords (16) ──────────────────────────────────────────────────
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // ── Special (1) ────────────────────────────────────────────────────
    /// End of input.
    Eof,
}

/// Look up a keyword from its string representation.
///
/// Returns `Some(TokenKind)` if the string is exactly a Rill keyword
/// (case-sensitive), `None` otherwise. The scanner calls this after
/// consuming an identifier-shaped run to distinguish keywords from
/// plain identifiers.
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "and" => Some(TokenKind::And),
        "class" => Some(TokenKind::Class),
        "else" => Some(TokenKind::Else),
        "false" => Some(TokenKind::False),
        "fun" => Some(TokenKind::Fun),
        "for" => Some(TokenKind::For),
        "if" => Some(TokenKind::If),
        "nil" => Some(TokenKind::Nil),
        "or" => Some(TokenKind::Or),
        "print" => Some(TokenKind::Print),
        "return" => Some(TokenKind::Return),
        "super" => Some(TokenKind::Super),
        "this" => Some(TokenKind::This),
        "true" => Some(TokenKind::True),
        "var" => Some(TokenKind::Var),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_from_str_recognizes_all_keywords() {
        let keywords = [
            ("and", TokenKind::And),
            ("class", TokenKind::Class),
            ("else", TokenKind::Else),
            ("false", TokenKind::False),
            ("fun", TokenKind::Fun),
            ("for", TokenKind::For),
            ("if", TokenKind::If),
            ("nil", TokenKind::Nil),
            ("or", TokenKind::Or),
            ("print", TokenKind::Print),
            ("return", TokenKind::Return),
            ("super", TokenKind::Super),
            ("this", TokenKind::This),
            ("true", TokenKind::True),
            ("var", TokenKind::Var),
            ("while", TokenKind::While),
        ];

        for (s, expected) in &keywords {
            assert_eq!(
                keyword_from_str(s),
                Some(*expected),
                "keyword_from_str({s:?}) should return Some({expected:?})"
            );
        }

        // Verify we tested all 16 keywords
        assert_eq!(keywords.len(), 16, "must test all 16 keywords");
    }

    #[test]
    fn keyword_from_str_rejects_non_keywords() {
        assert_eq!(keyword_from_str("foo"), None);
        assert_eq!(keyword_from_str("classes"), None);
        assert_eq!(keyword_from_str("x"), None);
        assert_eq!(keyword_from_str(""), None);
        assert_eq!(keyword_from_str("IF"), None); // case-sensitive
        assert_eq!(keyword_from_str("True"), None); // case-sensitive
    }

    #[test]
    fn token_new_constructor() {
        let tok = Token::new(TokenKind::Var, "var", None, 3);
        assert_eq!(tok.kind, TokenKind::Var);
        assert_eq!(tok.lexeme, "var");
        assert_eq!(tok.literal, None);
        assert_eq!(tok.line, 3);
    }

    #[test]
    fn token_equality_is_by_value() {
        let a = Token::new(TokenKind::NumberLiteral, "1", Some(Literal::Number(1.0)), 1);
        let b = Token::new(TokenKind::NumberLiteral, "1", Some(Literal::Number(1.0)), 1);
        let c = Token::new(TokenKind::NumberLiteral, "1", Some(Literal::Number(1.0)), 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn token_display_with_literal() {
        let tok = Token::new(
            TokenKind::StringLiteral,
            "\"hi\"",
            Some(Literal::Str("hi")),
            1,
        );
        assert_eq!(tok.to_string(), "StringLiteral \"hi\" hi");
    }

    #[test]
    fn token_display_without_literal() {
        let tok = Token::new(TokenKind::Semicolon, ";", None, 1);
        assert_eq!(tok.to_string(), "Semicolon ; nil");
    }

    #[test]
    fn eof_token_display() {
        let tok = Token::new(TokenKind::Eof, "", None, 4);
        assert_eq!(tok.to_string(), "Eof  nil");
    }
}
