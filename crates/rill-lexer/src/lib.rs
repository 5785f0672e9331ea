// Rill scanner -- converts source text into a stream of classified tokens.
//
// One left-to-right pass, at most two characters of lookahead (one to
// decide a two-character operator or a fractional dot, one further to
// confirm the fractional digit). Malformed input is reported to the
// injected diagnostic sink and skipped; the scan always runs to
// completion and always ends the stream with an `Eof` token.

mod cursor;

use cursor::Cursor;
use rill_common::error::{LexError, LexErrorKind};
use rill_common::report::{CollectedDiagnostics, DiagnosticSink};
use rill_common::token::{keyword_from_str, Literal, Token, TokenKind};

/// The Rill scanner.
///
/// Owns a [`Cursor`] over one source buffer and an append-only token
/// vector for the duration of a single scan. Nothing persists across
/// invocations: construct it, call [`Scanner::scan_tokens`], discard it.
pub struct Scanner<'src, 'sink> {
    cursor: Cursor<'src>,
    /// 1-based line the cursor is currently on. Never decreases.
    line: u32,
    tokens: Vec<Token<'src>>,
    sink: &'sink mut dyn DiagnosticSink,
}

impl<'src, 'sink> Scanner<'src, 'sink> {
    /// Create a scanner for the given source text, reporting lexical
    /// errors to `sink`.
    pub fn new(source: &'src str, sink: &'sink mut dyn DiagnosticSink) -> Self {
        Self {
            cursor: Cursor::new(source),
            line: 1,
            tokens: Vec::new(),
            sink,
        }
    }

    /// Run the full pass and return the ordered token sequence.
    ///
    /// The returned vector is never empty: its last element is always the
    /// `Eof` sentinel (empty lexeme, absent literal, final line reached).
    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        while !self.cursor.is_eof() {
            self.scan_token();
        }
        self.tokens.push(Token::new(TokenKind::Eof, "", None, self.line));
        self.tokens
    }

    /// Scan one lexeme starting at the current cursor position.
    ///
    /// Consumes at least one character. Emits zero or one token.
    fn scan_token(&mut self) {
        let start = self.cursor.pos();
        let line = self.line;
        let Some(c) = self.cursor.advance() else {
            return;
        };

        match c {
            // ── Single-character punctuation ─────────────────────────────
            '(' => self.push(TokenKind::LParen, start, line),
            ')' => self.push(TokenKind::RParen, start, line),
            '{' => self.push(TokenKind::LBrace, start, line),
            '}' => self.push(TokenKind::RBrace, start, line),
            ',' => self.push(TokenKind::Comma, start, line),
            '.' => self.push(TokenKind::Dot, start, line),
            '-' => self.push(TokenKind::Minus, start, line),
            '+' => self.push(TokenKind::Plus, start, line),
            ';' => self.push(TokenKind::Semicolon, start, line),
            '*' => self.push(TokenKind::Star, start, line),

            // ── One- or two-character operators (maximal munch) ──────────
            '!' => {
                let kind = if self.cursor.eat_if('=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                };
                self.push(kind, start, line);
            }
            '=' => {
                let kind = if self.cursor.eat_if('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                };
                self.push(kind, start, line);
            }
            '<' => {
                let kind = if self.cursor.eat_if('=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                };
                self.push(kind, start, line);
            }
            '>' => {
                let kind = if self.cursor.eat_if('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                };
                self.push(kind, start, line);
            }

            // ── Slash or line comment ────────────────────────────────────
            '/' => {
                if self.cursor.eat_if('/') {
                    // Comment runs to (excluding) the newline, which the
                    // next iteration consumes and counts.
                    self.cursor.eat_while(|c| c != '\n');
                } else {
                    self.push(TokenKind::Slash, start, line);
                }
            }

            // ── Whitespace ───────────────────────────────────────────────
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,

            // ── Literals and identifiers ─────────────────────────────────
            '"' => self.string(start, line),
            '0'..='9' => self.number(start, line),
            c if is_alpha(c) => self.identifier(start, line),

            // ── Error recovery: skip the character, keep scanning ────────
            c => self.error(LexErrorKind::UnexpectedCharacter(c)),
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    /// Emit a token with no literal value covering `start..cursor`.
    fn push(&mut self, kind: TokenKind, start: u32, line: u32) {
        let lexeme = self.cursor.slice(start, self.cursor.pos());
        self.tokens.push(Token::new(kind, lexeme, None, line));
    }

    /// Report a recoverable lexical error at the current line.
    fn error(&mut self, kind: LexErrorKind) {
        let err = LexError::new(kind, self.line);
        self.sink.report(err.line, &err.kind.to_string());
    }

    // ── String literals ──────────────────────────────────────────────────

    /// Scan a string literal; the opening `"` is already consumed.
    ///
    /// Strings may span lines and perform no escape processing (a
    /// backslash is an ordinary character). An unterminated string is
    /// reported at the line input ended on and contributes no token; the
    /// token for a terminated string carries the line it started on.
    fn string(&mut self, start: u32, line: u32) {
        while let Some(c) = self.cursor.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.cursor.advance();
        }

        if self.cursor.is_eof() {
            self.error(LexErrorKind::UnterminatedString);
            return;
        }

        // Closing quote; peek told us it is there.
        self.cursor.advance();

        let end = self.cursor.pos();
        let lexeme = self.cursor.slice(start, end);
        let value = self.cursor.slice(start + 1, end - 1);
        self.tokens.push(Token::new(
            TokenKind::StringLiteral,
            lexeme,
            Some(Literal::Str(value)),
            line,
        ));
    }

    // ── Number literals ──────────────────────────────────────────────────

    /// Scan a number literal; the first digit is already consumed.
    ///
    /// Grammar is digits with an optional fractional part. A `.` is only
    /// consumed when a digit follows it, so `123.` scans as the number
    /// `123` and leaves the dot for the next iteration (member access on
    /// a numeric literal).
    fn number(&mut self, start: u32, line: u32) {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let lexeme = self.cursor.slice(start, self.cursor.pos());
        // Lexeme matches digits ('.' digits)?, which always parses.
        let value: f64 = lexeme.parse().expect("number lexeme parses as f64");
        self.tokens.push(Token::new(
            TokenKind::NumberLiteral,
            lexeme,
            Some(Literal::Number(value)),
            line,
        ));
    }

    // ── Identifiers and keywords ─────────────────────────────────────────

    /// Scan an identifier or keyword; the first letter is already consumed.
    ///
    /// Identifiers are runs of ASCII letters and digits. Underscores and
    /// non-ASCII characters are not identifier characters in Rill.
    fn identifier(&mut self, start: u32, line: u32) {
        self.cursor.eat_while(is_alpha_numeric);
        let lexeme = self.cursor.slice(start, self.cursor.pos());

        let kind = keyword_from_str(lexeme).unwrap_or(TokenKind::Ident);
        self.tokens.push(Token::new(kind, lexeme, None, line));
    }
}

/// Convenience: scan the entire source, collecting diagnostics.
///
/// Returns the token sequence (always ending in `Eof`) together with the
/// diagnostics reported along the way, in order.
pub fn tokenize(source: &str) -> (Vec<Token<'_>>, CollectedDiagnostics) {
    let mut diagnostics = CollectedDiagnostics::new();
    let tokens = Scanner::new(source, &mut diagnostics).scan_tokens();
    (tokens, diagnostics)
}

/// Whether a character can start an identifier.
fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Whether a character can continue an identifier.
fn is_alpha_numeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
