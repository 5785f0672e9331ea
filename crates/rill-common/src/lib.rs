// Shared leaf types for the Rill front end.
//
// Everything here is consumed by the lexer crate and by host tooling:
// the token vocabulary, the lexical error taxonomy, the diagnostic sink
// boundary, and a line index for rendering line-based diagnostics.

pub mod error;
pub mod line_index;
pub mod report;
pub mod token;

pub use error::{LexError, LexErrorKind};
pub use line_index::LineIndex;
pub use report::{CollectedDiagnostics, Diagnostic, DiagnosticSink};
pub use token::{keyword_from_str, Literal, Token, TokenKind};
