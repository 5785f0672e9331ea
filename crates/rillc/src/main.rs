//! The Rill front-end CLI.
//!
//! Provides the `rillc` command with the following subcommand:
//!
//! - `rillc tokens <file>` - Scan a Rill source file and dump its token stream
//!
//! Options:
//! - `--json` - Output tokens and diagnostics as JSON (one object per line)
//! - `--no-color` - Disable colorized output

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use rill_common::{Diagnostic, LineIndex};

#[derive(Parser)]
#[command(name = "rillc", version, about = "The Rill front end")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a Rill source file and print one token per line
    Tokens {
        /// Path to the source file
        file: PathBuf,

        /// Output tokens and diagnostics as JSON (one object per line)
        #[arg(long)]
        json: bool,

        /// Disable colorized output
        #[arg(long = "no-color")]
        no_color: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokens {
            file,
            json,
            no_color,
        } => {
            if let Err(e) = tokens(&file, json, !no_color && !json) {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    }
}

/// Scan one file, dump its tokens to stdout, and render any lexical
/// diagnostics to stderr. Errors out when the file cannot be read or the
/// scan reported diagnostics.
fn tokens(file: &Path, json: bool, color: bool) -> Result<(), String> {
    let source = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;

    let (tokens, diagnostics) = rill_lexer::tokenize(&source);

    for token in &tokens {
        if json {
            let line = serde_json::to_string(token)
                .map_err(|e| format!("Failed to serialize token: {}", e))?;
            println!("{}", line);
        } else {
            println!("{}", token);
        }
    }

    if diagnostics.is_empty() {
        return Ok(());
    }

    report_diagnostics(&source, file, diagnostics.entries(), json, color);
    Err("Scanning failed due to errors above.".to_string())
}

/// Report lexical diagnostics.
///
/// When `json` is true, outputs one JSON object per line to stderr.
/// Otherwise, outputs colorized (or colorless) human-readable reports
/// labelling the byte range of the offending line.
fn report_diagnostics(
    source: &str,
    path: &Path,
    diagnostics: &[Diagnostic],
    json: bool,
    color: bool,
) {
    let file_name = path.display().to_string();
    let index = LineIndex::new(source);

    for diagnostic in diagnostics {
        if json {
            let msg = serde_json::json!({
                "severity": "error",
                "message": diagnostic.message,
                "file": file_name,
                "line": diagnostic.line,
            });
            eprintln!("{}", msg);
        } else {
            use ariadne::{Config, Label, Report, ReportKind, Source};
            let config = if color {
                Config::default()
            } else {
                Config::default().with_color(false)
            };
            let (start, end) = index.line_span(diagnostic.line);
            let mut start = start as usize;
            let mut end = end as usize;
            if start >= source.len() {
                // The diagnosed line is empty or past the end of the
                // source; label the final byte instead.
                start = source.len().saturating_sub(1);
                end = source.len();
            }
            if end <= start {
                end = (start + 1).min(source.len());
            }
            if end <= start {
                // Nothing labelable (empty source); fall back to plain text.
                eprintln!("[line {}] error: {}", diagnostic.line, diagnostic.message);
                continue;
            }
            let _ = Report::<std::ops::Range<usize>>::build(ReportKind::Error, start..end)
                .with_message("Lexical error")
                .with_config(config)
                .with_label(Label::new(start..end).with_message(&diagnostic.message))
                .finish()
                .eprint(Source::from(source));
        }
    }
}
