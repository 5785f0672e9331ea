use serde::Serialize;

/// Where the scanner sends lexical diagnostics.
///
/// The sink is an injected capability rather than process-global state:
/// each scan invocation gets handed one, so tests can collect diagnostics
/// into an ordered list deterministically and hosts can route them to a
/// renderer. `report` is called zero or more times per scan and never
/// stops the scan.
pub trait DiagnosticSink {
    /// Record one diagnostic at a 1-based source line.
    fn report(&mut self, line: u32, message: &str);
}

/// One reported diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: u32,
    pub message: String,
}

/// A sink that appends diagnostics in the order they were reported.
///
/// The default sink for tests and for the `rillc` host, which renders the
/// collected entries after the scan completes.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    entries: Vec<Diagnostic>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics reported so far, in report order.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl DiagnosticSink for CollectedDiagnostics {
    fn report(&mut self, line: u32, message: &str) {
        self.entries.push(Diagnostic {
            line,
            message: message.to_string(),
        });
    }
}
