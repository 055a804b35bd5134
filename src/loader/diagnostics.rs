// file: src/loader/diagnostics.rs
// description: structured diagnostics for skipped input lines and the sinks that receive them
// reference: internal data structures

use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A whole line that failed to parse as the target number type.
    InvalidData,
    /// A whitespace-separated token with no alphanumeric characters.
    InvalidWord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line number in the input file.
    pub line_number: usize,
    pub text: String,
}

impl Diagnostic {
    pub fn invalid_data(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::InvalidData,
            line_number,
            text: text.into(),
        }
    }

    pub fn invalid_word(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::InvalidWord,
            line_number,
            text: text.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            DiagnosticKind::InvalidData => "Invalid data",
            DiagnosticKind::InvalidWord => "Invalid word",
        };
        write!(f, "{} at line {}: '{}'", label, self.line_number, self.text)
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Prints each diagnostic to stdout as it arrives.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        debug!(
            "Skipping line {} ({:?})",
            diagnostic.line_number, diagnostic.kind
        );
        println!("{}", diagnostic);
    }
}

/// Forwards to another sink while counting what passes through.
pub struct CountingSink<'a> {
    inner: &'a mut dyn DiagnosticSink,
    count: usize,
}

impl<'a> CountingSink<'a> {
    pub fn new(inner: &'a mut dyn DiagnosticSink) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl DiagnosticSink for CountingSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.count += 1;
        self.inner.report(diagnostic);
    }
}
