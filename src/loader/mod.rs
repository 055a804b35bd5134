// file: src/loader/mod.rs
// description: input loading module exports
// reference: internal module structure

pub mod diagnostics;
pub mod parsers;
pub mod reader;

pub use diagnostics::{ConsoleSink, CountingSink, Diagnostic, DiagnosticKind, DiagnosticSink};
pub use parsers::{FloatParser, IntegerParser, LineParser, WordParser};
pub use reader::{load_file, read_dataset, split_lines};
