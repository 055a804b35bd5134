// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

//! Batch file analyzers sharing one load, analyze, report pipeline:
//! descriptive statistics (`compute_statistics`), radix conversion
//! (`convert_numbers`) and word frequencies (`word_count`).

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod loader;
pub mod pipeline;
pub mod reporter;
pub mod utils;

pub use analyzer::{Conversion, Statistics, WordFrequencies};
pub use config::RunConfig;
pub use error::{PipelineError, Result};
pub use exporter::JsonExporter;
pub use loader::{Diagnostic, DiagnosticSink, FloatParser, IntegerParser, LineParser, WordParser};
pub use pipeline::{CONVERSION, PipelineOrchestrator, ProgramSpec, STATISTICS, WORD_COUNT};
pub use reporter::{Report, ReportWriter, Reportable};
pub use utils::{OperationTimer, PerformanceMetrics, Validator};
