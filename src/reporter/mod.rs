// file: src/reporter/mod.rs
// description: report formatting and output module exports
// reference: internal module structure

pub mod report;
pub mod writer;

pub use report::{Report, Reportable, execution_time_line, format_float};
pub use writer::ReportWriter;
