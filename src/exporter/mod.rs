// file: src/exporter/mod.rs
// description: machine-readable export module exports
// reference: internal module structure

pub mod json;

pub use json::{ExportDocument, JsonExporter};
