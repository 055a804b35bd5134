// file: src/exporter/json.rs
// description: optional json export of an analysis result alongside the text report
// reference: https://docs.rs/serde_json

use crate::error::{PipelineError, Result};
use crate::reporter::Report;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportDocument<'a, R: Serialize> {
    pub program: &'a str,
    pub exported_at: String,
    pub input: String,
    pub skipped_lines: usize,
    pub execution_time_seconds: f64,
    pub result: &'a R,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn render<R: Serialize>(
        &self,
        program: &str,
        input: &Path,
        report: &Report,
        result: &R,
    ) -> Result<String> {
        let document = ExportDocument {
            program,
            exported_at: Utc::now().to_rfc3339(),
            input: input.display().to_string(),
            skipped_lines: report.skipped(),
            execution_time_seconds: report.elapsed().as_secs_f64(),
            result,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    pub fn export<R: Serialize>(
        &self,
        program: &str,
        input: &Path,
        report: &Report,
        result: &R,
    ) -> Result<PathBuf> {
        let json = self.render(program, input, report, result)?;
        fs::write(&self.path, json).map_err(|e| PipelineError::file_operation(&self.path, e))?;
        info!("Exported json to {}", self.path.display());
        Ok(self.path.clone())
    }
}
