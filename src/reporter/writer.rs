// file: src/reporter/writer.rs
// description: persists report text to its fixed results file and echoes it to stdout

use super::report::Report;
use crate::error::{PipelineError, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn results_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Writes the report to `file_name`, replacing any previous contents.
    pub fn persist(&self, file_name: &str, report: &Report) -> Result<PathBuf> {
        let path = self.results_path(file_name);
        fs::write(&path, report.text()).map_err(|e| PipelineError::file_operation(&path, e))?;
        info!("Wrote {} bytes to {}", report.text().len(), path.display());
        Ok(path)
    }

    pub fn display(&self, report: &Report, out: &mut impl Write) -> Result<()> {
        out.write_all(report.text().as_bytes())?;
        out.flush()?;
        debug!("Report written to stdout");
        Ok(())
    }

    /// Prints the report, then persists it. One file write per call.
    pub fn publish(&self, file_name: &str, report: &Report) -> Result<PathBuf> {
        self.display(report, &mut std::io::stdout().lock())?;
        self.persist(file_name, report)
    }
}
