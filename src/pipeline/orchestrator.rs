// file: src/pipeline/orchestrator.rs
// description: coordinates loading, analysis and reporting for one program run
// reference: load fully, analyze fully, report fully

use super::program::ProgramSpec;
use crate::config::RunConfig;
use crate::error::{PipelineError, Result};
use crate::exporter::JsonExporter;
use crate::loader::{CountingSink, DiagnosticSink, LineParser, load_file};
use crate::reporter::{Report, ReportWriter, Reportable};
use crate::utils::OperationTimer;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug)]
pub struct PipelineOutcome<R> {
    pub result: R,
    pub report: Report,
    pub results_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

pub struct PipelineOrchestrator {
    program: ProgramSpec,
    config: RunConfig,
}

impl PipelineOrchestrator {
    pub fn new(program: ProgramSpec, config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { program, config })
    }

    /// Runs one batch: nothing is written unless loading and analysis succeed.
    pub fn run<P, R, F>(
        &self,
        parser: &P,
        sink: &mut dyn DiagnosticSink,
        analyze: F,
    ) -> Result<PipelineOutcome<R>>
    where
        P: LineParser,
        R: Reportable,
        F: FnOnce(&[P::Value]) -> Result<R>,
    {
        info!("Starting {} on {}", self.program.name, self.config.input.display());
        let started = Instant::now();

        let mut counting = CountingSink::new(sink);
        let load_timer = OperationTimer::new("load");
        let dataset = load_file(&self.config.input, parser, &mut counting)?;
        load_timer.finish_with_count(dataset.len());
        let skipped = counting.count();

        if dataset.is_empty() {
            return Err(PipelineError::EmptyDataset(
                self.program.empty_message.to_string(),
            ));
        }

        let analyze_timer = OperationTimer::new("analyze");
        let result = analyze(&dataset)?;
        analyze_timer.finish_with_count(dataset.len());

        let report = Report::new(&result, started.elapsed(), skipped);
        debug!(
            "{} values analyzed, {} skipped",
            dataset.len(),
            report.skipped()
        );

        let writer = ReportWriter::new(&self.config.output_dir);
        let results_path = writer.publish(self.program.results_file, &report)?;

        let json_path = match &self.config.json_output {
            Some(path) => Some(JsonExporter::new(path).export(
                self.program.name,
                &self.config.input,
                &report,
                &result,
            )?),
            None => None,
        };

        Ok(PipelineOutcome {
            result,
            report,
            results_path,
            json_path,
        })
    }
}
