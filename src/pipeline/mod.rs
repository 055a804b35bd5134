// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
pub mod program;

pub use orchestrator::{PipelineOrchestrator, PipelineOutcome};
pub use program::{CONVERSION, ProgramSpec, STATISTICS, WORD_COUNT};
