// file: src/cli.rs
// description: shared command-line driver used by the three analyzer binaries
// reference: https://docs.rs/clap

use crate::config::RunConfig;
use crate::error::{PipelineError, Result as PipelineResult};
use crate::loader::{ConsoleSink, LineParser};
use crate::pipeline::{PipelineOrchestrator, ProgramSpec};
use crate::reporter::Reportable;
use crate::utils::logging::{format_error, format_success, init_logger};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Cli {
    /// Input file to analyze
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Also export the result as json to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    /// Parses `args` under the program's own name. Help and version requests
    /// surface as clap errors too; `usage_exit` sorts them out.
    pub fn parse_for<I, T>(
        program: &ProgramSpec,
        args: I,
    ) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command()
            .name(program.name)
            .bin_name(program.name)
            .about(program.about)
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    pub fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.input);
        config.json_output = self.json;
        config.color = self.color;
        config.verbose = self.verbose;
        config
    }
}

/// Entry point shared by the binaries: parse, run, report, exit.
pub fn run_program<P, R, F>(program: ProgramSpec, parser: P, analyze: F) -> ExitCode
where
    P: LineParser,
    R: Reportable,
    F: FnOnce(&[P::Value]) -> PipelineResult<R>,
{
    run_program_from(program, std::env::args_os(), parser, analyze)
}

pub fn run_program_from<I, T, P, R, F>(
    program: ProgramSpec,
    args: I,
    parser: P,
    analyze: F,
) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    P: LineParser,
    R: Reportable,
    F: FnOnce(&[P::Value]) -> PipelineResult<R>,
{
    let cli = match Cli::parse_for(&program, args) {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&program, err),
    };

    let config = cli.into_config();
    let color = config.color;
    init_logger(color, config.verbose);

    match execute(program, config, &parser, analyze) {
        Ok(path) => {
            eprintln!(
                "{}",
                format_success(&format!("Results saved to {}", path.display()), color)
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{} failed: {:#}", program.name, err);
            eprintln!("{}", format_error(&format!("{:#}", err), color));
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn execute<P, R, F>(
    program: ProgramSpec,
    config: RunConfig,
    parser: &P,
    analyze: F,
) -> Result<PathBuf>
where
    P: LineParser,
    R: Reportable,
    F: FnOnce(&[P::Value]) -> PipelineResult<R>,
{
    debug!("Run configuration: {:?}", config);
    let orchestrator =
        PipelineOrchestrator::new(program, config).context("Invalid run configuration")?;

    let mut sink = ConsoleSink::new();
    let outcome = orchestrator.run(parser, &mut sink, analyze)?;

    if let Some(json_path) = &outcome.json_path {
        debug!("Json export at {}", json_path.display());
    }

    Ok(outcome.results_path)
}

fn usage_exit(program: &ProgramSpec, err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{}", err.render());
            eprintln!("{}", program.usage());
            ExitCode::from(1)
        }
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<PipelineError>()
        .map(PipelineError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Statistics;
    use crate::loader::FloatParser;
    use crate::pipeline::{CONVERSION, STATISTICS};

    #[test]
    fn test_parse_single_positional() {
        let cli = Cli::parse_for(&STATISTICS, ["compute_statistics", "data.txt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("data.txt"));
        assert!(cli.json.is_none());
        assert!(cli.color);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_for(
            &CONVERSION,
            ["convert_numbers", "n.txt", "--json", "out.json", "--color", "false", "-v"],
        )
        .unwrap();
        let config = cli.into_config();

        assert_eq!(config.json_output, Some(PathBuf::from("out.json")));
        assert!(!config.color);
        assert!(config.verbose);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Cli::parse_for(&STATISTICS, ["compute_statistics"]).is_err());
        assert!(Cli::parse_for(&STATISTICS, ["compute_statistics", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_usage_error_exit_code() {
        let code = run_program_from(
            STATISTICS,
            ["compute_statistics"],
            FloatParser,
            Statistics::compute,
        );
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_exit_code_for_pipeline_error() {
        let err = anyhow::Error::new(PipelineError::EmptyDataset("none".to_string()));
        assert_eq!(exit_code_for(&err), 1);
        assert_eq!(exit_code_for(&anyhow::anyhow!("other")), 1);
    }
}
