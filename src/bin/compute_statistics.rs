// file: src/bin/compute_statistics.rs
// description: descriptive statistics for a file of numbers, one per line
// reference: writes StatisticsResults.txt

use filestats::analyzer::Statistics;
use filestats::cli::run_program;
use filestats::loader::FloatParser;
use filestats::pipeline::STATISTICS;
use std::process::ExitCode;

fn main() -> ExitCode {
    run_program(STATISTICS, FloatParser, Statistics::compute)
}
