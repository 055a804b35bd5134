// file: src/bin/convert_numbers.rs
// description: binary and hexadecimal conversion for a file of integers
// reference: writes ConvertionResults.txt

use filestats::analyzer::convert_all;
use filestats::cli::run_program;
use filestats::loader::IntegerParser;
use filestats::pipeline::CONVERSION;
use num_bigint::BigInt;
use std::process::ExitCode;

fn main() -> ExitCode {
    run_program(CONVERSION, IntegerParser, |numbers: &[BigInt]| {
        Ok(convert_all(numbers))
    })
}
