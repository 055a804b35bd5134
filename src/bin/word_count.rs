// file: src/bin/word_count.rs
// description: distinct word frequencies for a text file
// reference: writes WordCountResults.txt

use filestats::analyzer::count_words;
use filestats::cli::run_program;
use filestats::loader::WordParser;
use filestats::pipeline::WORD_COUNT;
use std::process::ExitCode;

fn main() -> ExitCode {
    run_program(WORD_COUNT, WordParser, |words: &[String]| Ok(count_words(words)))
}
