// file: src/pipeline/program.rs
// description: fixed per-program identity: binary name, results file and messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSpec {
    pub name: &'static str,
    pub about: &'static str,
    pub results_file: &'static str,
    /// Printed when the input yields no usable values.
    pub empty_message: &'static str,
}

impl ProgramSpec {
    pub fn usage(&self) -> String {
        format!("Usage: {} fileWithData.txt", self.name)
    }
}

pub const STATISTICS: ProgramSpec = ProgramSpec {
    name: "compute_statistics",
    about: "Compute mean, median, mode, variance and standard deviation of a numeric file",
    results_file: "StatisticsResults.txt",
    empty_message: "No valid numeric data found.",
};

pub const CONVERSION: ProgramSpec = ProgramSpec {
    name: "convert_numbers",
    about: "Convert each integer in a file to binary and hexadecimal",
    results_file: "ConvertionResults.txt",
    empty_message: "No valid numeric data found.",
};

pub const WORD_COUNT: ProgramSpec = ProgramSpec {
    name: "word_count",
    about: "Count distinct words and their frequency in a text file",
    results_file: "WordCountResults.txt",
    empty_message: "No valid words found.",
};
