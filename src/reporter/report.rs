// file: src/reporter/report.rs
// description: text rendering of analysis results with fixed field labels
// reference: line-oriented key: value report format

use crate::analyzer::{Conversion, Statistics, WordFrequencies};
use serde::Serialize;
use std::time::Duration;

/// A result that knows its own text report layout.
pub trait Reportable: Serialize {
    fn render(&self, elapsed: Duration) -> String;
}

/// Finished report text plus the metadata gathered while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    text: String,
    elapsed: Duration,
    skipped: usize,
}

impl Report {
    pub fn new<R: Reportable>(result: &R, elapsed: Duration, skipped: usize) -> Self {
        Self {
            text: result.render(elapsed),
            elapsed,
            skipped,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of lines or tokens left out of the dataset.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Shortest round-trip form, always with a fractional part or exponent.
/// Exponents carry a sign and at least two digits (`1.2e-05`, `1e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

pub fn execution_time_line(elapsed: Duration) -> String {
    format!(
        "Execution Time (seconds): {}",
        format_float(elapsed.as_secs_f64())
    )
}

impl Reportable for Statistics {
    fn render(&self, elapsed: Duration) -> String {
        format!(
            "Count: {}\n\
             Mean: {}\n\
             Median: {}\n\
             Mode: {}\n\
             Variance: {}\n\
             Standard Deviation: {}\n\
             {}\n",
            self.count,
            format_float(self.mean),
            format_float(self.median),
            format_float(self.mode),
            format_float(self.variance),
            format_float(self.standard_deviation),
            execution_time_line(elapsed)
        )
    }
}

impl Reportable for Vec<Conversion> {
    fn render(&self, elapsed: Duration) -> String {
        let lines: Vec<String> = self
            .iter()
            .map(|c| {
                format!(
                    "Decimal: {} | Binary: {} | Hexadecimal: {}",
                    c.decimal, c.binary, c.hexadecimal
                )
            })
            .collect();

        with_trailer(lines, elapsed)
    }
}

impl Reportable for WordFrequencies {
    fn render(&self, elapsed: Duration) -> String {
        let lines: Vec<String> = self
            .iter()
            .map(|(word, count)| format!("{}: {}", word, count))
            .collect();

        with_trailer(lines, elapsed)
    }
}

fn with_trailer(lines: Vec<String>, elapsed: Duration) -> String {
    format!("{}\n\n{}\n", lines.join("\n"), execution_time_line(elapsed))
}
