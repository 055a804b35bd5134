// file: src/loader/parsers.rs
// description: per-program line parsers turning raw text into typed dataset values
// reference: internal parsing rules

use super::diagnostics::{Diagnostic, DiagnosticSink};
use num_bigint::BigInt;
use std::borrow::Cow;
use std::str::FromStr;

/// Converts one non-blank input line into zero or more dataset values.
///
/// Implementations never fail: anything that cannot be converted is reported
/// to the sink and left out of the dataset.
pub trait LineParser {
    type Value;

    fn parse_line(
        &self,
        line_number: usize,
        line: &str,
        dataset: &mut Vec<Self::Value>,
        sink: &mut dyn DiagnosticSink,
    );
}

/// Drops `_` digit separators. An underscore must sit between two digits;
/// any other placement makes the literal invalid.
pub fn strip_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }

    let bytes = value.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !matches!(before, Some(b) if b.is_ascii_digit())
            || !matches!(after, Some(b) if b.is_ascii_digit())
        {
            return None;
        }
    }

    Some(Cow::Owned(value.replace('_', "")))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatParser;

impl LineParser for FloatParser {
    type Value = f64;

    fn parse_line(
        &self,
        line_number: usize,
        line: &str,
        dataset: &mut Vec<f64>,
        sink: &mut dyn DiagnosticSink,
    ) {
        let value = line.trim();
        let parsed = strip_digit_separators(value).and_then(|digits| digits.parse::<f64>().ok());
        match parsed {
            Some(number) => dataset.push(number),
            None => sink.report(Diagnostic::invalid_data(line_number, value)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerParser;

impl LineParser for IntegerParser {
    type Value = BigInt;

    fn parse_line(
        &self,
        line_number: usize,
        line: &str,
        dataset: &mut Vec<BigInt>,
        sink: &mut dyn DiagnosticSink,
    ) {
        let value = line.trim();
        let parsed =
            strip_digit_separators(value).and_then(|digits| BigInt::from_str(&digits).ok());
        match parsed {
            Some(number) => dataset.push(number),
            None => sink.report(Diagnostic::invalid_data(line_number, value)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordParser;

impl WordParser {
    /// Keeps alphanumeric characters only, lowercased.
    pub fn clean_token(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl LineParser for WordParser {
    type Value = String;

    fn parse_line(
        &self,
        line_number: usize,
        line: &str,
        dataset: &mut Vec<String>,
        sink: &mut dyn DiagnosticSink,
    ) {
        for raw_word in line.split_whitespace() {
            let cleaned = Self::clean_token(raw_word);
            if cleaned.is_empty() {
                sink.report(Diagnostic::invalid_word(line_number, raw_word));
            } else {
                dataset.push(cleaned);
            }
        }
    }
}
