// file: src/loader/reader.rs
// description: line-oriented dataset loading with per-line error tolerance
// reference: https://doc.rust-lang.org/std/io/trait.BufRead.html

use super::diagnostics::DiagnosticSink;
use super::parsers::LineParser;
use crate::error::{PipelineError, Result};
use crate::utils::Validator;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads every line from `reader`, skipping blank lines and handing the rest
/// to `parser`. Values keep their input order.
pub fn read_dataset<R, P>(
    mut reader: R,
    parser: &P,
    sink: &mut dyn DiagnosticSink,
) -> std::io::Result<Vec<P::Value>>
where
    R: BufRead,
    P: LineParser,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut dataset = Vec::new();
    for (index, line) in split_lines(&text).enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        parser.parse_line(index + 1, line, &mut dataset, sink);
    }

    Ok(dataset)
}

/// Splits on `\n`, `\r\n` and bare `\r`, dropping the terminators.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

pub fn load_file<P: LineParser>(
    path: &Path,
    parser: &P,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<P::Value>> {
    Validator::validate_input_file(path)?;

    let file = File::open(path).map_err(|e| PipelineError::file_operation(path, e))?;
    debug!("Opened input file: {}", path.display());

    let dataset = read_dataset(BufReader::new(file), parser, sink)
        .map_err(|e| PipelineError::file_operation(path, e))?;

    info!("Loaded {} values from {}", dataset.len(), path.display());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::diagnostics::Diagnostic;
    use crate::loader::parsers::{FloatParser, IntegerParser, WordParser};
    use num_bigint::BigInt;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_malformed_line_is_skipped() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let dataset = read_dataset(Cursor::new("3\nabc\n5"), &FloatParser, &mut sink).unwrap();

        assert_eq!(dataset, vec![3.0, 5.0]);
        assert_eq!(sink, vec![Diagnostic::invalid_data(2, "abc")]);
    }

    #[test]
    fn test_blank_lines_keep_line_numbering() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let input = "1\n\n   \nx\r\n2\r\n";
        let dataset = read_dataset(Cursor::new(input), &IntegerParser, &mut sink).unwrap();

        assert_eq!(dataset, vec![BigInt::from(1), BigInt::from(2)]);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].line_number, 4);
    }

    #[test]
    fn test_bare_carriage_return_ends_a_line() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let dataset = read_dataset(Cursor::new("1\r2\r3\r"), &FloatParser, &mut sink).unwrap();

        assert_eq!(dataset, vec![1.0, 2.0, 3.0]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd\n\ne").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "", "e"]);

        assert_eq!(split_lines("x\n").collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\r\r").collect::<Vec<_>>(), vec!["", ""]);
    }

    #[test]
    fn test_words_across_lines() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let dataset = read_dataset(
            Cursor::new("The cat sat.\n\nThe CAT sat!"),
            &WordParser,
            &mut sink,
        )
        .unwrap();

        assert_eq!(dataset, vec!["the", "cat", "sat", "the", "cat", "sat"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("numbers.txt");
        fs::write(&path, "10\n20\n").unwrap();

        let mut sink: Vec<Diagnostic> = Vec::new();
        let dataset = load_file(&path, &IntegerParser, &mut sink).unwrap();
        assert_eq!(dataset, vec![BigInt::from(10), BigInt::from(20)]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");

        let mut sink: Vec<Diagnostic> = Vec::new();
        let result = load_file(&path, &FloatParser, &mut sink);
        assert!(matches!(result, Err(PipelineError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("binary.txt");
        fs::write(&path, [b'1', b'\n', 0xff, 0xfe, b'\n']).unwrap();

        let mut sink: Vec<Diagnostic> = Vec::new();
        let result = load_file(&path, &FloatParser, &mut sink);
        assert!(matches!(result, Err(PipelineError::FileOperation { .. })));
    }
}
