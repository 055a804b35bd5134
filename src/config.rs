// file: src/config.rs
// description: per-run configuration assembled from command-line arguments
// reference: https://docs.rs/clap

use crate::error::Result;
use crate::utils::Validator;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Directory receiving the fixed-name results file.
    pub output_dir: PathBuf,
    pub json_output: Option<PathBuf>,
    pub color: bool,
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from("."),
            json_output: None,
            color: true,
            verbose: false,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_json_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_output = Some(path.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_not_empty_path(&self.input)?;
        Validator::validate_directory(&self.output_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("data.txt");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.json_output.is_none());
        assert!(config.color);
        assert!(!config.verbose);
    }

    #[test]
    fn test_validate() {
        let temp = TempDir::new().unwrap();
        assert!(RunConfig::new("data.txt").with_output_dir(temp.path()).validate().is_ok());
        assert!(RunConfig::new("").with_output_dir(temp.path()).validate().is_err());
        assert!(
            RunConfig::new("data.txt")
                .with_output_dir(temp.path().join("missing"))
                .validate()
                .is_err()
        );
    }
}
