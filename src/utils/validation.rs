// file: src/utils/validation.rs
// description: input path and argument validation helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// The input must exist and be a regular file (or a link to one).
    pub fn validate_input_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_not_empty_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(PipelineError::Validation(
                "Input path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
