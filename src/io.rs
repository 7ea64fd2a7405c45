use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::{Outcome, PipelineError, Validator};
use crate::prelude::EnzymeMLDocument;

/// Reads the raw text of an EnzymeML document.
///
/// # Arguments
///
/// * `path` - Path to the JSON file containing the EnzymeML document
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(String)` - The file contents
/// * `Err(IOError)` - The file could not be read
pub fn read_source(path: impl Into<PathBuf>) -> Result<String, IOError> {
    let path = path.into();
    std::fs::read_to_string(path).map_err(IOError::FileNotFound)
}

/// Reads and validates an EnzymeML document stored in a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file containing the EnzymeML document
/// * `validator` - The validator to run on the file contents
///
/// # Returns
///
/// Returns a `Result` containing either:
/// * `Ok(Outcome)` - The terminal state of the validation run
/// * `Err(IOError)` - The file could not be read or is not JSON
pub fn validate_file(path: impl Into<PathBuf>, validator: &Validator) -> Result<Outcome, IOError> {
    let content = read_source(path)?;
    Ok(validator.validate_str(&content)?)
}

/// Loads an EnzymeML document from a JSON file without validating it.
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be found or opened (`IOError::FileNotFound`)
/// * The file contents cannot be parsed into the typed model (`IOError::JsonParseError`)
pub fn load_enzmldoc(path: impl Into<PathBuf>) -> Result<EnzymeMLDocument, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

/// Represents errors that can occur while reading EnzymeML documents.
#[derive(Error, Debug)]
pub enum IOError {
    /// Indicates that the specified file could not be found or opened.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// Indicates that the file contents could not be parsed into the typed model.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// The validation pipeline was aborted.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_validate_file() {
        let file = file_with(r#"{"name": "Test"}"#);
        let outcome = validate_file(file.path(), &Validator::default()).unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_validate_file_not_json() {
        let file = file_with("{not json");
        let result = validate_file(file.path(), &Validator::default());
        assert!(matches!(
            result,
            Err(IOError::Pipeline(PipelineError::Parse(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_source(dir.path().join("missing.json"));
        assert!(matches!(result, Err(IOError::FileNotFound(_))));
    }

    #[test]
    fn test_load_enzmldoc() {
        let enzmldoc = load_enzmldoc("tests/data/enzmldoc.json").expect("Failed to load document");
        assert!(!enzmldoc.name.is_empty());

        let file = file_with(r#"{"vessels": []}"#);
        assert!(matches!(
            load_enzmldoc(file.path()),
            Err(IOError::JsonParseError(_))
        ));
    }
}
