//! Result types shared by the structural and the consistency validator.

use std::fmt;

use colored::Colorize;
#[cfg(feature = "wasm")]
use tsify_next::Tsify;

use super::pointer::Pointer;

/// Outcome of one validation phase.
///
/// `valid` is true exactly when `errors` is empty. Errors keep the order in which the
/// validator discovered them, which is deterministic for a given document.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ValidationResult {
    /// Whether the document passed this phase.
    pub valid: bool,
    /// Every problem found, in traversal order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds a result from the collected errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A result without errors.
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    /// Number of errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Returns the errors located at or below `location`.
    ///
    /// # Arguments
    ///
    /// * `location` - A location such as `#/measurements/0`.
    ///
    /// # Returns
    ///
    /// All errors whose location equals `location` or lies within it.
    pub fn errors_at(&self, location: &str) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|error| {
                error.location == location
                    || error
                        .location
                        .strip_prefix(location)
                        .is_some_and(|rest| rest.starts_with('/'))
            })
            .collect()
    }
}

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "wasm", derive(Tsify))]
#[cfg_attr(feature = "wasm", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ValidationError {
    /// JSON-pointer-style path to the offending value, e.g. `#/vessels/0/id`.
    pub location: String,
    /// Human readable description. Identifiers and values are wrapped in single
    /// quotes so front ends can highlight them.
    pub message: String,
}

impl ValidationError {
    /// Creates an error at `location` whose message is the `Display` of `problem`.
    pub fn new(location: Pointer, problem: impl fmt::Display) -> Self {
        Self {
            location: location.into(),
            message: problem.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\t└── {}",
            self.location.bold(),
            self.message.bold().red()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(location: &str) -> ValidationError {
        ValidationError {
            location: location.to_string(),
            message: "problem".to_string(),
        }
    }

    #[test]
    fn test_validity_follows_errors() {
        assert!(ValidationResult::valid().valid);
        let result = ValidationResult::from_errors(vec![error("#/name")]);
        assert!(!result.valid);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_errors_at_matches_whole_segments() {
        let result = ValidationResult::from_errors(vec![
            error("#/measurements/1"),
            error("#/measurements/1/species_data/0"),
            error("#/measurements/10"),
        ]);

        assert_eq!(result.errors_at("#/measurements/1").len(), 2);
        assert_eq!(result.errors_at("#/measurements/10").len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let result = ValidationResult::from_errors(vec![error("#/name")]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "errors": [{"location": "#/name", "message": "problem"}]
            })
        );
    }
}
