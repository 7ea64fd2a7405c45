//! WASM bindings for EnzymeML validation functionality
//!
//! This module provides WebAssembly bindings for validating EnzymeML documents,
//! including structural validation and consistency checking.
//!
//! If you want to generate the WASM bindings, please use wasm-pack to build the project.
//!
//! ```bash
//! wasm-pack build --target web --out-name enzymeml-validator --features wasm
//! ```
//!
//! The generated JavaScript bindings can be found in the `pkg` directory.

use wasm_bindgen::prelude::*;

use crate::{
    pipeline::{PipelineError, Validator},
    validation::{self, ValidationResult},
};

/// Validates the structure of an EnzymeML document
///
/// # Arguments
/// * `content` - JSON string containing the EnzymeML document
///
/// # Returns
/// * `ValidationResult` - Validation status and all structural errors, or an error if
///   `content` is not JSON
#[wasm_bindgen]
pub fn validate_by_schema(content: &str) -> Result<ValidationResult, JsError> {
    validation::schema::validate_json(content).map_err(|e| JsError::new(&e.to_string()))
}

/// Checks the internal consistency of an EnzymeML document
///
/// Verifies that identifiers are unique, that all references between document elements
/// are defined and that measurement series and equations are complete. The document
/// must be structurally valid.
///
/// # Arguments
/// * `content` - JSON string containing the EnzymeML document
///
/// # Returns
/// * `ValidationResult` - Consistency status and all consistency errors, or an error if
///   `content` is not JSON or not structurally valid
#[wasm_bindgen]
pub fn check_consistency(content: &str) -> Result<ValidationResult, JsError> {
    let outcome = Validator::default()
        .validate_str(content)
        .map_err(|e: PipelineError| JsError::new(&e.to_string()))?;

    outcome.consistency().cloned().ok_or_else(|| {
        JsError::new("The document is structurally invalid, validate it by schema first")
    })
}
