//! Validation pipeline.
//!
//! A submitted document passes through the following stages, once and in order:
//!
//! 1. Parsing: the text is decoded into a JSON value. Failure ends the run with
//!    [`PipelineError::Parse`] and no validator runs.
//! 2. Structural validation against the schema model. If it reports errors, the run ends
//!    with [`Outcome::StructurallyInvalid`] and the consistency validator is skipped.
//! 3. Conversion into the typed [`EnzymeMLDocument`].
//! 4. Consistency validation, ending the run with [`Outcome::Done`].
//!
//! Runs share no state, so one [`Validator`] can be used from several threads at once.

use derive_builder::Builder;
use log::debug;
use serde_json::Value;
use thiserror::Error;
use variantly::Variantly;

use crate::model::{schema_model, SchemaError, SchemaModel, ROOT_TYPE};
use crate::prelude::EnzymeMLDocument;
use crate::reporter::Presentation;
use crate::validation::consistency::{check_consistency_with, ConsistencyOptions};
use crate::validation::result::ValidationResult;
use crate::validation::schema::StructuralValidator;

/// Errors that abort a validation run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input is not well-formed JSON.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// A structurally valid document could not be converted into the typed model. This
    /// indicates a mismatch between the schema model and the typed model.
    #[error("Failed to convert document: {0}")]
    Conversion(#[source] serde_json::Error),

    /// The schema model does not describe the root type.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Terminal state of a successful validation run.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum Outcome {
    /// Structural validation failed; consistency validation did not run.
    StructurallyInvalid(ValidationResult),
    /// Both validators ran: structural result first, consistency result second.
    Done(ValidationResult, ValidationResult),
}

impl Outcome {
    /// Result of the structural validator.
    pub fn structure(&self) -> &ValidationResult {
        match self {
            Outcome::StructurallyInvalid(structure) => structure,
            Outcome::Done(structure, _) => structure,
        }
    }

    /// Result of the consistency validator, if it ran.
    pub fn consistency(&self) -> Option<&ValidationResult> {
        match self {
            Outcome::StructurallyInvalid(_) => None,
            Outcome::Done(_, consistency) => Some(consistency),
        }
    }

    /// Whether the document passed every validator that ran.
    pub fn is_valid(&self) -> bool {
        self.structure().valid && self.consistency().is_some_and(|c| c.valid)
    }

    /// Prepares the outcome for display.
    pub fn presentation(&self) -> Presentation {
        Presentation::new(self.structure(), self.consistency())
    }
}

/// Entry point of the validation pipeline.
///
/// # Examples
///
/// ```
/// use enzymeml_validator::pipeline::ValidatorBuilder;
/// use enzymeml_validator::validation::consistency::ConsistencyOptions;
///
/// let validator = ValidatorBuilder::default()
///     .options(ConsistencyOptions { check_initial_values: true })
///     .build()
///     .unwrap();
///
/// let outcome = validator.validate_str(r#"{"name": "Test"}"#).unwrap();
/// assert!(outcome.is_valid());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Validator {
    /// Options of the consistency validator.
    #[builder(default)]
    options: ConsistencyOptions,

    /// Schema model used for structural validation. It must describe the typed
    /// [`EnzymeMLDocument`] under [`ROOT_TYPE`].
    #[builder(default = "schema_model()")]
    model: &'static SchemaModel,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            options: ConsistencyOptions::default(),
            model: schema_model(),
        }
    }
}

impl Validator {
    pub fn new(options: ConsistencyOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &ConsistencyOptions {
        &self.options
    }

    /// Runs the complete pipeline on a JSON string.
    ///
    /// # Arguments
    ///
    /// * `content` - JSON string containing the EnzymeML document
    ///
    /// # Returns
    ///
    /// The terminal state of the run, or a `PipelineError` if the text is not JSON.
    pub fn validate_str(&self, content: &str) -> Result<Outcome, PipelineError> {
        debug!("Parsing document of {} bytes", content.len());
        let value: Value = serde_json::from_str(content).map_err(PipelineError::Parse)?;
        self.validate_value(value)
    }

    /// Runs the pipeline on an already decoded value.
    pub fn validate_value(&self, value: Value) -> Result<Outcome, PipelineError> {
        debug!("Validating document structure");
        let structure = StructuralValidator::new(self.model).validate(&value, ROOT_TYPE)?;

        if !structure.valid {
            debug!("Document is structurally invalid, skipping consistency validation");
            return Ok(Outcome::StructurallyInvalid(structure));
        }

        let enzmldoc: EnzymeMLDocument =
            serde_json::from_value(value).map_err(PipelineError::Conversion)?;

        debug!("Validating document consistency");
        let consistency = check_consistency_with(&enzmldoc, &self.options);

        Ok(Outcome::Done(structure, consistency))
    }
}
