//! Typed validation findings.
//!
//! Validators describe each problem with one of these enums and turn it into a
//! [`ValidationError`](super::ValidationError) together with its location. The
//! `Display` implementation is the user-facing message.

use thiserror::Error;

/// A value that does not match the shape declared by the schema model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A required field is absent.
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    /// A value has the wrong JSON kind, including `null` for a non-nullable field.
    #[error("Expected {expected} for '{field}', found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// A string outside of a closed enumeration.
    #[error("Unrecognized value '{value}' for field '{field}', expected one of '{enumeration}'")]
    UnrecognizedValue {
        field: String,
        value: String,
        enumeration: String,
    },
}

/// A violated cross-entity invariant of a structurally valid document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsistencyError {
    /// An identifier was declared a second time.
    #[error("Duplicate {kind} id '{id}', first declared at '{first}'")]
    DuplicateId {
        kind: String,
        id: String,
        first: String,
    },

    /// A `vessel_id` that does not name a vessel.
    #[error("Vessel '{vessel_id}' referenced by {owner} '{owner_id}' is not defined in the document.")]
    UndefinedVessel {
        vessel_id: String,
        owner: String,
        owner_id: String,
    },

    /// A species reference that does not name a protein, complex or small molecule.
    #[error("Species '{species_id}' in {context} is not defined in the document.")]
    UndefinedSpecies { species_id: String, context: String },

    /// `data` and `time` of a measurement series disagree in length.
    #[error(
        "Data and time vectors have different lengths for species '{species_id}'. \
         Got {data} data points and {time} time points."
    )]
    LengthMismatch {
        species_id: String,
        data: usize,
        time: usize,
    },

    /// Data points without time points.
    #[error("Time vector is missing for species '{species_id}'.")]
    MissingTime { species_id: String },

    /// Time points without data points.
    #[error("Data vector is missing for species '{species_id}'.")]
    MissingData { species_id: String },

    /// An ODE or rate law without a species on its left hand side.
    #[error("Equation of type '{equation_type}' must reference a species, but 'species_id' is missing.")]
    MissingEquationSpecies { equation_type: String },

    /// `initial` differs from the first data point at `t = 0`.
    #[error(
        "Initial value '{initial}' does not match the first data point '{first}' at t=0 \
         for species '{species_id}'."
    )]
    InitialMismatch {
        species_id: String,
        initial: f64,
        first: f64,
    },
}
