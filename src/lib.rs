//! EnzymeML Validator Library
//!
//! This library validates EnzymeML documents in two phases:
//! - Structural validation of any JSON value against the EnzymeML schema model
//! - Consistency validation of cross-entity invariants on the typed document
//!
//! Around the two validators it provides a parse-validate pipeline, a reporter that
//! prepares results for display, file helpers and optional WebAssembly bindings.
//!
//! ```
//! use enzymeml_validator::pipeline::Validator;
//!
//! let outcome = Validator::default()
//!     .validate_str(r#"{"name": "Test", "vessels": [{"id": "v1"}]}"#)
//!     .unwrap();
//!
//! assert!(outcome.is_structurally_invalid());
//! assert_eq!(outcome.structure().error_count(), 4);
//! ```

#![warn(unused_imports)]

/// Procedural and helper macros
pub mod macros {
    /// Closed enumerations of string literals
    #[macro_use]
    pub mod literal_enum;
}

pub mod versions {
    pub use crate::versions::v2 as latest;
    pub mod v2;
}

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::io::*;
    pub use crate::pipeline::{Outcome, PipelineError, Validator, ValidatorBuilder};
    pub use crate::validation::{
        check_consistency, check_consistency_with, validate_structure, ConsistencyOptions,
        ValidationError, ValidationResult,
    };
    pub use crate::versions::latest::*;
}

/// The EnzymeML schema model
pub mod model {
    pub use crate::model::error::*;
    pub use crate::model::registry::*;
    pub use crate::model::types::*;

    /// Errors of schema lookups
    pub mod error;
    /// Registry of all EnzymeML types
    pub mod registry;
    /// Type, field and enumeration descriptors
    pub mod types;
}

/// Validation of EnzymeML documents and components
pub mod validation {
    pub use crate::validation::consistency::{
        check_consistency, check_consistency_with, ConsistencyOptions, ConsistencyOptionsBuilder,
    };
    pub use crate::validation::error::*;
    pub use crate::validation::pointer::Pointer;
    pub use crate::validation::result::*;
    pub use crate::validation::schema::*;

    /// Main consistency interface
    pub mod consistency;
    /// Validation of equation and species pairing
    mod equations;
    /// Typed validation findings
    pub mod error;
    /// Validation of measurement data
    mod measurements;
    /// Locations within a document
    pub mod pointer;
    /// Validation of vessel and species references
    mod references;
    /// Validation results
    pub mod result;
    /// Main schema validation interface
    pub mod schema;
    /// Validation of identifier uniqueness
    mod uniqueness;
}

/// Presentation of validation results
pub mod reporter;

/// Parse, validate and check pipeline
pub mod pipeline;

pub mod bindings {
    #[cfg(feature = "wasm")]
    pub mod wasm;
}

/// IO functionality
pub mod io;
