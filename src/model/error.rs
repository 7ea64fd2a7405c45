use thiserror::Error;

/// Errors raised when the schema model is queried for something it does not describe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No struct or enumeration with this name is registered.
    #[error("Unknown type '{0}'")]
    UnknownType(String),

    /// The name is registered, but as an enumeration rather than a struct.
    #[error("Type '{0}' is an enumeration and has no fields")]
    NotAStruct(String),

    /// A literal outside of a closed enumeration.
    #[error("Unrecognized value '{value}' for enumeration '{enumeration}'")]
    UnrecognizedValue { enumeration: String, value: String },
}
