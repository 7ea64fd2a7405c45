//! Schema module for validating the structure of EnzymeML documents.
//!
//! This module checks an arbitrary decoded JSON value against the
//! [schema model](crate::model). It descends recursively from the root type, mirroring
//! the registered field descriptors, and collects *every* problem in one pass instead of
//! stopping at the first one. Errors are ordered by field declaration order at each level
//! and by index within arrays.
//!
//! Unknown object keys are ignored, so documents may carry auxiliary metadata.

use log::debug;
use serde_json::Value;

use crate::model::{schema_model, SchemaError, SchemaModel, TypeTag, ROOT_TYPE};
use crate::validation::error::StructuralError;
use crate::validation::pointer::Pointer;
use crate::validation::result::{ValidationError, ValidationResult};

/// Validates a decoded value against the EnzymeML document schema.
///
/// # Arguments
/// * `value` - Any decoded JSON value
///
/// # Returns
/// * `ValidationResult` - All structural errors, in traversal order
pub fn validate_structure(value: &Value) -> ValidationResult {
    match StructuralValidator::default().validate(value, ROOT_TYPE) {
        Ok(result) => result,
        Err(error) => ValidationResult::from_errors(vec![ValidationError::new(Pointer::root(), error)]),
    }
}

/// Validates a JSON string against the EnzymeML document schema.
///
/// # Arguments
/// * `content` - JSON string containing the EnzymeML document
///
/// # Returns
/// * `Result<ValidationResult, serde_json::Error>` - Validation result, or the parse error
///   if `content` is not JSON
pub fn validate_json(content: &str) -> Result<ValidationResult, serde_json::Error> {
    let json: Value = serde_json::from_str(content)?;
    Ok(validate_structure(&json))
}

/// Recursive-descent validator over a [`SchemaModel`].
#[derive(Debug, Clone, Copy)]
pub struct StructuralValidator<'a> {
    model: &'a SchemaModel,
}

impl Default for StructuralValidator<'static> {
    fn default() -> Self {
        Self::new(schema_model())
    }
}

impl<'a> StructuralValidator<'a> {
    pub fn new(model: &'a SchemaModel) -> Self {
        Self { model }
    }

    /// Validates `value` as an instance of the struct type `root_type`.
    ///
    /// # Arguments
    /// * `value` - Any decoded JSON value
    /// * `root_type` - Registered name of the struct to validate against
    ///
    /// # Returns
    /// * `Result<ValidationResult, SchemaError>` - The collected errors, or a schema error
    ///   if `root_type` (or a type it refers to) is not a registered struct
    pub fn validate(&self, value: &Value, root_type: &str) -> Result<ValidationResult, SchemaError> {
        let mut errors = Vec::new();
        self.check_struct(value, root_type, root_type, &Pointer::root(), &mut errors)?;

        debug!(
            "Structural validation against '{root_type}' found {} error(s)",
            errors.len()
        );

        Ok(ValidationResult::from_errors(errors))
    }

    fn check_struct(
        &self,
        value: &Value,
        type_name: &str,
        label: &str,
        pointer: &Pointer,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), SchemaError> {
        let fields = self.model.fields_of(type_name)?;

        let Some(object) = value.as_object() else {
            errors.push(mismatch(pointer, label, "object", value));
            return Ok(());
        };

        for field in fields {
            let location = pointer.field(field.name);

            match object.get(field.name) {
                None => {
                    if field.required && !field.nullable {
                        errors.push(ValidationError::new(
                            location,
                            StructuralError::MissingField {
                                field: field.name.to_string(),
                            },
                        ));
                    }
                }
                Some(Value::Null) => {
                    if !field.nullable {
                        errors.push(mismatch(
                            &location,
                            field.name,
                            expected_kind(&field.type_tag),
                            &Value::Null,
                        ));
                    }
                }
                Some(inner) => {
                    self.check_value(inner, &field.type_tag, field.name, &location, errors)?;
                }
            }
        }

        Ok(())
    }

    fn check_value(
        &self,
        value: &Value,
        type_tag: &TypeTag,
        label: &str,
        pointer: &Pointer,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), SchemaError> {
        match type_tag {
            TypeTag::Primitive(primitive) => {
                if !primitive.accepts(value) {
                    errors.push(mismatch(pointer, label, expected_kind(type_tag), value));
                }
            }
            TypeTag::Enum(name) => {
                let descriptor = self.model.enum_of(name)?;

                match value.as_str() {
                    Some(literal) if descriptor.contains(literal) => {}
                    Some(literal) => errors.push(ValidationError::new(
                        pointer.clone(),
                        StructuralError::UnrecognizedValue {
                            field: label.to_string(),
                            value: literal.to_string(),
                            enumeration: descriptor.name.to_string(),
                        },
                    )),
                    None => errors.push(mismatch(pointer, label, expected_kind(type_tag), value)),
                }
            }
            TypeTag::Ref(name) => self.check_struct(value, name, label, pointer, errors)?,
            TypeTag::Array(inner) => match value.as_array() {
                Some(items) => {
                    for (idx, item) in items.iter().enumerate() {
                        self.check_value(item, inner, label, &pointer.index(idx), errors)?;
                    }
                }
                None => errors.push(mismatch(pointer, label, expected_kind(type_tag), value)),
            },
        }

        Ok(())
    }
}

fn mismatch(pointer: &Pointer, label: &str, expected: &str, found: &Value) -> ValidationError {
    ValidationError::new(
        pointer.clone(),
        StructuralError::TypeMismatch {
            field: label.to_string(),
            expected: expected.to_string(),
            found: json_kind(found).to_string(),
        },
    )
}

fn expected_kind(type_tag: &TypeTag) -> &'static str {
    match type_tag {
        TypeTag::Primitive(primitive) => primitive.as_str(),
        TypeTag::Enum(_) => "string",
        TypeTag::Ref(_) => "object",
        TypeTag::Array(_) => "array",
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
