//! Descriptor types of the schema model.
//!
//! The model is pure data: a struct is an ordered list of [`FieldDescriptor`]s, and every
//! field carries a [`TypeTag`]. Entity- and enumeration-typed fields name their target
//! instead of embedding it, so recursive and mutually recursive types are resolved by
//! lookup in the [`SchemaModel`](super::SchemaModel) and never by nesting.

use std::fmt;

use serde::Serialize;

/// Primitive JSON kinds a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    String,
    /// Any JSON number.
    Number,
    /// A JSON number representable as a signed 64-bit integer.
    Integer,
    Boolean,
    /// A free-form JSON object (e.g. the linked-data `@context` map).
    Object,
}

impl Primitive {
    /// Checks whether a decoded value is of this primitive kind.
    pub fn accepts(&self, value: &serde_json::Value) -> bool {
        match self {
            Primitive::String => value.is_string(),
            Primitive::Number => value.is_number(),
            Primitive::Integer => value.as_i64().is_some(),
            Primitive::Boolean => value.is_boolean(),
            Primitive::Object => value.is_object(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Integer => "integer",
            Primitive::Boolean => "boolean",
            Primitive::Object => "object",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "lowercase")]
pub enum TypeTag {
    Primitive(Primitive),
    /// A closed enumeration, referenced by its registered name.
    Enum(&'static str),
    /// Another entity type, referenced by its registered name.
    Ref(&'static str),
    Array(Box<TypeTag>),
}

impl TypeTag {
    pub fn string() -> Self {
        TypeTag::Primitive(Primitive::String)
    }

    pub fn number() -> Self {
        TypeTag::Primitive(Primitive::Number)
    }

    pub fn integer() -> Self {
        TypeTag::Primitive(Primitive::Integer)
    }

    pub fn boolean() -> Self {
        TypeTag::Primitive(Primitive::Boolean)
    }

    pub fn object() -> Self {
        TypeTag::Primitive(Primitive::Object)
    }

    pub fn array_of(inner: TypeTag) -> Self {
        TypeTag::Array(Box::new(inner))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Primitive(primitive) => write!(f, "{primitive}"),
            TypeTag::Enum(name) => write!(f, "{name}"),
            TypeTag::Ref(name) => write!(f, "{name}"),
            TypeTag::Array(inner) => write!(f, "array of {inner}"),
        }
    }
}

/// Description of a single field of a struct.
///
/// Optionality is tri-state: required, optional (may be absent) and nullable (may be
/// `null`). Nullability is independent of whether the field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub type_tag: TypeTag,
    pub required: bool,
    pub nullable: bool,
}

impl FieldDescriptor {
    /// A field that must be present and must not be `null`.
    pub fn required(name: &'static str, type_tag: TypeTag) -> Self {
        Self {
            name,
            type_tag,
            required: true,
            nullable: false,
        }
    }

    /// A field that may be absent or `null`.
    pub fn optional(name: &'static str, type_tag: TypeTag) -> Self {
        Self {
            name,
            type_tag,
            required: false,
            nullable: true,
        }
    }

    /// Forbids `null` for this field while keeping its presence rule.
    pub fn non_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// An entity type: a named, ordered list of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

/// A closed enumeration of string literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl EnumDescriptor {
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

/// A registered type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypeDef {
    Struct(StructDescriptor),
    Enum(EnumDescriptor),
}

impl TypeDef {
    pub fn name(&self) -> &'static str {
        match self {
            TypeDef::Struct(descriptor) => descriptor.name,
            TypeDef::Enum(descriptor) => descriptor.name,
        }
    }
}
