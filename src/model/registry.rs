//! The EnzymeML schema registry.
//!
//! Every entity type and closed enumeration of the EnzymeML v2 model is registered here
//! once, by name. The registry is built eagerly on first access and is immutable for
//! the rest of the process.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::trace;

use super::error::SchemaError;
use super::types::{EnumDescriptor, FieldDescriptor, StructDescriptor, TypeDef, TypeTag};
use crate::versions::v2::{DataTypes, EquationType, UnitType};

/// Name of the root entity of an EnzymeML document.
pub const ROOT_TYPE: &str = "EnzymeMLDocument";

lazy_static! {
    /// Process-wide schema model of EnzymeML v2.
    pub static ref SCHEMA: SchemaModel = SchemaModel::enzymeml();
}

/// Returns the process-wide EnzymeML schema model.
pub fn schema_model() -> &'static SchemaModel {
    &SCHEMA
}

/// Name-indexed registry of type definitions.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    types: HashMap<&'static str, TypeDef>,
    order: Vec<&'static str>,
}

impl SchemaModel {
    /// Registers a type definition. A later registration under the same name replaces
    /// the earlier one but keeps its position.
    pub fn register(&mut self, definition: TypeDef) {
        let name = definition.name();
        trace!("Registering schema type '{name}'");

        if self.types.insert(name, definition).is_none() {
            self.order.push(name);
        }
    }

    /// Looks up a type definition by name.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Registered name of a struct or enumeration.
    ///
    /// # Returns
    ///
    /// The definition, or `SchemaError::UnknownType` if nothing is registered under
    /// `type_name`.
    pub fn resolve(&self, type_name: &str) -> Result<&TypeDef, SchemaError> {
        self.types
            .get(type_name)
            .ok_or_else(|| SchemaError::UnknownType(type_name.to_string()))
    }

    /// Returns the ordered field descriptors of a struct type.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Registered name of a struct.
    ///
    /// # Returns
    ///
    /// The fields in declaration order, or an error if the name is unknown or refers to
    /// an enumeration.
    pub fn fields_of(&self, type_name: &str) -> Result<&[FieldDescriptor], SchemaError> {
        match self.resolve(type_name)? {
            TypeDef::Struct(descriptor) => Ok(&descriptor.fields),
            TypeDef::Enum(_) => Err(SchemaError::NotAStruct(type_name.to_string())),
        }
    }

    /// Returns the descriptor of a closed enumeration.
    pub fn enum_of(&self, type_name: &str) -> Result<&EnumDescriptor, SchemaError> {
        match self.resolve(type_name)? {
            TypeDef::Enum(descriptor) => Ok(descriptor),
            TypeDef::Struct(_) => Err(SchemaError::UnknownType(type_name.to_string())),
        }
    }

    /// Iterates over the registered type names in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Builds the EnzymeML v2 schema model.
    pub fn enzymeml() -> Self {
        let mut model = SchemaModel::default();

        for definition in enzymeml_structs() {
            model.register(TypeDef::Struct(definition));
        }

        model.register(TypeDef::Enum(EnumDescriptor {
            name: "EquationType",
            values: EquationType::LITERALS,
        }));
        model.register(TypeDef::Enum(EnumDescriptor {
            name: "DataTypes",
            values: DataTypes::LITERALS,
        }));
        model.register(TypeDef::Enum(EnumDescriptor {
            name: "UnitType",
            values: UnitType::LITERALS,
        }));

        model
    }
}

/// Shorthand for a struct descriptor whose fields start with the linked-data envelope.
fn entity(name: &'static str, fields: Vec<FieldDescriptor>) -> StructDescriptor {
    let mut all = json_ld_fields();
    all.extend(fields);
    StructDescriptor { name, fields: all }
}

/// `@context`, `@id` and `@type` are only checked for being well-typed.
fn json_ld_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::optional("@context", TypeTag::object()),
        FieldDescriptor::optional("@id", TypeTag::string()),
        FieldDescriptor::optional("@type", TypeTag::string()),
    ]
}

fn array_of_strings() -> TypeTag {
    TypeTag::array_of(TypeTag::string())
}

fn array_of(name: &'static str) -> TypeTag {
    TypeTag::array_of(TypeTag::Ref(name))
}

fn enzymeml_structs() -> Vec<StructDescriptor> {
    use FieldDescriptor as F;
    use TypeTag as T;

    vec![
        entity(
            ROOT_TYPE,
            vec![
                F::required("name", T::string()),
                F::optional("version", T::string()),
                F::optional("description", T::string()),
                F::optional("created", T::string()),
                F::optional("modified", T::string()),
                F::optional("references", array_of_strings()),
                F::optional("creators", array_of("Creator")),
                F::optional("vessels", array_of("Vessel")),
                F::optional("proteins", array_of("Protein")),
                F::optional("complexes", array_of("Complex")),
                F::optional("small_molecules", array_of("SmallMolecule")),
                F::optional("reactions", array_of("Reaction")),
                F::optional("measurements", array_of("Measurement")),
                F::optional("equations", array_of("Equation")),
                F::optional("parameters", array_of("Parameter")),
            ],
        ),
        entity(
            "Creator",
            vec![
                F::required("given_name", T::string()),
                F::required("family_name", T::string()),
                F::required("mail", T::string()),
            ],
        ),
        entity(
            "Vessel",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::required("volume", T::number()),
                F::required("unit", T::Ref("UnitDefinition")),
                F::required("constant", T::boolean()),
            ],
        ),
        entity(
            "Protein",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::required("constant", T::boolean()),
                F::optional("sequence", T::string()),
                F::optional("vessel_id", T::string()),
                F::optional("ecnumber", T::string()),
                F::optional("organism", T::string()),
                F::optional("organism_tax_id", T::string()),
                F::optional("references", array_of_strings()),
            ],
        ),
        entity(
            "Complex",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::required("constant", T::boolean()),
                F::optional("vessel_id", T::string()),
                F::optional("participants", array_of_strings()),
            ],
        ),
        entity(
            "SmallMolecule",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::required("constant", T::boolean()),
                F::optional("vessel_id", T::string()),
                F::optional("canonical_smiles", T::string()),
                F::optional("inchi", T::string()),
                F::optional("inchikey", T::string()),
                F::optional("synonymous_names", array_of_strings()),
                F::optional("references", array_of_strings()),
            ],
        ),
        entity(
            "Reaction",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::required("reversible", T::boolean()),
                F::optional("kinetic_law", T::Ref("Equation")),
                F::optional("species", array_of("ReactionElement")),
                F::optional("modifiers", array_of_strings()),
            ],
        ),
        entity(
            "ReactionElement",
            vec![
                F::required("species_id", T::string()),
                F::required("stoichiometry", T::number()),
            ],
        ),
        entity(
            "Equation",
            vec![
                F::required("equation", T::string()),
                F::required("equation_type", T::Enum("EquationType")),
                F::optional("species_id", T::string()),
                F::optional("variables", array_of("Variable")),
                F::optional("parameters", array_of("Parameter")),
            ],
        ),
        entity(
            "Variable",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::required("symbol", T::string()),
            ],
        ),
        entity(
            "Parameter",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::required("symbol", T::string()),
                F::optional("value", T::number()),
                F::optional("unit", T::Ref("UnitDefinition")),
                F::optional("initial_value", T::number()),
                F::optional("upper", T::number()),
                F::optional("lower", T::number()),
                F::optional("stderr", T::number()),
                F::optional("constant", T::boolean()),
            ],
        ),
        entity(
            "Measurement",
            vec![
                F::required("id", T::string()),
                F::required("name", T::string()),
                F::optional("species_data", array_of("MeasurementData")),
                F::optional("group_id", T::string()),
                F::optional("ph", T::number()),
                F::optional("temperature", T::number()),
                F::optional("temperature_unit", T::Ref("UnitDefinition")),
            ],
        ),
        entity(
            "MeasurementData",
            vec![
                F::required("species_id", T::string()),
                F::required("initial", T::number()),
                F::required("data_unit", T::Ref("UnitDefinition")),
                F::required("data_type", T::Enum("DataTypes")),
                F::optional("prepared", T::number()),
                F::optional("data", TypeTag::array_of(T::number())),
                F::optional("time", TypeTag::array_of(T::number())),
                F::optional("time_unit", T::Ref("UnitDefinition")),
                F::required("is_simulated", T::boolean()),
            ],
        ),
        entity(
            "UnitDefinition",
            vec![
                F::optional("id", T::string()),
                F::optional("name", T::string()),
                F::optional("base_units", array_of("BaseUnit")),
            ],
        ),
        entity(
            "BaseUnit",
            vec![
                F::required("kind", T::Enum("UnitType")),
                F::required("exponent", T::integer()),
                F::optional("multiplier", T::number()),
                F::optional("scale", T::number()),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_every_reference_resolves() {
        let model = SchemaModel::enzymeml();

        for name in model.type_names() {
            let Ok(fields) = model.fields_of(name) else {
                continue;
            };

            for field in fields {
                let mut tag = &field.type_tag;
                while let TypeTag::Array(inner) = tag {
                    tag = inner;
                }

                match tag {
                    TypeTag::Ref(target) => {
                        assert!(model.fields_of(target).is_ok(), "{name}.{} -> {target}", field.name)
                    }
                    TypeTag::Enum(target) => {
                        assert!(model.enum_of(target).is_ok(), "{name}.{} -> {target}", field.name)
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_field_names_are_unique_per_type() {
        let model = schema_model();

        for name in model.type_names() {
            if let Ok(fields) = model.fields_of(name) {
                let duplicates = fields.iter().map(|f| f.name).duplicates().collect_vec();
                assert!(duplicates.is_empty(), "{name} repeats {duplicates:?}");
            }
        }
    }

    #[test]
    fn test_root_requires_only_name() {
        let fields = schema_model().fields_of(ROOT_TYPE).unwrap();
        let required: HashSet<_> = fields.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, HashSet::from(["name"]));
    }

    #[test]
    fn test_field_declaration_order_is_kept() {
        let fields = schema_model().fields_of("ReactionElement").unwrap();
        let names = fields.iter().map(|f| f.name).collect_vec();
        assert_eq!(names, vec!["@context", "@id", "@type", "species_id", "stoichiometry"]);
    }

    #[test]
    fn test_closed_enumerations() {
        let model = schema_model();
        assert_eq!(model.enum_of("EquationType").unwrap().values.len(), 4);
        assert_eq!(model.enum_of("DataTypes").unwrap().values.len(), 6);
        assert_eq!(model.enum_of("UnitType").unwrap().values.len(), 34);
        assert!(model.enum_of("UnitType").unwrap().contains("katal"));
        assert!(!model.enum_of("UnitType").unwrap().contains("furlong"));
    }

    #[test]
    fn test_unknown_type() {
        let model = schema_model();
        assert_eq!(
            model.resolve("Beaker"),
            Err(SchemaError::UnknownType("Beaker".to_string()))
        );
        assert_eq!(
            model.fields_of("UnitType"),
            Err(SchemaError::NotAStruct("UnitType".to_string()))
        );
    }
}
