//! EnzymeML v2 data model.
//!
//! Typed counterparts of the entities registered in the [schema model](crate::model).
//! A value only reaches these types after it passed structural validation, which is
//! why every optional field is an `Option` (absent and `null` are both accepted) and
//! every required field is a plain value.

use std::collections::HashMap;

use derive_builder::Builder;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::literal_enum;

//
// Linked-data envelope
//
/// Free-form JSON-LD context map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JsonLdContext(pub HashMap<String, serde_json::Value>);

/// Optional semantic-web metadata attached to every entity. Only its types are
/// validated, never its meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, Builder)]
pub struct JsonLd {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub context: Option<JsonLdContext>,

    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub id: Option<String>,

    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub type_: Option<String>,
}

//
// Type definitions
//
/// The EnzymeMLDocument is the root object that serves as a container
/// for all components of an enzymatic experiment. It includes
/// metadata about the document itself, such as its title and
/// creation/modification dates, references to related publications,
/// and the experimental setup: vessels, proteins, complexes, small
/// molecules, reactions, measurements, equations, and parameters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct EnzymeMLDocument {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Title of the EnzymeML Document.
    #[builder(setter(into))]
    pub name: String,

    /// The version of the EnzymeML Document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub version: Option<String>,

    /// Description of the EnzymeML Document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,

    /// Date the EnzymeML Document was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub created: Option<String>,

    /// Date the EnzymeML Document was modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub modified: Option<String>,

    /// Contains references to publications, databases, and arbitrary links to
    /// the web.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub references: Option<Vec<String>>,

    /// Contains descriptions of all authors that are part of the experiment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub creators: Option<Vec<Creator>>,

    /// Contains descriptions of all vessels that are part of the experiment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub vessels: Option<Vec<Vessel>>,

    /// Contains descriptions of all proteins that are part of the experiment
    /// that may be referenced in reactions, measurements, and equations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub proteins: Option<Vec<Protein>>,

    /// Contains descriptions of all complexes that are part of the experiment
    /// that may be referenced in reactions, measurements, and equations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub complexes: Option<Vec<Complex>>,

    /// Contains descriptions of all small molecules that are part of the
    /// experiment that may be referenced in reactions, measurements, and
    /// equations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub small_molecules: Option<Vec<SmallMolecule>>,

    /// Contains descriptions of all reactions that are part of the
    /// experiment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub reactions: Option<Vec<Reaction>>,

    /// Contains descriptions of all measurements that are part of the
    /// experiment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub measurements: Option<Vec<Measurement>>,

    /// Contains descriptions of all equations that are part of the
    /// experiment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub equations: Option<Vec<Equation>>,

    /// Contains descriptions of all parameters that are part of the
    /// experiment and may be used in equations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub parameters: Option<Vec<Parameter>>,
}

/// The Creator object represents an individual author or contributor who
/// has participated in creating or modifying the EnzymeML Document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Creator {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Given name of the author or contributor.
    #[builder(setter(into))]
    pub given_name: String,

    /// Family name of the author or contributor.
    #[builder(setter(into))]
    pub family_name: String,

    /// Email address of the author or contributor.
    #[builder(setter(into))]
    pub mail: String,
}

/// The Vessel object represents containers used to conduct experiments,
/// such as reaction vessels, microplates, or bioreactors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Vessel {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Unique identifier of the vessel.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the used vessel.
    #[builder(setter(into))]
    pub name: String,

    /// Volumetric value of the vessel.
    #[builder(setter(into))]
    pub volume: f64,

    /// Volumetric unit of the vessel.
    #[builder(setter(into))]
    pub unit: UnitDefinition,

    /// Whether the volume of the vessel is constant or not.
    #[builder(default = "true", setter(into))]
    pub constant: bool,
}

/// The Protein object represents enzymes and other proteins involved in
/// the experiment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Protein {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Identifier of the protein, such as a UniProt ID, or a custom
    /// identifier.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the protein.
    #[builder(setter(into))]
    pub name: String,

    /// Whether the concentration of the protein is constant through the
    /// experiment or not.
    #[builder(default = "true", setter(into))]
    pub constant: bool,

    /// Amino acid sequence of the protein
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub sequence: Option<String>,

    /// Identifier of the vessel this protein has been applied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub vessel_id: Option<String>,

    /// EC number of the protein.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub ecnumber: Option<String>,

    /// Expression host organism of the protein.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub organism: Option<String>,

    /// Taxonomy identifier of the expression host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub organism_tax_id: Option<String>,

    /// List of references to publications, database entries, etc. that
    /// describe or reference the protein.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub references: Option<Vec<String>>,
}

/// The Complex object allows the grouping of multiple species using
/// their identifiers, e.g. enzyme-substrate complexes or buffer mixtures.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Complex {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Unique identifier of the complex.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the complex.
    #[builder(setter(into))]
    pub name: String,

    /// Whether the concentration of the complex is constant through the
    /// experiment or not.
    #[builder(default = "false", setter(into))]
    pub constant: bool,

    /// Unique identifier of the vessel this complex has been used in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub vessel_id: Option<String>,

    /// Array of IDs the complex contains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub participants: Option<Vec<String>>,
}

/// The SmallMolecule object represents small chemical compounds that
/// participate in the experiment as substrates, products, or
/// modifiers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct SmallMolecule {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Identifier of the small molecule, such as a Pubchem ID, ChEBI ID, or a
    /// custom identifier.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the small molecule.
    #[builder(setter(into))]
    pub name: String,

    /// Whether the concentration of the small molecule is constant through
    /// the experiment or not.
    #[builder(default = "false", setter(into))]
    pub constant: bool,

    /// Identifier of the vessel this small molecule has been used in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub vessel_id: Option<String>,

    /// Canonical Simplified Molecular-Input Line-Entry System (SMILES)
    /// encoding of the small molecule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub canonical_smiles: Option<String>,

    /// International Chemical Identifier (InChI) encoding of the small
    /// molecule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub inchi: Option<String>,

    /// Hashed International Chemical Identifier (InChIKey) encoding of the
    /// small molecule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub inchikey: Option<String>,

    /// List of synonymous names for the small molecule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub synonymous_names: Option<Vec<String>>,

    /// List of references to publications, database entries, etc. that
    /// describe or reference the small molecule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub references: Option<Vec<String>>,
}

/// The Reaction object represents a chemical or enzymatic reaction and
/// holds the different species and modifiers that are part of the
/// reaction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Reaction {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Unique identifier of the reaction.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the reaction.
    #[builder(setter(into))]
    pub name: String,

    /// Whether the reaction is reversible or irreversible.
    #[builder(default = "false", setter(into))]
    pub reversible: bool,

    /// Mathematical expression of the reaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub kinetic_law: Option<Equation>,

    /// List of reaction elements that are part of the reaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub species: Option<Vec<ReactionElement>>,

    /// Identifiers of species that are not part of the reaction but
    /// influence it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub modifiers: Option<Vec<String>>,
}

/// Describes a species (SmallMolecule, Protein, Complex) participating in a
/// reaction. Negative stoichiometries mark reactants, positive ones products.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct ReactionElement {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Internal identifier to either a protein, complex or small molecule
    /// defined in the EnzymeML Document.
    #[builder(setter(into))]
    pub species_id: String,

    /// Float number representing the associated stoichiometry.
    #[builder(default = "1.0", setter(into))]
    pub stoichiometry: f64,
}

/// The Equation object describes a mathematical equation used to model
/// parts of a reaction system.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Equation {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Mathematical expression of the equation. Represents the right hand
    /// side of the equation.
    #[builder(setter(into))]
    pub equation: String,

    /// Type of the equation.
    #[builder(setter(into))]
    pub equation_type: EquationType,

    /// Identifier of a defined species (SmallMolecule, Protein, Complex).
    /// Represents the left hand side of ODEs and rate laws.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub species_id: Option<String>,

    /// List of variables that are part of the equation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub variables: Option<Vec<Variable>>,

    /// List of parameters that are part of the equation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub parameters: Option<Vec<Parameter>>,
}

/// A variable that is part of an equation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Variable {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Identifier of the variable.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the variable.
    #[builder(setter(into))]
    pub name: String,

    /// Equation symbol of the variable.
    #[builder(setter(into))]
    pub symbol: String,
}

/// Parameters used in kinetic models, including estimated values, bounds,
/// and associated uncertainties.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Parameter {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Identifier of the parameter.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the parameter.
    #[builder(setter(into))]
    pub name: String,

    /// Equation symbol of the parameter.
    #[builder(setter(into))]
    pub symbol: String,

    /// Numerical value of the estimated parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub value: Option<f64>,

    /// Unit of the estimated parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub unit: Option<UnitDefinition>,

    /// Initial value that was used for the parameter estimation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub initial_value: Option<f64>,

    /// Upper bound of the estimated parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub upper: Option<f64>,

    /// Lower bound of the estimated parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub lower: Option<f64>,

    /// Standard error of the estimated parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub stderr: Option<f64>,

    /// Specifies if this parameter is constant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub constant: Option<bool>,
}

/// A single measurement: time course data of any type defined in
/// [`DataTypes`] for every species involved in the experiment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct Measurement {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Unique identifier of the measurement.
    #[builder(setter(into))]
    pub id: String,

    /// Name of the measurement
    #[builder(setter(into))]
    pub name: String,

    /// Measurement data of all species that were part of the measurement. A
    /// species refers to a Protein, Complex, or SmallMolecule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub species_data: Option<Vec<MeasurementData>>,

    /// User-defined group ID to signal relationships between measurements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub group_id: Option<String>,

    /// pH value of the measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub ph: Option<f64>,

    /// Temperature of the measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub temperature: Option<f64>,

    /// Unit of the temperature of the measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub temperature_unit: Option<UnitDefinition>,
}

/// A single entity of a measurement, which corresponds to one species. It
/// contains the time course of that species. Endpoint data is a time course
/// with a single data point.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct MeasurementData {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// The identifier for the described species.
    #[builder(setter(into))]
    pub species_id: String,

    /// Initial amount of the measurement data. Documented to equal the first
    /// data point of `data`.
    #[builder(setter(into))]
    pub initial: f64,

    /// SI unit of the data that was measured.
    #[builder(default, setter(into))]
    pub data_unit: UnitDefinition,

    /// Type of data that was measured (e.g. concentration, absorbance, etc.)
    #[builder(default, setter(into))]
    pub data_type: DataTypes,

    /// Amount of the species before starting the measurement. Not to be
    /// confused with `initial`, the amount at the first data point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub prepared: Option<f64>,

    /// Data that was measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub data: Option<Vec<f64>>,

    /// Corresponding time points of `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub time: Option<Vec<f64>>,

    /// Unit of the time points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub time_unit: Option<UnitDefinition>,

    /// Whether or not the data has been generated by simulation.
    #[builder(default = "false", setter(into))]
    pub is_simulated: bool,
}

/// Represents a unit definition that is based on the SI unit system.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct UnitDefinition {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Unique identifier of the unit definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub id: Option<String>,

    /// Common name of the unit definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub name: Option<String>,

    /// Base units that define the unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub base_units: Option<Vec<BaseUnit>>,
}

/// Represents a base unit in the unit definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Builder, Default)]
pub struct BaseUnit {
    #[serde(flatten)]
    #[builder(default)]
    pub json_ld: JsonLd,

    /// Kind of the base unit (e.g., meter, kilogram, second).
    #[builder(setter(into))]
    pub kind: UnitType,

    /// Exponent of the base unit in the unit definition.
    #[builder(setter(into))]
    pub exponent: i64,

    /// Multiplier of the base unit in the unit definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub multiplier: Option<f64>,

    /// Scale of the base unit in the unit definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub scale: Option<f64>,
}

//
// Enum definitions
//
literal_enum! {
    /// Role of an equation in the kinetic model.
    EquationType {
        Assignment => "assignment",
        InitialAssignment => "initialAssignment",
        Ode => "ode",
        RateLaw => "rateLaw",
    }
}

impl EquationType {
    /// ODEs and rate laws describe the change of a species and need one on
    /// their left hand side.
    pub fn requires_species(&self) -> bool {
        matches!(self, EquationType::Ode | EquationType::RateLaw)
    }
}

literal_enum! {
    /// Kind of data recorded in a measurement, identified by ontology terms.
    DataTypes {
        Absorbance => "http://purl.allotrope.org/ontologies/quality#AFQ_0000061",
        Concentration => "http://purl.obolibrary.org/obo/PATO_0000033",
        Conversion => "http://purl.allotrope.org/ontologies/quality#AFQ_0000226",
        Fluorescence => "http://purl.obolibrary.org/obo/PATO_0000018",
        PeakArea => "http://purl.allotrope.org/ontologies/result#AFR_0001073",
        Transmittance => "http://purl.allotrope.org/ontologies/result#AFR_0002261",
    }
}

literal_enum! {
    /// SI-derived kinds a base unit can be built from.
    UnitType {
        Ampere => "ampere",
        Avogadro => "avogadro",
        Becquerel => "becquerel",
        Candela => "candela",
        Celsius => "celsius",
        Coulomb => "coulomb",
        Dimensionless => "dimensionless",
        Farad => "farad",
        Gram => "gram",
        Gray => "gray",
        Henry => "henry",
        Hertz => "hertz",
        Item => "item",
        Joule => "joule",
        Katal => "katal",
        Kelvin => "kelvin",
        Kilogram => "kilogram",
        Litre => "litre",
        Lumen => "lumen",
        Lux => "lux",
        Metre => "metre",
        Mole => "mole",
        Newton => "newton",
        Ohm => "ohm",
        Pascal => "pascal",
        Radian => "radian",
        Second => "second",
        Siemens => "siemens",
        Sievert => "sievert",
        Steradian => "steradian",
        Tesla => "tesla",
        Volt => "volt",
        Watt => "watt",
        Weber => "weber",
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::model::SchemaError;

    #[test]
    fn test_literal_round_trip() {
        for literal in UnitType::LITERALS {
            let kind = UnitType::from_str(literal).expect("Literal should parse");
            assert_eq!(kind.as_str(), *literal);
        }
    }

    #[test]
    fn test_unrecognized_literal() {
        let result = EquationType::from_str("rate_law");
        assert_eq!(
            result,
            Err(SchemaError::UnrecognizedValue {
                enumeration: "EquationType".to_string(),
                value: "rate_law".to_string(),
            })
        );
    }

    #[test]
    fn test_enum_serde_uses_literals() {
        let json = serde_json::to_string(&EquationType::RateLaw).unwrap();
        assert_eq!(json, "\"rateLaw\"");

        let parsed: DataTypes =
            serde_json::from_str("\"http://purl.obolibrary.org/obo/PATO_0000033\"").unwrap();
        assert_eq!(parsed, DataTypes::Concentration);
    }

    #[test]
    fn test_requires_species() {
        assert!(EquationType::Ode.requires_species());
        assert!(EquationType::RateLaw.requires_species());
        assert!(!EquationType::Assignment.requires_species());
        assert!(!EquationType::InitialAssignment.requires_species());
    }

    #[test]
    fn test_json_ld_envelope_is_flattened() {
        let vessel: Vessel = serde_json::from_value(serde_json::json!({
            "@id": "enzml:v1",
            "@type": "enzml:Vessel",
            "id": "v1",
            "name": "Eppendorf",
            "volume": 10,
            "unit": {"name": "ml"},
            "constant": true
        }))
        .expect("Failed to deserialize vessel");

        assert_eq!(vessel.json_ld.id.as_deref(), Some("enzml:v1"));
        assert_eq!(vessel.json_ld.type_.as_deref(), Some("enzml:Vessel"));
        assert_eq!(vessel.volume, 10.0);

        let serialized = serde_json::to_value(&vessel).unwrap();
        assert_eq!(serialized["@id"], "enzml:v1");
        assert!(serialized.get("@context").is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let element = ReactionElementBuilder::default()
            .species_id("s1")
            .build()
            .expect("Failed to build reaction element");
        assert_eq!(element.stoichiometry, 1.0);

        let protein = ProteinBuilder::default()
            .id("p1")
            .name("Enzyme")
            .vessel_id("v1")
            .build()
            .expect("Failed to build protein");
        assert!(protein.constant);
        assert_eq!(protein.vessel_id.as_deref(), Some("v1"));
    }
}
