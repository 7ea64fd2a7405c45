//! Consistency module for checking consistency of EnzymeML documents.
//!
//! This module validates cross-entity invariants of documents that already passed
//! structural validation. The checks are grouped into rule families which always run in
//! the same order:
//! - Identifier uniqueness
//! - Vessel references
//! - Species references
//! - Length agreement of measurement time courses
//! - Equation and species pairing
//! - Initial values against the first data point (opt-in)
//!
//! Within a family, errors follow document traversal order. The main entry point is the
//! `check_consistency` function.

use std::collections::HashSet;

use derive_builder::Builder;
use log::debug;

use crate::prelude::EnzymeMLDocument;
use crate::validation::equations::check_equation_species;
use crate::validation::measurements::{check_initial_values, check_measurement_lengths};
use crate::validation::references::{check_species_references, check_vessel_references};
use crate::validation::result::{ValidationError, ValidationResult};
use crate::validation::uniqueness::check_unique_ids;

/// Options of the consistency validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, serde::Serialize, serde::Deserialize)]
pub struct ConsistencyOptions {
    /// Require `initial` to equal the first data point of a time course starting at
    /// `t = 0`. Off by default.
    #[builder(default)]
    #[serde(default)]
    pub check_initial_values: bool,
}

/// The `check_consistency` function is used to check the consistency of an `EnzymeMLDocument`
/// with the default options.
///
/// # Arguments
///
/// * `enzmldoc` - A reference to the `EnzymeMLDocument` to be checked.
///
/// # Returns
///
/// Returns a `ValidationResult` containing every violated invariant.
pub fn check_consistency(enzmldoc: &EnzymeMLDocument) -> ValidationResult {
    check_consistency_with(enzmldoc, &ConsistencyOptions::default())
}

/// Checks the consistency of an `EnzymeMLDocument` using the given options.
///
/// # Arguments
///
/// * `enzmldoc` - A reference to the `EnzymeMLDocument` to be checked.
/// * `options` - Enables optional rule families.
///
/// # Returns
///
/// Returns a `ValidationResult` containing every violated invariant, ordered by rule
/// family and then by document traversal order.
pub fn check_consistency_with(
    enzmldoc: &EnzymeMLDocument,
    options: &ConsistencyOptions,
) -> ValidationResult {
    let ids = DocumentIds::collect(enzmldoc);
    let mut errors = Vec::new();

    run_family("uniqueness", &mut errors, |errors| {
        check_unique_ids(enzmldoc, errors)
    });
    run_family("vessel references", &mut errors, |errors| {
        check_vessel_references(enzmldoc, &ids, errors)
    });
    run_family("species references", &mut errors, |errors| {
        check_species_references(enzmldoc, &ids, errors)
    });
    run_family("length agreement", &mut errors, |errors| {
        check_measurement_lengths(enzmldoc, errors)
    });
    run_family("equation species", &mut errors, |errors| {
        check_equation_species(enzmldoc, errors)
    });

    if options.check_initial_values {
        run_family("initial values", &mut errors, |errors| {
            check_initial_values(enzmldoc, errors)
        });
    }

    ValidationResult::from_errors(errors)
}

fn run_family(
    family: &str,
    errors: &mut Vec<ValidationError>,
    check: impl FnOnce(&mut Vec<ValidationError>),
) {
    let before = errors.len();
    check(errors);
    debug!(
        "Consistency rule family '{family}' reported {} error(s)",
        errors.len() - before
    );
}

/// Identifier sets used for constant time reference lookups.
#[derive(Debug, Default)]
pub(crate) struct DocumentIds<'a> {
    pub(crate) vessels: HashSet<&'a str>,
    /// Union of protein, complex and small molecule ids.
    pub(crate) species: HashSet<&'a str>,
}

impl<'a> DocumentIds<'a> {
    pub(crate) fn collect(enzmldoc: &'a EnzymeMLDocument) -> Self {
        let vessels = enzmldoc
            .vessels
            .iter()
            .flatten()
            .map(|vessel| vessel.id.as_str())
            .collect();

        let species = get_species_ids(enzmldoc).into_iter().collect();

        Self { vessels, species }
    }
}

/// Returns the ids of all proteins, complexes and small molecules, in this order.
pub fn get_species_ids(enzmldoc: &EnzymeMLDocument) -> Vec<&str> {
    let proteins = enzmldoc.proteins.iter().flatten().map(|p| p.id.as_str());
    let complexes = enzmldoc.complexes.iter().flatten().map(|c| c.id.as_str());
    let small_molecules = enzmldoc
        .small_molecules
        .iter()
        .flatten()
        .map(|s| s.id.as_str());

    proteins.chain(complexes).chain(small_molecules).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::prelude::*;

    fn unit() -> UnitDefinition {
        UnitDefinitionBuilder::default()
            .name("mM")
            .build()
            .expect("Failed to build unit")
    }

    fn vessel(id: &str) -> Vessel {
        VesselBuilder::default()
            .id(id)
            .name("Vessel")
            .volume(10.0)
            .unit(unit())
            .build()
            .expect("Failed to build vessel")
    }

    fn protein(id: &str, vessel_id: &str) -> Protein {
        ProteinBuilder::default()
            .id(id)
            .name("Enzyme")
            .vessel_id(vessel_id)
            .build()
            .expect("Failed to build protein")
    }

    fn small_molecule(id: &str) -> SmallMolecule {
        SmallMoleculeBuilder::default()
            .id(id)
            .name("Substrate")
            .build()
            .expect("Failed to build small molecule")
    }

    fn reaction(id: &str, species_ids: &[&str]) -> Reaction {
        let species = species_ids
            .iter()
            .map(|species_id| {
                ReactionElementBuilder::default()
                    .species_id(*species_id)
                    .build()
                    .expect("Failed to build reaction element")
            })
            .collect::<Vec<_>>();

        ReactionBuilder::default()
            .id(id)
            .name("Reaction")
            .species(species)
            .build()
            .expect("Failed to build reaction")
    }

    fn species_data(species_id: &str, data: Vec<f64>, time: Vec<f64>) -> MeasurementData {
        MeasurementDataBuilder::default()
            .species_id(species_id)
            .initial(data.first().copied().unwrap_or_default())
            .data(data)
            .time(time)
            .build()
            .expect("Failed to build measurement data")
    }

    fn measurement(id: &str, species_data: Vec<MeasurementData>) -> Measurement {
        MeasurementBuilder::default()
            .id(id)
            .name("Measurement")
            .species_data(species_data)
            .build()
            .expect("Failed to build measurement")
    }

    fn document() -> EnzymeMLDocumentBuilder {
        let mut builder = EnzymeMLDocumentBuilder::default();
        builder
            .name("Test")
            .vessels(vec![vessel("v1")])
            .proteins(vec![protein("p1", "v1")])
            .small_molecules(vec![small_molecule("s1")]);
        builder
    }

    fn locations(result: &ValidationResult) -> Vec<&str> {
        result.errors.iter().map(|e| e.location.as_str()).collect()
    }

    #[test]
    fn test_consistent_document() {
        let doc = document()
            .reactions(vec![reaction("r1", &["s1", "p1"])])
            .measurements(vec![measurement(
                "m1",
                vec![species_data("s1", vec![1.0, 0.5], vec![0.0, 1.0])],
            )])
            .build()
            .expect("Failed to build document");

        let result = check_consistency(&doc);
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn test_empty_document_is_consistent() {
        let doc = EnzymeMLDocumentBuilder::default()
            .name("Empty")
            .build()
            .expect("Failed to build document");

        assert!(check_consistency(&doc).valid);
    }

    #[test]
    fn test_family_order() {
        let mut doc = document()
            .reactions(vec![reaction("r1", &["unknown"])])
            .measurements(vec![measurement(
                "m1",
                vec![species_data("s1", vec![1.0, 0.5], vec![0.0])],
            )])
            .equations(vec![EquationBuilder::default()
                .equation("-k * s1")
                .equation_type(EquationType::Ode)
                .build()
                .expect("Failed to build equation")])
            .build()
            .expect("Failed to build document");

        doc.vessels.as_mut().unwrap().push(vessel("v1"));
        doc.proteins.as_mut().unwrap()[0].vessel_id = Some("v9".to_string());

        let result = check_consistency(&doc);
        assert_eq!(
            locations(&result),
            vec![
                "#/vessels/1/id",
                "#/proteins/0/vessel_id",
                "#/reactions/0/species/0/species_id",
                "#/measurements/0/species_data/0",
                "#/equations/0/species_id",
            ]
        );
    }

    #[test]
    fn test_initial_values_are_opt_in() {
        let mut data = species_data("s1", vec![1.0, 0.5], vec![0.0, 1.0]);
        data.initial = 2.0;

        let doc = document()
            .measurements(vec![measurement("m1", vec![data])])
            .build()
            .expect("Failed to build document");

        assert!(check_consistency(&doc).valid);

        let options = ConsistencyOptionsBuilder::default()
            .check_initial_values(true)
            .build()
            .expect("Failed to build options");
        let result = check_consistency_with(&doc, &options);

        assert_eq!(
            locations(&result),
            vec!["#/measurements/0/species_data/0/initial"]
        );
    }

    #[test]
    fn test_deterministic() {
        let doc = document()
            .reactions(vec![reaction("r1", &["a", "b", "c"])])
            .build()
            .expect("Failed to build document");

        assert_eq!(check_consistency(&doc), check_consistency(&doc));
    }

    #[test]
    fn test_species_ids() {
        let doc = document().build().expect("Failed to build document");
        assert_eq!(get_species_ids(&doc), vec!["p1", "s1"]);

        let ids = DocumentIds::collect(&doc);
        assert!(ids.vessels.contains("v1"));
        assert!(ids.species.contains("p1"));
        assert!(!ids.species.contains("v1"));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ConsistencyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ConsistencyOptions::default());
        assert!(!options.check_initial_values);
    }
}
