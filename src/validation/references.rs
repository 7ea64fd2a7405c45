use crate::prelude::{EnzymeMLDocument, Equation};
use crate::validation::consistency::DocumentIds;
use crate::validation::error::ConsistencyError;
use crate::validation::pointer::Pointer;
use crate::validation::result::ValidationError;

/// Validates that every `vessel_id` of a protein, complex or small molecule names a
/// vessel of the document.
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document to check
/// * `ids` - Identifier sets of the document
/// * `errors` - Collected validation errors
pub(crate) fn check_vessel_references(
    enzmldoc: &EnzymeMLDocument,
    ids: &DocumentIds,
    errors: &mut Vec<ValidationError>,
) {
    let proteins = enzmldoc
        .proteins
        .iter()
        .flatten()
        .map(|p| (p.id.as_str(), p.vessel_id.as_deref()));
    check_owner_vessels("protein", "proteins", proteins, ids, errors);

    let complexes = enzmldoc
        .complexes
        .iter()
        .flatten()
        .map(|c| (c.id.as_str(), c.vessel_id.as_deref()));
    check_owner_vessels("complex", "complexes", complexes, ids, errors);

    let small_molecules = enzmldoc
        .small_molecules
        .iter()
        .flatten()
        .map(|s| (s.id.as_str(), s.vessel_id.as_deref()));
    check_owner_vessels(
        "small molecule",
        "small_molecules",
        small_molecules,
        ids,
        errors,
    );
}

fn check_owner_vessels<'a>(
    owner: &str,
    collection: &str,
    owners: impl Iterator<Item = (&'a str, Option<&'a str>)>,
    ids: &DocumentIds,
    errors: &mut Vec<ValidationError>,
) {
    for (idx, (owner_id, vessel_id)) in owners.enumerate() {
        let Some(vessel_id) = vessel_id else {
            continue;
        };

        if !ids.vessels.contains(vessel_id) {
            errors.push(ValidationError::new(
                Pointer::root()
                    .field(collection)
                    .index(idx)
                    .field("vessel_id"),
                ConsistencyError::UndefinedVessel {
                    vessel_id: vessel_id.to_string(),
                    owner: owner.to_string(),
                    owner_id: owner_id.to_string(),
                },
            ));
        }
    }
}

/// Validates that every species reference names a protein, complex or small molecule.
///
/// References are collected from reactions (kinetic law, reaction elements and
/// modifiers), from the species data of measurements and from the document's
/// equations. Each dangling reference is reported once, at its own path.
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document to check
/// * `ids` - Identifier sets of the document
/// * `errors` - Collected validation errors
pub(crate) fn check_species_references(
    enzmldoc: &EnzymeMLDocument,
    ids: &DocumentIds,
    errors: &mut Vec<ValidationError>,
) {
    let mut check = |species_id: &str, location: Pointer, context: String| {
        if !ids.species.contains(species_id) {
            errors.push(ValidationError::new(
                location,
                ConsistencyError::UndefinedSpecies {
                    species_id: species_id.to_string(),
                    context,
                },
            ));
        }
    };

    for (reaction_idx, reaction) in enzmldoc.reactions.iter().flatten().enumerate() {
        let reaction_ptr = Pointer::root().field("reactions").index(reaction_idx);

        if let Some(species_id) = equation_species(reaction.kinetic_law.as_ref()) {
            check(
                species_id,
                reaction_ptr.field("kinetic_law").field("species_id"),
                format!("kinetic law of reaction '{}'", reaction.id),
            );
        }

        for (elem_idx, reac_elem) in reaction.species.iter().flatten().enumerate() {
            check(
                reac_elem.species_id.as_str(),
                reaction_ptr
                    .field("species")
                    .index(elem_idx)
                    .field("species_id"),
                format!("reaction '{}'", reaction.id),
            );
        }

        for (mod_idx, modifier) in reaction.modifiers.iter().flatten().enumerate() {
            check(
                modifier.as_str(),
                reaction_ptr.field("modifiers").index(mod_idx),
                format!("modifiers of reaction '{}'", reaction.id),
            );
        }
    }

    for (meas_idx, measurement) in enzmldoc.measurements.iter().flatten().enumerate() {
        for (data_idx, meas_data) in measurement.species_data.iter().flatten().enumerate() {
            check(
                meas_data.species_id.as_str(),
                Pointer::root()
                    .field("measurements")
                    .index(meas_idx)
                    .field("species_data")
                    .index(data_idx)
                    .field("species_id"),
                format!("measurement '{}'", measurement.id),
            );
        }
    }

    for (eq_idx, equation) in enzmldoc.equations.iter().flatten().enumerate() {
        if let Some(species_id) = equation_species(Some(equation)) {
            check(
                species_id,
                Pointer::root()
                    .field("equations")
                    .index(eq_idx)
                    .field("species_id"),
                format!("equation '{}'", equation.equation),
            );
        }
    }
}

fn equation_species(equation: Option<&Equation>) -> Option<&str> {
    equation.and_then(|eq| eq.species_id.as_deref())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn document(value: serde_json::Value) -> EnzymeMLDocument {
        serde_json::from_value(value).expect("Failed to deserialize document")
    }

    fn vessel_errors(doc: &EnzymeMLDocument) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_vessel_references(doc, &DocumentIds::collect(doc), &mut errors);
        errors
    }

    fn species_errors(doc: &EnzymeMLDocument) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_species_references(doc, &DocumentIds::collect(doc), &mut errors);
        errors
    }

    #[test]
    fn test_undefined_vessel() {
        let doc = document(json!({
            "name": "Test",
            "vessels": [{"id": "v1", "name": "V", "volume": 1.0, "unit": {}, "constant": true}],
            "proteins": [{"id": "p1", "name": "E", "constant": true, "vessel_id": "v1"}],
            "complexes": [{"id": "c1", "name": "C", "constant": false}],
            "small_molecules": [{"id": "s1", "name": "S", "constant": false, "vessel_id": "v2"}]
        }));

        let errors = vessel_errors(&doc);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "#/small_molecules/0/vessel_id");
        assert_eq!(
            errors[0].message,
            "Vessel 'v2' referenced by small molecule 's1' is not defined in the document."
        );
    }

    #[test]
    fn test_undefined_reaction_species() {
        let doc = document(json!({
            "name": "Test",
            "small_molecules": [{"id": "s1", "name": "S", "constant": false}],
            "reactions": [{
                "id": "r1",
                "name": "R",
                "reversible": false,
                "kinetic_law": {"equation": "k * s1", "equation_type": "rateLaw", "species_id": "s0"},
                "species": [
                    {"species_id": "s1", "stoichiometry": -1},
                    {"species_id": "missing", "stoichiometry": 1}
                ],
                "modifiers": ["s1", "e1"]
            }]
        }));

        let errors = species_errors(&doc);
        let locations = errors.iter().map(|e| e.location.as_str()).collect::<Vec<_>>();
        assert_eq!(
            locations,
            vec![
                "#/reactions/0/kinetic_law/species_id",
                "#/reactions/0/species/1/species_id",
                "#/reactions/0/modifiers/1",
            ]
        );
        assert_eq!(
            errors[1].message,
            "Species 'missing' in reaction 'r1' is not defined in the document."
        );
    }

    #[test]
    fn test_undefined_measurement_and_equation_species() {
        let doc = document(json!({
            "name": "Test",
            "proteins": [{"id": "p1", "name": "E", "constant": true}],
            "measurements": [{"id": "m1", "name": "M", "species_data": [
                {"species_id": "p1", "initial": 1.0, "data_unit": {}, "data_type": "http://purl.obolibrary.org/obo/PATO_0000033", "is_simulated": false},
                {"species_id": "s9", "initial": 1.0, "data_unit": {}, "data_type": "http://purl.obolibrary.org/obo/PATO_0000033", "is_simulated": false}
            ]}],
            "equations": [
                {"equation": "p1 * 2", "equation_type": "assignment", "species_id": "x"},
                {"equation": "1", "equation_type": "assignment"}
            ]
        }));

        let errors = species_errors(&doc);
        let locations = errors.iter().map(|e| e.location.as_str()).collect::<Vec<_>>();
        assert_eq!(
            locations,
            vec![
                "#/measurements/0/species_data/1/species_id",
                "#/equations/0/species_id",
            ]
        );
        assert!(errors[0].message.contains("measurement 'm1'"));
    }

    #[test]
    fn test_complexes_count_as_species() {
        let doc = document(json!({
            "name": "Test",
            "complexes": [{"id": "c1", "name": "C", "constant": false}],
            "reactions": [{"id": "r1", "name": "R", "reversible": true, "species": [{"species_id": "c1", "stoichiometry": 1}]}]
        }));

        assert!(species_errors(&doc).is_empty());
    }
}
