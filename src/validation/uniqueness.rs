use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::prelude::EnzymeMLDocument;
use crate::validation::error::ConsistencyError;
use crate::validation::pointer::Pointer;
use crate::validation::result::ValidationError;

/// Checks that identifiers are declared only once.
///
/// Vessels, reactions, measurements and parameters each form their own namespace.
/// Proteins, complexes and small molecules share the species namespace, because
/// references cannot tell them apart. Every repeated declaration is reported at the
/// `id` field of the repetition.
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document to check
/// * `errors` - Collected validation errors
pub(crate) fn check_unique_ids(enzmldoc: &EnzymeMLDocument, errors: &mut Vec<ValidationError>) {
    check_namespace(
        "vessel",
        [(
            "vessels",
            ids(enzmldoc.vessels.as_deref(), |v| v.id.as_str()),
        )],
        errors,
    );

    check_namespace(
        "species",
        [
            (
                "proteins",
                ids(enzmldoc.proteins.as_deref(), |p| p.id.as_str()),
            ),
            (
                "complexes",
                ids(enzmldoc.complexes.as_deref(), |c| c.id.as_str()),
            ),
            (
                "small_molecules",
                ids(enzmldoc.small_molecules.as_deref(), |s| s.id.as_str()),
            ),
        ],
        errors,
    );

    check_namespace(
        "reaction",
        [(
            "reactions",
            ids(enzmldoc.reactions.as_deref(), |r| r.id.as_str()),
        )],
        errors,
    );

    check_namespace(
        "measurement",
        [(
            "measurements",
            ids(enzmldoc.measurements.as_deref(), |m| m.id.as_str()),
        )],
        errors,
    );

    check_namespace(
        "parameter",
        [(
            "parameters",
            ids(enzmldoc.parameters.as_deref(), |p| p.id.as_str()),
        )],
        errors,
    );
}

fn ids<'a, T>(items: Option<&'a [T]>, id: fn(&'a T) -> &'a str) -> Vec<&'a str> {
    items.unwrap_or_default().iter().map(id).collect()
}

fn check_namespace<'a, const N: usize>(
    kind: &str,
    collections: [(&str, Vec<&'a str>); N],
    errors: &mut Vec<ValidationError>,
) {
    let mut seen: HashMap<&'a str, Pointer> = HashMap::new();

    for (collection, declared) in collections {
        for (idx, id) in declared.into_iter().enumerate() {
            let location = Pointer::root().field(collection).index(idx).field("id");

            match seen.entry(id) {
                Entry::Occupied(first) => errors.push(ValidationError::new(
                    location,
                    ConsistencyError::DuplicateId {
                        kind: kind.to_string(),
                        id: id.to_string(),
                        first: first.get().to_string(),
                    },
                )),
                Entry::Vacant(slot) => {
                    slot.insert(location);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn check(value: serde_json::Value) -> Vec<ValidationError> {
        let doc: EnzymeMLDocument = serde_json::from_value(value).unwrap();
        let mut errors = Vec::new();
        check_unique_ids(&doc, &mut errors);
        errors
    }

    #[test]
    fn test_unique_ids() {
        let errors = check(json!({
            "name": "Test",
            "proteins": [{"id": "p1", "name": "A", "constant": true}],
            "small_molecules": [{"id": "s1", "name": "B", "constant": false}],
            "reactions": [{"id": "p1", "name": "R", "reversible": false}]
        }));

        // Reactions do not share the species namespace.
        assert!(errors.is_empty());
    }

    #[test]
    fn test_duplicate_vessel() {
        let vessel = json!({"id": "v1", "name": "V", "volume": 1.0, "unit": {}, "constant": true});
        let errors = check(json!({"name": "Test", "vessels": [vessel, vessel]}));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "#/vessels/1/id");
        assert_eq!(
            errors[0].message,
            "Duplicate vessel id 'v1', first declared at '#/vessels/0/id'"
        );
    }

    #[test]
    fn test_species_share_one_namespace() {
        let errors = check(json!({
            "name": "Test",
            "proteins": [{"id": "x", "name": "A", "constant": true}],
            "complexes": [{"id": "x", "name": "B", "constant": false}],
            "small_molecules": [{"id": "x", "name": "C", "constant": false}]
        }));

        let locations = errors.iter().map(|e| e.location.as_str()).collect::<Vec<_>>();
        assert_eq!(
            locations,
            vec!["#/complexes/0/id", "#/small_molecules/0/id"]
        );
        assert!(errors
            .iter()
            .all(|e| e.message.contains("first declared at '#/proteins/0/id'")));
    }

    #[test]
    fn test_duplicate_parameters_and_measurements() {
        let parameter = json!({"id": "k1", "name": "k", "symbol": "k"});
        let measurement = json!({"id": "m1", "name": "M"});
        let errors = check(json!({
            "name": "Test",
            "measurements": [measurement, measurement, measurement],
            "parameters": [parameter, parameter]
        }));

        let locations = errors.iter().map(|e| e.location.as_str()).collect::<Vec<_>>();
        assert_eq!(
            locations,
            vec![
                "#/measurements/1/id",
                "#/measurements/2/id",
                "#/parameters/1/id"
            ]
        );
    }
}
