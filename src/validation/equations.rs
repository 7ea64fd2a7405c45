use crate::prelude::{EnzymeMLDocument, Equation};
use crate::validation::error::ConsistencyError;
use crate::validation::pointer::Pointer;
use crate::validation::result::ValidationError;

/// Validates that ODEs and rate laws name the species they describe.
///
/// Kinetic laws of reactions are checked first, then the document's equations. Whether
/// a given `species_id` exists is left to the species reference check, so an undefined
/// species is reported there and only there.
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document to check
/// * `errors` - Collected validation errors
pub(crate) fn check_equation_species(
    enzmldoc: &EnzymeMLDocument,
    errors: &mut Vec<ValidationError>,
) {
    for (reaction_idx, reaction) in enzmldoc.reactions.iter().flatten().enumerate() {
        if let Some(kinetic_law) = &reaction.kinetic_law {
            let location = Pointer::root()
                .field("reactions")
                .index(reaction_idx)
                .field("kinetic_law");
            check_equation(kinetic_law, location, errors);
        }
    }

    for (eq_idx, equation) in enzmldoc.equations.iter().flatten().enumerate() {
        let location = Pointer::root().field("equations").index(eq_idx);
        check_equation(equation, location, errors);
    }
}

fn check_equation(equation: &Equation, location: Pointer, errors: &mut Vec<ValidationError>) {
    if equation.equation_type.requires_species() && equation.species_id.is_none() {
        errors.push(ValidationError::new(
            location.field("species_id"),
            ConsistencyError::MissingEquationSpecies {
                equation_type: equation.equation_type.to_string(),
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn check(value: serde_json::Value) -> Vec<ValidationError> {
        let doc: EnzymeMLDocument = serde_json::from_value(value).unwrap();
        let mut errors = Vec::new();
        check_equation_species(&doc, &mut errors);
        errors
    }

    #[test]
    fn test_equation_types() {
        let errors = check(json!({
            "name": "Test",
            "equations": [
                {"equation": "k * s1", "equation_type": "ode", "species_id": "s1"},
                {"equation": "k * s1", "equation_type": "ode"},
                {"equation": "2 * k", "equation_type": "assignment"},
                {"equation": "1.0", "equation_type": "initialAssignment", "species_id": null},
                {"equation": "vmax * s1", "equation_type": "rateLaw", "species_id": null}
            ]
        }));

        let locations = errors.iter().map(|e| e.location.as_str()).collect::<Vec<_>>();
        assert_eq!(
            locations,
            vec!["#/equations/1/species_id", "#/equations/4/species_id"]
        );
        assert_eq!(
            errors[1].message,
            "Equation of type 'rateLaw' must reference a species, but 'species_id' is missing."
        );
    }

    #[test]
    fn test_kinetic_laws() {
        let errors = check(json!({
            "name": "Test",
            "reactions": [
                {"id": "r1", "name": "R", "reversible": false},
                {"id": "r2", "name": "R", "reversible": false,
                 "kinetic_law": {"equation": "k * s1", "equation_type": "rateLaw"}}
            ],
            "equations": [{"equation": "k * s1", "equation_type": "ode", "species_id": "undefined"}]
        }));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location, "#/reactions/1/kinetic_law/species_id");
    }
}
