use crate::prelude::{EnzymeMLDocument, MeasurementData};
use crate::validation::error::ConsistencyError;
use crate::validation::pointer::Pointer;
use crate::validation::result::ValidationError;

/// Validates that time and data vectors of every measurement series agree in length.
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document containing measurements to validate
/// * `errors` - Collected validation errors
///
/// # Details
/// Errors are located at the measurement data entry, e.g.
/// `#/measurements/0/species_data/1`. A missing vector counts as empty, and a series
/// without both data and time points is valid.
pub(crate) fn check_measurement_lengths(
    enzmldoc: &EnzymeMLDocument,
    errors: &mut Vec<ValidationError>,
) {
    for_each_series(enzmldoc, |location, meas_data| {
        if let Some(problem) = check_time_data_consistency(meas_data) {
            errors.push(ValidationError::new(location, problem));
        }
    });
}

/// Validates that initial values match the first data point at t=0.
///
/// # Arguments
/// * `enzmldoc` - The EnzymeML document containing measurements to validate
/// * `errors` - Collected validation errors
///
/// # Details
/// Skipped for series whose data is empty or whose first time point is not 0.
/// Errors are located at the `initial` field of the series.
pub(crate) fn check_initial_values(enzmldoc: &EnzymeMLDocument, errors: &mut Vec<ValidationError>) {
    for_each_series(enzmldoc, |location, meas_data| {
        if let Some(problem) = check_initial_concentration(meas_data) {
            errors.push(ValidationError::new(location.field("initial"), problem));
        }
    });
}

fn for_each_series<'a>(
    enzmldoc: &'a EnzymeMLDocument,
    mut visit: impl FnMut(Pointer, &'a MeasurementData),
) {
    for (meas_idx, measurement) in enzmldoc.measurements.iter().flatten().enumerate() {
        let species_data = measurement.species_data.iter().flatten();

        for (data_idx, meas_data) in species_data.enumerate() {
            let location = Pointer::root()
                .field("measurements")
                .index(meas_idx)
                .field("species_data")
                .index(data_idx);

            visit(location, meas_data);
        }
    }
}

fn check_time_data_consistency(meas_data: &MeasurementData) -> Option<ConsistencyError> {
    let data = meas_data.data.as_deref().unwrap_or_default();
    let time = meas_data.time.as_deref().unwrap_or_default();
    let species_id = meas_data.species_id.clone();

    match (data.is_empty(), time.is_empty()) {
        (false, false) if data.len() != time.len() => Some(ConsistencyError::LengthMismatch {
            species_id,
            data: data.len(),
            time: time.len(),
        }),
        (false, true) => Some(ConsistencyError::MissingTime { species_id }),
        (true, false) => Some(ConsistencyError::MissingData { species_id }),
        _ => None,
    }
}

fn check_initial_concentration(meas_data: &MeasurementData) -> Option<ConsistencyError> {
    let data = meas_data.data.as_deref().unwrap_or_default();
    let time = meas_data.time.as_deref().unwrap_or_default();

    match (time.first(), data.first()) {
        (Some(&t0), Some(&first)) if t0 == 0.0 && first != meas_data.initial => {
            Some(ConsistencyError::InitialMismatch {
                species_id: meas_data.species_id.clone(),
                initial: meas_data.initial,
                first,
            })
        }
        _ => None,
    }
}
