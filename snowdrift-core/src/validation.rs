//! Consistency checks across every parameter of a [`Dataset`].
//!
//! All series must cover the same forecast steps: equal step counts, equal
//! valid times at every step index and one common grid shape. The checks are
//! pure and can be repeated at any point, typically straight after ingestion
//! and again after dependency resolution has added derived series.

use crate::dataset::Dataset;
use crate::errors::{SnowdriftError, SnowdriftResult};
use log::{error, info};

/// Run every consistency check on `dataset`.
pub fn validate(dataset: &Dataset) -> SnowdriftResult<()> {
    info!("performing consistency checks");
    check_step_counts(dataset)?;
    check_timestamps(dataset)?;
    check_shapes(dataset)?;
    Ok(())
}

/// Every parameter must have the same number of steps.
pub fn check_step_counts(dataset: &Dataset) -> SnowdriftResult<()> {
    info!("checking parameter step counts are consistent");
    let counts: Vec<(String, usize)> = dataset
        .iter()
        .map(|series| (series.name().to_string(), series.len()))
        .collect();

    let consistent = counts.windows(2).all(|pair| pair[0].1 == pair[1].1);
    if !consistent {
        error!(" - FAIL");
        return Err(SnowdriftError::InconsistentStepCount { counts });
    }
    info!(" - OK");
    Ok(())
}

/// Every parameter must have the same valid time at every step index.
///
/// Assumes the step counts have already been checked.
pub fn check_timestamps(dataset: &Dataset) -> SnowdriftResult<()> {
    info!("checking time steps across all parameters");
    let mut series = dataset.iter();
    let reference = match series.next() {
        Some(first) => first,
        None => {
            info!(" - OK");
            return Ok(());
        }
    };
    let others: Vec<_> = series.collect();

    for (step, time) in reference.times().iter().enumerate() {
        let mismatched: Vec<String> = others
            .iter()
            .filter(|other| other.time_at(step) != Some(*time))
            .map(|other| other.name().to_string())
            .collect();
        if !mismatched.is_empty() {
            error!(" - FAIL");
            let mut parameters = vec![reference.name().to_string()];
            parameters.extend(mismatched);
            return Err(SnowdriftError::InconsistentTimestamp { step, parameters });
        }
    }
    info!(" - OK");
    Ok(())
}

/// Every grid of every parameter must share one shape.
pub fn check_shapes(dataset: &Dataset) -> SnowdriftResult<()> {
    let expected = match dataset.shape() {
        Some(shape) => shape,
        None => return Ok(()),
    };
    for series in dataset.iter() {
        if let Some(found) = series.shape() {
            if found != expected {
                error!(" - FAIL: grid shape of {:?}", series.name());
                return Err(SnowdriftError::ShapeMismatch {
                    parameter: series.name().to_string(),
                    expected,
                    found,
                });
            }
        }
    }
    Ok(())
}
