//! Small datasets for unit tests.

use chrono::{Duration, NaiveDate};
use ndarray::Array2;
use snowdrift_core::dataset::Dataset;
use snowdrift_core::grid::{FloatValue, Time};
use snowdrift_core::parameter::{ParameterKind, ParameterSeries};

pub(crate) fn hour(h: i64) -> Time {
    NaiveDate::from_ymd_opt(2021, 3, 23)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap()
        + Duration::hours(h)
}

/// One-row grid
pub(crate) fn row(cells: &[FloatValue]) -> Array2<FloatValue> {
    Array2::from_shape_vec((1, cells.len()), cells.to_vec()).unwrap()
}

/// Dataset of hourly raw series, each step given as a one-row grid
pub(crate) fn dataset_from(parameters: &[(&str, &str, Vec<Vec<FloatValue>>)]) -> Dataset {
    let mut dataset = Dataset::new();
    for (name, unit, steps) in parameters {
        let times = (0..steps.len() as i64).map(hour).collect();
        let values = steps.iter().map(|cells| row(cells)).collect();
        dataset
            .add_parameter(
                ParameterSeries::from_steps(*name, *unit, ParameterKind::Raw, times, values)
                    .unwrap(),
            )
            .unwrap();
    }
    dataset
}

/// Cells of `name` at every step, flattened per step
pub(crate) fn cells(dataset: &Dataset, name: &str) -> Vec<Vec<FloatValue>> {
    dataset
        .get(name)
        .unwrap()
        .values()
        .iter()
        .map(|grid| grid.iter().copied().collect())
        .collect()
}
