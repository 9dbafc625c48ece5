//! Assembling a [`Dataset`] from individually decoded forecast steps.
//!
//! Forecast files can arrive in any order, so each decoded message becomes a
//! [`StepRecord`] and the series are sorted by valid time when the dataset is
//! built. Loading the same steps in a different order yields the same dataset.

use crate::dataset::Dataset;
use crate::errors::{SnowdriftError, SnowdriftResult};
use crate::grid::{Grid, Time};
use crate::parameter::{ParameterKind, ParameterSeries};
use log::info;

/// One decoded grid for one parameter at one valid time.
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub parameter: String,
    pub unit: String,
    pub time: Time,
    pub grid: Grid,
}

impl StepRecord {
    pub fn new(
        parameter: impl Into<String>,
        unit: impl Into<String>,
        time: Time,
        grid: Grid,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            unit: unit.into(),
            time,
            grid,
        }
    }
}

impl Dataset {
    /// Build a dataset of raw series from unordered step records.
    ///
    /// Parameters keep the order in which they were first seen. Each series is
    /// sorted by valid time and may hold each valid time once. The result is
    /// not validated.
    pub fn from_records(records: impl IntoIterator<Item = StepRecord>) -> SnowdriftResult<Self> {
        let mut groups: Vec<(String, String, Vec<(Time, Grid)>)> = vec![];

        for record in records {
            match groups.iter_mut().find(|(name, _, _)| *name == record.parameter) {
                Some((name, unit, steps)) => {
                    if *unit != record.unit {
                        return Err(SnowdriftError::UnitMismatch {
                            parameter: name.clone(),
                            expected: unit.clone(),
                            found: record.unit,
                        });
                    }
                    steps.push((record.time, record.grid));
                }
                None => {
                    info!(" - found {:?}", record.parameter);
                    groups.push((
                        record.parameter,
                        record.unit,
                        vec![(record.time, record.grid)],
                    ));
                }
            }
        }

        info!("time sorting loaded parameters");
        let mut dataset = Dataset::new();
        for (name, unit, mut steps) in groups {
            steps.sort_by_key(|(time, _)| *time);
            if let Some(pair) = steps.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                return Err(SnowdriftError::DuplicateStep {
                    parameter: name,
                    time: pair[0].0,
                });
            }
            let (times, values) = steps.into_iter().unzip();
            dataset.add_parameter(ParameterSeries::from_steps(
                name,
                unit,
                ParameterKind::Raw,
                times,
                values,
            )?)?;
        }
        Ok(dataset)
    }
}
