//! GRIB message table for the snowdrift results.
//!
//! Encoding the messages is left to the caller. This module only fixes which
//! grids are written, in which order and under which GRIB1 identifiers.

use snowdrift_core::dataset::Dataset;
use snowdrift_core::errors::{SnowdriftError, SnowdriftResult};
use snowdrift_core::grid::{Grid, Time};
use snowdrift_core::standard_parameters::{DRIFT, DRIFT_ACCUMULATION, MOBILITY, SNOW_AGE};

/// GRIB1 identification of one result parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputDescriptor {
    pub parameter: &'static str,
    pub indicator_of_parameter: u16,
    pub type_of_level: u16,
    pub level: u16,
}

/// Height above ground
const TYPE_OF_LEVEL: u16 = 105;

/// Results in the order they are written within a step
pub const OUTPUTS: [OutputDescriptor; 4] = [
    OutputDescriptor {
        parameter: DRIFT,
        indicator_of_parameter: 148,
        type_of_level: TYPE_OF_LEVEL,
        level: 0,
    },
    OutputDescriptor {
        parameter: SNOW_AGE,
        indicator_of_parameter: 145,
        type_of_level: TYPE_OF_LEVEL,
        level: 0,
    },
    OutputDescriptor {
        parameter: DRIFT_ACCUMULATION,
        indicator_of_parameter: 146,
        type_of_level: TYPE_OF_LEVEL,
        level: 0,
    },
    OutputDescriptor {
        parameter: MOBILITY,
        indicator_of_parameter: 147,
        type_of_level: TYPE_OF_LEVEL,
        level: 0,
    },
];

/// One grid to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputMessage<'a> {
    pub step: usize,
    pub time: Time,
    pub descriptor: OutputDescriptor,
    pub grid: &'a Grid,
}

/// Every result grid of a solved dataset, ordered by step then by [`OUTPUTS`]
pub fn output_messages(dataset: &Dataset) -> SnowdriftResult<Vec<OutputMessage<'_>>> {
    let mut series = vec![];
    for descriptor in &OUTPUTS {
        series.push((descriptor, dataset.require(descriptor.parameter)?));
    }

    let mut messages = vec![];
    for step in 0..dataset.n_steps() {
        for &(descriptor, parameter) in &series {
            let (Some(time), Some(grid)) = (parameter.time_at(step), parameter.grid_at(step))
            else {
                return Err(SnowdriftError::Sequencing {
                    parameter: descriptor.parameter.to_string(),
                    step,
                    available: parameter.len(),
                });
            };
            messages.push(OutputMessage {
                step,
                time,
                descriptor: *descriptor,
                grid,
            });
        }
    }
    Ok(messages)
}
