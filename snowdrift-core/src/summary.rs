//! Read-only reporting on the contents of a [`Dataset`].

use crate::dataset::Dataset;
use crate::grid::{FloatValue, Time};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Step count, time span and value range of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSummary {
    pub name: String,
    pub unit: String,
    pub steps: usize,
    pub start: Option<Time>,
    pub end: Option<Time>,
    pub min: Option<FloatValue>,
    pub max: Option<FloatValue>,
}

impl fmt::Display for ParameterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {} [{}]:", self.name, self.unit)?;
        writeln!(f, "    steps: {}", self.steps)?;
        match (self.start, self.end) {
            (Some(start), Some(end)) => writeln!(f, "    start/stop: {start}/{end}")?,
            _ => writeln!(f, "    start/stop: -")?,
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "    min/max: {min}/{max}"),
            _ => write!(f, "    min/max: -"),
        }
    }
}

impl Dataset {
    /// Summarise every parameter in insertion order
    pub fn summary(&self) -> Vec<ParameterSummary> {
        self.iter()
            .map(|series| {
                let range = series.min_max();
                ParameterSummary {
                    name: series.name().to_string(),
                    unit: series.unit().to_string(),
                    steps: series.len(),
                    start: series.times().first().copied(),
                    end: series.times().last().copied(),
                    min: range.map(|(lo, _)| lo),
                    max: range.map(|(_, hi)| hi),
                }
            })
            .collect()
    }

    /// Write the summary to the log at `info` level
    pub fn log_summary(&self) {
        info!("Data summary:");
        for summary in self.summary() {
            for line in summary.to_string().lines() {
                info!("{line}");
            }
        }
    }
}
