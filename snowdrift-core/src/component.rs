//! Components produce one derived parameter, one step at a time.
//!
//! A component declares what it reads and writes through
//! [`RequirementDefinition`]s and computes a single grid per step from a
//! [`StepState`]. The [`Engine`](crate::engine::Engine) uses the declarations
//! to order components within a step and to check inputs exist before a run.

use crate::dataset::Dataset;
use crate::errors::{SnowdriftError, SnowdriftResult};
use crate::grid::{elapsed_hours, FloatValue, Grid, Time};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum RequirementType {
    /// Read at the step being solved.
    ///
    /// If another component produces the parameter it is solved first.
    Input,
    /// Read at the step before the one being solved.
    ///
    /// May refer to the component's own output.
    Previous,
    /// Written by the component, one grid per step
    Output,
}

#[derive(Debug, Eq, PartialEq, Clone, Hash, Serialize, Deserialize)]
pub struct RequirementDefinition {
    pub name: String,
    pub unit: String,
    pub requirement_type: RequirementType,
}

impl RequirementDefinition {
    pub fn new(name: &str, unit: &str, requirement_type: RequirementType) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            requirement_type,
        }
    }

    pub fn input(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Input)
    }

    pub fn previous(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Previous)
    }

    pub fn output(name: &str, unit: &str) -> Self {
        Self::new(name, unit, RequirementType::Output)
    }
}

/// Read access to the dataset while one step of one component is solved.
///
/// Grids of the current step are only available for raw inputs and for
/// components that have already been solved this step.
#[derive(Debug, Clone, Copy)]
pub struct StepState<'a> {
    dataset: &'a Dataset,
    step: usize,
}

impl<'a> StepState<'a> {
    pub fn new(dataset: &'a Dataset, step: usize) -> Self {
        Self { dataset, step }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    /// Valid time of the step being solved
    pub fn time(&self) -> SnowdriftResult<Time> {
        self.dataset
            .times()
            .get(self.step)
            .copied()
            .ok_or_else(|| SnowdriftError::Sequencing {
                parameter: "time axis".to_string(),
                step: self.step,
                available: self.dataset.times().len(),
            })
    }

    /// Hours elapsed since the previous step
    pub fn elapsed_hours(&self) -> SnowdriftResult<FloatValue> {
        let times = self.dataset.times();
        match (self.step.checked_sub(1), times.get(self.step)) {
            (Some(previous), Some(&current)) => {
                elapsed_hours(times[previous], current, self.step)
            }
            _ => Err(SnowdriftError::InvalidTimeStep { step: self.step }),
        }
    }

    /// Grid of `name` at the step being solved
    pub fn current(&self, name: &str) -> SnowdriftResult<&'a Grid> {
        self.grid_at(name, self.step)
    }

    /// Grid of `name` at the previous step, `None` on the first step
    pub fn previous(&self, name: &str) -> SnowdriftResult<Option<&'a Grid>> {
        match self.step.checked_sub(1) {
            Some(previous) => self.grid_at(name, previous).map(Some),
            None => Ok(None),
        }
    }

    fn grid_at(&self, name: &str, step: usize) -> SnowdriftResult<&'a Grid> {
        let series = self.dataset.require(name)?;
        series
            .grid_at(step)
            .ok_or_else(|| SnowdriftError::Sequencing {
                parameter: name.to_string(),
                step,
                available: series.len(),
            })
    }
}

/// Component of the snowdrift recurrence
///
/// Components must be serialisable so an engine can be stored alongside the
/// configuration it was built from.
#[typetag::serde(tag = "type")]
pub trait Component: Debug + Send + Sync {
    /// Parameters read and written by the component
    fn definitions(&self) -> Vec<RequirementDefinition>;

    /// Compute the output grid for the step described by `state`
    fn solve(&self, state: &StepState) -> SnowdriftResult<Grid>;

    fn inputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Input)
            .collect()
    }

    fn previous_inputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Previous)
            .collect()
    }

    fn outputs(&self) -> Vec<RequirementDefinition> {
        self.definitions()
            .into_iter()
            .filter(|d| d.requirement_type == RequirementType::Output)
            .collect()
    }
}
