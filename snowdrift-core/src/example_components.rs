#![allow(dead_code)]

use crate::component::{Component, RequirementDefinition, StepState};
use crate::errors::SnowdriftResult;
use crate::grid::{filled, FloatValue, Grid};
use serde::{Deserialize, Serialize};

/// Scales a same-step input into its output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ScaleComponent {
    pub input: String,
    pub output: String,
    pub factor: FloatValue,
}

impl ScaleComponent {
    pub fn new(input: &str, output: &str, factor: FloatValue) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            factor,
        }
    }
}

#[typetag::serde]
impl Component for ScaleComponent {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::input(&self.input, "1"),
            RequirementDefinition::output(&self.output, "1"),
        ]
    }

    fn solve(&self, state: &StepState) -> SnowdriftResult<Grid> {
        Ok(state.current(&self.input)? * self.factor)
    }
}

/// Running total of a same-step input, starting from zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RunningTotalComponent {
    pub input: String,
    pub output: String,
}

impl RunningTotalComponent {
    pub fn new(input: &str, output: &str) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
        }
    }
}

#[typetag::serde]
impl Component for RunningTotalComponent {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::input(&self.input, "1"),
            RequirementDefinition::previous(&self.output, "1"),
            RequirementDefinition::output(&self.output, "1"),
        ]
    }

    fn solve(&self, state: &StepState) -> SnowdriftResult<Grid> {
        let current = state.current(&self.input)?;
        let previous = match state.previous(&self.output)? {
            Some(previous) => previous.clone(),
            None => filled(current.dim(), 0.0),
        };
        Ok(previous + current)
    }
}
