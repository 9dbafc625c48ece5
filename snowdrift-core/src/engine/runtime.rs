//! Engine struct and runtime execution.

use crate::component::{RequirementDefinition, RequirementType, StepState};
use crate::dataset::Dataset;
use crate::errors::{SnowdriftError, SnowdriftResult};
use crate::parameter::{ParameterKind, ParameterSeries};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::C;

/// A set of components solved together over the steps of a dataset.
///
/// The components are stored in solve order, as determined by
/// [`EngineBuilder`](super::EngineBuilder).
#[derive(Debug, Serialize, Deserialize)]
pub struct Engine {
    components: Vec<C>,
}

impl Engine {
    pub(crate) fn new(components: Vec<C>) -> Self {
        Self { components }
    }

    /// Output parameter names in the order they are solved within a step
    pub fn solve_order(&self) -> Vec<String> {
        self.outputs().into_iter().map(|d| d.name).collect()
    }

    fn outputs(&self) -> Vec<RequirementDefinition> {
        self.components
            .iter()
            .flat_map(|component| component.outputs())
            .collect()
    }

    /// Parameters that must be present in the dataset before a run.
    ///
    /// These are all inputs, current or previous, that no component produces.
    pub fn required_inputs(&self) -> Vec<RequirementDefinition> {
        let produced = self.solve_order();
        let mut required: Vec<RequirementDefinition> = vec![];
        for definition in self
            .components
            .iter()
            .flat_map(|component| component.definitions())
            .filter(|d| d.requirement_type != RequirementType::Output)
        {
            if !produced.contains(&definition.name)
                && !required.iter().any(|r| r.name == definition.name)
            {
                required.push(definition);
            }
        }
        required
    }

    /// Check the required inputs exist and add an empty series for every output.
    pub fn initialise(&self, dataset: &mut Dataset) -> SnowdriftResult<()> {
        for requirement in self.required_inputs() {
            if !dataset.contains(&requirement.name) {
                return Err(SnowdriftError::MissingParameter {
                    parameter: requirement.name.clone(),
                    alternatives: vec![requirement.name],
                });
            }
        }
        for output in self.outputs() {
            dataset.add_parameter(ParameterSeries::new(
                output.name,
                output.unit,
                ParameterKind::Derived,
            ))?;
        }
        Ok(())
    }

    /// Solve every component for one step.
    ///
    /// Each output series must already hold exactly `step` grids, so steps can
    /// be neither skipped nor repeated.
    pub fn solve_step(&self, dataset: &mut Dataset, step: usize) -> SnowdriftResult<()> {
        let time = StepState::new(dataset, step).time()?;
        for component in &self.components {
            for output in component.outputs() {
                let available = dataset.require(&output.name)?.len();
                if available != step {
                    return Err(SnowdriftError::Sequencing {
                        parameter: output.name,
                        step,
                        available,
                    });
                }

                let grid = component.solve(&StepState::new(dataset, step))?;
                dataset
                    .get_mut(&output.name)
                    .ok_or_else(|| SnowdriftError::MissingParameter {
                        parameter: output.name.clone(),
                        alternatives: vec![output.name.clone()],
                    })?
                    .push(time, grid)?;
            }
        }
        Ok(())
    }

    /// Solve every step of the dataset in ascending order.
    pub fn run(&self, dataset: &mut Dataset) -> SnowdriftResult<()> {
        self.initialise(dataset)?;
        let n_steps = dataset.n_steps();
        info!(
            "solving {} over {} steps",
            self.solve_order().join(", "),
            n_steps
        );
        for step in 0..n_steps {
            debug!("solving step {step}");
            self.solve_step(dataset, step)?;
        }
        Ok(())
    }
}
