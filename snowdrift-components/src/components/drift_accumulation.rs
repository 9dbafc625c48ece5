use ndarray::Zip;
use serde::{Deserialize, Serialize};
use snowdrift_core::component::{Component, RequirementDefinition, StepState};
use snowdrift_core::config::SnowdriftConfig;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::grid::{filled, set_where, Grid};
use snowdrift_core::predicates::{has_valid_drift, is_new_snow};
use snowdrift_core::standard_parameters::{
    DRIFT, DRIFT_ACCUMULATION, SNOWFALL, UNIT_DIMENSIONLESS, UNIT_SNOW, UNIT_WIND, WIND,
};

/// Drift accumulated since the last snowfall
///
/// The drift of the previous step is added wherever the previous wind exceeded
/// the drift threshold and the cell had snow cover. New snow resets the
/// accumulation to 0. The first step starts from 0 everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftAccumulation {
    config: SnowdriftConfig,
}

impl DriftAccumulation {
    pub fn from_parameters(config: SnowdriftConfig) -> Self {
        Self { config }
    }
}

#[typetag::serde]
impl Component for DriftAccumulation {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::input(SNOWFALL, &format!("{UNIT_SNOW}/h")),
            RequirementDefinition::previous(WIND, UNIT_WIND),
            RequirementDefinition::previous(DRIFT, UNIT_DIMENSIONLESS),
            RequirementDefinition::previous(DRIFT_ACCUMULATION, UNIT_DIMENSIONLESS),
            RequirementDefinition::output(DRIFT_ACCUMULATION, UNIT_DIMENSIONLESS),
        ]
    }

    fn solve(&self, state: &StepState) -> SnowdriftResult<Grid> {
        let snowfall = state.current(SNOWFALL)?;
        let (Some(previous), Some(previous_wind), Some(previous_drift)) = (
            state.previous(DRIFT_ACCUMULATION)?,
            state.previous(WIND)?,
            state.previous(DRIFT)?,
        ) else {
            return Ok(filled(snowfall.dim(), 0.0));
        };

        let threshold = self.config.drift_wind_threshold;
        let mut accumulation = previous.clone();
        Zip::from(&mut accumulation)
            .and(previous_wind)
            .and(previous_drift)
            .for_each(|acc, &wind, &drift| {
                if wind > threshold && has_valid_drift(drift) {
                    *acc += drift;
                }
            });
        set_where(&mut accumulation, &is_new_snow(snowfall, &self.config), 0.0);

        Ok(accumulation)
    }
}
