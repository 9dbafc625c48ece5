use ndarray::Zip;
use serde::{Deserialize, Serialize};
use snowdrift_core::component::{Component, RequirementDefinition, StepState};
use snowdrift_core::config::SnowdriftConfig;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::grid::{less_than, set_where, FloatValue, Grid};
use snowdrift_core::predicates::{is_snow_covered, not, NO_VALUE};
use snowdrift_core::standard_parameters::{
    DRIFT, MOBILITY, SNOW_GROUND, UNIT_DIMENSIONLESS, UNIT_SNOW, UNIT_WIND, WIND,
};

/// Snow drift index
///
/// $$ drift = \frac{mobility \cdot wind^3}{divisor} $$
///
/// Wind below the drift threshold moves no snow, giving 0. Cells without snow
/// cover hold [`NO_VALUE`]. Unlike the other recurrences the first step is
/// computed from its own inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drift {
    config: SnowdriftConfig,
}

impl Drift {
    pub fn from_parameters(config: SnowdriftConfig) -> Self {
        Self { config }
    }

    pub fn calculate_drift(&self, mobility: FloatValue, wind: FloatValue) -> FloatValue {
        mobility * wind.powi(3) / self.config.drift_divisor
    }
}

#[typetag::serde]
impl Component for Drift {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::input(MOBILITY, UNIT_DIMENSIONLESS),
            RequirementDefinition::input(WIND, UNIT_WIND),
            RequirementDefinition::input(SNOW_GROUND, UNIT_SNOW),
            RequirementDefinition::output(DRIFT, UNIT_DIMENSIONLESS),
        ]
    }

    fn solve(&self, state: &StepState) -> SnowdriftResult<Grid> {
        let wind = state.current(WIND)?;
        let mut drift = Zip::from(state.current(MOBILITY)?)
            .and(wind)
            .map_collect(|&mobility, &wind| self.calculate_drift(mobility, wind));
        set_where(
            &mut drift,
            &less_than(wind, self.config.drift_wind_threshold),
            0.0,
        );
        let covered = is_snow_covered(state.current(SNOW_GROUND)?, &self.config);
        set_where(&mut drift, &not(&covered), NO_VALUE);

        Ok(drift)
    }
}
