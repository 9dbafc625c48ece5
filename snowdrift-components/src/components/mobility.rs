//! Mobility index of the snow cover
//!
//! Fresh snow is fully mobile. Mobility drops as the snow ages or once drift
//! has carried enough of it away, and vanishes where the snow melts or the
//! cover disappears.

use ndarray::Zip;
use serde::{Deserialize, Serialize};
use snowdrift_core::component::{Component, RequirementDefinition, StepState};
use snowdrift_core::config::SnowdriftConfig;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::grid::{at_least, filled, greater_than, set_where, Grid};
use snowdrift_core::predicates::{is_melting, is_new_snow, is_snow_covered, not};
use snowdrift_core::standard_parameters::{
    DRIFT_ACCUMULATION, MOBILITY, SNOWFALL, SNOW_AGE, SNOW_GROUND, TEMP, UNIT_CELSIUS,
    UNIT_DIMENSIONLESS, UNIT_HOURS, UNIT_SNOW,
};

/// Mobility index between 0 and 1
///
/// Starting from the previous mobility, the rules are applied in order with
/// later rules overriding earlier ones:
///
/// 1. new snow sets the fresh snow mobility
/// 2. fresh snow older than `aged_snow_hours` drops to the aged mobility
/// 3. drift accumulation at or above the moderate threshold sets its mobility
/// 4. drift accumulation above the severe threshold sets its mobility
/// 5. melting sets 0
/// 6. no snow cover sets 0
///
/// The first step is 0 everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mobility {
    config: SnowdriftConfig,
}

impl Mobility {
    pub fn from_parameters(config: SnowdriftConfig) -> Self {
        Self { config }
    }
}

#[typetag::serde]
impl Component for Mobility {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::input(TEMP, UNIT_CELSIUS),
            RequirementDefinition::input(SNOW_GROUND, UNIT_SNOW),
            RequirementDefinition::input(SNOWFALL, &format!("{UNIT_SNOW}/h")),
            RequirementDefinition::input(SNOW_AGE, UNIT_HOURS),
            RequirementDefinition::input(DRIFT_ACCUMULATION, UNIT_DIMENSIONLESS),
            RequirementDefinition::previous(MOBILITY, UNIT_DIMENSIONLESS),
            RequirementDefinition::output(MOBILITY, UNIT_DIMENSIONLESS),
        ]
    }

    fn solve(&self, state: &StepState) -> SnowdriftResult<Grid> {
        let config = &self.config;
        let snow_ground = state.current(SNOW_GROUND)?;
        let Some(previous) = state.previous(MOBILITY)? else {
            return Ok(filled(snow_ground.dim(), 0.0));
        };
        let age = state.current(SNOW_AGE)?;
        let accumulation = state.current(DRIFT_ACCUMULATION)?;

        let mut mobility = previous.clone();
        set_where(
            &mut mobility,
            &is_new_snow(state.current(SNOWFALL)?, config),
            config.fresh_snow_mobility,
        );
        Zip::from(&mut mobility).and(age).for_each(|mobility, &age| {
            if *mobility == config.fresh_snow_mobility && age >= config.aged_snow_hours {
                *mobility = config.aged_snow_mobility;
            }
        });
        set_where(
            &mut mobility,
            &at_least(accumulation, config.moderate_drift.threshold),
            config.moderate_drift.mobility,
        );
        set_where(
            &mut mobility,
            &greater_than(accumulation, config.severe_drift.threshold),
            config.severe_drift.mobility,
        );
        set_where(&mut mobility, &is_melting(state.current(TEMP)?, config), 0.0);
        set_where(&mut mobility, &not(&is_snow_covered(snow_ground, config)), 0.0);

        Ok(mobility)
    }
}
