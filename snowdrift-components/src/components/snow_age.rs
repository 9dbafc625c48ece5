//! Age of the snow cover
//!
//! Tracks the hours since the last snowfall in every snow covered cell.

use ndarray::Zip;
use serde::{Deserialize, Serialize};
use snowdrift_core::component::{Component, RequirementDefinition, StepState};
use snowdrift_core::config::SnowdriftConfig;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::grid::{filled, set_where, FloatValue, Grid, Mask};
use snowdrift_core::predicates::{has_valid_age, is_new_snow, is_snow_covered, not, NO_VALUE};
use snowdrift_core::standard_parameters::{SNOWFALL, SNOW_AGE, SNOW_GROUND, UNIT_HOURS, UNIT_SNOW};

/// Snow cover age in hours
///
/// On the first step covered cells start at 0. Afterwards a covered cell ages
/// by the hours elapsed since the previous step and new snow resets it to 0.
/// Cells without snow cover hold [`NO_VALUE`].
///
/// A cell which was uncovered at the previous step ages from [`NO_VALUE`], so
/// it reads `dt - 1` hours once covered again. Setting
/// `restart_age_after_gap` restarts such cells at 0 instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnowAge {
    config: SnowdriftConfig,
}

impl SnowAge {
    pub fn from_parameters(config: SnowdriftConfig) -> Self {
        Self { config }
    }

    /// Age the previous step's grid by `hours` in covered cells
    pub fn advance(&self, previous: &Grid, covered: &Mask, hours: FloatValue) -> Grid {
        let restart = self.config.restart_age_after_gap;
        let mut age = previous.clone();
        Zip::from(&mut age).and(covered).for_each(|age, &covered| {
            if !covered {
                return;
            }
            if restart && !has_valid_age(*age) {
                *age = 0.0;
            } else {
                *age += hours;
            }
        });
        age
    }
}

#[typetag::serde]
impl Component for SnowAge {
    fn definitions(&self) -> Vec<RequirementDefinition> {
        vec![
            RequirementDefinition::input(SNOW_GROUND, UNIT_SNOW),
            RequirementDefinition::input(SNOWFALL, &format!("{UNIT_SNOW}/h")),
            RequirementDefinition::previous(SNOW_AGE, UNIT_HOURS),
            RequirementDefinition::output(SNOW_AGE, UNIT_HOURS),
        ]
    }

    fn solve(&self, state: &StepState) -> SnowdriftResult<Grid> {
        let covered = is_snow_covered(state.current(SNOW_GROUND)?, &self.config);

        let mut age = match state.previous(SNOW_AGE)? {
            None => filled(covered.dim(), 0.0),
            Some(previous) => {
                let mut age = self.advance(previous, &covered, state.elapsed_hours()?);
                let new_snow = is_new_snow(state.current(SNOWFALL)?, &self.config);
                set_where(&mut age, &new_snow, 0.0);
                age
            }
        };
        set_where(&mut age, &not(&covered), NO_VALUE);

        Ok(age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dataset_from;
    use ndarray::array;

    #[test]
    fn first_step_marks_uncovered_cells() {
        let dataset = dataset_from(&[
            ("snowground", "kg m-2", vec![vec![0.5, 1.5]]),
            ("snowfall", "kg m-2/h", vec![vec![0.0, 0.0]]),
        ]);
        let component = SnowAge::from_parameters(SnowdriftConfig::default());
        let age = component.solve(&StepState::new(&dataset, 0)).unwrap();
        assert_eq!(age, array![[-1.0, 0.0]]);
    }

    #[test]
    fn ages_resets_and_uncovers() {
        // cells: ageing, new snow, melted away, coming back after a gap
        let dataset = dataset_from(&[
            ("snowground", "kg m-2", vec![vec![5.0; 4], vec![5.0, 5.0, 0.0, 5.0]]),
            ("snowfall", "kg m-2/h", vec![vec![0.0; 4], vec![0.0, 0.5, 0.0, 0.0]]),
            ("snowage", "hours", vec![vec![3.0, 3.0, 3.0, -1.0]]),
        ]);
        let component = SnowAge::from_parameters(SnowdriftConfig::default());
        let age = component.solve(&StepState::new(&dataset, 1)).unwrap();
        assert_eq!(age, array![[4.0, 0.0, -1.0, 0.0]]);
    }

    #[test]
    fn restart_only_changes_cells_after_a_gap() {
        let previous = array![[3.0, -1.0]];
        let covered = array![[true, true]];

        let quirk = SnowAge::from_parameters(SnowdriftConfig::default());
        assert_eq!(quirk.advance(&previous, &covered, 3.0), array![[6.0, 2.0]]);

        let restart = SnowAge::from_parameters(SnowdriftConfig {
            restart_age_after_gap: true,
            ..Default::default()
        });
        assert_eq!(restart.advance(&previous, &covered, 3.0), array![[6.0, 0.0]]);
    }
}
