//! Wind speed from its orthogonal components.

use log::info;
use ndarray::Zip;
use snowdrift_core::dataset::Dataset;
use snowdrift_core::errors::{SnowdriftError, SnowdriftResult};
use snowdrift_core::parameter::{ParameterKind, ParameterSeries};
use snowdrift_core::resolver::DerivationStrategy;
use snowdrift_core::standard_parameters::{WIND_U, WIND_V};

/// Wind speed magnitude from u/v components
///
/// $$ wind = \sqrt{u^2 + v^2} $$
///
/// The unit is taken from the u component. Both components are removed from
/// the dataset once the speed exists, as nothing downstream reads them.
#[derive(Debug, Clone)]
pub struct WindFromComponents {
    u: String,
    v: String,
}

impl Default for WindFromComponents {
    fn default() -> Self {
        Self::new(WIND_U, WIND_V)
    }
}

impl WindFromComponents {
    pub fn new(u: &str, v: &str) -> Self {
        Self {
            u: u.to_string(),
            v: v.to_string(),
        }
    }
}

impl DerivationStrategy for WindFromComponents {
    fn describe(&self) -> String {
        format!("{} + {}", self.u, self.v)
    }

    fn is_applicable(&self, dataset: &Dataset) -> bool {
        dataset.contains(&self.u) && dataset.contains(&self.v)
    }

    fn derive(&self, target: &str, dataset: &mut Dataset) -> SnowdriftResult<()> {
        let u = dataset.require(&self.u)?;
        let v = dataset.require(&self.v)?;
        if u.len() != v.len() {
            return Err(SnowdriftError::InconsistentStepCount {
                counts: vec![(self.u.clone(), u.len()), (self.v.clone(), v.len())],
            });
        }

        let mut wind = ParameterSeries::new(target, u.unit(), ParameterKind::Derived);
        for (step, (u_grid, v_grid)) in u.values().iter().zip(v.values()).enumerate() {
            if u_grid.dim() != v_grid.dim() {
                return Err(SnowdriftError::ShapeMismatch {
                    parameter: self.v.clone(),
                    expected: u_grid.dim(),
                    found: v_grid.dim(),
                });
            }
            let speed = Zip::from(u_grid)
                .and(v_grid)
                .map_collect(|&u, &v| (u * u + v * v).sqrt());
            // Times are equal across u and v once validated
            wind.push(u.times()[step], speed)?;
        }

        dataset.add_parameter(wind)?;
        info!(" - removing superseded {} and {}", self.u, self.v);
        dataset.remove(&self.u);
        dataset.remove(&self.v);
        Ok(())
    }
}
