//! Hourly snowfall rate from accumulated snow.

use snowdrift_core::dataset::Dataset;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::grid::{elapsed_hours, filled};
use snowdrift_core::parameter::{ParameterKind, ParameterSeries};
use snowdrift_core::resolver::DerivationStrategy;
use snowdrift_core::standard_parameters::SNOW_ACCUMULATED;

/// Snowfall rate as the first difference of accumulated snow
///
/// $$ snowfall_i = \frac{snowac_i - snowac_{i-1}}{\Delta t_i} $$
///
/// Where $\Delta t_i$ is the time between steps $i-1$ and $i$ in hours, so
/// unevenly spaced steps are handled. The first step has nothing to difference
/// against and is zero everywhere. The unit is the accumulation unit per hour.
#[derive(Debug, Clone)]
pub struct SnowfallFromAccumulation {
    source: String,
}

impl Default for SnowfallFromAccumulation {
    fn default() -> Self {
        Self::new(SNOW_ACCUMULATED)
    }
}

impl SnowfallFromAccumulation {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

impl DerivationStrategy for SnowfallFromAccumulation {
    fn describe(&self) -> String {
        format!("{} (accumulated)", self.source)
    }

    fn is_applicable(&self, dataset: &Dataset) -> bool {
        dataset.contains(&self.source)
    }

    fn derive(&self, target: &str, dataset: &mut Dataset) -> SnowdriftResult<()> {
        let accumulated = dataset.require(&self.source)?;
        let unit = format!("{}/h", accumulated.unit());
        let mut rate = ParameterSeries::new(target, unit, ParameterKind::Derived);

        let times = accumulated.times();
        let values = accumulated.values();
        for (step, (time, grid)) in times.iter().zip(values).enumerate() {
            let grid = match step.checked_sub(1) {
                None => filled(grid.dim(), 0.0),
                Some(previous) => {
                    let hours = elapsed_hours(times[previous], *time, step)?;
                    (grid - &values[previous]) / hours
                }
            };
            rate.push(*time, grid)?;
        }

        dataset.add_parameter(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cells, hour, row};
    use approx::assert_relative_eq;
    use snowdrift_core::errors::SnowdriftError;

    fn accumulated(hours: &[i64], steps: &[&[f64]]) -> Dataset {
        let mut dataset = Dataset::new();
        dataset
            .add_parameter(
                ParameterSeries::from_steps(
                    "snowac",
                    "kg m-2",
                    ParameterKind::Raw,
                    hours.iter().map(|&h| hour(h)).collect(),
                    steps.iter().map(|cells| row(cells)).collect(),
                )
                .unwrap(),
            )
            .unwrap();
        dataset
    }

    #[test]
    fn first_step_is_zero() {
        let mut dataset = accumulated(&[0, 1], &[&[5.0, 7.0], &[6.0, 7.0]]);
        SnowfallFromAccumulation::default()
            .derive("snowfall", &mut dataset)
            .unwrap();
        assert_eq!(cells(&dataset, "snowfall")[0], vec![0.0, 0.0]);
        assert_eq!(dataset.get("snowfall").unwrap().unit(), "kg m-2/h");
    }

    #[test]
    fn rate_uses_elapsed_hours() {
        // 1h then 3h spacing
        let mut dataset = accumulated(&[0, 1, 4], &[&[0.0], &[0.5], &[2.0]]);
        SnowfallFromAccumulation::default()
            .derive("snowfall", &mut dataset)
            .unwrap();

        let rate = cells(&dataset, "snowfall");
        assert_relative_eq!(rate[1][0], 0.5);
        assert_relative_eq!(rate[2][0], 0.5);
        // Source is kept
        assert!(dataset.contains("snowac"));
    }

    #[test]
    fn repeated_time_is_rejected() {
        let mut dataset = accumulated(&[0, 0], &[&[0.0], &[1.0]]);
        assert!(matches!(
            SnowfallFromAccumulation::default().derive("snowfall", &mut dataset),
            Err(SnowdriftError::InvalidTimeStep { step: 1 })
        ));
    }
}
