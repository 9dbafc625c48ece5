//! Derivation of parameters missing from the ingested dataset.
//!
//! Forecast models name and supply parameters differently. A [`Resolver`]
//! walks a fixed list of [`ResolutionTarget`]s; every target that is absent is
//! produced by the first of its [`DerivationStrategy`]s that applies to the
//! dataset. If none applies the run cannot continue and a
//! [`SnowdriftError::MissingParameter`] lists what would have been accepted.
//!
//! Once a target exists its adjustments run, e.g. converting units.

use crate::dataset::Dataset;
use crate::errors::{SnowdriftError, SnowdriftResult};
use log::{error, info};
use std::fmt::Debug;

/// One way of producing (or adjusting) a target parameter in place.
pub trait DerivationStrategy: Debug {
    /// Short description of what the strategy needs, e.g. `wind-u + wind-v`
    fn describe(&self) -> String;

    /// Whether the dataset holds everything the strategy needs
    fn is_applicable(&self, dataset: &Dataset) -> bool;

    /// Produce or modify `target` in `dataset`
    fn derive(&self, target: &str, dataset: &mut Dataset) -> SnowdriftResult<()>;
}

/// A parameter the resolver guarantees, with its ordered fallbacks.
#[derive(Debug)]
pub struct ResolutionTarget {
    parameter: String,
    strategies: Vec<Box<dyn DerivationStrategy>>,
    adjustments: Vec<Box<dyn DerivationStrategy>>,
}

impl ResolutionTarget {
    pub fn new(parameter: &str) -> Self {
        Self {
            parameter: parameter.to_string(),
            strategies: vec![],
            adjustments: vec![],
        }
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Add a fallback tried after the ones already registered
    pub fn with_strategy(mut self, strategy: impl DerivationStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Add an adjustment applied once the parameter exists
    pub fn with_adjustment(mut self, adjustment: impl DerivationStrategy + 'static) -> Self {
        self.adjustments.push(Box::new(adjustment));
        self
    }

    /// Everything that would satisfy this target, the target itself first
    pub fn alternatives(&self) -> Vec<String> {
        std::iter::once(self.parameter.clone())
            .chain(self.strategies.iter().map(|s| s.describe()))
            .collect()
    }

    fn resolve(&self, dataset: &mut Dataset) -> SnowdriftResult<()> {
        if !dataset.contains(&self.parameter) {
            let strategy = self
                .strategies
                .iter()
                .find(|strategy| strategy.is_applicable(dataset))
                .ok_or_else(|| {
                    error!("no source found for {:?}", self.parameter);
                    SnowdriftError::MissingParameter {
                        parameter: self.parameter.clone(),
                        alternatives: self.alternatives(),
                    }
                })?;

            info!(
                " - calculating {} from {}",
                self.parameter,
                strategy.describe()
            );
            strategy.derive(&self.parameter, dataset)?;

            if !dataset.contains(&self.parameter) {
                return Err(SnowdriftError::MissingParameter {
                    parameter: self.parameter.clone(),
                    alternatives: self.alternatives(),
                });
            }
        }

        for adjustment in &self.adjustments {
            if adjustment.is_applicable(dataset) {
                info!(" - adjusting {} ({})", self.parameter, adjustment.describe());
                adjustment.derive(&self.parameter, dataset)?;
            }
        }
        Ok(())
    }
}

/// Ensures a dataset holds every target parameter.
#[derive(Debug, Default)]
pub struct Resolver {
    targets: Vec<ResolutionTarget>,
}

impl Resolver {
    pub fn new() -> Self {
        Self { targets: vec![] }
    }

    /// Add a target resolved after the ones already registered
    pub fn with_target(mut self, target: ResolutionTarget) -> Self {
        self.targets.push(target);
        self
    }

    pub fn targets(&self) -> &[ResolutionTarget] {
        &self.targets
    }

    /// Resolve every target in order, mutating `dataset` in place.
    ///
    /// Targets already present are left alone apart from their adjustments.
    /// A failure leaves the dataset partially resolved.
    pub fn resolve(&self, dataset: &mut Dataset) -> SnowdriftResult<()> {
        info!("calculating dependent parameters");
        for target in &self.targets {
            target.resolve(dataset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{filled, Time};
    use crate::parameter::{ParameterKind, ParameterSeries};
    use chrono::NaiveDate;

    #[derive(Debug)]
    struct Rename(&'static str);

    impl DerivationStrategy for Rename {
        fn describe(&self) -> String {
            self.0.to_string()
        }

        fn is_applicable(&self, dataset: &Dataset) -> bool {
            dataset.contains(self.0)
        }

        fn derive(&self, target: &str, dataset: &mut Dataset) -> SnowdriftResult<()> {
            dataset.rename(self.0, target).map(|_| ())
        }
    }

    #[derive(Debug)]
    struct DoNothing;

    impl DerivationStrategy for DoNothing {
        fn describe(&self) -> String {
            "nothing".to_string()
        }

        fn is_applicable(&self, _dataset: &Dataset) -> bool {
            true
        }

        fn derive(&self, _target: &str, _dataset: &mut Dataset) -> SnowdriftResult<()> {
            Ok(())
        }
    }

    fn time() -> Time {
        NaiveDate::from_ymd_opt(2021, 3, 23)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    }

    fn dataset(names: &[&str]) -> Dataset {
        let mut dataset = Dataset::new();
        for name in names {
            dataset
                .add_parameter(
                    ParameterSeries::from_steps(
                        *name,
                        "1",
                        ParameterKind::Raw,
                        vec![time()],
                        vec![filled((1, 1), 0.0)],
                    )
                    .unwrap(),
                )
                .unwrap();
        }
        dataset
    }

    #[test]
    fn first_applicable_strategy_wins() {
        let resolver = Resolver::new().with_target(
            ResolutionTarget::new("temp")
                .with_strategy(Rename("surface-temp"))
                .with_strategy(Rename("t2m")),
        );
        let mut dataset = dataset(&["t2m", "surface-temp"]);
        resolver.resolve(&mut dataset).unwrap();
        assert_eq!(dataset.names(), vec!["t2m", "temp"]);
    }

    #[test]
    fn present_target_is_untouched() {
        let resolver = Resolver::new()
            .with_target(ResolutionTarget::new("temp").with_strategy(Rename("t2m")));
        let mut dataset = dataset(&["temp", "t2m"]);
        resolver.resolve(&mut dataset).unwrap();
        assert_eq!(dataset.names(), vec!["temp", "t2m"]);
    }

    #[test]
    fn no_applicable_strategy() {
        let resolver = Resolver::new().with_target(
            ResolutionTarget::new("temp")
                .with_strategy(Rename("surface-temp"))
                .with_strategy(Rename("t2m")),
        );
        let mut dataset = dataset(&["wind"]);
        match resolver.resolve(&mut dataset).unwrap_err() {
            SnowdriftError::MissingParameter {
                parameter,
                alternatives,
            } => {
                assert_eq!(parameter, "temp");
                assert_eq!(alternatives, vec!["temp", "surface-temp", "t2m"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn strategy_that_produces_nothing_is_an_error() {
        let resolver =
            Resolver::new().with_target(ResolutionTarget::new("temp").with_strategy(DoNothing));
        let mut dataset = dataset(&["wind"]);
        assert!(matches!(
            resolver.resolve(&mut dataset),
            Err(SnowdriftError::MissingParameter { .. })
        ));
    }
}
