//! End-to-end snowdrift runs over an ingested dataset.
//!
//! ```text
//! validate -> resolve -> validate -> engine (snowage, driftacc, mobility, drift)
//! ```

use crate::components::{Drift, DriftAccumulation, Mobility, SnowAge};
use crate::derivations::default_resolver;
use log::info;
use snowdrift_core::config::SnowdriftConfig;
use snowdrift_core::dataset::Dataset;
use snowdrift_core::engine::{Engine, EngineBuilder};
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::validation::validate;
use std::sync::Arc;

/// Engine solving the four snowdrift recurrences with `config`
pub fn standard_engine(config: &SnowdriftConfig) -> SnowdriftResult<Engine> {
    config.check()?;
    EngineBuilder::new()
        .with_component(Arc::new(SnowAge::from_parameters(config.clone())))
        .with_component(Arc::new(DriftAccumulation::from_parameters(config.clone())))
        .with_component(Arc::new(Mobility::from_parameters(config.clone())))
        .with_component(Arc::new(Drift::from_parameters(config.clone())))
        .build()
}

/// Fill in every parameter the engine reads.
///
/// The dataset is validated before and after resolution, so a derivation
/// cannot introduce a misaligned series.
pub fn calculate_deps(dataset: &mut Dataset, config: &SnowdriftConfig) -> SnowdriftResult<()> {
    validate(dataset)?;
    default_resolver(config).resolve(dataset)?;
    validate(dataset)
}

/// Resolve the inputs and append snowage, driftacc, mobility and drift.
pub fn run_snowdrift(dataset: &mut Dataset, config: &SnowdriftConfig) -> SnowdriftResult<()> {
    let engine = standard_engine(config)?;
    calculate_deps(dataset, config)?;
    info!("calculating snowdrift");
    engine.run(dataset)
}
