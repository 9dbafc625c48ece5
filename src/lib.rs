//! Gridded snow drift risk indicators from weather forecast data.
//!
//! The algorithm lives in [`snowdrift_core`] (data model, resolver, engine) and
//! [`snowdrift_components`] (the four recurrences and the end-to-end pipeline).
//! This crate re-exports both and, with the `python` feature, builds the
//! `snowdrift._lib` extension module.

pub use snowdrift_components;
pub use snowdrift_core;

pub use snowdrift_components::pipeline::{calculate_deps, run_snowdrift, standard_engine};
pub use snowdrift_core::config::SnowdriftConfig;
pub use snowdrift_core::dataset::Dataset;
pub use snowdrift_core::errors::{SnowdriftError, SnowdriftResult};

#[cfg(feature = "python")]
mod python;
