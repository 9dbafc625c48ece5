//! The four recurrences of a snowdrift run.
//!
//! Each component holds the [`SnowdriftConfig`](snowdrift_core::config::SnowdriftConfig)
//! it was built with, so a serialised engine carries its thresholds.

mod drift;
mod drift_accumulation;
mod mobility;
mod snow_age;

pub use drift::Drift;
pub use drift_accumulation::DriftAccumulation;
pub use mobility::Mobility;
pub use snow_age::SnowAge;
