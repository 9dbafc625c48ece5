//! Cellwise snow predicates and the `-1` sentinel.
//!
//! Snow age and drift use `-1` to flag cells without snow cover. The sentinel is
//! only ever written through [`NO_VALUE`] and read through [`has_valid_age`] or
//! [`has_valid_drift`] so it does not leak into arithmetic unnoticed.

use crate::config::SnowdriftConfig;
use crate::grid::{greater_than, FloatValue, Grid, Mask};

/// Marks a cell with no meaningful value (no snow, so no age or drift)
pub const NO_VALUE: FloatValue = -1.0;

/// Ground snow exceeds the cover limit
pub fn is_snow_covered(snow_ground: &Grid, config: &SnowdriftConfig) -> Mask {
    greater_than(snow_ground, config.snow_cover_limit)
}

/// Snowfall rate exceeds the fall limit
pub fn is_new_snow(snowfall: &Grid, config: &SnowdriftConfig) -> Mask {
    greater_than(snowfall, config.snow_fall_limit)
}

/// Temperature exceeds the melt threshold
pub fn is_melting(temperature: &Grid, config: &SnowdriftConfig) -> Mask {
    greater_than(temperature, config.melt_threshold)
}

/// Cellwise logical not
pub fn not(mask: &Mask) -> Mask {
    mask.mapv(|m| !m)
}

/// Age is a real age rather than the no-snow sentinel
pub fn has_valid_age(age: FloatValue) -> bool {
    age >= 0.0
}

/// Drift is a real drift index rather than the no-snow sentinel
pub fn has_valid_drift(drift: FloatValue) -> bool {
    drift >= 0.0
}
