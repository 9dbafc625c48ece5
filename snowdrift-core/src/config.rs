//! Thresholds and switches controlling a snowdrift run.
//!
//! Every constant used by the resolver and the components lives in
//! [`SnowdriftConfig`] so the algorithm can be recalibrated without code
//! changes. Missing keys in a TOML file fall back to the defaults.
//!
//! ```
//! use snowdrift_core::config::SnowdriftConfig;
//!
//! let config = SnowdriftConfig::from_toml_str("drift_wind_threshold = 8.0").unwrap();
//! assert_eq!(config.drift_wind_threshold, 8.0);
//! assert_eq!(config.snow_cover_limit, 1.0);
//! ```

use crate::errors::{SnowdriftError, SnowdriftResult};
use crate::grid::FloatValue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mobility assigned to cells whose drift accumulation passes a threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MobilityReduction {
    /// Drift accumulation threshold
    pub threshold: FloatValue,
    /// Mobility index applied past the threshold
    pub mobility: FloatValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnowdriftConfig {
    /// Ground snow above which a cell counts as snow covered
    /// unit: same as the snow series
    pub snow_cover_limit: FloatValue,
    /// Snowfall rate above which a cell has new snow
    /// unit: snow series unit / h
    pub snow_fall_limit: FloatValue,
    /// Wind speed below which no snow is transported
    /// unit: m / s
    pub drift_wind_threshold: FloatValue,
    /// Temperature above which snow is melting
    /// unit: C
    pub melt_threshold: FloatValue,
    /// Age at which fresh snow loses mobility
    /// unit: hours
    pub aged_snow_hours: FloatValue,
    /// Mobility of fresh snow once it reaches `aged_snow_hours`
    pub aged_snow_mobility: FloatValue,
    /// Mobility of freshly fallen snow
    pub fresh_snow_mobility: FloatValue,
    /// Divisor of `mobility * wind^3` in the drift value
    pub drift_divisor: FloatValue,
    /// Convert temperatures supplied in K to C during resolution
    pub normalise_kelvin: bool,
    /// Restart snow age at 0 for cells regaining cover after an uncovered step.
    ///
    /// When false, such cells age forward from the -1 sentinel, which matches
    /// the operational product.
    pub restart_age_after_gap: bool,
    /// Applied where drift accumulation >= threshold
    pub moderate_drift: MobilityReduction,
    /// Applied where drift accumulation > threshold
    pub severe_drift: MobilityReduction,
}

impl Default for SnowdriftConfig {
    fn default() -> Self {
        Self {
            snow_cover_limit: 1.0,
            snow_fall_limit: 0.1,
            drift_wind_threshold: 6.0,
            melt_threshold: 0.0,
            aged_snow_hours: 24.0,
            aged_snow_mobility: 0.6,
            fresh_snow_mobility: 1.0,
            drift_divisor: 1728.0,
            normalise_kelvin: true,
            restart_age_after_gap: false,
            moderate_drift: MobilityReduction {
                threshold: 2.0,
                mobility: 0.6,
            },
            severe_drift: MobilityReduction {
                threshold: 6.0,
                mobility: 0.3,
            },
        }
    }
}

impl SnowdriftConfig {
    pub fn from_toml_str(content: &str) -> SnowdriftResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SnowdriftError::InvalidConfig(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> SnowdriftResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> SnowdriftResult<String> {
        toml::to_string(self).map_err(|e| SnowdriftError::InvalidConfig(e.to_string()))
    }

    /// Reject values that would make the algorithm meaningless
    pub fn check(&self) -> SnowdriftResult<()> {
        if self.drift_divisor == 0.0 || !self.drift_divisor.is_finite() {
            return Err(SnowdriftError::InvalidConfig(format!(
                "drift_divisor must be finite and non-zero, got {}",
                self.drift_divisor
            )));
        }
        if self.severe_drift.threshold < self.moderate_drift.threshold {
            return Err(SnowdriftError::InvalidConfig(format!(
                "severe_drift threshold ({}) is below moderate_drift threshold ({})",
                self.severe_drift.threshold, self.moderate_drift.threshold
            )));
        }
        Ok(())
    }
}
