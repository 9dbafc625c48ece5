//! Canonical parameter names and units.
//!
//! Inputs are the names the ingestion stage hands over (after alias
//! resolution). Outputs are appended by the components in this order of
//! dependency within a step: snow age, drift accumulation, mobility, drift.

pub const TEMP: &str = "temp";
pub const SNOW_ACCUMULATED: &str = "snowac";
pub const SNOW_GROUND: &str = "snowground";
pub const SNOWFALL: &str = "snowfall";
pub const WIND: &str = "wind";
pub const WIND_U: &str = "wind-u";
pub const WIND_V: &str = "wind-v";

pub const SNOW_AGE: &str = "snowage";
pub const DRIFT_ACCUMULATION: &str = "driftacc";
pub const MOBILITY: &str = "mobility";
pub const DRIFT: &str = "drift";

pub const UNIT_CELSIUS: &str = "C";
pub const UNIT_KELVIN: &str = "K";
pub const UNIT_HOURS: &str = "hours";
pub const UNIT_DIMENSIONLESS: &str = "1";
/// Nominal units of the raw snow and wind inputs, as declared by components
pub const UNIT_SNOW: &str = "kg m-2";
pub const UNIT_WIND: &str = "m s-1";

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;
