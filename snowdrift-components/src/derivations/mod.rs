//! Strategies filling in the parameters the snowdrift components read.
//!
//! [`default_resolver`] lists them in the order they are tried.

mod alias;
mod proxy;
mod snowfall_rate;
mod temperature;
mod wind_speed;

pub use alias::Alias;
pub use proxy::Proxy;
pub use snowfall_rate::SnowfallFromAccumulation;
pub use temperature::KelvinToCelsius;
pub use wind_speed::WindFromComponents;

use snowdrift_core::config::SnowdriftConfig;
use snowdrift_core::resolver::{ResolutionTarget, Resolver};
use snowdrift_core::standard_parameters::{SNOWFALL, SNOW_ACCUMULATED, SNOW_GROUND, TEMP, WIND};

/// Resolver for every input of the standard engine
///
/// Targets are resolved in order, so `snowground` and `snowfall` can fall back
/// on an already resolved `snowac`.
pub fn default_resolver(config: &SnowdriftConfig) -> Resolver {
    let mut temp = ResolutionTarget::new(TEMP)
        .with_strategy(Alias::new("surface-temp"))
        .with_strategy(Alias::new("t2m"));
    if config.normalise_kelvin {
        temp = temp.with_adjustment(KelvinToCelsius::default());
    }

    Resolver::new()
        .with_target(temp)
        .with_target(
            ResolutionTarget::new(SNOW_ACCUMULATED)
                .with_strategy(Alias::new("snow-ac"))
                .with_strategy(Alias::new("snow_ac")),
        )
        .with_target(
            ResolutionTarget::new(SNOW_GROUND)
                .with_strategy(Alias::new("snow-ground"))
                .with_strategy(Alias::new("snow_ground"))
                .with_strategy(Proxy::new(SNOW_ACCUMULATED)),
        )
        .with_target(ResolutionTarget::new(WIND).with_strategy(WindFromComponents::default()))
        .with_target(
            ResolutionTarget::new(SNOWFALL)
                .with_strategy(Alias::new("snow"))
                .with_strategy(SnowfallFromAccumulation::default()),
        )
}
