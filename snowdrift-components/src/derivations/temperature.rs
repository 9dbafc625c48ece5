use snowdrift_core::dataset::Dataset;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::resolver::DerivationStrategy;
use snowdrift_core::standard_parameters::{KELVIN_OFFSET, TEMP, UNIT_CELSIUS, UNIT_KELVIN};

/// Convert a temperature series given in K to C in place.
///
/// The melt threshold is expressed in C.
#[derive(Debug, Clone)]
pub struct KelvinToCelsius {
    parameter: String,
}

impl Default for KelvinToCelsius {
    fn default() -> Self {
        Self {
            parameter: TEMP.to_string(),
        }
    }
}

impl DerivationStrategy for KelvinToCelsius {
    fn describe(&self) -> String {
        format!("{UNIT_KELVIN} to {UNIT_CELSIUS}")
    }

    fn is_applicable(&self, dataset: &Dataset) -> bool {
        dataset
            .get(&self.parameter)
            .is_some_and(|series| series.unit() == UNIT_KELVIN)
    }

    fn derive(&self, target: &str, dataset: &mut Dataset) -> SnowdriftResult<()> {
        if let Some(series) = dataset.get_mut(target) {
            series.map_inplace(|v| v - KELVIN_OFFSET);
            series.set_unit(UNIT_CELSIUS);
        }
        Ok(())
    }
}
