//! Stand in one parameter for another when a model does not supply it.

use snowdrift_core::dataset::Dataset;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::parameter::{ParameterKind, ParameterSeries};
use snowdrift_core::resolver::DerivationStrategy;

/// Copy a related series under the target name, e.g. ground snow from
/// accumulated snow.
///
/// Unlike [`Alias`](super::Alias) the source stays in the dataset, as other
/// targets still read it.
#[derive(Debug, Clone)]
pub struct Proxy {
    source: String,
}

impl Proxy {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

impl DerivationStrategy for Proxy {
    fn describe(&self) -> String {
        format!("{} (proxy)", self.source)
    }

    fn is_applicable(&self, dataset: &Dataset) -> bool {
        dataset.contains(&self.source)
    }

    fn derive(&self, target: &str, dataset: &mut Dataset) -> SnowdriftResult<()> {
        let source = dataset.require(&self.source)?;
        let copy = ParameterSeries::from_steps(
            target,
            source.unit(),
            ParameterKind::Derived,
            source.times().to_vec(),
            source.values().to_vec(),
        )?;
        dataset.add_parameter(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cells, dataset_from};

    #[test]
    fn copies_and_keeps_source() {
        let mut dataset =
            dataset_from(&[("snowac", "kg m-2", vec![vec![1.0, 2.0], vec![3.0, 4.0]])]);
        Proxy::new("snowac").derive("snowground", &mut dataset).unwrap();

        assert_eq!(dataset.names(), vec!["snowac", "snowground"]);
        assert_eq!(cells(&dataset, "snowground"), cells(&dataset, "snowac"));
        assert_eq!(
            dataset.get("snowground").unwrap().kind(),
            ParameterKind::Derived
        );
    }
}
