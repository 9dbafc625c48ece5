//! Alternative names used by forecast models for the same parameter.

use snowdrift_core::dataset::Dataset;
use snowdrift_core::errors::SnowdriftResult;
use snowdrift_core::resolver::DerivationStrategy;

/// Relabel a series supplied under another name
#[derive(Debug, Clone)]
pub struct Alias {
    source: String,
}

impl Alias {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

impl DerivationStrategy for Alias {
    fn describe(&self) -> String {
        self.source.clone()
    }

    fn is_applicable(&self, dataset: &Dataset) -> bool {
        dataset.contains(&self.source)
    }

    fn derive(&self, target: &str, dataset: &mut Dataset) -> SnowdriftResult<()> {
        dataset.rename(&self.source, target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dataset_from;

    #[test]
    fn renames_without_leaving_the_alias() {
        let mut dataset = dataset_from(&[("snow-ac", "kg m-2", vec![vec![1.0], vec![2.0]])]);
        let alias = Alias::new("snow-ac");
        assert!(alias.is_applicable(&dataset));

        alias.derive("snowac", &mut dataset).unwrap();
        assert_eq!(dataset.names(), vec!["snowac"]);
        assert_eq!(dataset.get("snowac").unwrap().unit(), "kg m-2");
        assert!(!alias.is_applicable(&dataset));
    }
}
