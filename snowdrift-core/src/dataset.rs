use crate::errors::{SnowdriftError, SnowdriftResult};
use crate::grid::{Shape, Time};
use crate::parameter::ParameterSeries;
use serde::{Deserialize, Serialize};

/// A collection of parameter series sharing a common set of forecast steps.
///
/// Allows for easy access to series by name across the whole run.
/// Insertion order is preserved so iteration and summaries are deterministic.
/// The alignment invariants (step count, timestamps, grid shape) are checked by
/// [`validate`](crate::validation::validate) rather than on every mutation, as
/// derived series grow one step at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    parameters: Vec<ParameterSeries>,
}

impl Dataset {
    pub fn new() -> Self {
        Self { parameters: vec![] }
    }

    /// Add a new series to the dataset
    pub fn add_parameter(&mut self, series: ParameterSeries) -> SnowdriftResult<()> {
        if self.contains(series.name()) {
            return Err(SnowdriftError::DuplicateParameter(series.name().to_string()));
        }
        self.parameters.push(series);
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|x| x.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSeries> {
        self.position(name).map(|i| &self.parameters[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ParameterSeries> {
        self.position(name).map(|i| &mut self.parameters[i])
    }

    /// Get a series or fail with [`SnowdriftError::MissingParameter`]
    pub fn require(&self, name: &str) -> SnowdriftResult<&ParameterSeries> {
        self.get(name)
            .ok_or_else(|| SnowdriftError::MissingParameter {
                parameter: name.to_string(),
                alternatives: vec![name.to_string()],
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove a series that has been superseded by a derived one
    pub fn remove(&mut self, name: &str) -> Option<ParameterSeries> {
        self.position(name).map(|i| self.parameters.remove(i))
    }

    /// Relabel a series under its canonical name, keeping its position.
    ///
    /// Returns `Ok(false)` if `from` does not exist.
    pub fn rename(&mut self, from: &str, to: &str) -> SnowdriftResult<bool> {
        if self.contains(to) {
            return Err(SnowdriftError::DuplicateParameter(to.to_string()));
        }
        match self.get_mut(from) {
            Some(series) => {
                series.set_name(to);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.parameters.iter().map(|x| x.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterSeries> {
        self.parameters.iter()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Number of steps of the first series.
    ///
    /// Only meaningful on a validated dataset.
    pub fn n_steps(&self) -> usize {
        self.parameters.first().map_or(0, |x| x.len())
    }

    /// Timestamps of the first series.
    ///
    /// Only meaningful on a validated dataset.
    pub fn times(&self) -> &[Time] {
        self.parameters.first().map(|x| x.times()).unwrap_or(&[])
    }

    /// Grid shape of the first non-empty series
    pub fn shape(&self) -> Option<Shape> {
        self.parameters.iter().find_map(|x| x.shape())
    }
}

impl IntoIterator for Dataset {
    type Item = ParameterSeries;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ParameterSeries;
    type IntoIter = std::slice::Iter<'a, ParameterSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::filled;
    use crate::parameter::ParameterKind;
    use chrono::NaiveDate;

    fn series(name: &str) -> ParameterSeries {
        let time = NaiveDate::from_ymd_opt(2021, 3, 23)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        ParameterSeries::from_steps(
            name,
            "1",
            ParameterKind::Raw,
            vec![time],
            vec![filled((2, 2), 0.0)],
        )
        .unwrap()
    }

    #[test]
    fn adding() {
        let mut dataset = Dataset::new();
        dataset.add_parameter(series("temp")).unwrap();
        dataset.add_parameter(series("wind-u")).unwrap();

        assert_eq!(dataset.names(), vec!["temp", "wind-u"]);
        assert_eq!(dataset.n_steps(), 1);
        assert_eq!(dataset.shape(), Some((2, 2)));
    }

    #[test]
    fn adding_same_name() {
        let mut dataset = Dataset::new();
        dataset.add_parameter(series("temp")).unwrap();
        let err = dataset.add_parameter(series("temp")).unwrap_err();
        assert!(matches!(err, SnowdriftError::DuplicateParameter(name) if name == "temp"));
    }

    #[test]
    fn rename_keeps_position() {
        let mut dataset = Dataset::new();
        dataset.add_parameter(series("surface-temp")).unwrap();
        dataset.add_parameter(series("snowac")).unwrap();

        assert!(dataset.rename("surface-temp", "temp").unwrap());
        assert!(!dataset.rename("missing", "other").unwrap());
        assert_eq!(dataset.names(), vec!["temp", "snowac"]);
        assert_eq!(dataset.get("temp").unwrap().name(), "temp");
    }

    #[test]
    fn rename_onto_existing_fails() {
        let mut dataset = Dataset::new();
        dataset.add_parameter(series("snow")).unwrap();
        dataset.add_parameter(series("snowfall")).unwrap();
        assert!(dataset.rename("snow", "snowfall").is_err());
    }

    #[test]
    fn require_reports_missing() {
        let dataset = Dataset::new();
        assert!(matches!(
            dataset.require("wind"),
            Err(SnowdriftError::MissingParameter { .. })
        ));
    }
}
