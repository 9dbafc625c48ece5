use crate::errors::{SnowdriftError, SnowdriftResult};
use crate::grid::{shape_of, FloatValue, Grid, Shape, Time};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Values supplied by the forecast ingestion
    Raw,
    /// Values derived from other parameters during a run
    Derived,
}

/// A named, time-ordered sequence of grids with a unit.
///
/// Grids are only ever appended. Once a step has been pushed it is read-only
/// for the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSeries {
    name: String,
    unit: String,
    kind: ParameterKind,
    times: Vec<Time>,
    values: Vec<Grid>,
}

impl ParameterSeries {
    /// Create an empty series
    pub fn new(name: impl Into<String>, unit: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            kind,
            times: vec![],
            values: vec![],
        }
    }

    /// Create a series from parallel time and grid sequences
    ///
    /// Every grid must share the shape of the first one.
    pub fn from_steps(
        name: impl Into<String>,
        unit: impl Into<String>,
        kind: ParameterKind,
        times: Vec<Time>,
        values: Vec<Grid>,
    ) -> SnowdriftResult<Self> {
        let mut series = Self::new(name, unit, kind);
        if times.len() != values.len() {
            return Err(SnowdriftError::InconsistentStepCount {
                counts: vec![
                    (format!("{}.times", series.name), times.len()),
                    (format!("{}.values", series.name), values.len()),
                ],
            });
        }
        for (time, grid) in times.into_iter().zip(values) {
            series.push(time, grid)?;
        }
        Ok(series)
    }

    /// Append one step
    pub fn push(&mut self, time: Time, grid: Grid) -> SnowdriftResult<()> {
        if let Some(expected) = self.shape() {
            let found = shape_of(&grid);
            if found != expected {
                return Err(SnowdriftError::ShapeMismatch {
                    parameter: self.name.clone(),
                    expected,
                    found,
                });
            }
        }
        self.times.push(time);
        self.values.push(grid);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Relabel the unit, e.g. after converting the values
    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[Time] {
        &self.times
    }

    pub fn values(&self) -> &[Grid] {
        &self.values
    }

    pub fn time_at(&self, step: usize) -> Option<Time> {
        self.times.get(step).copied()
    }

    pub fn grid_at(&self, step: usize) -> Option<&Grid> {
        self.values.get(step)
    }

    /// Get the most recently appended grid
    pub fn latest(&self) -> Option<&Grid> {
        self.values.last()
    }

    /// Shape shared by every grid, `None` while the series is empty
    pub fn shape(&self) -> Option<Shape> {
        self.values.first().map(shape_of)
    }

    /// Apply `f` to every cell of every step in place.
    ///
    /// Only used to normalise raw inputs before any derived parameter reads them.
    pub fn map_inplace(&mut self, f: impl Fn(FloatValue) -> FloatValue) {
        for grid in self.values.iter_mut() {
            grid.mapv_inplace(&f);
        }
    }

    /// Smallest and largest finite cell value across all steps
    pub fn min_max(&self) -> Option<(FloatValue, FloatValue)> {
        self.values
            .iter()
            .flat_map(|grid| grid.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
