//! Grid and time primitives shared by every parameter series.
//!
//! A [`Grid`] holds one 2D field of cell values for a single forecast step.
//! Boolean [`Mask`]s are produced by the snow predicates and applied to grids
//! with [`set_where`]. All operations are element-wise; no cell reads another.

use chrono::NaiveDateTime;
use ndarray::{Array2, Zip};

use crate::errors::{SnowdriftError, SnowdriftResult};

pub type FloatValue = f64;

/// Valid time of a forecast step.
pub type Time = NaiveDateTime;

/// One 2D field of values (rows x columns) at a single step.
pub type Grid = Array2<FloatValue>;

/// Cellwise boolean grid.
pub type Mask = Array2<bool>;

/// Shape of a grid as `(rows, columns)`.
pub type Shape = (usize, usize);

pub fn shape_of(grid: &Grid) -> Shape {
    grid.dim()
}

/// Grid of `value` everywhere.
pub fn filled(shape: Shape, value: FloatValue) -> Grid {
    Grid::from_elem(shape, value)
}

/// Overwrite `grid` with `value` wherever `mask` is set.
pub fn set_where(grid: &mut Grid, mask: &Mask, value: FloatValue) {
    Zip::from(grid).and(mask).for_each(|cell, &m| {
        if m {
            *cell = value;
        }
    });
}

/// Cellwise `grid > threshold`.
pub fn greater_than(grid: &Grid, threshold: FloatValue) -> Mask {
    grid.mapv(|v| v > threshold)
}

/// Cellwise `grid >= threshold`.
pub fn at_least(grid: &Grid, threshold: FloatValue) -> Mask {
    grid.mapv(|v| v >= threshold)
}

/// Cellwise `grid < threshold`.
pub fn less_than(grid: &Grid, threshold: FloatValue) -> Mask {
    grid.mapv(|v| v < threshold)
}

/// Elapsed time from `start` to `end` in hours.
///
/// Returns an error tagged with `step` if the interval is not strictly positive,
/// since every caller divides by or accumulates this value.
pub fn elapsed_hours(start: Time, end: Time, step: usize) -> SnowdriftResult<FloatValue> {
    let hours = (end - start).num_milliseconds() as FloatValue / 3_600_000.0;
    if hours > 0.0 {
        Ok(hours)
    } else {
        Err(SnowdriftError::InvalidTimeStep { step })
    }
}
