//! Python bindings over a dict based dataset.
//!
//! A dataset crosses the boundary as
//! `{name: {"unit": str, "times": [datetime], "values": [2D float array]}}`.
//! Functions taking a dataset update the dict in place once the run succeeds.

use chrono::NaiveDateTime;
use numpy::{PyReadonlyArray2, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use snowdrift_components::pipeline;
use snowdrift_core::config::SnowdriftConfig;
use snowdrift_core::dataset::Dataset;
use snowdrift_core::errors::SnowdriftError;
use snowdrift_core::grid::Grid;
use snowdrift_core::parameter::{ParameterKind, ParameterSeries};

fn to_py_err(err: SnowdriftError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn config_from(config: Option<&Bound<'_, PyAny>>) -> PyResult<SnowdriftConfig> {
    let config = match config {
        Some(config) if !config.is_none() => pythonize::depythonize::<SnowdriftConfig>(config)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?,
        _ => SnowdriftConfig::default(),
    };
    config.check().map_err(to_py_err)?;
    Ok(config)
}

fn required_item<'py>(
    entry: &Bound<'py, PyDict>,
    name: &str,
    key: &str,
) -> PyResult<Bound<'py, PyAny>> {
    entry
        .get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("parameter {name:?} has no {key:?}")))
}

fn dataset_from_dict(data: &Bound<'_, PyDict>) -> PyResult<Dataset> {
    let mut dataset = Dataset::new();
    for (name, entry) in data.iter() {
        let name: String = name.extract()?;
        let entry = entry.downcast::<PyDict>()?;

        let unit: String = required_item(entry, &name, "unit")?.extract()?;
        let times: Vec<NaiveDateTime> = required_item(entry, &name, "times")?.extract()?;
        let mut values: Vec<Grid> = vec![];
        for grid in required_item(entry, &name, "values")?.iter()? {
            let grid: PyReadonlyArray2<f64> = grid?.extract()?;
            values.push(grid.as_array().to_owned());
        }

        let series = ParameterSeries::from_steps(name, unit, ParameterKind::Raw, times, values)
            .map_err(to_py_err)?;
        dataset.add_parameter(series).map_err(to_py_err)?;
    }
    Ok(dataset)
}

fn write_dict(data: &Bound<'_, PyDict>, dataset: &Dataset) -> PyResult<()> {
    let py = data.py();
    data.clear();
    for series in dataset {
        let entry = PyDict::new_bound(py);
        entry.set_item("unit", series.unit())?;
        entry.set_item("times", series.times().to_vec())?;
        entry.set_item(
            "values",
            PyList::new_bound(py, series.values().iter().map(|grid| grid.to_pyarray_bound(py))),
        )?;
        data.set_item(series.name(), entry)?;
    }
    Ok(())
}

/// Derive the parameters a snowdrift run reads, in place
#[pyfunction]
#[pyo3(signature = (data, config=None))]
fn calculate_deps(data: &Bound<'_, PyDict>, config: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
    let config = config_from(config)?;
    let mut dataset = dataset_from_dict(data)?;
    pipeline::calculate_deps(&mut dataset, &config).map_err(to_py_err)?;
    write_dict(data, &dataset)
}

/// Add snowage, driftacc, mobility and drift to `data`, in place
#[pyfunction]
#[pyo3(name = "snowdrift", signature = (data, config=None))]
fn run_snowdrift(data: &Bound<'_, PyDict>, config: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
    let config = config_from(config)?;
    let mut dataset = dataset_from_dict(data)?;
    pipeline::run_snowdrift(&mut dataset, &config).map_err(to_py_err)?;
    write_dict(data, &dataset)
}

/// Human readable summary of every parameter in `data`
#[pyfunction]
fn summary(data: &Bound<'_, PyDict>) -> PyResult<String> {
    let dataset = dataset_from_dict(data)?;
    dataset.log_summary();
    Ok(dataset
        .summary()
        .iter()
        .map(|parameter| parameter.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

#[pymodule]
#[pyo3(name = "_lib")]
fn snowdrift_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(calculate_deps, m)?)?;
    m.add_function(wrap_pyfunction!(run_snowdrift, m)?)?;
    m.add_function(wrap_pyfunction!(summary, m)?)?;
    Ok(())
}
