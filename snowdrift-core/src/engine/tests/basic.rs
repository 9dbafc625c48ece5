//! Basic engine tests: run, step sequencing, serialisation.

use crate::dataset::Dataset;
use crate::engine::{Engine, EngineBuilder};
use crate::errors::SnowdriftError;
use crate::example_components::{RunningTotalComponent, ScaleComponent};
use crate::grid::{filled, Time};
use crate::parameter::{ParameterKind, ParameterSeries};
use chrono::{Duration, NaiveDate};
use is_close::is_close;
use std::sync::Arc;

fn hour(h: i64) -> Time {
    NaiveDate::from_ymd_opt(2021, 3, 23)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap()
        + Duration::hours(h)
}

fn get_dataset(n_steps: i64) -> Dataset {
    let mut dataset = Dataset::new();
    dataset
        .add_parameter(
            ParameterSeries::from_steps(
                "snowfall",
                "cm / h",
                ParameterKind::Raw,
                (0..n_steps).map(hour).collect(),
                (0..n_steps).map(|h| filled((2, 3), h as f64)).collect(),
            )
            .unwrap(),
        )
        .unwrap();
    dataset
}

fn get_engine() -> Engine {
    EngineBuilder::new()
        .with_component(Arc::new(RunningTotalComponent::new("snowfall", "total")))
        .with_component(Arc::new(ScaleComponent::new("total", "half", 0.5)))
        .build()
        .unwrap()
}

#[test]
fn run() {
    let mut dataset = get_dataset(4);
    get_engine().run(&mut dataset).unwrap();

    let total = dataset.get("total").unwrap();
    assert_eq!(total.kind(), ParameterKind::Derived);
    assert_eq!(total.len(), 4);
    assert_eq!(total.times(), dataset.get("snowfall").unwrap().times());
    // 0 + 1 + 2 + 3
    assert_eq!(total.latest().unwrap()[[1, 2]], 6.0);

    let half = dataset.get("half").unwrap();
    assert!(is_close!(half.grid_at(2).unwrap()[[0, 0]], 1.5));
}

#[test]
fn step_by_step() {
    let mut dataset = get_dataset(3);
    let engine = get_engine();
    engine.initialise(&mut dataset).unwrap();
    engine.solve_step(&mut dataset, 0).unwrap();
    engine.solve_step(&mut dataset, 1).unwrap();

    assert_eq!(dataset.get("total").unwrap().len(), 2);
    assert_eq!(dataset.get("half").unwrap().len(), 2);
}

#[test]
fn skipping_a_step_is_a_sequencing_error() {
    let mut dataset = get_dataset(3);
    let engine = get_engine();
    engine.initialise(&mut dataset).unwrap();
    engine.solve_step(&mut dataset, 0).unwrap();

    match engine.solve_step(&mut dataset, 2).unwrap_err() {
        SnowdriftError::Sequencing {
            parameter,
            step,
            available,
        } => {
            assert_eq!(parameter, "total");
            assert_eq!(step, 2);
            assert_eq!(available, 1);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn repeating_a_step_is_a_sequencing_error() {
    let mut dataset = get_dataset(3);
    let engine = get_engine();
    engine.initialise(&mut dataset).unwrap();
    engine.solve_step(&mut dataset, 0).unwrap();
    assert!(matches!(
        engine.solve_step(&mut dataset, 0),
        Err(SnowdriftError::Sequencing { .. })
    ));
}

#[test]
fn missing_input() {
    let mut dataset = Dataset::new();
    dataset
        .add_parameter(
            ParameterSeries::from_steps(
                "temp",
                "C",
                ParameterKind::Raw,
                vec![hour(0)],
                vec![filled((1, 1), 0.0)],
            )
            .unwrap(),
        )
        .unwrap();

    match get_engine().run(&mut dataset).unwrap_err() {
        SnowdriftError::MissingParameter { parameter, .. } => assert_eq!(parameter, "snowfall"),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn outputs_cannot_already_exist() {
    let mut dataset = get_dataset(2);
    dataset
        .add_parameter(ParameterSeries::new("total", "1", ParameterKind::Raw))
        .unwrap();
    assert!(matches!(
        get_engine().run(&mut dataset),
        Err(SnowdriftError::DuplicateParameter(name)) if name == "total"
    ));
}

#[test]
fn required_inputs_exclude_produced_parameters() {
    let names: Vec<String> = get_engine()
        .required_inputs()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["snowfall"]);
}

#[test]
fn serialisation() {
    let engine = get_engine();
    let serialised = serde_json::to_string(&engine).unwrap();
    let deserialised: Engine = serde_json::from_str(&serialised).unwrap();
    assert_eq!(deserialised.solve_order(), engine.solve_order());

    let mut expected = get_dataset(3);
    engine.run(&mut expected).unwrap();
    let mut actual = get_dataset(3);
    deserialised.run(&mut actual).unwrap();
    assert_eq!(actual, expected);
}
