//! Solve order and graph validation.

use crate::engine::EngineBuilder;
use crate::errors::SnowdriftError;
use crate::example_components::{RunningTotalComponent, ScaleComponent};
use std::sync::Arc;

#[test]
fn order_follows_same_step_dependencies() {
    // Registered in reverse dependency order
    let engine = EngineBuilder::new()
        .with_component(Arc::new(ScaleComponent::new("b", "c", 2.0)))
        .with_component(Arc::new(ScaleComponent::new("a", "b", 2.0)))
        .with_component(Arc::new(RunningTotalComponent::new("input", "a")))
        .build()
        .unwrap();

    assert_eq!(engine.solve_order(), vec!["a", "b", "c"]);
}

#[test]
fn previous_step_reads_do_not_constrain_order() {
    // "total" reads its own previous value, which is not a cycle
    let engine = EngineBuilder::new()
        .with_component(Arc::new(RunningTotalComponent::new("input", "total")))
        .build()
        .unwrap();
    assert_eq!(engine.solve_order(), vec!["total"]);
}

#[test]
fn cycles_are_rejected() {
    let result = EngineBuilder::new()
        .with_component(Arc::new(ScaleComponent::new("input", "a", 1.0)))
        .with_component(Arc::new(ScaleComponent::new("c", "b", 1.0)))
        .with_component(Arc::new(ScaleComponent::new("b", "c", 1.0)))
        .build();

    match result.unwrap_err() {
        SnowdriftError::DependencyCycle(mut names) => {
            names.sort();
            assert_eq!(names, vec!["b", "c"]);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn same_step_self_reference_is_a_cycle() {
    let result = EngineBuilder::new()
        .with_component(Arc::new(ScaleComponent::new("a", "a", 1.0)))
        .build();
    assert!(matches!(result, Err(SnowdriftError::DependencyCycle(_))));
}

#[test]
fn duplicate_outputs_are_rejected() {
    let result = EngineBuilder::new()
        .with_component(Arc::new(ScaleComponent::new("x", "a", 1.0)))
        .with_component(Arc::new(ScaleComponent::new("y", "a", 2.0)))
        .build();
    assert!(matches!(
        result,
        Err(SnowdriftError::DuplicateParameter(name)) if name == "a"
    ));
}
