use crate::grid::Time;
use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum SnowdriftError {
    #[error("Missing parameter '{parameter}'. Requires one of: {}", .alternatives.join(", "))]
    MissingParameter {
        parameter: String,
        alternatives: Vec<String>,
    },
    #[error("Inconsistent number of parameter steps found: {}", format_counts(.counts))]
    InconsistentStepCount { counts: Vec<(String, usize)> },
    #[error("Time steps don't match across parameters at step {step}: {}", .parameters.join(", "))]
    InconsistentTimestamp {
        step: usize,
        parameters: Vec<String>,
    },
    #[error("Grid shape mismatch for '{parameter}'. Expected {expected:?}, got {found:?}")]
    ShapeMismatch {
        parameter: String,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("Unit mismatch for '{parameter}'. Expected {expected}, got {found}")]
    UnitMismatch {
        parameter: String,
        expected: String,
        found: String,
    },
    #[error("Step {step} of '{parameter}' requested but only {available} step(s) are available")]
    Sequencing {
        parameter: String,
        step: usize,
        available: usize,
    },
    #[error("Parameter '{parameter}' has more than one step at {time}")]
    DuplicateStep { parameter: String, time: Time },
    #[error("Parameter '{0}' already exists")]
    DuplicateParameter(String),
    #[error("Elapsed time before step {step} is not positive")]
    InvalidTimeStep { step: usize },
    #[error("Components have cyclic same-step dependencies: {}", .0.join(" -> "))]
    DependencyCycle(Vec<String>),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_counts(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .map(|(name, n)| format!("{name}={n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type for `Result<T, SnowdriftError>`.
pub type SnowdriftResult<T> = Result<T, SnowdriftError>;
