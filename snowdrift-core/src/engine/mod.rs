//! An engine solves a set of coupled components step by step through time.
//!
//! Each component produces one derived parameter. Within a step, components are
//! solved in the order of their same-step dependencies, so a component reading
//! another's output at the current step always runs after it. Components may
//! also read any parameter at the previous step, including their own output,
//! which is how the recurrences carry state forward.
//!
//! Steps are solved strictly in ascending order. Every solved grid is appended
//! to the dataset and kept for the rest of the run.

mod builder;
mod runtime;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use runtime::Engine;

use crate::component::Component;
use std::sync::Arc;

/// Type alias for a component wrapped in an Arc for shared ownership.
pub type C = Arc<dyn Component>;
