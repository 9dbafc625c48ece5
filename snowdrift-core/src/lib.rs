pub mod assembly;
pub mod component;
pub mod config;
pub mod dataset;
pub mod engine;
mod example_components;
pub mod grid;
pub mod parameter;
pub mod predicates;
pub mod resolver;
pub mod standard_parameters;
pub mod summary;
pub mod validation;

pub mod errors;
