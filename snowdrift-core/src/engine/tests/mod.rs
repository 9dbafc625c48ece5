//! Integration tests for the engine module.
//!
//! These tests verify engine building and step-by-step execution using the
//! components in `example_components`.

#[cfg(test)]
mod basic;
#[cfg(test)]
mod ordering;
