//! Snowdrift components, input derivations and the end-to-end pipeline.

pub mod components;
pub mod derivations;
pub mod output;
pub mod pipeline;

#[cfg(test)]
mod testing;
