//! Engine builder for ordering components by their same-step dependencies.

use crate::component::{Component, RequirementDefinition};
use crate::errors::{SnowdriftError, SnowdriftResult};
use petgraph::algo::{kosaraju_scc, toposort};
use petgraph::graph::NodeIndex;
use petgraph::Graph;
use std::collections::HashMap;
use std::sync::Arc;

use super::runtime::Engine;
use super::C;

/// Build a new engine from a set of components.
///
/// The builder generates a graph whose edges link the producer of a parameter
/// to every component reading that parameter at the same step. A topological
/// sort of this graph defines the order in which components are solved.
/// Previous-step reads add no edges, as they are always satisfied by the time
/// a step starts.
#[derive(Default)]
pub struct EngineBuilder {
    components: Vec<C>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self { components: vec![] }
    }

    /// Register a component with the builder.
    pub fn with_component(&mut self, component: Arc<dyn Component>) -> &mut Self {
        self.components.push(component);
        self
    }

    /// Build the engine.
    ///
    /// Fails if a component does not declare exactly one output, if two
    /// components produce the same parameter or if the same-step dependencies
    /// form a cycle.
    pub fn build(&self) -> SnowdriftResult<Engine> {
        let mut graph: Graph<C, RequirementDefinition> = Graph::new();
        let mut producers: HashMap<String, NodeIndex> = HashMap::new();

        for component in &self.components {
            let output = single_output(component)?;
            let node = graph.add_node(Arc::clone(component));
            if producers.insert(output.name.clone(), node).is_some() {
                return Err(SnowdriftError::DuplicateParameter(output.name));
            }
        }

        for consumer in graph.node_indices().collect::<Vec<_>>() {
            for requirement in graph[consumer].inputs() {
                if let Some(&producer) = producers.get(&requirement.name) {
                    graph.add_edge(producer, consumer, requirement);
                }
            }
        }

        let order = toposort(&graph, None).map_err(|cycle| {
            let members = kosaraju_scc(&graph)
                .into_iter()
                .find(|scc| scc.contains(&cycle.node_id()))
                .unwrap_or_else(|| vec![cycle.node_id()]);
            SnowdriftError::DependencyCycle(
                members
                    .iter()
                    .filter_map(|node| graph[*node].outputs().into_iter().next())
                    .map(|definition| definition.name)
                    .collect(),
            )
        })?;

        Ok(Engine::new(
            order
                .into_iter()
                .map(|node| Arc::clone(&graph[node]))
                .collect(),
        ))
    }
}

fn single_output(component: &C) -> SnowdriftResult<RequirementDefinition> {
    let mut outputs = component.outputs();
    match outputs.len() {
        1 => Ok(outputs.remove(0)),
        n => Err(SnowdriftError::InvalidConfig(format!(
            "component {component:?} must declare exactly one output, found {n}"
        ))),
    }
}
