//! Pluggable edge weights.

use std::collections::HashMap;

use crate::graph::{Graph, GraphEngine};
use crate::types::{GraphError, GraphResult, VertexId};

/// Source of edge weights that overrides an edge's own weight.
pub trait WeightFunction {
    /// Weight of the ordered pair `(from, to)`.
    fn weight(&self, from: VertexId, to: VertexId) -> GraphResult<f64>;
}

/// Explicit weight table keyed by ordered vertex pair.
///
/// Looking up a pair that was never set fails with
/// [`GraphError::MissingWeight`].
#[derive(Debug, Clone, Default)]
pub struct EdgeFunction {
    values: HashMap<(VertexId, VertexId), f64>,
}

impl EdgeFunction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the cheapest weight of every edge in `graph`. Undirected
    /// edges are entered under both orders.
    pub fn from_graph<V, S: GraphEngine<V>>(graph: &Graph<V, S>) -> Self {
        let mut table = Self::new();
        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            table.set_min(u, v, edge.weight());
            if !graph.is_directed() {
                table.set_min(v, u, edge.weight());
            }
        }
        table
    }

    /// Set the weight of `(from, to)`, returning the previous value.
    pub fn set(&mut self, from: VertexId, to: VertexId, weight: f64) -> Option<f64> {
        self.values.insert((from, to), weight)
    }

    /// Lower the weight of `(from, to)` to `weight` if it is smaller (or unset).
    pub fn set_min(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.values
            .entry((from, to))
            .and_modify(|current| *current = current.min(weight))
            .or_insert(weight);
    }

    pub fn get(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.values.get(&(from, to)).copied()
    }

    pub fn remove(&mut self, from: VertexId, to: VertexId) -> Option<f64> {
        self.values.remove(&(from, to))
    }

    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.values.contains_key(&(from, to))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl WeightFunction for EdgeFunction {
    fn weight(&self, from: VertexId, to: VertexId) -> GraphResult<f64> {
        self.get(from, to)
            .ok_or(GraphError::MissingWeight { from, to })
    }
}
