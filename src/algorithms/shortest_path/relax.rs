//! The relaxation scaffold shared by the single-source algorithms.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::graph::{Graph, GraphEngine};
use crate::types::{Edge, GraphError, GraphResult, VertexId, INFINITY};

use super::super::weights::WeightFunction;

/// Distance estimates and predecessors for one source.
#[derive(Debug, Clone)]
pub struct Relaxation {
    source: VertexId,
    distances: IndexMap<VertexId, f64>,
    predecessors: HashMap<VertexId, VertexId>,
}

impl Relaxation {
    /// `d[source] = 0`, every other vertex at +inf, no predecessors.
    pub fn initialize<V, S: GraphEngine<V>>(graph: &Graph<V, S>, source: VertexId) -> GraphResult<Self> {
        if !graph.has_vertex(source) {
            return Err(GraphError::StartVertexNotFound(source));
        }
        let mut distances: IndexMap<VertexId, f64> =
            graph.vertex_ids().map(|v| (v, INFINITY)).collect();
        distances.insert(source, 0.0);
        Ok(Self {
            source,
            distances,
            predecessors: HashMap::new(),
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Current estimate for `v` (+inf if unknown).
    pub fn distance(&self, v: VertexId) -> f64 {
        self.distances.get(&v).copied().unwrap_or(INFINITY)
    }

    /// Improve `d[v]` through `u` if `d[u] + weight` is smaller.
    /// Returns whether it changed.
    pub fn relax(&mut self, u: VertexId, v: VertexId, weight: f64) -> bool {
        let du = self.distance(u);
        if du == INFINITY {
            return false;
        }
        let candidate = du + weight;
        if self.distance(v) > candidate {
            log::trace!("relax {} -> {}: {}", u, v, candidate);
            self.distances.insert(v, candidate);
            self.predecessors.insert(v, u);
            true
        } else {
            false
        }
    }

    /// Whether `d[v] > d[u] + weight` still holds.
    pub fn can_relax(&self, u: VertexId, v: VertexId, weight: f64) -> bool {
        let du = self.distance(u);
        du != INFINITY && self.distance(v) > du + weight
    }

    pub(crate) fn into_parts(self) -> (VertexId, IndexMap<VertexId, f64>, HashMap<VertexId, VertexId>) {
        (self.source, self.distances, self.predecessors)
    }
}

/// Weight of `edge` taken from `u` to its opposite endpoint: the weight
/// function's value if one is supplied, else the edge's own weight.
pub fn edge_weight(edge: &Edge, from: VertexId, weights: Option<&dyn WeightFunction>) -> GraphResult<(VertexId, f64)> {
    let to = edge.opposite(from).unwrap_or_else(|| edge.v2());
    let weight = match weights {
        Some(function) => function.weight(from, to)?,
        None => edge.weight(),
    };
    Ok((to, weight))
}
