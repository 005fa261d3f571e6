//! Shortest-paths tree: the result of every single-source algorithm.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::{Graph, GraphEngine};
use crate::types::{EdgeDirection, GraphResult, VertexId, INFINITY};

use super::super::predecessor_subgraph;
use super::relax::Relaxation;

/// Distances and predecessors from one source, plus the tree they span.
#[derive(Debug, Clone)]
pub struct ShortestPathsTree<V, S> {
    algorithm: &'static str,
    source: VertexId,
    /// Every input vertex, +inf where unreached.
    distances: IndexMap<VertexId, f64>,
    predecessors: HashMap<VertexId, VertexId>,
    tree: Graph<V, S>,
}

/// One row of a serialized shortest-paths result.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceEntry {
    pub vertex: VertexId,
    pub distance: Option<f64>,
    pub predecessor: Option<VertexId>,
}

impl<V: Clone, S: GraphEngine<V>> ShortestPathsTree<V, S> {
    pub(crate) fn from_relaxation(
        graph: &Graph<V, S>,
        algorithm: &'static str,
        relaxation: Relaxation,
    ) -> GraphResult<Self> {
        let (source, distances, predecessors) = relaxation.into_parts();
        let reached = distances
            .iter()
            .filter(|(_, d)| **d != INFINITY)
            .map(|(v, _)| *v);
        let tree_edges = distances
            .keys()
            .filter_map(|v| predecessors.get(v).map(|parent| (*parent, *v)));
        let tree = predecessor_subgraph(graph, EdgeDirection::Directed, reached, tree_edges)?;
        log::debug!(
            "{} from {}: {} of {} vertices reachable",
            algorithm,
            source,
            tree.vertex_count(),
            distances.len()
        );
        Ok(Self {
            algorithm,
            source,
            distances,
            predecessors,
            tree,
        })
    }
}

impl<V, S: GraphEngine<V>> ShortestPathsTree<V, S> {
    /// Name of the algorithm that produced this result.
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance to `v`: +inf if unreachable, `None` if `v` was not
    /// in the graph.
    pub fn distance_of(&self, v: VertexId) -> Option<f64> {
        self.distances.get(&v).copied()
    }

    /// Predecessor of `v` on its shortest path.
    pub fn predecessor_of(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(&v).copied()
    }

    /// Vertices from the source to `target`; `None` if there is no path.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        match self.distance_of(target) {
            None => return None,
            Some(d) if d == INFINITY => return None,
            Some(_) => {}
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.predecessor_of(current) {
            // A predecessor chain longer than |V| would mean a corrupted result
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// `(vertex, distance)` for every input vertex, in insertion order.
    pub fn distances(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distances.iter().map(|(v, d)| (*v, *d))
    }

    /// Serializable rows; unreachable distances become `None`.
    pub fn entries(&self) -> Vec<DistanceEntry> {
        self.distances()
            .map(|(vertex, d)| DistanceEntry {
                vertex,
                distance: (d != INFINITY).then_some(d),
                predecessor: self.predecessor_of(vertex),
            })
            .collect()
    }

    /// The shortest-paths tree: a simple directed graph over the reachable
    /// vertices with one edge from each predecessor.
    pub fn tree(&self) -> &Graph<V, S> {
        &self.tree
    }

    pub fn into_tree(self) -> Graph<V, S> {
        self.tree
    }
}
