//! Breadth-first search from a single source.

use std::collections::{HashMap, VecDeque};

use indexmap::IndexMap;

use crate::graph::{Graph, GraphEngine};
use crate::types::{GraphError, GraphResult, VertexId};

use super::predecessor_subgraph;

/// Result of a breadth-first search: hop distances, predecessors and the
/// breadth-first tree itself. Only vertices reached from the source appear.
#[derive(Debug, Clone)]
pub struct BreadthFirstTree<V, S> {
    source: VertexId,
    /// Hop counts in discovery order.
    distances: IndexMap<VertexId, usize>,
    predecessors: HashMap<VertexId, VertexId>,
    tree: Graph<V, S>,
}

impl<V, S: GraphEngine<V>> BreadthFirstTree<V, S> {
    /// The search source.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of edges on the shortest path from the source, if reached.
    pub fn distance_of(&self, v: VertexId) -> Option<usize> {
        self.distances.get(&v).copied()
    }

    /// The vertex that discovered `v`. `None` for the source and unreached vertices.
    pub fn predecessor_of(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(&v).copied()
    }

    /// Reached vertices in discovery order.
    pub fn discovery_order(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.distances.keys().copied()
    }

    /// Whether `v` was reached.
    pub fn reached(&self, v: VertexId) -> bool {
        self.distances.contains_key(&v)
    }

    /// Vertices from the source to `target`, or `None` if unreached.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.reached(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.predecessor_of(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// The breadth-first tree (same direction as the input).
    pub fn graph(&self) -> &Graph<V, S> {
        &self.tree
    }

    /// Take the breadth-first tree.
    pub fn into_graph(self) -> Graph<V, S> {
        self.tree
    }
}

/// Breadth-first search from `source`.
///
/// Fails with [`GraphError::StartVertexNotFound`] if `source` is absent.
pub fn breadth_first_search<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    source: VertexId,
) -> GraphResult<BreadthFirstTree<V, S>> {
    if !graph.has_vertex(source) {
        return Err(GraphError::StartVertexNotFound(source));
    }

    let mut distances: IndexMap<VertexId, usize> = IndexMap::new();
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    distances.insert(source, 0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let depth = distances.get(&current).copied().unwrap_or(0);
        for neighbor in graph.neighbors(current).iter() {
            if distances.contains_key(&neighbor) {
                continue;
            }
            distances.insert(neighbor, depth + 1);
            predecessors.insert(neighbor, current);
            queue.push_back(neighbor);
        }
    }

    log::debug!(
        "bfs from {} reached {} of {} vertices",
        source,
        distances.len(),
        graph.vertex_count()
    );

    let tree_edges = distances
        .keys()
        .filter_map(|v| predecessors.get(v).map(|parent| (*parent, *v)));
    let tree = predecessor_subgraph(graph, graph.direction(), distances.keys().copied(), tree_edges)?;

    Ok(BreadthFirstTree {
        source,
        distances,
        predecessors,
        tree,
    })
}
