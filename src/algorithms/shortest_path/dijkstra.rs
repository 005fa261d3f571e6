//! Dijkstra's algorithm over a binary heap.
//!
//! Stale heap entries are skipped on pop instead of decreasing keys in place.
//! Weights are assumed non-negative; this is not checked.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::graph::{Graph, GraphEngine};
use crate::types::{EdgeDirection, GraphResult, VertexId};

use super::super::require_direction;
use super::super::weights::WeightFunction;
use super::relax::{edge_weight, Relaxation};
use super::tree::ShortestPathsTree;

const ALGORITHM: &str = "dijkstra";

/// Min-heap entry ordered by distance, then by vertex id.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QueueEntry {
    pub(crate) distance: f64,
    pub(crate) vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Dijkstra from `source` using each edge's own weight.
pub fn dijkstra<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    source: VertexId,
) -> GraphResult<ShortestPathsTree<V, S>> {
    run(graph, source, None)
}

/// Dijkstra from `source` with weights taken from `weights`.
pub fn dijkstra_with<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    source: VertexId,
    weights: &dyn WeightFunction,
) -> GraphResult<ShortestPathsTree<V, S>> {
    run(graph, source, Some(weights))
}

fn run<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    source: VertexId,
    weights: Option<&dyn WeightFunction>,
) -> GraphResult<ShortestPathsTree<V, S>> {
    require_direction(graph, ALGORITHM, EdgeDirection::Directed)?;
    let mut relaxation = Relaxation::initialize(graph, source)?;

    let mut settled: HashSet<VertexId> = HashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        distance: 0.0,
        vertex: source,
    });

    while let Some(QueueEntry { distance, vertex: u }) = heap.pop() {
        if distance > relaxation.distance(u) || !settled.insert(u) {
            continue;
        }
        for edge in graph.incidence_out(u).iter() {
            let (to, weight) = edge_weight(edge, u, weights)?;
            if settled.contains(&to) {
                continue;
            }
            if relaxation.relax(u, to, weight) {
                heap.push(QueueEntry {
                    distance: relaxation.distance(to),
                    vertex: to,
                });
            }
        }
    }

    ShortestPathsTree::from_relaxation(graph, ALGORITHM, relaxation)
}
