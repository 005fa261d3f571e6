//! Bellman-Ford: negative weights allowed, negative cycles detected.

use crate::graph::{Graph, GraphEngine};
use crate::types::{EdgeDirection, GraphError, GraphResult, VertexId};

use super::super::require_direction;
use super::super::weights::WeightFunction;
use super::relax::{edge_weight, Relaxation};
use super::tree::ShortestPathsTree;

const ALGORITHM: &str = "bellman-ford";

/// Bellman-Ford from `source` using each edge's own weight.
pub fn bellman_ford<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    source: VertexId,
) -> GraphResult<ShortestPathsTree<V, S>> {
    run(graph, source, None)
}

/// Bellman-Ford from `source` with weights taken from `weights`.
pub fn bellman_ford_with<V: Clone, S: GraphEngine<V>>(
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

    let passes = graph.vertex_count().saturating_sub(1);
    for pass in 0..passes {
        let mut changed = false;
        for edge in graph.edges() {
            let (to, weight) = edge_weight(edge, edge.v1(), weights)?;
            changed |= relaxation.relax(edge.v1(), to, weight);
        }
        if !changed {
            log::trace!("{} converged after {} passes", ALGORITHM, pass + 1);
            break;
        }
    }

    for edge in graph.edges() {
        let (to, weight) = edge_weight(edge, edge.v1(), weights)?;
        if relaxation.can_relax(edge.v1(), to, weight) {
            log::warn!("{}: negative cycle through {}", ALGORITHM, edge.descriptor());
            return Err(GraphError::NegativeWeightCycle {
                algorithm: ALGORITHM,
            });
        }
    }

    ShortestPathsTree::from_relaxation(graph, ALGORITHM, relaxation)
}
