//! Shortest paths in a directed acyclic graph by relaxing in topological order.

use crate::graph::{Graph, GraphEngine};
use crate::types::{EdgeDirection, GraphResult, VertexId};

use super::super::require_direction;
use super::super::topological::topological_sort;
use super::super::weights::WeightFunction;
use super::relax::{edge_weight, Relaxation};
use super::tree::ShortestPathsTree;

const ALGORITHM: &str = "dag shortest paths";

/// DAG shortest paths from `source` using each edge's own weight.
pub fn dag_shortest_paths<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    source: VertexId,
) -> GraphResult<ShortestPathsTree<V, S>> {
    run(graph, source, None)
}

/// DAG shortest paths from `source` with weights taken from `weights`.
pub fn dag_shortest_paths_with<V: Clone, S: GraphEngine<V>>(
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

    for u in topological_sort(graph)? {
        for edge in graph.incidence_out(u).iter() {
            let (to, weight) = edge_weight(edge, u, weights)?;
            relaxation.relax(u, to, weight);
        }
    }

    ShortestPathsTree::from_relaxation(graph, ALGORITHM, relaxation)
}
