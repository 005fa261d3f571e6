//! Topological sort of a directed acyclic graph.

use crate::graph::{Graph, GraphEngine};
use crate::types::{EdgeDirection, GraphError, GraphResult, VertexId};

use super::dfs::dfs;
use super::require_direction;

/// Order the vertices so every edge `(u, v)` has `u` before `v`.
///
/// The order is the reverse finish order of a depth-first search over the
/// vertices in insertion order. Fails with [`GraphError::NotADag`] if the
/// search finds a back edge.
pub fn topological_sort<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<Vec<VertexId>> {
    const ALGORITHM: &str = "topological sort";
    require_direction(graph, ALGORITHM, EdgeDirection::Directed)?;

    let forest = dfs(graph)?;
    if forest.contains_cycle() {
        log::warn!("{}: back edge found in a graph of {} vertices", ALGORITHM, graph.vertex_count());
        return Err(GraphError::NotADag {
            algorithm: ALGORITHM,
        });
    }
    Ok(forest.reverse_finish_order().to_vec())
}
