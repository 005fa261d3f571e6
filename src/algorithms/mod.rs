//! Graph algorithms.
//!
//! Every algorithm is a free function over `&Graph`: the input is never
//! mutated and results are independent values (often a fresh graph built on
//! the input's engine type).

pub mod all_pairs;
pub mod bfs;
pub mod dfs;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod topological;
pub mod transform;
pub mod weights;

pub use all_pairs::{
    all_pairs_shortest_paths, floyd_warshall, johnson, AllPairsAlgorithm, AllPairsShortestPaths,
};
pub use bfs::{breadth_first_search, BreadthFirstTree};
pub use dfs::{depth_first_search, dfs, DepthFirstForest, DfsOptions, EdgeClass};
pub use mst::{kruskal, minimum_spanning_tree, prim, MinSpanTreeAlgorithm};
pub use scc::strongly_connected_components;
pub use shortest_path::{
    bellman_ford, bellman_ford_with, dag_shortest_paths, dag_shortest_paths_with, dijkstra,
    dijkstra_with, single_source_shortest_paths, ShortestPathsTree, SingleSourceAlgorithm,
};
pub use topological::topological_sort;
pub use transform::{square, transitive_closure, transpose, undirected};
pub use weights::{EdgeFunction, WeightFunction};

use crate::graph::{Graph, GraphEngine};
use crate::types::{Capabilities, EdgeDirection, GraphError, GraphResult, VertexId};

/// Fail with `DirectionMismatch` unless `graph` has the `expected` direction.
pub(crate) fn require_direction<V, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    algorithm: &'static str,
    expected: EdgeDirection,
) -> GraphResult<()> {
    if graph.direction() != expected {
        log::warn!("{} refused a {} graph", algorithm, graph.direction());
        return Err(GraphError::DirectionMismatch {
            algorithm,
            expected,
        });
    }
    Ok(())
}

/// Materialize a predecessor subgraph.
///
/// The result is a simple graph of `direction` holding clones of `vertices`
/// and one edge `parent -> child` per `(parent, child)` pair, weighted like
/// the cheapest input edge joining them (or `DEFAULT_WEIGHT` when there is
/// none).
pub(crate) fn predecessor_subgraph<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    direction: EdgeDirection,
    vertices: impl IntoIterator<Item = VertexId>,
    tree_edges: impl IntoIterator<Item = (VertexId, VertexId)>,
) -> GraphResult<Graph<V, S>> {
    let mut tree = Graph::<V, S>::with_capabilities(Capabilities::new(direction, false, false));
    for id in vertices {
        if let Some(vertex) = graph.vertex(id) {
            tree.add_vertex(vertex.clone());
        }
    }
    for (parent, child) in tree_edges {
        let weight = cheapest_weight(graph, parent, child).unwrap_or(crate::types::DEFAULT_WEIGHT);
        let _ = tree.connect(parent, child, weight)?;
    }
    Ok(tree)
}

/// Minimum weight over the edges joining `from` to `to`.
pub(crate) fn cheapest_weight<V, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    from: VertexId,
    to: VertexId,
) -> Option<f64> {
    graph
        .engine()
        .presence(&graph.descriptor(from, to))
        .iter()
        .filter_map(|id| graph.edge(*id))
        .map(|edge| edge.weight())
        .min_by(|a, b| a.total_cmp(b))
}
