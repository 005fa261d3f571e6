//! Strongly connected components (Kosaraju).

use indexmap::IndexSet;

use crate::collections::DisjointSet;
use crate::graph::{Graph, GraphEngine};
use crate::types::{EdgeDirection, GraphResult, VertexId};

use super::dfs::{depth_first_search, dfs, DfsOptions};
use super::require_direction;
use super::transform::transpose;

/// Partition the vertices of a directed graph into strongly connected
/// components.
///
/// A first search records finish order; a second search over the transpose,
/// starting trees in decreasing finish order, discovers exactly one component
/// per tree. Components are listed in the order the second search found
/// them.
pub fn strongly_connected_components<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
) -> GraphResult<Vec<IndexSet<VertexId>>> {
    require_direction(graph, "strongly connected components", EdgeDirection::Directed)?;

    let first = dfs(graph)?;
    let order = first.reverse_finish_order().to_vec();
    let transposed = transpose(graph)?;
    let second = depth_first_search(&transposed, &DfsOptions::new().visit_order(order.clone()))?;

    let mut components: DisjointSet<VertexId> = DisjointSet::with_capacity(order.len());
    for &v in &order {
        components.make_set(v);
    }
    for &v in &order {
        if let Some(parent) = second.predecessor_of(v) {
            components.union(v, parent);
        }
    }

    let sets: Vec<IndexSet<VertexId>> = components
        .disjoint_sets()
        .into_iter()
        .map(|set| set.into_iter().collect())
        .collect();
    log::debug!(
        "scc: {} components over {} vertices",
        sets.len(),
        graph.vertex_count()
    );
    Ok(sets)
}
