//! Structural transforms producing a new graph from an existing one.

use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::graph::{Graph, GraphEngine};
use crate::types::{Capabilities, Edge, EdgeDirection, GraphResult, DEFAULT_WEIGHT};

use super::require_direction;

fn copy_vertices<V: Clone, S: GraphEngine<V>>(from: &Graph<V, S>, to: &mut Graph<V, S>) {
    for vertex in from.vertices() {
        to.add_vertex(vertex.clone());
    }
}

/// Same vertices with every edge reversed. Edge ids, weights and tags are kept.
pub fn transpose<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<Graph<V, S>> {
    require_direction(graph, "transpose", EdgeDirection::Directed)?;

    let mut result = graph.clone_empty();
    copy_vertices(graph, &mut result);
    for edge in graph.edges() {
        let mut reversed = Edge::directed(edge.id(), edge.v2(), edge.v1(), edge.weight());
        reversed.set_tag(edge.tag().map(str::to_owned));
        let _ = result.add_edge(reversed)?;
    }
    Ok(result)
}

/// Simple undirected graph with an edge for every adjacent pair. Each
/// undirected edge takes the weight of the first input edge joining the pair;
/// self-loops are dropped.
pub fn undirected<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<Graph<V, S>> {
    let mut result = Graph::<V, S>::with_capabilities(Capabilities::simple());
    result.set_tag(graph.tag().map(str::to_owned));
    copy_vertices(graph, &mut result);
    for edge in graph.edges() {
        if edge.is_self_loop() {
            continue;
        }
        let _ = result.connect(edge.v1(), edge.v2(), edge.weight())?;
    }
    Ok(result)
}

/// The square graph G²: an edge `(v, w)` whenever some `u` gives a two-hop
/// path `v -> u -> w`. Policy is copied from the input, so pairs it refuses
/// (repeats in a simple graph, self-loops where disallowed) are skipped.
pub fn square<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<Graph<V, S>> {
    let mut result = graph.clone_empty();
    copy_vertices(graph, &mut result);
    for v in graph.vertex_ids() {
        for u in graph.neighbors(v).iter() {
            for w in graph.neighbors(u).iter() {
                let _ = result.connect(v, w, DEFAULT_WEIGHT)?;
            }
        }
    }
    log::debug!(
        "square: {} edges from {}",
        result.edge_count(),
        graph.edge_count()
    );
    Ok(result)
}

/// Transitive closure: the input edges plus `(i, j)` for every `j` reachable
/// from `i`. Each vertex reaches itself, so self pairs appear only when the
/// graph allows self-loops.
pub fn transitive_closure<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<Graph<V, S>> {
    require_direction(graph, "transitive closure", EdgeDirection::Directed)?;

    let mut result = graph.clone_empty();
    result.extend_from(graph)?;

    for source in graph.vertex_ids() {
        let mut reached: IndexSet<_> = IndexSet::new();
        let mut queue = VecDeque::from([source]);
        reached.insert(source);
        while let Some(u) = queue.pop_front() {
            for w in graph.neighbors(u).iter() {
                if reached.insert(w) {
                    queue.push_back(w);
                }
            }
        }
        for target in reached {
            if !result.has_edge(source, target) {
                let _ = result.connect(source, target, DEFAULT_WEIGHT)?;
            }
        }
    }
    Ok(result)
}
