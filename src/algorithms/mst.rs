//! Minimum spanning trees (forests, on disconnected input) of undirected graphs.

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::collections::DisjointSet;
use crate::graph::{Graph, GraphEngine};
use crate::types::{Capabilities, Edge, EdgeDirection, GraphError, GraphResult, VertexId};

use super::require_direction;
use super::shortest_path::dijkstra::QueueEntry;

/// Selectable spanning-tree algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinSpanTreeAlgorithm {
    Kruskal,
    Prim,
}

impl MinSpanTreeAlgorithm {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl std::fmt::Display for MinSpanTreeAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for MinSpanTreeAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            _ => Err(format!(
                "unknown spanning-tree algorithm '{}' (expected kruskal or prim)",
                s
            )),
        }
    }
}

/// Run the chosen algorithm. Prim starts from the first vertex.
pub fn minimum_spanning_tree<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    algorithm: MinSpanTreeAlgorithm,
) -> GraphResult<Graph<V, S>> {
    match algorithm {
        MinSpanTreeAlgorithm::Kruskal => kruskal(graph),
        MinSpanTreeAlgorithm::Prim => match graph.vertex_ids().next() {
            Some(start) => prim(graph, start),
            None => {
                require_direction(graph, "prim", EdgeDirection::Undirected)?;
                Ok(spanning_skeleton(graph))
            }
        },
    }
}

/// Simple undirected graph holding a clone of every input vertex.
fn spanning_skeleton<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> Graph<V, S> {
    let mut forest = Graph::<V, S>::with_capabilities(Capabilities::simple());
    for vertex in graph.vertices() {
        forest.add_vertex(vertex.clone());
    }
    forest
}

fn add_forest_edge<V, S: GraphEngine<V>>(forest: &mut Graph<V, S>, edge: &Edge) -> GraphResult<()> {
    let mut copy = Edge::undirected(edge.id(), edge.v1(), edge.v2(), edge.weight());
    copy.set_tag(edge.tag().map(str::to_owned));
    let _ = forest.add_edge(copy)?;
    Ok(())
}

/// Kruskal: scan edges by non-decreasing weight (ties in insertion order),
/// keeping each edge that joins two different components.
pub fn kruskal<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<Graph<V, S>> {
    require_direction(graph, "kruskal", EdgeDirection::Undirected)?;

    let mut components: DisjointSet<VertexId> = DisjointSet::with_capacity(graph.vertex_count());
    for v in graph.vertex_ids() {
        components.make_set(v);
    }

    let mut edges: Vec<&Edge> = graph.edges().iter().collect();
    edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut forest = spanning_skeleton(graph);
    for edge in edges {
        if components.union(edge.v1(), edge.v2()) {
            add_forest_edge(&mut forest, edge)?;
        }
    }

    log::debug!(
        "kruskal kept {} of {} edges, weight {}",
        forest.edge_count(),
        graph.edge_count(),
        forest.total_weight()
    );
    Ok(forest)
}

/// Prim from `start`. When the start's component is exhausted, the next
/// unreached vertex (in insertion order) seeds a new tree.
///
/// Fails with [`GraphError::StartVertexNotFound`] if `start` is absent.
pub fn prim<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>, start: VertexId) -> GraphResult<Graph<V, S>> {
    require_direction(graph, "prim", EdgeDirection::Undirected)?;
    if !graph.has_vertex(start) {
        return Err(GraphError::StartVertexNotFound(start));
    }

    let mut forest = spanning_skeleton(graph);
    let mut in_tree: HashSet<VertexId> = HashSet::new();
    let mut key: HashMap<VertexId, f64> = HashMap::new();
    let mut via: HashMap<VertexId, &Edge> = HashMap::new();

    let seeds = std::iter::once(start).chain(graph.vertex_ids());
    for seed in seeds {
        if in_tree.contains(&seed) {
            continue;
        }
        let mut heap = BinaryHeap::new();
        key.insert(seed, 0.0);
        heap.push(QueueEntry {
            distance: 0.0,
            vertex: seed,
        });

        while let Some(QueueEntry { distance, vertex: u }) = heap.pop() {
            if in_tree.contains(&u) || key.get(&u).is_some_and(|k| distance > *k) {
                continue;
            }
            in_tree.insert(u);
            if let Some(edge) = via.get(&u) {
                add_forest_edge(&mut forest, edge)?;
            }

            for edge in graph.incidence_out(u).iter() {
                let Some(w) = edge.opposite(u) else {
                    continue;
                };
                if in_tree.contains(&w) {
                    continue;
                }
                let improves = key.get(&w).map_or(true, |k| edge.weight() < *k);
                if improves {
                    key.insert(w, edge.weight());
                    via.insert(w, edge);
                    heap.push(QueueEntry {
                        distance: edge.weight(),
                        vertex: w,
                    });
                }
            }
        }
    }

    log::debug!(
        "prim from {} kept {} edges, weight {}",
        start,
        forest.edge_count(),
        forest.total_weight()
    );
    Ok(forest)
}
