//! Single-source shortest paths.

pub mod bellman_ford;
pub mod dag;
pub mod dijkstra;
pub mod relax;
pub mod tree;

pub use bellman_ford::{bellman_ford, bellman_ford_with};
pub use dag::{dag_shortest_paths, dag_shortest_paths_with};
pub use dijkstra::{dijkstra, dijkstra_with};
pub use tree::ShortestPathsTree;

use crate::graph::{Graph, GraphEngine};
use crate::types::{GraphResult, VertexId};

/// Selectable single-source algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleSourceAlgorithm {
    /// Handles negative weights, detects negative cycles.
    BellmanFord,
    /// Relaxation in topological order; acyclic graphs only.
    Dag,
    /// Binary-heap Dijkstra; non-negative weights.
    Dijkstra,
}

impl SingleSourceAlgorithm {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BellmanFord => "bellman-ford",
            Self::Dag => "dag",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl std::fmt::Display for SingleSourceAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SingleSourceAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bellman-ford" | "bellman_ford" => Ok(Self::BellmanFord),
            "dag" => Ok(Self::Dag),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(format!(
                "unknown single-source algorithm '{}' (expected bellman-ford, dag or dijkstra)",
                s
            )),
        }
    }
}

/// Run the chosen algorithm from `source` using intrinsic edge weights.
pub fn single_source_shortest_paths<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    source: VertexId,
    algorithm: SingleSourceAlgorithm,
) -> GraphResult<ShortestPathsTree<V, S>> {
    match algorithm {
        SingleSourceAlgorithm::BellmanFord => bellman_ford(graph, source),
        SingleSourceAlgorithm::Dag => dag_shortest_paths(graph, source),
        SingleSourceAlgorithm::Dijkstra => dijkstra(graph, source),
    }
}
