//! All-pairs shortest paths.

pub mod floyd_warshall;
pub mod johnson;
pub mod result;

pub use floyd_warshall::floyd_warshall;
pub use johnson::johnson;
pub use result::AllPairsShortestPaths;

use crate::graph::{Graph, GraphEngine};
use crate::types::GraphResult;

/// Selectable all-pairs algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllPairsAlgorithm {
    /// Dynamic programming over intermediate vertices, O(V³). Keeps predecessors.
    FloydWarshall,
    /// Reweighting plus one Dijkstra per vertex. Directed graphs only, no predecessors.
    Johnson,
}

impl AllPairsAlgorithm {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FloydWarshall => "floyd-warshall",
            Self::Johnson => "johnson",
        }
    }
}

impl std::fmt::Display for AllPairsAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AllPairsAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floyd-warshall" | "floyd_warshall" => Ok(Self::FloydWarshall),
            "johnson" => Ok(Self::Johnson),
            _ => Err(format!(
                "unknown all-pairs algorithm '{}' (expected floyd-warshall or johnson)",
                s
            )),
        }
    }
}

/// Run the chosen all-pairs algorithm.
pub fn all_pairs_shortest_paths<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    algorithm: AllPairsAlgorithm,
) -> GraphResult<AllPairsShortestPaths<V>> {
    match algorithm {
        AllPairsAlgorithm::FloydWarshall => floyd_warshall(graph),
        AllPairsAlgorithm::Johnson => johnson(graph),
    }
}
