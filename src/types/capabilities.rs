//! Graph policy: direction, multi-edge and self-loop support.

use serde::{Deserialize, Serialize};

/// Direction of an edge, and of every edge a graph accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// `v1 -> v2`.
    Directed,
    /// `v1 <-> v2`.
    Undirected,
}

impl EdgeDirection {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The capability descriptor a graph is constructed with.
///
/// Every graph variant (simple, multi, pseudo; directed or not) is one
/// `Graph` carrying one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Direction of every edge in the graph.
    pub direction: EdgeDirection,
    /// Whether several edges may share a descriptor.
    #[serde(default)]
    pub allow_multi_edges: bool,
    /// Whether an edge may join a vertex to itself.
    #[serde(default)]
    pub allow_self_loops: bool,
}

impl Capabilities {
    /// Build a descriptor from its parts.
    pub const fn new(direction: EdgeDirection, allow_multi_edges: bool, allow_self_loops: bool) -> Self {
        Self {
            direction,
            allow_multi_edges,
            allow_self_loops,
        }
    }

    /// Directed, no parallel edges, no self-loops.
    pub const fn simple_directed() -> Self {
        Self::new(EdgeDirection::Directed, false, false)
    }

    /// Directed, parallel edges and self-loops allowed.
    pub const fn directed_pseudo() -> Self {
        Self::new(EdgeDirection::Directed, true, true)
    }

    /// Undirected, no parallel edges, no self-loops.
    pub const fn simple() -> Self {
        Self::new(EdgeDirection::Undirected, false, false)
    }

    /// Undirected, parallel edges allowed, no self-loops.
    pub const fn multi() -> Self {
        Self::new(EdgeDirection::Undirected, true, false)
    }

    /// Undirected, parallel edges and self-loops allowed.
    pub const fn pseudo() -> Self {
        Self::new(EdgeDirection::Undirected, true, true)
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.direction == EdgeDirection::Directed
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::simple_directed()
    }
}
