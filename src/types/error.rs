//! Error types for the erdos library.

use thiserror::Error;

use super::{EdgeDirection, VertexId};

/// All errors that can occur in the erdos library.
///
/// Policy rejections on edge insertion are deliberately absent: they are an
/// expected outcome and are reported through
/// [`EdgeInsertion::Rejected`](crate::graph::EdgeInsertion::Rejected).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge endpoint (or other referenced vertex) is not in the graph.
    #[error("Vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    /// The start vertex handed to an algorithm is not in the graph.
    #[error("Start vertex {0} not found in graph")]
    StartVertexNotFound(VertexId),

    /// The algorithm only runs on graphs of one direction.
    #[error("{algorithm} requires a {expected} graph")]
    DirectionMismatch {
        algorithm: &'static str,
        expected: EdgeDirection,
    },

    /// A caller-supplied DFS visit order names a vertex outside the graph.
    #[error("Visit subset contains vertex {0} which is not in the graph")]
    InvalidVisitSubset(VertexId),

    /// Multi-edge enumeration/removal on a graph without multi-edge support.
    #[error("Graph does not support multi-edges")]
    MultiEdgesUnsupported,

    /// A reachable cycle has negative total weight.
    #[error("{algorithm}: graph contains a negative-weight cycle")]
    NegativeWeightCycle { algorithm: &'static str },

    /// A cycle was found where a directed acyclic graph is required.
    #[error("{algorithm}: graph is not a directed acyclic graph")]
    NotADag { algorithm: &'static str },

    /// Johnson reweighting produced a negative edge (internal inconsistency).
    #[error("Reweighted edge {from}->{to} is negative: {weight}")]
    NegativeReweightedEdge {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    /// A weight lookup found no value for the ordered pair.
    #[error("No weight for edge {from}->{to}")]
    MissingWeight { from: VertexId, to: VertexId },

    /// The result was computed without predecessor data.
    #[error("{algorithm} result carries no predecessor data")]
    PredecessorsUnavailable { algorithm: &'static str },
}

/// Convenience result type for erdos operations.
pub type GraphResult<T> = Result<T, GraphError>;
