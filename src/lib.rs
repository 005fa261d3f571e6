//! Erdos: an in-memory graph toolkit.
//!
//! Graphs are stored behind a pluggable engine with adjacency, incidence and
//! presence indices, and carry a policy (direction, parallel edges,
//! self-loops) fixed at construction. The algorithms cover traversal,
//! single-source and all-pairs shortest paths, minimum spanning trees,
//! strongly connected components and topological sorting.

pub mod algorithms;
pub mod cli;
pub mod collections;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algorithms::{
    AllPairsAlgorithm, AllPairsShortestPaths, BreadthFirstTree, DepthFirstForest, DfsOptions,
    EdgeClass, EdgeFunction, MinSpanTreeAlgorithm, ShortestPathsTree, SingleSourceAlgorithm,
    WeightFunction,
};
pub use collections::DisjointSet;
pub use graph::{
    AdjIncidenceEngine, EdgeInsertion, Graph, GraphBuilder, GraphEngine, Rejection, VertexIndex,
};
pub use types::{
    Capabilities, Edge, EdgeDescriptor, EdgeDirection, EdgeId, GraphError, GraphResult,
    IdGenerator, Vertex, VertexId, DEFAULT_WEIGHT, INFINITY,
};
