//! Vertex and edge identifiers, and the per-graph generator that hands them out.

use serde::Serialize;

/// Immutable vertex identity. Equality and hashing of vertices derive from it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Immutable edge identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Hands out fresh vertex and edge ids for one graph.
///
/// Ids that enter the graph from elsewhere are reported through
/// [`observe_vertex`](Self::observe_vertex) / [`observe_edge`](Self::observe_edge)
/// so the generator never reissues them.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next_vertex: u64,
    next_edge: u64,
}

impl IdGenerator {
    /// Create a generator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next vertex id.
    pub fn next_vertex_id(&mut self) -> VertexId {
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        id
    }

    /// Allocate the next edge id.
    pub fn next_edge_id(&mut self) -> EdgeId {
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        id
    }

    /// Record an externally assigned vertex id.
    pub fn observe_vertex(&mut self, id: VertexId) {
        self.next_vertex = self.next_vertex.max(id.0 + 1);
    }

    /// Record an externally assigned edge id.
    pub fn observe_edge(&mut self, id: EdgeId) {
        self.next_edge = self.next_edge.max(id.0 + 1);
    }

    /// Restart both counters at zero.
    pub fn reset(&mut self) {
        self.next_vertex = 0;
        self.next_edge = 0;
    }
}
