//! Graph storage engines: the indices behind a [`Graph`](super::Graph).

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use crate::types::{
    Capabilities, Edge, EdgeDescriptor, EdgeDirection, EdgeId, GraphError, GraphResult, Vertex,
    VertexId,
};

/// Why an edge insertion was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// An edge with the same descriptor (or id) exists and multi-edges are off.
    DuplicateEdge,
    /// The edge is a self-loop and self-loops are off.
    SelfLoop,
    /// The edge direction differs from the graph direction.
    DirectionMismatch,
}

impl Rejection {
    /// Return a human-readable name for this rejection.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuplicateEdge => "duplicate_edge",
            Self::SelfLoop => "self_loop",
            Self::DirectionMismatch => "direction_mismatch",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of an edge insertion that did not fault.
///
/// A rejection is an expected result of the graph's policy, not an error;
/// callers must check which variant they got.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// The edge is now in every index.
    Added(EdgeId),
    /// Nothing changed.
    Rejected(Rejection),
}

impl EdgeInsertion {
    /// Whether the edge was stored.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// Id of the stored edge, if it was stored.
    pub fn edge_id(&self) -> Option<EdgeId> {
        match self {
            Self::Added(id) => Some(*id),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if it was refused.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Added(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Storage behind a graph.
///
/// Implementations own every index and keep them consistent: an edge is in
/// the edge index iff it is in the presence list of its descriptor, in both
/// endpoints' incidence sets and reflected in both endpoints' adjacency.
/// Read access hands out the indices themselves; all mutation goes through
/// the methods below.
pub trait GraphEngine<V> {
    /// Create an empty engine enforcing `capabilities`.
    fn new(capabilities: Capabilities) -> Self
    where
        Self: Sized;

    /// The policy this engine enforces.
    fn capabilities(&self) -> Capabilities;

    /// Vertex index, in insertion order.
    fn vertices(&self) -> &IndexMap<VertexId, Vertex<V>>;

    /// Mutable access to one vertex's tag and payload.
    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V>>;

    /// Edge index, in insertion order.
    fn edges(&self) -> &IndexMap<EdgeId, Edge>;

    /// Mutable access to one edge's weight and tag.
    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge>;

    /// Adjacency set of `v`.
    fn neighbors(&self, v: VertexId) -> Option<&IndexSet<VertexId>>;

    /// Outgoing incidence set of `v` (all incident edges when undirected).
    fn incidence_out(&self, v: VertexId) -> Option<&IndexSet<EdgeId>>;

    /// Incoming incidence set of `v` (all incident edges when undirected).
    fn incidence_in(&self, v: VertexId) -> Option<&IndexSet<EdgeId>>;

    /// Edges sharing `descriptor`, earliest first.
    fn presence(&self, descriptor: &EdgeDescriptor) -> &[EdgeId];

    /// Register a vertex. Returns `false` and changes nothing if its id is present.
    fn add_vertex(&mut self, vertex: Vertex<V>) -> bool;

    /// Remove a vertex after removing every incident edge.
    fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<V>>;

    /// Insert an edge, subject to the engine's policy.
    fn add_edge(&mut self, edge: Edge) -> GraphResult<EdgeInsertion>;

    /// Remove an edge from every index.
    fn remove_edge(&mut self, id: EdgeId) -> Option<Edge>;

    /// Drop every vertex and edge.
    fn clear(&mut self);
}

/// Adjacency + incidence + presence engine.
///
/// Undirected graphs keep a single incidence map that serves as both the
/// outgoing and the incoming index.
#[derive(Debug, Clone)]
pub struct AdjIncidenceEngine<V = ()> {
    capabilities: Capabilities,
    /// Vertex index.
    vertices: IndexMap<VertexId, Vertex<V>>,
    /// Edge index.
    edges: IndexMap<EdgeId, Edge>,
    /// Adjacency index: vertex -> neighbor set.
    adjacency: HashMap<VertexId, IndexSet<VertexId>>,
    /// Outgoing incidence (all incidence when undirected).
    out_edges: HashMap<VertexId, IndexSet<EdgeId>>,
    /// Incoming incidence. Unused when undirected.
    in_edges: HashMap<VertexId, IndexSet<EdgeId>>,
    /// Presence index: descriptor -> edges in insertion order.
    presence: HashMap<EdgeDescriptor, Vec<EdgeId>>,
}

impl<V> AdjIncidenceEngine<V> {
    fn is_undirected(&self) -> bool {
        self.capabilities.direction == EdgeDirection::Undirected
    }

    fn in_map(&self) -> &HashMap<VertexId, IndexSet<EdgeId>> {
        if self.is_undirected() {
            &self.out_edges
        } else {
            &self.in_edges
        }
    }

    fn in_map_mut(&mut self) -> &mut HashMap<VertexId, IndexSet<EdgeId>> {
        if self.is_undirected() {
            &mut self.out_edges
        } else {
            &mut self.in_edges
        }
    }

    fn check_policy(&self, edge: &Edge) -> Option<Rejection> {
        if edge.direction() != self.capabilities.direction {
            return Some(Rejection::DirectionMismatch);
        }
        if self.edges.contains_key(&edge.id()) {
            return Some(Rejection::DuplicateEdge);
        }
        if edge.is_self_loop() && !self.capabilities.allow_self_loops {
            return Some(Rejection::SelfLoop);
        }
        if !self.capabilities.allow_multi_edges && !self.presence(&edge.descriptor()).is_empty() {
            return Some(Rejection::DuplicateEdge);
        }
        None
    }
}

impl<V> GraphEngine<V> for AdjIncidenceEngine<V> {
    fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            adjacency: HashMap::new(),
            out_edges: HashMap::new(),
            in_edges: HashMap::new(),
            presence: HashMap::new(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn vertices(&self) -> &IndexMap<VertexId, Vertex<V>> {
        &self.vertices
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(&id)
    }

    fn edges(&self) -> &IndexMap<EdgeId, Edge> {
        &self.edges
    }

    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    fn neighbors(&self, v: VertexId) -> Option<&IndexSet<VertexId>> {
        self.adjacency.get(&v)
    }

    fn incidence_out(&self, v: VertexId) -> Option<&IndexSet<EdgeId>> {
        self.out_edges.get(&v)
    }

    fn incidence_in(&self, v: VertexId) -> Option<&IndexSet<EdgeId>> {
        self.in_map().get(&v)
    }

    fn presence(&self, descriptor: &EdgeDescriptor) -> &[EdgeId] {
        self.presence
            .get(descriptor)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    fn add_vertex(&mut self, vertex: Vertex<V>) -> bool {
        let id = vertex.id();
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, IndexSet::new());
        self.out_edges.insert(id, IndexSet::new());
        if !self.is_undirected() {
            self.in_edges.insert(id, IndexSet::new());
        }
        self.vertices.insert(id, vertex);
        true
    }

    fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<V>> {
        if !self.vertices.contains_key(&id) {
            return None;
        }

        // Remove all edges touching this vertex through the normal edge path
        let mut incident: IndexSet<EdgeId> = IndexSet::new();
        if let Some(out) = self.out_edges.get(&id) {
            incident.extend(out.iter().copied());
        }
        if let Some(inc) = self.in_map().get(&id) {
            incident.extend(inc.iter().copied());
        }
        for edge_id in incident {
            self.remove_edge(edge_id);
        }

        self.adjacency.remove(&id);
        self.out_edges.remove(&id);
        self.in_edges.remove(&id);
        self.vertices.shift_remove(&id)
    }

    fn add_edge(&mut self, edge: Edge) -> GraphResult<EdgeInsertion> {
        let (v1, v2) = edge.endpoints();

        // Validate: both endpoints exist
        if !self.vertices.contains_key(&v1) {
            return Err(GraphError::VertexNotFound(v1));
        }
        if !self.vertices.contains_key(&v2) {
            return Err(GraphError::VertexNotFound(v2));
        }

        if let Some(reason) = self.check_policy(&edge) {
            return Ok(EdgeInsertion::Rejected(reason));
        }

        let id = edge.id();
        let undirected = self.is_undirected();

        // Adjacency
        self.adjacency.entry(v1).or_default().insert(v2);
        if undirected {
            self.adjacency.entry(v2).or_default().insert(v1);
        }

        // Presence
        self.presence.entry(edge.descriptor()).or_default().push(id);

        // Incidence
        self.out_edges.entry(v1).or_default().insert(id);
        self.in_map_mut().entry(v2).or_default().insert(id);

        self.edges.insert(id, edge);
        Ok(EdgeInsertion::Added(id))
    }

    fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.shift_remove(&id)?;
        let (v1, v2) = edge.endpoints();
        let descriptor = edge.descriptor();

        // Presence; adjacency survives while a parallel edge remains
        let mut last_of_descriptor = true;
        if let Some(list) = self.presence.get_mut(&descriptor) {
            list.retain(|other| *other != id);
            last_of_descriptor = list.is_empty();
            if last_of_descriptor {
                self.presence.remove(&descriptor);
            }
        }

        if last_of_descriptor {
            if let Some(adj) = self.adjacency.get_mut(&v1) {
                adj.shift_remove(&v2);
            }
            if self.is_undirected() {
                if let Some(adj) = self.adjacency.get_mut(&v2) {
                    adj.shift_remove(&v1);
                }
            }
        }

        if let Some(out) = self.out_edges.get_mut(&v1) {
            out.shift_remove(&id);
        }
        if let Some(inc) = self.in_map_mut().get_mut(&v2) {
            inc.shift_remove(&id);
        }

        Some(edge)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.out_edges.clear();
        self.in_edges.clear();
        self.presence.clear();
    }
}
