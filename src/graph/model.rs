//! The graph facade: identity, policy and id generation over a storage engine.

use std::marker::PhantomData;

use crate::types::{
    Capabilities, Edge, EdgeDescriptor, EdgeDirection, EdgeId, GraphError, GraphResult,
    IdGenerator, Vertex, VertexId,
};

use super::engine::{AdjIncidenceEngine, EdgeInsertion, GraphEngine};
use super::views::{EdgesMut, EdgesView, IncidenceView, NeighborsView, VerticesMut, VerticesView};

/// A mutable graph over vertices carrying payloads of type `V`.
///
/// Direction, multi-edge and self-loop policy come from the [`Capabilities`]
/// the graph was built with; storage is delegated to the engine `S`.
#[derive(Debug, Clone)]
pub struct Graph<V = (), S = AdjIncidenceEngine<V>> {
    id: Option<String>,
    tag: Option<String>,
    ids: IdGenerator,
    engine: S,
    _payload: PhantomData<fn() -> V>,
}

impl<V> Graph<V, AdjIncidenceEngine<V>> {
    /// Create an empty graph on the default engine.
    pub fn new(capabilities: Capabilities) -> Self {
        Self::with_capabilities(capabilities)
    }

    /// Simple directed graph: no parallel edges, no self-loops.
    pub fn directed() -> Self {
        Self::new(Capabilities::simple_directed())
    }

    /// Simple undirected graph: no parallel edges, no self-loops.
    pub fn undirected() -> Self {
        Self::new(Capabilities::simple())
    }
}

impl<V, S: GraphEngine<V>> Graph<V, S> {
    /// Create an empty graph on engine `S`.
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self::from_engine(S::new(capabilities))
    }

    /// Wrap an engine. Ids already stored in it are never reissued.
    pub fn from_engine(engine: S) -> Self {
        let mut ids = IdGenerator::new();
        for id in engine.vertices().keys() {
            ids.observe_vertex(*id);
        }
        for id in engine.edges().keys() {
            ids.observe_edge(*id);
        }
        Self {
            id: None,
            tag: None,
            ids,
            engine,
            _payload: PhantomData,
        }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &S {
        &self.engine
    }

    /// The policy this graph enforces.
    pub fn capabilities(&self) -> Capabilities {
        self.engine.capabilities()
    }

    /// Direction of every edge.
    pub fn direction(&self) -> EdgeDirection {
        self.capabilities().direction
    }

    /// Whether edges are directed.
    pub fn is_directed(&self) -> bool {
        self.capabilities().is_directed()
    }

    /// Whether parallel edges are accepted.
    pub fn allows_multi_edges(&self) -> bool {
        self.capabilities().allow_multi_edges
    }

    /// Whether self-loops are accepted.
    pub fn allows_self_loops(&self) -> bool {
        self.capabilities().allow_self_loops
    }

    /// Caller-assigned graph identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the graph identifier.
    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Display tag.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Set the display tag.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }

    /// The id generator (e.g. to reset it between test cases).
    pub fn id_generator_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    // ==================== Vertices ====================

    /// Create a vertex with a fresh id and add it.
    pub fn create_vertex(&mut self, data: V) -> VertexId {
        let id = self.fresh_vertex_id();
        self.engine.add_vertex(Vertex::new(id, data));
        id
    }

    /// Create a tagged vertex with a fresh id and add it.
    pub fn create_tagged_vertex(&mut self, tag: impl Into<String>, data: V) -> VertexId {
        let id = self.fresh_vertex_id();
        self.engine.add_vertex(Vertex::tagged(id, tag, data));
        id
    }

    fn fresh_vertex_id(&mut self) -> VertexId {
        loop {
            let id = self.ids.next_vertex_id();
            if !self.engine.vertices().contains_key(&id) {
                return id;
            }
        }
    }

    /// Add an existing vertex. Returns `false` (no-op) if its id is present.
    pub fn add_vertex(&mut self, vertex: Vertex<V>) -> bool {
        self.ids.observe_vertex(vertex.id());
        self.engine.add_vertex(vertex)
    }

    /// Whether a vertex with this id is present.
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.engine.vertices().contains_key(&id)
    }

    /// Look up a vertex.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.engine.vertices().get(&id)
    }

    /// Look up a vertex for tag/payload changes.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V>> {
        self.engine.vertex_mut(id)
    }

    /// First vertex (in insertion order) carrying `tag`.
    pub fn find_vertex(&self, tag: &str) -> Option<VertexId> {
        self.engine
            .vertices()
            .values()
            .find(|v| v.tag() == Some(tag))
            .map(|v| v.id())
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex<V>> {
        self.engine.remove_vertex(id)
    }

    // ==================== Edges ====================

    /// Build an edge in this graph's direction with a fresh id, without adding it.
    pub fn new_edge(&mut self, v1: VertexId, v2: VertexId, weight: f64) -> Edge {
        let direction = self.direction();
        let id = self.fresh_edge_id();
        Edge::new(id, v1, v2, direction, weight)
    }

    fn fresh_edge_id(&mut self) -> EdgeId {
        loop {
            let id = self.ids.next_edge_id();
            if !self.engine.edges().contains_key(&id) {
                return id;
            }
        }
    }

    /// Add an edge.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if an endpoint is missing.
    /// A policy violation is not an error: it yields
    /// [`EdgeInsertion::Rejected`] and leaves the graph unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<EdgeInsertion> {
        self.ids.observe_edge(edge.id());
        let descriptor = edge.descriptor();
        let outcome = self.engine.add_edge(edge)?;
        if let EdgeInsertion::Rejected(reason) = outcome {
            log::trace!("edge {} rejected: {}", descriptor, reason);
        }
        Ok(outcome)
    }

    /// Create and add an edge `v1 -> v2` (or `v1 <-> v2`) in one step.
    pub fn connect(&mut self, v1: VertexId, v2: VertexId, weight: f64) -> GraphResult<EdgeInsertion> {
        let edge = self.new_edge(v1, v2, weight);
        self.add_edge(edge)
    }

    /// Remove an edge by id.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        self.engine.remove_edge(id)
    }

    /// Remove the earliest-inserted edge between `v1` and `v2`.
    pub fn remove_edge_between(&mut self, v1: VertexId, v2: VertexId) -> Option<Edge> {
        let id = self.get_edge(v1, v2)?.id();
        self.engine.remove_edge(id)
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.engine.edges().get(&id)
    }

    /// Look up an edge for weight/tag changes.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.engine.edge_mut(id)
    }

    /// Whether an edge with this id is present.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.engine.edges().contains_key(&id)
    }

    /// Whether any edge joins `v1` to `v2` under this graph's direction.
    pub fn has_edge(&self, v1: VertexId, v2: VertexId) -> bool {
        !self.engine.presence(&self.descriptor(v1, v2)).is_empty()
    }

    /// The earliest-inserted edge joining `v1` to `v2`.
    pub fn get_edge(&self, v1: VertexId, v2: VertexId) -> Option<&Edge> {
        self.engine
            .presence(&self.descriptor(v1, v2))
            .first()
            .and_then(|id| self.engine.edges().get(id))
    }

    /// Every edge joining `v1` to `v2`, earliest first.
    pub fn multi_edges(&self, v1: VertexId, v2: VertexId) -> GraphResult<Vec<&Edge>> {
        if !self.allows_multi_edges() {
            return Err(GraphError::MultiEdgesUnsupported);
        }
        Ok(self
            .engine
            .presence(&self.descriptor(v1, v2))
            .iter()
            .filter_map(|id| self.engine.edges().get(id))
            .collect())
    }

    /// Remove every edge joining `v1` to `v2`.
    pub fn remove_multi_edges(&mut self, v1: VertexId, v2: VertexId) -> GraphResult<Vec<Edge>> {
        if !self.allows_multi_edges() {
            return Err(GraphError::MultiEdgesUnsupported);
        }
        let ids: Vec<EdgeId> = self.engine.presence(&self.descriptor(v1, v2)).to_vec();
        Ok(ids
            .into_iter()
            .filter_map(|id| self.engine.remove_edge(id))
            .collect())
    }

    /// Descriptor of `(v1, v2)` under this graph's direction.
    pub fn descriptor(&self, v1: VertexId, v2: VertexId) -> EdgeDescriptor {
        EdgeDescriptor::new(v1, v2, self.direction())
    }

    // ==================== Views ====================

    /// Read-only view of the vertex index.
    pub fn vertices(&self) -> VerticesView<'_, V> {
        VerticesView::new(self.engine.vertices())
    }

    /// Vertex view whose removals cascade like [`remove_vertex`](Self::remove_vertex).
    pub fn vertices_mut(&mut self) -> VerticesMut<'_, V, S> {
        VerticesMut::new(self)
    }

    /// Read-only view of the edge index.
    pub fn edges(&self) -> EdgesView<'_> {
        EdgesView::new(self.engine.edges())
    }

    /// Edge view whose removals clean every index like [`remove_edge`](Self::remove_edge).
    pub fn edges_mut(&mut self) -> EdgesMut<'_, V, S> {
        EdgesMut::new(self)
    }

    /// Vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.engine.vertices().keys().copied()
    }

    /// Neighbors of `v` (empty if `v` is absent).
    pub fn neighbors(&self, v: VertexId) -> NeighborsView<'_> {
        NeighborsView::new(self.engine.neighbors(v))
    }

    /// Edges leaving `v` (every incident edge when undirected).
    pub fn incidence_out(&self, v: VertexId) -> IncidenceView<'_> {
        IncidenceView::new(self.engine.incidence_out(v), self.engine.edges())
    }

    /// Edges entering `v` (every incident edge when undirected).
    pub fn incidence_in(&self, v: VertexId) -> IncidenceView<'_> {
        IncidenceView::new(self.engine.incidence_in(v), self.engine.edges())
    }

    /// Number of edges leaving `v`.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.engine.incidence_out(v).map_or(0, |set| set.len())
    }

    /// Number of edges entering `v`.
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.engine.incidence_in(v).map_or(0, |set| set.len())
    }

    /// Number of edge endpoints at `v`; a self-loop counts twice.
    pub fn degree(&self, v: VertexId) -> usize {
        let loops = self.incidence_out(v).iter().filter(|e| e.is_self_loop()).count();
        if self.is_directed() {
            self.out_degree(v) + self.in_degree(v)
        } else {
            self.out_degree(v) + loops
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.engine.vertices().len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.engine.edges().len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.engine.vertices().is_empty()
    }

    /// Drop every vertex and edge. Identity, tag and policy are kept.
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.engine.edges().values().map(|e| e.weight()).sum()
    }

    /// An empty graph with the same policy, engine type and tag.
    pub fn clone_empty(&self) -> Self {
        let mut graph = Self::with_capabilities(self.capabilities());
        graph.tag = self.tag.clone();
        graph
    }

    /// Add every vertex and edge of `other`. Policy rejections are skipped.
    pub fn extend_from<T: GraphEngine<V>>(&mut self, other: &Graph<V, T>) -> GraphResult<()>
    where
        V: Clone,
    {
        for vertex in other.vertices() {
            self.add_vertex(vertex.clone());
        }
        for edge in other.edges() {
            let _ = self.add_edge(edge.clone())?;
        }
        Ok(())
    }

    /// Copy the graph onto the default engine, mapping every payload.
    /// Ids, tags, edges and policy are preserved.
    pub fn map_data<W>(&self, mut f: impl FnMut(&V) -> W) -> Graph<W> {
        let mut mapped = Graph::new(self.capabilities());
        mapped.tag = self.tag.clone();
        for vertex in self.vertices() {
            mapped.add_vertex(vertex.map(&mut f));
        }
        for edge in self.edges() {
            // Same policy and endpoints, so this cannot reject or fail
            let _ = mapped.engine.add_edge(edge.clone());
            mapped.ids.observe_edge(edge.id());
        }
        mapped
    }
}

impl<V, S: GraphEngine<V>> std::fmt::Display for Graph<V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} graph",
            self.tag.as_deref().unwrap_or(self.direction().name())
        )?;
        write!(f, " |V|={} |E|={}", self.vertex_count(), self.edge_count())?;
        for edge in self.edges() {
            write!(f, "\n  {} ({})", edge, edge.weight())?;
        }
        Ok(())
    }
}
