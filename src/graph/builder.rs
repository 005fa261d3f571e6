//! Fluent API for building Graph instances.

use crate::types::{Capabilities, EdgeDirection, GraphResult, IdGenerator, Vertex, VertexId};

use super::engine::{AdjIncidenceEngine, EdgeInsertion, GraphEngine};
use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertex ids are handed out as vertices are added, so links can refer to
/// them before the graph exists. Links the graph's policy refuses (a
/// duplicate in a simple graph, a forbidden self-loop) are skipped.
pub struct GraphBuilder<V = ()> {
    capabilities: Capabilities,
    tag: Option<String>,
    ids: IdGenerator,
    vertices: Vec<Vertex<V>>,
    links: Vec<(VertexId, VertexId, f64)>,
}

impl<V> GraphBuilder<V> {
    /// Create a new builder enforcing `capabilities`.
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            tag: None,
            ids: IdGenerator::new(),
            vertices: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Builder for a simple directed graph.
    pub fn directed() -> Self {
        Self::new(Capabilities::simple_directed())
    }

    /// Builder for a simple undirected graph.
    pub fn undirected() -> Self {
        Self::new(Capabilities::simple())
    }

    /// Change the edge direction.
    pub fn direction(&mut self, direction: EdgeDirection) -> &mut Self {
        self.capabilities.direction = direction;
        self
    }

    /// Accept or refuse parallel edges.
    pub fn multi_edges(&mut self, allow: bool) -> &mut Self {
        self.capabilities.allow_multi_edges = allow;
        self
    }

    /// Accept or refuse self-loops.
    pub fn self_loops(&mut self, allow: bool) -> &mut Self {
        self.capabilities.allow_self_loops = allow;
        self
    }

    /// Set the graph's display tag.
    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tag = Some(tag.into());
        self
    }

    /// Add an untagged vertex.
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = self.ids.next_vertex_id();
        self.vertices.push(Vertex::new(id, data));
        id
    }

    /// Add a tagged vertex.
    pub fn add_tagged_vertex(&mut self, tag: impl Into<String>, data: V) -> VertexId {
        let id = self.ids.next_vertex_id();
        self.vertices.push(Vertex::tagged(id, tag, data));
        id
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, from: VertexId, to: VertexId, weight: f64) -> &mut Self {
        self.links.push((from, to, weight));
        self
    }

    /// Add several edges at once.
    pub fn links(&mut self, links: impl IntoIterator<Item = (VertexId, VertexId, f64)>) -> &mut Self {
        self.links.extend(links);
        self
    }

    /// Build the final graph on the default engine.
    pub fn build(self) -> GraphResult<Graph<V>> {
        self.build_on::<AdjIncidenceEngine<V>>()
    }

    /// Build the final graph on engine `S`.
    ///
    /// Fails with [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound)
    /// if a link names a vertex that was never added.
    pub fn build_on<S: GraphEngine<V>>(self) -> GraphResult<Graph<V, S>> {
        let mut graph = Graph::<V, S>::with_capabilities(self.capabilities);
        graph.set_tag(self.tag);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }

        let mut skipped = 0usize;
        for (from, to, weight) in self.links {
            if let EdgeInsertion::Rejected(reason) = graph.connect(from, to, weight)? {
                log::debug!("builder skipped {} -> {}: {}", from, to, reason);
                skipped += 1;
            }
        }
        if skipped > 0 {
            log::debug!("builder skipped {} of the requested links", skipped);
        }
        Ok(graph)
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::directed()
    }
}
