//! Projections over a graph's indices.
//!
//! Vertex and edge views come in a read-only and a mutable flavour. The
//! mutable ones remove through the graph itself, so every index is cleaned up
//! exactly as with [`Graph::remove_vertex`] / [`Graph::remove_edge`].
//! Adjacency and incidence views are read-only: they have no mutation API.

use indexmap::{IndexMap, IndexSet};

use crate::types::{Edge, EdgeId, Vertex, VertexId};

use super::engine::GraphEngine;
use super::Graph;

/// Read-only view of the vertex index, in insertion order.
pub struct VerticesView<'a, V> {
    map: &'a IndexMap<VertexId, Vertex<V>>,
}

impl<'a, V> VerticesView<'a, V> {
    pub(crate) fn new(map: &'a IndexMap<VertexId, Vertex<V>>) -> Self {
        Self { map }
    }

    /// Iterate over vertices.
    pub fn iter(&self) -> indexmap::map::Values<'a, VertexId, Vertex<V>> {
        self.map.values()
    }

    /// Iterate over vertex ids.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + 'a {
        self.map.keys().copied()
    }

    /// Look up a vertex.
    pub fn get(&self, id: VertexId) -> Option<&'a Vertex<V>> {
        self.map.get(&id)
    }

    /// Whether the id is present.
    pub fn contains(&self, id: VertexId) -> bool {
        self.map.contains_key(&id)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'a, V> IntoIterator for VerticesView<'a, V> {
    type Item = &'a Vertex<V>;
    type IntoIter = indexmap::map::Values<'a, VertexId, Vertex<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.values()
    }
}

/// Read-only view of the edge index, in insertion order.
pub struct EdgesView<'a> {
    map: &'a IndexMap<EdgeId, Edge>,
}

impl<'a> EdgesView<'a> {
    pub(crate) fn new(map: &'a IndexMap<EdgeId, Edge>) -> Self {
        Self { map }
    }

    /// Iterate over edges.
    pub fn iter(&self) -> indexmap::map::Values<'a, EdgeId, Edge> {
        self.map.values()
    }

    /// Iterate over edge ids.
    pub fn ids(&self) -> impl Iterator<Item = EdgeId> + 'a {
        self.map.keys().copied()
    }

    /// Look up an edge.
    pub fn get(&self, id: EdgeId) -> Option<&'a Edge> {
        self.map.get(&id)
    }

    /// Whether the id is present.
    pub fn contains(&self, id: EdgeId) -> bool {
        self.map.contains_key(&id)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether there are no edges.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'a> IntoIterator for EdgesView<'a> {
    type Item = &'a Edge;
    type IntoIter = indexmap::map::Values<'a, EdgeId, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.values()
    }
}

/// Vertex view that removes through the graph.
pub struct VerticesMut<'a, V, S> {
    graph: &'a mut Graph<V, S>,
}

impl<'a, V, S: GraphEngine<V>> VerticesMut<'a, V, S> {
    pub(crate) fn new(graph: &'a mut Graph<V, S>) -> Self {
        Self { graph }
    }

    /// Remove a vertex and its incident edges.
    pub fn remove(&mut self, id: VertexId) -> Option<Vertex<V>> {
        self.graph.remove_vertex(id)
    }

    /// Keep only the vertices for which `keep` returns true. Returns how many
    /// were removed (their incident edges go with them).
    pub fn retain(&mut self, mut keep: impl FnMut(&Vertex<V>) -> bool) -> usize {
        let doomed: Vec<VertexId> = self
            .graph
            .vertices()
            .iter()
            .filter(|v| !keep(*v))
            .map(|v| v.id())
            .collect();
        doomed
            .into_iter()
            .filter(|id| self.graph.remove_vertex(*id).is_some())
            .count()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Whether there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.vertex_count() == 0
    }
}

/// Edge view that removes through the graph.
pub struct EdgesMut<'a, V, S> {
    graph: &'a mut Graph<V, S>,
}

impl<'a, V, S: GraphEngine<V>> EdgesMut<'a, V, S> {
    pub(crate) fn new(graph: &'a mut Graph<V, S>) -> Self {
        Self { graph }
    }

    /// Remove an edge from every index.
    pub fn remove(&mut self, id: EdgeId) -> Option<Edge> {
        self.graph.remove_edge(id)
    }

    /// Keep only the edges for which `keep` returns true. Returns how many
    /// were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Edge) -> bool) -> usize {
        let doomed: Vec<EdgeId> = self
            .graph
            .edges()
            .iter()
            .filter(|e| !keep(*e))
            .map(|e| e.id())
            .collect();
        doomed
            .into_iter()
            .filter(|id| self.graph.remove_edge(*id).is_some())
            .count()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether there are no edges.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }
}

/// Read-only view of one vertex's adjacency set.
#[derive(Clone, Copy)]
pub struct NeighborsView<'a> {
    set: Option<&'a IndexSet<VertexId>>,
}

impl<'a> NeighborsView<'a> {
    pub(crate) fn new(set: Option<&'a IndexSet<VertexId>>) -> Self {
        Self { set }
    }

    /// Iterate over neighbor ids.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + 'a {
        self.set.into_iter().flatten().copied()
    }

    /// Whether `v` is a neighbor.
    pub fn contains(&self, v: VertexId) -> bool {
        self.set.is_some_and(|set| set.contains(&v))
    }

    /// Number of neighbors.
    pub fn len(&self) -> usize {
        self.set.map_or(0, |set| set.len())
    }

    /// Whether there are no neighbors.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only view of one vertex's incidence set.
#[derive(Clone, Copy)]
pub struct IncidenceView<'a> {
    set: Option<&'a IndexSet<EdgeId>>,
    edges: &'a IndexMap<EdgeId, Edge>,
}

impl<'a> IncidenceView<'a> {
    pub(crate) fn new(set: Option<&'a IndexSet<EdgeId>>, edges: &'a IndexMap<EdgeId, Edge>) -> Self {
        Self { set, edges }
    }

    /// Iterate over incident edges.
    pub fn iter(&self) -> impl Iterator<Item = &'a Edge> + 'a {
        let edges = self.edges;
        self.set
            .into_iter()
            .flatten()
            .filter_map(move |id| edges.get(id))
    }

    /// Iterate over incident edge ids.
    pub fn ids(&self) -> impl Iterator<Item = EdgeId> + 'a {
        self.set.into_iter().flatten().copied()
    }

    /// Whether the edge is incident.
    pub fn contains(&self, id: EdgeId) -> bool {
        self.set.is_some_and(|set| set.contains(&id))
    }

    /// Number of incident edges.
    pub fn len(&self) -> usize {
        self.set.map_or(0, |set| set.len())
    }

    /// Whether there are no incident edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
