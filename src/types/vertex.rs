//! The vertex entity.

use std::hash::{Hash, Hasher};

use super::VertexId;

/// A graph vertex: immutable id, optional tag, owned payload.
///
/// Equality and hashing use the id only, so changing the tag or payload never
/// disturbs index lookups. Algorithm state (colors, timestamps) lives in the
/// algorithms, not here.
#[derive(Debug, Clone)]
pub struct Vertex<V = ()> {
    id: VertexId,
    tag: Option<String>,
    data: V,
}

impl<V> Vertex<V> {
    /// Create an untagged vertex.
    pub fn new(id: VertexId, data: V) -> Self {
        Self { id, tag: None, data }
    }

    /// Create a tagged vertex.
    pub fn tagged(id: VertexId, tag: impl Into<String>, data: V) -> Self {
        Self {
            id,
            tag: Some(tag.into()),
            data,
        }
    }

    /// The vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The display tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Set or clear the display tag.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }

    /// The payload.
    pub fn data(&self) -> &V {
        &self.data
    }

    /// The payload, mutably.
    pub fn data_mut(&mut self) -> &mut V {
        &mut self.data
    }

    /// Replace the payload, keeping id and tag.
    pub fn map<W>(&self, f: impl FnOnce(&V) -> W) -> Vertex<W> {
        Vertex {
            id: self.id,
            tag: self.tag.clone(),
            data: f(&self.data),
        }
    }
}

impl<V> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Vertex<V> {}

impl<V> Hash for Vertex<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V> std::fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}", tag),
            None => write!(f, "{}", self.id),
        }
    }
}
