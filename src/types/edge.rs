//! The edge entity and its canonical descriptor.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::{EdgeDirection, EdgeId, VertexId};

/// Canonical key for an edge's endpoint pair.
///
/// Directed descriptors keep endpoint order (`v1->v2`). Undirected descriptors
/// store the smaller id first (`v1<->v2`), so `(u, v)` and `(v, u)` map to the
/// same key. Presence and uniqueness checks compare descriptors, not edge ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeDescriptor {
    first: VertexId,
    second: VertexId,
    direction: EdgeDirection,
}

impl EdgeDescriptor {
    /// Build the descriptor of `(v1, v2)` under `direction`.
    pub fn new(v1: VertexId, v2: VertexId, direction: EdgeDirection) -> Self {
        let (first, second) = match direction {
            EdgeDirection::Directed => (v1, v2),
            EdgeDirection::Undirected if v2 < v1 => (v2, v1),
            EdgeDirection::Undirected => (v1, v2),
        };
        Self {
            first,
            second,
            direction,
        }
    }

    /// First endpoint in canonical order.
    pub fn first(&self) -> VertexId {
        self.first
    }

    /// Second endpoint in canonical order.
    pub fn second(&self) -> VertexId {
        self.second
    }

    /// Direction the descriptor was built under.
    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }
}

impl std::fmt::Display for EdgeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            EdgeDirection::Directed => write!(f, "{}->{}", self.first, self.second),
            EdgeDirection::Undirected => write!(f, "{}<->{}", self.first, self.second),
        }
    }
}

/// A weighted edge between two vertices.
///
/// Endpoints, direction and id are fixed at construction; weight and tag may
/// change after insertion. Equality and hashing use the id.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    id: EdgeId,
    v1: VertexId,
    v2: VertexId,
    direction: EdgeDirection,
    weight: f64,
    tag: Option<String>,
    descriptor: EdgeDescriptor,
}

impl Edge {
    /// Create an edge. The descriptor is derived from endpoints and direction.
    pub fn new(id: EdgeId, v1: VertexId, v2: VertexId, direction: EdgeDirection, weight: f64) -> Self {
        Self {
            id,
            v1,
            v2,
            direction,
            weight,
            tag: None,
            descriptor: EdgeDescriptor::new(v1, v2, direction),
        }
    }

    /// Create a directed edge.
    pub fn directed(id: EdgeId, v1: VertexId, v2: VertexId, weight: f64) -> Self {
        Self::new(id, v1, v2, EdgeDirection::Directed, weight)
    }

    /// Create an undirected edge.
    pub fn undirected(id: EdgeId, v1: VertexId, v2: VertexId, weight: f64) -> Self {
        Self::new(id, v1, v2, EdgeDirection::Undirected, weight)
    }

    /// The edge id.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// First endpoint (the source, for directed edges).
    pub fn v1(&self) -> VertexId {
        self.v1
    }

    /// Second endpoint (the target, for directed edges).
    pub fn v2(&self) -> VertexId {
        self.v2
    }

    /// Both endpoints as `(v1, v2)`.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.v1, self.v2)
    }

    /// The endpoint across from `v`, or `None` if `v` is not an endpoint.
    pub fn opposite(&self, v: VertexId) -> Option<VertexId> {
        if v == self.v1 {
            Some(self.v2)
        } else if v == self.v2 {
            Some(self.v1)
        } else {
            None
        }
    }

    /// Edge direction.
    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    /// Current weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Change the weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// The display tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Set or clear the display tag.
    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }

    /// Canonical descriptor.
    pub fn descriptor(&self) -> EdgeDescriptor {
        self.descriptor
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.v1 == self.v2
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}", tag),
            None => write!(f, "{}", self.descriptor),
        }
    }
}
