//! Dense matrix views of a graph.

use std::collections::HashMap;

use crate::types::{EdgeId, VertexId};

use super::engine::GraphEngine;
use super::Graph;

/// Positions of a graph's vertices in insertion order.
///
/// Row and column `i` of every matrix in this module belong to
/// `index.id_at(i)`.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    order: Vec<VertexId>,
    positions: HashMap<VertexId, usize>,
}

impl VertexIndex {
    /// Index the vertices of `graph`.
    pub fn of<V, S: GraphEngine<V>>(graph: &Graph<V, S>) -> Self {
        Self::from_ids(graph.vertex_ids())
    }

    /// Index an explicit id sequence. Repeated ids keep their first position.
    pub fn from_ids(ids: impl IntoIterator<Item = VertexId>) -> Self {
        let mut index = Self::default();
        for id in ids {
            if !index.positions.contains_key(&id) {
                index.positions.insert(id, index.order.len());
                index.order.push(id);
            }
        }
        index
    }

    /// Position of `id`.
    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Id at position `i`.
    pub fn id_at(&self, i: usize) -> Option<VertexId> {
        self.order.get(i).copied()
    }

    /// Ids in position order.
    pub fn ids(&self) -> &[VertexId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Weighted adjacency matrix.
///
/// `m[i][i]` starts at `diagonal` and every other cell at `missing`; each
/// edge then writes its weight (both cells when undirected). Parallel edges
/// keep the minimum weight, and a self-loop overwrites the diagonal.
pub fn adjacency_matrix<V, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    diagonal: f64,
    missing: f64,
) -> (VertexIndex, Vec<Vec<f64>>) {
    let index = VertexIndex::of(graph);
    let n = index.len();
    let mut matrix = vec![vec![missing; n]; n];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[i] = diagonal;
    }

    let mut written = vec![vec![false; n]; n];
    let undirected = !graph.is_directed();
    for edge in graph.edges() {
        let (Some(i), Some(j)) = (index.position(edge.v1()), index.position(edge.v2())) else {
            continue;
        };
        let weight = if written[i][j] {
            matrix[i][j].min(edge.weight())
        } else {
            edge.weight()
        };
        matrix[i][j] = weight;
        written[i][j] = true;
        if undirected {
            matrix[j][i] = weight;
            written[j][i] = true;
        }
    }
    (index, matrix)
}

/// `|V| x |E|` incidence matrix: `m[i][j]` is 1 when vertex `i` is an
/// endpoint of edge `j`, else 0. Columns follow edge insertion order.
pub fn incidence_matrix<V, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
) -> (VertexIndex, Vec<EdgeId>, Vec<Vec<u8>>) {
    let index = VertexIndex::of(graph);
    let columns: Vec<EdgeId> = graph.edges().ids().collect();
    let mut matrix = vec![vec![0u8; columns.len()]; index.len()];
    for (j, edge) in graph.edges().iter().enumerate() {
        for endpoint in [edge.v1(), edge.v2()] {
            if let Some(i) = index.position(endpoint) {
                matrix[i][j] = 1;
            }
        }
    }
    (index, columns, matrix)
}
