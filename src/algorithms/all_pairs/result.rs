//! Distance matrix returned by the all-pairs algorithms.

use crate::graph::{Graph, VertexIndex};
use crate::types::{Capabilities, GraphError, GraphResult, Vertex, VertexId, INFINITY};

use super::AllPairsAlgorithm;

/// Predecessor matrix plus the direct edge weights used to rebuild trees.
#[derive(Debug, Clone)]
pub(crate) struct PredecessorMatrix {
    pub(crate) predecessors: Vec<Vec<Option<usize>>>,
    pub(crate) direct: Vec<Vec<f64>>,
}

/// Shortest distance between every ordered pair of vertices.
///
/// Row `i`, column `j` holds the distance from `index.id_at(i)` to
/// `index.id_at(j)`, +inf when there is no path. Path queries need
/// predecessor data, which only Floyd-Warshall records.
#[derive(Debug, Clone)]
pub struct AllPairsShortestPaths<V> {
    algorithm: AllPairsAlgorithm,
    vertices: Vec<Vertex<V>>,
    index: VertexIndex,
    distances: Vec<Vec<f64>>,
    predecessors: Option<PredecessorMatrix>,
}

impl<V> AllPairsShortestPaths<V> {
    pub(crate) fn new(
        algorithm: AllPairsAlgorithm,
        vertices: Vec<Vertex<V>>,
        index: VertexIndex,
        distances: Vec<Vec<f64>>,
        predecessors: Option<PredecessorMatrix>,
    ) -> Self {
        Self {
            algorithm,
            vertices,
            index,
            distances,
            predecessors,
        }
    }

    pub fn algorithm(&self) -> AllPairsAlgorithm {
        self.algorithm
    }

    /// Row/column order of the matrices.
    pub fn vertex_index(&self) -> &VertexIndex {
        &self.index
    }

    /// The full distance matrix.
    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }

    /// Whether path queries are available.
    pub fn has_predecessors(&self) -> bool {
        self.predecessors.is_some()
    }

    fn position(&self, v: VertexId) -> GraphResult<usize> {
        self.index.position(v).ok_or(GraphError::VertexNotFound(v))
    }

    fn predecessor_matrix(&self) -> GraphResult<&PredecessorMatrix> {
        self.predecessors
            .as_ref()
            .ok_or(GraphError::PredecessorsUnavailable {
                algorithm: self.algorithm.name(),
            })
    }

    /// Shortest distance from `from` to `to` (+inf if unreachable).
    pub fn distance_between(&self, from: VertexId, to: VertexId) -> GraphResult<f64> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Ok(self.distances[i][j])
    }

    /// Predecessor of `to` on the shortest path from `from`.
    pub fn predecessor_between(&self, from: VertexId, to: VertexId) -> GraphResult<Option<VertexId>> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        let matrix = self.predecessor_matrix()?;
        Ok(matrix.predecessors[i][j].and_then(|p| self.index.id_at(p)))
    }

    /// Vertices on the shortest path from `from` to `to`, or `None` if
    /// unreachable.
    pub fn path_between(&self, from: VertexId, to: VertexId) -> GraphResult<Option<Vec<VertexId>>> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        let matrix = self.predecessor_matrix()?;
        if self.distances[i][j] == INFINITY {
            return Ok(None);
        }

        let mut path = vec![to];
        let mut current = j;
        while current != i {
            let Some(p) = matrix.predecessors[i][current] else {
                return Ok(None);
            };
            if path.len() > self.index.len() {
                return Ok(None);
            }
            path.extend(self.index.id_at(p));
            current = p;
        }
        path.reverse();
        Ok(Some(path))
    }
}

impl<V: Clone> AllPairsShortestPaths<V> {
    /// The shortest-paths tree rooted at `source`, rebuilt from row
    /// `source` of the predecessor matrix.
    pub fn shortest_paths_tree_of(&self, source: VertexId) -> GraphResult<Graph<V>> {
        let i = self.position(source)?;
        let matrix = self.predecessor_matrix()?;

        let mut tree = Graph::new(Capabilities::simple_directed());
        for (j, vertex) in self.vertices.iter().enumerate() {
            if self.distances[i][j] != INFINITY {
                tree.add_vertex(vertex.clone());
            }
        }
        for (j, predecessor) in matrix.predecessors[i].iter().enumerate() {
            let (Some(p), Some(child)) = (*predecessor, self.index.id_at(j)) else {
                continue;
            };
            let Some(parent) = self.index.id_at(p) else {
                continue;
            };
            let _ = tree.connect(parent, child, matrix.direct[p][j])?;
        }
        Ok(tree)
    }
}
