//! Floyd-Warshall all-pairs shortest paths.

use crate::graph::{adjacency_matrix, Graph, GraphEngine};
use crate::types::{GraphError, GraphResult, INFINITY};

use super::result::{AllPairsShortestPaths, PredecessorMatrix};
use super::AllPairsAlgorithm;

const ALGORITHM: &str = "floyd-warshall";

/// Floyd-Warshall over a directed or undirected graph.
///
/// Parallel edges contribute their cheapest weight. A predecessor is carried
/// over from the intermediate vertex only when the path through it is
/// strictly shorter. Fails with [`GraphError::NegativeWeightCycle`] if any
/// vertex ends up at negative distance from itself.
pub fn floyd_warshall<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
) -> GraphResult<AllPairsShortestPaths<V>> {
    let (index, direct) = adjacency_matrix(graph, 0.0, INFINITY);
    let n = index.len();

    let mut dist = direct.clone();
    let mut pred: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
    for i in 0..n {
        dist[i][i] = dist[i][i].min(0.0);
        for j in 0..n {
            if i != j && direct[i][j] != INFINITY {
                pred[i][j] = Some(i);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i][k];
            if dik == INFINITY {
                continue;
            }
            for j in 0..n {
                let dkj = dist[k][j];
                if dkj == INFINITY {
                    continue;
                }
                if dik + dkj < dist[i][j] {
                    dist[i][j] = dik + dkj;
                    pred[i][j] = pred[k][j];
                }
            }
        }
    }

    if (0..n).any(|i| dist[i][i] < 0.0) {
        log::warn!("{}: negative diagonal entry in a {}x{} matrix", ALGORITHM, n, n);
        return Err(GraphError::NegativeWeightCycle {
            algorithm: ALGORITHM,
        });
    }
    log::debug!("{} computed {} distances", ALGORITHM, n * n);

    let vertices = graph.vertices().iter().cloned().collect();
    Ok(AllPairsShortestPaths::new(
        AllPairsAlgorithm::FloydWarshall,
        vertices,
        index,
        dist,
        Some(PredecessorMatrix {
            predecessors: pred,
            direct,
        }),
    ))
}
