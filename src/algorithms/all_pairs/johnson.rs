//! Johnson's all-pairs shortest paths for sparse directed graphs.
//!
//! A Bellman-Ford pass from an added super-source yields potentials `h`;
//! reweighting every edge to `w + h(u) - h(v)` makes all weights
//! non-negative, so one Dijkstra per vertex finishes the job.

use std::collections::HashMap;

use crate::graph::{Graph, GraphEngine, VertexIndex};
use crate::types::{EdgeDirection, GraphError, GraphResult, VertexId, INFINITY};

use super::super::require_direction;
use super::super::shortest_path::{bellman_ford, dijkstra_with};
use super::super::weights::EdgeFunction;
use super::result::AllPairsShortestPaths;
use super::AllPairsAlgorithm;

const ALGORITHM: &str = "johnson";

/// Relative slack allowed when a reweighted edge comes out slightly negative.
const REWEIGHT_TOLERANCE: f64 = 1e-9;

/// Johnson's algorithm. Directed graphs only; the result has no
/// predecessor data.
pub fn johnson<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<AllPairsShortestPaths<V>> {
    require_direction(graph, ALGORITHM, EdgeDirection::Directed)?;

    let mut skeleton: Graph = graph.map_data(|_| ());
    let super_source = skeleton.create_vertex(());
    for v in graph.vertex_ids() {
        let _ = skeleton.connect(super_source, v, 0.0)?;
    }

    let potentials = bellman_ford(&skeleton, super_source).map_err(|err| match err {
        GraphError::NegativeWeightCycle { .. } => GraphError::NegativeWeightCycle {
            algorithm: ALGORITHM,
        },
        other => other,
    })?;
    let h: HashMap<VertexId, f64> = graph
        .vertex_ids()
        .map(|v| (v, potentials.distance_of(v).unwrap_or(0.0)))
        .collect();
    skeleton.remove_vertex(super_source);

    let potential = |v: VertexId| h.get(&v).copied().unwrap_or(0.0);
    let mut reweighted = EdgeFunction::new();
    for edge in graph.edges() {
        let (u, v) = edge.endpoints();
        let weight = reweight(u, v, edge.weight(), potential(u), potential(v))?;
        reweighted.set_min(u, v, weight);
    }

    let index = VertexIndex::of(graph);
    let n = index.len();
    let mut distances = vec![vec![INFINITY; n]; n];
    for (i, &u) in index.ids().iter().enumerate() {
        let tree = dijkstra_with(&skeleton, u, &reweighted)?;
        for (j, &v) in index.ids().iter().enumerate() {
            let reduced = tree.distance_of(v).unwrap_or(INFINITY);
            if reduced != INFINITY {
                distances[i][j] = reduced + potential(v) - potential(u);
            }
        }
        distances[i][i] = 0.0;
    }
    log::debug!("{} ran {} dijkstra passes", ALGORITHM, n);

    let vertices = graph.vertices().iter().cloned().collect();
    Ok(AllPairsShortestPaths::new(
        AllPairsAlgorithm::Johnson,
        vertices,
        index,
        distances,
        None,
    ))
}

/// Reweight `(from, to)` to `weight + hu - hv`. Results within rounding noise
/// of zero are clamped to zero; anything more negative means the potentials
/// are wrong.
fn reweight(from: VertexId, to: VertexId, weight: f64, hu: f64, hv: f64) -> GraphResult<f64> {
    let reweighted = weight + hu - hv;
    let slack = REWEIGHT_TOLERANCE * (1.0 + weight.abs() + hu.abs() + hv.abs());
    if reweighted < -slack {
        log::warn!("{}: edge {}>{} reweighted to {}", ALGORITHM, from, to, reweighted);
        return Err(GraphError::NegativeReweightedEdge {
            from,
            to,
            weight: reweighted,
        });
    }
    Ok(reweighted.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (VertexId, VertexId) {
        let mut graph: Graph = Graph::directed();
        (graph.create_vertex(()), graph.create_vertex(()))
    }

    #[test]
    fn test_reweight_keeps_non_negative_weights() {
        let (u, v) = pair();
        assert_eq!(reweight(u, v, 2.0, 0.0, 0.0).unwrap(), 2.0);
        assert_eq!(reweight(u, v, -3.0, 0.0, -3.0).unwrap(), 0.0);
        assert_eq!(reweight(u, v, 1.0, -1.0, -4.0).unwrap(), 4.0);
    }

    #[test]
    fn test_reweight_clamps_rounding_noise() {
        let (u, v) = pair();
        let w = reweight(u, v, 0.1 + 0.2, 0.0, 0.3 + 1e-12).unwrap();
        assert_eq!(w, 0.0);
        assert!(w.is_sign_positive());
    }

    #[test]
    fn test_reweight_rejects_negative_result() {
        let (u, v) = pair();
        match reweight(u, v, -5.0, 0.0, 0.0) {
            Err(GraphError::NegativeReweightedEdge { from, to, weight }) => {
                assert_eq!(from, u);
                assert_eq!(to, v);
                assert_eq!(weight, -5.0);
            }
            other => panic!("expected NegativeReweightedEdge, got {:?}", other),
        }
        assert!(matches!(
            reweight(u, v, 1.0, 0.0, 1.001),
            Err(GraphError::NegativeReweightedEdge { .. })
        ));
    }
}
