//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use erdos::{Capabilities, Graph, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Install the test logger once; later calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Graph over tagged vertices `names` with weighted `links` between them.
pub fn named_graph(
    capabilities: Capabilities,
    names: &[&str],
    links: &[(&str, &str, f64)],
) -> (Graph, HashMap<String, VertexId>) {
    let mut graph = Graph::new(capabilities);
    let mut ids = HashMap::new();
    for name in names {
        let id = graph.create_tagged_vertex(*name, ());
        ids.insert(name.to_string(), id);
    }
    for (from, to, weight) in links {
        let outcome = graph
            .connect(ids[*from], ids[*to], *weight)
            .expect("fixture endpoints exist");
        assert!(outcome.is_added(), "fixture link {}-{} rejected", from, to);
    }
    (graph, ids)
}

/// Random graph with `n` vertices and up to `m` edges drawn from `seed`.
/// Policy rejections (duplicates, self-loops) are skipped, so the edge count
/// may come out below `m`.
pub fn random_graph(capabilities: Capabilities, n: usize, m: usize, weights: (f64, f64), seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(capabilities);
    let ids: Vec<VertexId> = (0..n).map(|_| graph.create_vertex(())).collect();
    if n == 0 {
        return graph;
    }
    for _ in 0..m {
        let u = ids[rng.gen_range(0..n)];
        let v = ids[rng.gen_range(0..n)];
        let w = rng.gen_range(weights.0..weights.1);
        let _ = graph.connect(u, v, w).expect("random endpoints exist");
    }
    graph
}

/// Absolute-tolerance float comparison for accumulated path sums.
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < 1e-9 * (1.0 + a.abs().max(b.abs()))
}
