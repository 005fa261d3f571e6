//! Phase 2 tests: breadth-first search, depth-first search, topological sort.

mod common;

use std::collections::HashMap;

use common::{init_logger, named_graph};

use erdos::algorithms::{breadth_first_search, depth_first_search, dfs, topological_sort};
use erdos::{Capabilities, DfsOptions, EdgeClass, EdgeDirection, Graph, GraphError, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== BFS Tests ====================

#[test]
fn test_bfs_distances_and_paths() {
    init_logger();
    let (g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["s", "a", "b", "c", "far"],
        &[("s", "a", 1.0), ("s", "b", 7.0), ("a", "c", 1.0), ("b", "c", 1.0)],
    );
    let result = breadth_first_search(&g, ids["s"]).unwrap();

    assert_eq!(result.source(), ids["s"]);
    assert_eq!(result.distance_of(ids["s"]), Some(0));
    assert_eq!(result.distance_of(ids["b"]), Some(1));
    assert_eq!(result.distance_of(ids["c"]), Some(2));
    assert_eq!(result.predecessor_of(ids["c"]), Some(ids["a"]));
    assert_eq!(result.predecessor_of(ids["s"]), None);
    assert_eq!(result.path_to(ids["c"]), Some(vec![ids["s"], ids["a"], ids["c"]]));

    // Unreached vertices are excluded
    assert_eq!(result.distance_of(ids["far"]), None);
    assert_eq!(result.path_to(ids["far"]), None);
    assert!(!result.graph().has_vertex(ids["far"]));

    let order: Vec<VertexId> = result.discovery_order().collect();
    assert_eq!(order, vec![ids["s"], ids["a"], ids["b"], ids["c"]]);
}

#[test]
fn test_bfs_tree_keeps_weights_and_direction() {
    let (g, ids) = named_graph(
        Capabilities::simple(),
        &["a", "b", "c"],
        &[("a", "b", 4.0), ("c", "b", 2.5)],
    );
    let tree = breadth_first_search(&g, ids["a"]).unwrap().into_graph();
    assert_eq!(tree.direction(), EdgeDirection::Undirected);
    assert_eq!(tree.vertex_count(), 3);
    assert_eq!(tree.edge_count(), 2);
    assert_eq!(tree.get_edge(ids["b"], ids["c"]).unwrap().weight(), 2.5);
}

#[test]
fn test_bfs_missing_start() {
    let g: Graph = Graph::directed();
    let ghost = VertexId::new(3);
    assert_eq!(
        breadth_first_search(&g, ghost).unwrap_err(),
        GraphError::StartVertexNotFound(ghost)
    );
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_classifies_every_edge_kind() {
    init_logger();
    let (g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c", "d"],
        &[
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("a", "c", 1.0),
            ("c", "a", 1.0),
            ("d", "b", 1.0),
        ],
    );
    let result = dfs(&g).unwrap();
    let class = |u: &str, v: &str| result.edge_class(&g.descriptor(ids[u], ids[v]));

    assert_eq!(class("a", "b"), Some(EdgeClass::Tree));
    assert_eq!(class("b", "c"), Some(EdgeClass::Tree));
    assert_eq!(class("c", "a"), Some(EdgeClass::Back));
    assert_eq!(class("a", "c"), Some(EdgeClass::Forward));
    assert_eq!(class("d", "b"), Some(EdgeClass::Cross));
    assert!(result.contains_cycle());

    assert_eq!(result.discovery_time(ids["a"]), Some(1));
    assert_eq!(result.discovery_time(ids["c"]), Some(3));
    assert_eq!(result.finish_time(ids["c"]), Some(4));
    assert_eq!(result.finish_time(ids["a"]), Some(6));
    assert_eq!(result.finish_time(ids["d"]), Some(8));
    assert_eq!(
        result.reverse_finish_order(),
        &[ids["d"], ids["a"], ids["b"], ids["c"]]
    );
    assert_eq!(result.predecessor_of(ids["c"]), Some(ids["b"]));
    assert_eq!(result.predecessor_of(ids["d"]), None);
    assert_eq!(result.forest().edge_count(), 2);
}

#[test]
fn test_dfs_undirected_cycle_detection() {
    let (triangle, _) = named_graph(
        Capabilities::simple(),
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("b", "c", 1.0), ("c", "a", 1.0)],
    );
    let result = dfs(&triangle).unwrap();
    assert!(result.contains_cycle());
    let backs = result
        .edge_classes()
        .values()
        .filter(|c| **c == EdgeClass::Back)
        .count();
    assert_eq!(backs, 1);

    // The edge back to the parent is not a cycle
    let (path, _) = named_graph(
        Capabilities::simple(),
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("b", "c", 1.0)],
    );
    let result = dfs(&path).unwrap();
    assert!(!result.contains_cycle());
    assert!(result.edge_classes().values().all(|c| *c == EdgeClass::Tree));
}

#[test]
fn test_dfs_parallel_undirected_edges_form_a_cycle() {
    init_logger();
    let (pair, ids) = named_graph(
        Capabilities::multi(),
        &["a", "b"],
        &[("a", "b", 1.0), ("a", "b", 2.0)],
    );
    assert_eq!(pair.edge_count(), 2);
    let result = dfs(&pair).unwrap();
    assert!(result.contains_cycle());
    assert_eq!(result.edge_classes().len(), 1);
    assert_eq!(result.predecessor_of(ids["b"]), Some(ids["a"]));

    // A single edge in a multigraph is still acyclic
    let (single, _) = named_graph(Capabilities::multi(), &["a", "b"], &[("a", "b", 1.0)]);
    assert!(!dfs(&single).unwrap().contains_cycle());

    // Parallel edges hanging off a tree further down are found too
    let (tail, _) = named_graph(
        Capabilities::multi(),
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("b", "c", 1.0), ("c", "b", 3.0)],
    );
    assert!(dfs(&tail).unwrap().contains_cycle());
}

#[test]
fn test_dfs_visit_order_restricts_search() {
    let (g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("b", "c", 1.0)],
    );
    let options = DfsOptions::new().visit_order(vec![ids["c"], ids["b"]]);
    let result = depth_first_search(&g, &options).unwrap();

    assert_eq!(result.discovery_time(ids["c"]), Some(1));
    assert_eq!(result.discovery_time(ids["b"]), Some(3));
    assert_eq!(result.discovery_time(ids["a"]), None);
    assert_eq!(
        result.edge_class(&g.descriptor(ids["b"], ids["c"])),
        Some(EdgeClass::Cross)
    );
    assert_eq!(result.forest().vertex_count(), 2);
    assert_eq!(result.forest().edge_count(), 0);
}

#[test]
fn test_dfs_rejects_unknown_subset_vertex() {
    let (g, _) = named_graph(Capabilities::simple_directed(), &["a"], &[]);
    let ghost = VertexId::new(77);
    let options = DfsOptions::new().visit_order(vec![ghost]);
    assert_eq!(
        depth_first_search(&g, &options).unwrap_err(),
        GraphError::InvalidVisitSubset(ghost)
    );
}

#[test]
fn test_dfs_timestamps_are_well_nested() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut g: Graph = Graph::directed();
    let vs: Vec<VertexId> = (0..40).map(|_| g.create_vertex(())).collect();
    for _ in 0..120 {
        let u = vs[rng.gen_range(0..vs.len())];
        let v = vs[rng.gen_range(0..vs.len())];
        let _ = g.connect(u, v, 1.0).unwrap();
    }
    let result = dfs(&g).unwrap();

    let mut stamps: Vec<usize> = Vec::new();
    for &v in &vs {
        let d = result.discovery_time(v).unwrap();
        let f = result.finish_time(v).unwrap();
        assert!(d < f);
        stamps.push(d);
        stamps.push(f);
        // A tree child's interval nests inside its parent's
        if let Some(p) = result.predecessor_of(v) {
            assert!(result.discovery_time(p).unwrap() < d);
            assert!(f < result.finish_time(p).unwrap());
        }
    }
    stamps.sort_unstable();
    assert_eq!(stamps, (1..=2 * vs.len()).collect::<Vec<_>>());
}

#[test]
fn test_dfs_handles_long_paths() {
    let mut g: Graph = Graph::directed();
    let vs: Vec<VertexId> = (0..50_000).map(|_| g.create_vertex(())).collect();
    for pair in vs.windows(2) {
        assert!(g.connect(pair[0], pair[1], 1.0).unwrap().is_added());
    }
    let result = dfs(&g).unwrap();
    assert_eq!(result.reverse_finish_order().first(), Some(&vs[0]));
    assert_eq!(result.finish_time(vs[0]), Some(2 * vs.len()));
}

// ==================== Topological Sort Tests ====================

#[test]
fn test_topological_sort_diamond() {
    let (g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["A", "B", "C", "D"],
        &[("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0), ("C", "D", 1.0)],
    );
    let order = topological_sort(&g).unwrap();
    let pos: HashMap<VertexId, usize> = order.iter().enumerate().map(|(i, v)| (*v, i)).collect();

    assert_eq!(order.len(), 4);
    assert!(pos[&ids["A"]] < pos[&ids["B"]]);
    assert!(pos[&ids["A"]] < pos[&ids["C"]]);
    assert!(pos[&ids["B"]] < pos[&ids["D"]]);
    assert!(pos[&ids["C"]] < pos[&ids["D"]]);
}

#[test]
fn test_topological_sort_random_dags() {
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g: Graph = Graph::directed();
        let vs: Vec<VertexId> = (0..50).map(|_| g.create_vertex(())).collect();
        for _ in 0..200 {
            let i = rng.gen_range(0..vs.len());
            let j = rng.gen_range(0..vs.len());
            if i < j {
                let _ = g.connect(vs[i], vs[j], 1.0).unwrap();
            }
        }

        let order = topological_sort(&g).unwrap();
        let pos: HashMap<VertexId, usize> = order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        assert_eq!(order.len(), vs.len());
        for edge in g.edges() {
            assert!(pos[&edge.v1()] < pos[&edge.v2()]);
        }
    }
}

#[test]
fn test_topological_sort_rejects_cycles() {
    init_logger();
    let (g, _) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("b", "c", 1.0), ("c", "a", 1.0)],
    );
    assert!(matches!(
        topological_sort(&g),
        Err(GraphError::NotADag { .. })
    ));
}

#[test]
fn test_topological_sort_needs_directed_graph() {
    let (g, _) = named_graph(Capabilities::simple(), &["a", "b"], &[("a", "b", 1.0)]);
    assert_eq!(
        topological_sort(&g).unwrap_err(),
        GraphError::DirectionMismatch {
            algorithm: "topological sort",
            expected: EdgeDirection::Directed,
        }
    );
}
