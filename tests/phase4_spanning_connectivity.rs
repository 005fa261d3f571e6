//! Phase 4 tests: spanning trees, strongly connected components, transforms.

mod common;

use std::collections::HashMap;

use common::{approx_eq, init_logger, named_graph, random_graph};

use erdos::algorithms::{
    kruskal, minimum_spanning_tree, prim, square, strongly_connected_components,
    transitive_closure, transpose, undirected,
};
use erdos::{
    Capabilities, DisjointSet, EdgeDirection, Graph, GraphError, MinSpanTreeAlgorithm, VertexId,
};

fn weighted_kite() -> (Graph, HashMap<String, VertexId>) {
    named_graph(
        Capabilities::simple(),
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1.0),
            ("A", "C", 5.0),
            ("B", "C", 2.0),
            ("C", "D", 21.0),
            ("B", "D", 27.0),
        ],
    )
}

/// Components as sorted id lists, sorted, for order-free comparison.
fn normalized(components: Vec<indexmap::IndexSet<VertexId>>) -> Vec<Vec<VertexId>> {
    let mut out: Vec<Vec<VertexId>> = components
        .into_iter()
        .map(|c| {
            let mut ids: Vec<VertexId> = c.into_iter().collect();
            ids.sort();
            ids
        })
        .collect();
    out.sort();
    out
}

// ==================== Spanning Tree Tests ====================

#[test]
fn test_kruskal_and_prim_agree_on_weight_24_tree() {
    init_logger();
    let (g, ids) = weighted_kite();

    for tree in [kruskal(&g).unwrap(), prim(&g, ids["A"]).unwrap()] {
        assert_eq!(tree.direction(), EdgeDirection::Undirected);
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.edge_count(), 3);
        assert_eq!(tree.total_weight(), 24.0);
        assert!(tree.has_edge(ids["A"], ids["B"]));
        assert!(tree.has_edge(ids["B"], ids["C"]));
        assert!(tree.has_edge(ids["C"], ids["D"]));
        assert!(!tree.has_edge(ids["B"], ids["D"]));
    }
}

#[test]
fn test_spanning_tree_keeps_edge_identity() {
    let (mut g, ids) = weighted_kite();
    let cd = g.get_edge(ids["C"], ids["D"]).unwrap().id();
    g.edge_mut(cd).unwrap().set_tag(Some("bridge".to_string()));

    let tree = minimum_spanning_tree(&g, MinSpanTreeAlgorithm::Kruskal).unwrap();
    let copied = tree.edge(cd).unwrap();
    assert_eq!(copied.tag(), Some("bridge"));
    assert_eq!(copied.weight(), 21.0);
    assert_eq!(tree.vertex(ids["A"]).unwrap().tag(), Some("A"));
}

#[test]
fn test_spanning_forest_on_disconnected_input() {
    let (g, ids) = named_graph(
        Capabilities::simple(),
        &["a", "b", "c", "d", "lonely"],
        &[("a", "b", 1.0), ("c", "d", 2.0)],
    );
    let from_kruskal = kruskal(&g).unwrap();
    let from_prim = prim(&g, ids["c"]).unwrap();
    for forest in [&from_kruskal, &from_prim] {
        assert_eq!(forest.vertex_count(), 5);
        assert_eq!(forest.edge_count(), 2);
        assert_eq!(forest.total_weight(), 3.0);
        assert_eq!(forest.degree(ids["lonely"]), 0);
    }
}

#[test]
fn test_spanning_tree_on_multigraph_uses_cheapest_parallel_edge() {
    let mut g: Graph = Graph::new(Capabilities::multi());
    let a = g.create_vertex(());
    let b = g.create_vertex(());
    for w in [4.0, 1.5, 3.0] {
        assert!(g.connect(a, b, w).unwrap().is_added());
    }
    for algorithm in [MinSpanTreeAlgorithm::Kruskal, MinSpanTreeAlgorithm::Prim] {
        let tree = minimum_spanning_tree(&g, algorithm).unwrap();
        assert_eq!(tree.edge_count(), 1, "{}", algorithm);
        assert_eq!(tree.total_weight(), 1.5, "{}", algorithm);
    }
}

#[test]
fn test_kruskal_matches_prim_on_random_graphs() {
    for seed in 0..8 {
        let g = random_graph(Capabilities::simple(), 30, 70, (1.0, 50.0), seed);

        let mut components: DisjointSet<VertexId> = DisjointSet::new();
        for v in g.vertex_ids() {
            components.make_set(v);
        }
        for edge in g.edges() {
            components.union(edge.v1(), edge.v2());
        }
        let expected_edges = g.vertex_count() - components.disjoint_sets().len();

        let k = kruskal(&g).unwrap();
        let p = minimum_spanning_tree(&g, MinSpanTreeAlgorithm::Prim).unwrap();
        assert_eq!(k.edge_count(), expected_edges);
        assert_eq!(p.edge_count(), expected_edges);
        assert!(approx_eq(k.total_weight(), p.total_weight()), "seed {}", seed);
    }
}

#[test]
fn test_spanning_tree_errors() {
    let (g, _) = weighted_kite();
    let ghost = VertexId::new(500);
    assert_eq!(
        prim(&g, ghost).unwrap_err(),
        GraphError::StartVertexNotFound(ghost)
    );

    let (directed, ids) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b"],
        &[("a", "b", 1.0)],
    );
    assert_eq!(
        kruskal(&directed).unwrap_err(),
        GraphError::DirectionMismatch {
            algorithm: "kruskal",
            expected: EdgeDirection::Undirected,
        }
    );
    assert!(matches!(
        prim(&directed, ids["a"]),
        Err(GraphError::DirectionMismatch { .. })
    ));
}

#[test]
fn test_spanning_tree_of_empty_graph() {
    let g: Graph = Graph::undirected();
    for algorithm in [MinSpanTreeAlgorithm::Kruskal, MinSpanTreeAlgorithm::Prim] {
        assert!(minimum_spanning_tree(&g, algorithm).unwrap().is_empty());
    }
}

// ==================== SCC Tests ====================

#[test]
fn test_scc_textbook_example() {
    init_logger();
    let (g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c", "d", "e", "f", "g", "h"],
        &[
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("b", "e", 1.0),
            ("b", "f", 1.0),
            ("c", "d", 1.0),
            ("c", "g", 1.0),
            ("d", "c", 1.0),
            ("d", "h", 1.0),
            ("e", "a", 1.0),
            ("e", "f", 1.0),
            ("f", "g", 1.0),
            ("g", "f", 1.0),
            ("g", "h", 1.0),
        ],
    );
    let group = |names: &[&str]| {
        let mut v: Vec<VertexId> = names.iter().map(|n| ids[*n]).collect();
        v.sort();
        v
    };
    let mut expected = vec![
        group(&["a", "b", "e"]),
        group(&["c", "d"]),
        group(&["f", "g"]),
        group(&["h"]),
    ];
    expected.sort();

    let components = strongly_connected_components(&g).unwrap();
    assert_eq!(normalized(components), expected);
}

#[test]
fn test_scc_of_dag_is_all_singletons() {
    let (g, _) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c", "d"],
        &[("a", "b", 1.0), ("a", "c", 1.0), ("b", "d", 1.0), ("c", "d", 1.0)],
    );
    let components = strongly_connected_components(&g).unwrap();
    assert_eq!(components.len(), 4);
    assert!(components.iter().all(|c| c.len() == 1));
}

#[test]
fn test_scc_of_spanning_cycle_is_one_component() {
    let mut g: Graph = Graph::directed();
    let vs: Vec<VertexId> = (0..20).map(|_| g.create_vertex(())).collect();
    for i in 0..vs.len() {
        assert!(g.connect(vs[i], vs[(i + 1) % vs.len()], 1.0).unwrap().is_added());
    }
    let components = strongly_connected_components(&g).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), 20);
}

#[test]
fn test_scc_partitions_random_graphs() {
    for seed in 0..5 {
        let g = random_graph(Capabilities::simple_directed(), 40, 70, (1.0, 2.0), seed);
        let components = strongly_connected_components(&g).unwrap();
        let total: usize = components.iter().map(|c| c.len()).sum();
        assert_eq!(total, g.vertex_count());

        // Members of one component reach each other
        let closure = transitive_closure(&g).unwrap();
        for component in &components {
            for &u in component {
                for &v in component {
                    if u != v {
                        assert!(closure.has_edge(u, v), "seed {}", seed);
                    }
                }
            }
        }
    }
}

#[test]
fn test_scc_needs_directed_graph() {
    let g: Graph = Graph::undirected();
    assert!(matches!(
        strongly_connected_components(&g),
        Err(GraphError::DirectionMismatch { .. })
    ));
}

// ==================== Transform Tests ====================

#[test]
fn test_transpose_reverses_edges() {
    let (mut g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c"],
        &[("a", "b", 2.0), ("b", "c", 3.0)],
    );
    let ab = g.get_edge(ids["a"], ids["b"]).unwrap().id();
    g.edge_mut(ab).unwrap().set_tag(Some("x".to_string()));

    let t = transpose(&g).unwrap();
    assert_eq!(t.vertex_count(), 3);
    assert_eq!(t.edge_count(), 2);
    assert!(t.has_edge(ids["b"], ids["a"]));
    assert!(!t.has_edge(ids["a"], ids["b"]));

    let reversed = t.edge(ab).unwrap();
    assert_eq!(reversed.endpoints(), (ids["b"], ids["a"]));
    assert_eq!(reversed.weight(), 2.0);
    assert_eq!(reversed.tag(), Some("x"));

    let back = transpose(&t).unwrap();
    assert!(back.has_edge(ids["a"], ids["b"]));
    assert!(back.has_edge(ids["b"], ids["c"]));

    let (u, _) = named_graph(Capabilities::simple(), &["a"], &[]);
    assert!(matches!(
        transpose(&u),
        Err(GraphError::DirectionMismatch { .. })
    ));
}

#[test]
fn test_undirected_merges_antiparallel_edges() {
    let (g, ids) = named_graph(
        Capabilities::directed_pseudo(),
        &["a", "b", "c"],
        &[("a", "b", 3.0), ("b", "a", 5.0), ("b", "c", 1.0), ("c", "c", 9.0)],
    );
    let u = undirected(&g).unwrap();
    assert_eq!(u.direction(), EdgeDirection::Undirected);
    assert!(!u.allows_multi_edges());
    assert_eq!(u.vertex_count(), 3);
    assert_eq!(u.edge_count(), 2);
    assert_eq!(u.get_edge(ids["b"], ids["a"]).unwrap().weight(), 3.0);
    assert!(!u.has_edge(ids["c"], ids["c"]));
}

#[test]
fn test_square_of_directed_path() {
    let (g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c", "d"],
        &[("a", "b", 1.0), ("b", "c", 1.0), ("c", "d", 1.0)],
    );
    let sq = square(&g).unwrap();
    assert_eq!(sq.vertex_count(), 4);
    assert_eq!(sq.edge_count(), 2);
    assert!(sq.has_edge(ids["a"], ids["c"]));
    assert!(sq.has_edge(ids["b"], ids["d"]));
    assert!(!sq.has_edge(ids["a"], ids["b"]));
    assert_eq!(sq.get_edge(ids["a"], ids["c"]).unwrap().weight(), 0.0);
}

#[test]
fn test_square_of_undirected_path() {
    let (g, ids) = named_graph(
        Capabilities::simple(),
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("b", "c", 1.0)],
    );
    let sq = square(&g).unwrap();
    assert_eq!(sq.direction(), EdgeDirection::Undirected);
    assert_eq!(sq.edge_count(), 1);
    assert!(sq.has_edge(ids["c"], ids["a"]));
}

#[test]
fn test_transitive_closure_of_chain() {
    let (g, ids) = named_graph(
        Capabilities::simple_directed(),
        &["a", "b", "c"],
        &[("a", "b", 4.0), ("b", "c", 6.0)],
    );
    let closure = transitive_closure(&g).unwrap();
    assert_eq!(closure.edge_count(), 3);
    assert!(closure.has_edge(ids["a"], ids["c"]));
    assert!(!closure.has_edge(ids["c"], ids["a"]));
    assert_eq!(closure.get_edge(ids["a"], ids["b"]).unwrap().weight(), 4.0);
    assert_eq!(closure.get_edge(ids["a"], ids["c"]).unwrap().weight(), 0.0);
}

#[test]
fn test_transitive_closure_adds_self_pairs_when_allowed() {
    let (g, ids) = named_graph(
        Capabilities::directed_pseudo(),
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("b", "a", 1.0)],
    );
    let closure = transitive_closure(&g).unwrap();
    // a->b, b->a, plus a self pair for every vertex (c reaches only itself)
    assert_eq!(closure.edge_count(), 5);
    assert!(closure.has_edge(ids["a"], ids["a"]));
    assert!(closure.has_edge(ids["b"], ids["b"]));
    assert!(closure.has_edge(ids["c"], ids["c"]));
    assert!(!closure.has_edge(ids["a"], ids["c"]));
}
