//! Depth-first search with timestamps and edge classification.
//!
//! The search runs on an explicit work stack but yields exactly the
//! discovery and finish order of the textbook recursive formulation: each
//! stack frame snapshots the vertex's neighbors at discovery time and resumes
//! where it left off after a child finishes.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::graph::{Graph, GraphEngine};
use crate::types::{EdgeDescriptor, GraphError, GraphResult, VertexId};

use super::predecessor_subgraph;

/// Kind of an explored edge `(u, v)`, decided by `v`'s color when `u` looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClass {
    /// `v` was unvisited; the edge is in the forest.
    Tree,
    /// `v` was still on the stack; the edge closes a cycle.
    Back,
    /// `v` was finished and is a descendant of `u`.
    Forward,
    /// `v` was finished in another subtree or tree.
    Cross,
}

impl EdgeClass {
    /// Return a human-readable name for this class.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Back => "back",
            Self::Forward => "forward",
            Self::Cross => "cross",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Frontier,
    Done,
}

/// Which vertices a search starts from, and in what order.
#[derive(Debug, Clone, Default)]
pub struct DfsOptions {
    visit_order: Option<Vec<VertexId>>,
}

impl DfsOptions {
    /// Visit every vertex, in insertion order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the search to `order`, starting new trees in that order.
    /// Neighbors outside `order` are never explored.
    pub fn visit_order(mut self, order: Vec<VertexId>) -> Self {
        self.visit_order = Some(order);
        self
    }
}

/// Result of a depth-first search.
#[derive(Debug, Clone)]
pub struct DepthFirstForest<V, S> {
    discovery: HashMap<VertexId, usize>,
    finish: HashMap<VertexId, usize>,
    predecessors: HashMap<VertexId, VertexId>,
    /// Latest-finished first.
    finish_order: Vec<VertexId>,
    edge_classes: HashMap<EdgeDescriptor, EdgeClass>,
    contains_cycle: bool,
    forest: Graph<V, S>,
}

impl<V, S: GraphEngine<V>> DepthFirstForest<V, S> {
    /// Timestamp at which `v` was discovered.
    pub fn discovery_time(&self, v: VertexId) -> Option<usize> {
        self.discovery.get(&v).copied()
    }

    /// Timestamp at which `v` was finished.
    pub fn finish_time(&self, v: VertexId) -> Option<usize> {
        self.finish.get(&v).copied()
    }

    /// Parent of `v` in the forest; `None` for roots and unvisited vertices.
    pub fn predecessor_of(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(&v).copied()
    }

    /// Visited vertices, latest-finished first.
    pub fn reverse_finish_order(&self) -> &[VertexId] {
        &self.finish_order
    }

    /// Class of the explored edge with this descriptor.
    pub fn edge_class(&self, descriptor: &EdgeDescriptor) -> Option<EdgeClass> {
        self.edge_classes.get(descriptor).copied()
    }

    /// Every classified edge.
    pub fn edge_classes(&self) -> &HashMap<EdgeDescriptor, EdgeClass> {
        &self.edge_classes
    }

    /// Whether a back edge was found.
    ///
    /// In an undirected multigraph two parallel edges form a cycle even
    /// though they share a single descriptor and only one of them is
    /// classified (as a tree edge).
    pub fn contains_cycle(&self) -> bool {
        self.contains_cycle
    }

    /// The depth-first forest (same direction as the input).
    pub fn forest(&self) -> &Graph<V, S> {
        &self.forest
    }

    /// Take the depth-first forest.
    pub fn into_forest(self) -> Graph<V, S> {
        self.forest
    }
}

struct Frame {
    vertex: VertexId,
    neighbors: Vec<VertexId>,
    next: usize,
}

/// Depth-first search over `graph`.
///
/// Fails with [`GraphError::InvalidVisitSubset`] if the requested visit order
/// names a vertex the graph does not contain.
pub fn depth_first_search<V: Clone, S: GraphEngine<V>>(
    graph: &Graph<V, S>,
    options: &DfsOptions,
) -> GraphResult<DepthFirstForest<V, S>> {
    let order: Vec<VertexId> = match &options.visit_order {
        Some(order) => {
            if let Some(missing) = order.iter().find(|v| !graph.has_vertex(**v)) {
                return Err(GraphError::InvalidVisitSubset(*missing));
            }
            order.clone()
        }
        None => graph.vertex_ids().collect(),
    };
    let allowed: Option<HashSet<VertexId>> =
        options.visit_order.as_ref().map(|order| order.iter().copied().collect());
    let in_scope = |v: VertexId| allowed.as_ref().map_or(true, |set| set.contains(&v));
    let undirected = !graph.is_directed();

    let mut colors: HashMap<VertexId, Color> = HashMap::new();
    let mut discovery: HashMap<VertexId, usize> = HashMap::new();
    let mut finish: HashMap<VertexId, usize> = HashMap::new();
    let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
    let mut finished: Vec<VertexId> = Vec::new();
    let mut edge_classes: HashMap<EdgeDescriptor, EdgeClass> = HashMap::new();
    let mut contains_cycle = false;
    let mut time = 0usize;

    let discover = |v: VertexId,
                    time: &mut usize,
                    colors: &mut HashMap<VertexId, Color>,
                    discovery: &mut HashMap<VertexId, usize>|
     -> Frame {
        *time += 1;
        discovery.insert(v, *time);
        colors.insert(v, Color::Frontier);
        Frame {
            vertex: v,
            neighbors: graph.neighbors(v).iter().filter(|n| in_scope(*n)).collect(),
            next: 0,
        }
    };

    for root in order {
        if colors.contains_key(&root) {
            continue;
        }
        let mut stack = vec![discover(root, &mut time, &mut colors, &mut discovery)];

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let Some(&v) = frame.neighbors.get(frame.next) else {
                // Every neighbor explored
                stack.pop();
                time += 1;
                finish.insert(u, time);
                colors.insert(u, Color::Done);
                finished.push(u);
                continue;
            };
            frame.next += 1;

            let descriptor = graph.descriptor(u, v);
            if undirected && edge_classes.contains_key(&descriptor) {
                // Already seen from the other endpoint (includes the parent edge)
                continue;
            }

            let class = match colors.get(&v) {
                None => EdgeClass::Tree,
                Some(Color::Frontier) => EdgeClass::Back,
                Some(Color::Done) => {
                    let du = discovery.get(&u).copied().unwrap_or(0);
                    let dv = discovery.get(&v).copied().unwrap_or(0);
                    if du < dv {
                        EdgeClass::Forward
                    } else {
                        EdgeClass::Cross
                    }
                }
            };
            log::trace!("dfs edge {} is {}", descriptor, class.name());
            edge_classes.entry(descriptor).or_insert(class);

            match class {
                EdgeClass::Tree => {
                    // Parallel undirected edges share one neighbor entry; any
                    // second copy of a tree edge leads back to `u`
                    if undirected && graph.engine().presence(&descriptor).len() > 1 {
                        contains_cycle = true;
                    }
                    predecessors.insert(v, u);
                    let child = discover(v, &mut time, &mut colors, &mut discovery);
                    stack.push(child);
                }
                EdgeClass::Back => contains_cycle = true,
                EdgeClass::Forward | EdgeClass::Cross => {}
            }
        }
    }

    log::debug!(
        "dfs visited {} vertices, classified {} edges, cycle: {}",
        finished.len(),
        edge_classes.len(),
        contains_cycle
    );

    let tree_edges = finished
        .iter()
        .filter_map(|v| predecessors.get(v).map(|parent| (*parent, *v)));
    let forest = predecessor_subgraph(graph, graph.direction(), finished.iter().copied(), tree_edges)?;
    finished.reverse();

    Ok(DepthFirstForest {
        discovery,
        finish,
        predecessors,
        finish_order: finished,
        edge_classes,
        contains_cycle,
        forest,
    })
}

/// Depth-first search over every vertex in insertion order.
pub fn dfs<V: Clone, S: GraphEngine<V>>(graph: &Graph<V, S>) -> GraphResult<DepthFirstForest<V, S>> {
    depth_first_search(graph, &DfsOptions::new())
}
