//! CLI command implementations.
//!
//! Every command renders its report to a `String` (plain text or pretty
//! JSON) so the binary only prints and picks the exit code.

use std::collections::HashMap;

use indexmap::IndexSet;
use thiserror::Error;

use crate::algorithms::{
    all_pairs_shortest_paths, breadth_first_search, dfs, minimum_spanning_tree,
    single_source_shortest_paths, strongly_connected_components, topological_sort,
    AllPairsAlgorithm, MinSpanTreeAlgorithm, SingleSourceAlgorithm,
};
use crate::graph::Graph;
use crate::types::{Capabilities, EdgeDescriptor, EdgeDirection, GraphError, VertexId, INFINITY};

/// Weight of an edge spec written without `:weight`.
pub const CLI_DEFAULT_WEIGHT: f64 = 1.0;

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Malformed edge spec, unknown vertex name or conflicting options.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The algorithm refused the graph or failed on it.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 3 for bad input, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 3,
            Self::Graph(_) | Self::Json(_) => 1,
        }
    }
}

/// Convenience result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// One parsed command-line edge or vertex spec.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeSpec {
    /// `A`: an isolated vertex.
    Vertex(String),
    /// `A>B[:w]` (directed) or `A-B[:w]` (undirected).
    Edge {
        from: String,
        to: String,
        direction: EdgeDirection,
        weight: f64,
    },
}

/// Parse `A`, `A>B`, `A-B`, `A>B:2.5` or `A-B:-1`.
///
/// Directed specs may use hyphenated names (`node-1>node-2`); undirected
/// ones may not, since `a-b-c` has no single reading.
pub fn parse_edge_spec(spec: &str) -> CliResult<EdgeSpec> {
    let invalid = |reason: &str| CliError::InvalidInput(format!("'{}': {}", spec, reason));

    let (pair, weight) = match spec.split_once(':') {
        Some((pair, weight)) => {
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| invalid("weight is not a number"))?;
            (pair, weight)
        }
        None => (spec, CLI_DEFAULT_WEIGHT),
    };

    // `>` wins over `-` so directed specs may use hyphenated names
    let (from, to, direction) = if let Some((from, to)) = pair.split_once('>') {
        if to.contains('>') {
            return Err(invalid("more than one '>'"));
        }
        (from, to, EdgeDirection::Directed)
    } else if let Some((from, to)) = pair.split_once('-') {
        if to.contains('-') {
            return Err(invalid("ambiguous undirected edge, more than one '-'"));
        }
        (from, to, EdgeDirection::Undirected)
    } else {
        let name = pair.trim();
        if name.is_empty() {
            return Err(invalid("empty vertex name"));
        }
        return Ok(EdgeSpec::Vertex(name.to_owned()));
    };

    let from = from.trim();
    let to = to.trim();
    if from.is_empty() || to.is_empty() {
        return Err(invalid("missing endpoint"));
    }
    Ok(EdgeSpec::Edge {
        from: from.to_owned(),
        to: to.to_owned(),
        direction,
        weight,
    })
}

/// A graph built from edge specs, with vertex names resolvable to ids.
#[derive(Debug, Clone)]
pub struct GraphInput {
    graph: Graph,
    names: HashMap<String, VertexId>,
    rejected: usize,
}

impl GraphInput {
    /// Build a graph from specs. Direction comes from the specs (`>` or `-`);
    /// mixing both is invalid. Edges the policy rejects are counted, not fatal.
    pub fn from_specs(specs: &[String], multi_edges: bool, self_loops: bool) -> CliResult<Self> {
        let parsed: Vec<EdgeSpec> = specs
            .iter()
            .map(|s| parse_edge_spec(s))
            .collect::<CliResult<_>>()?;

        let mut direction = None;
        for spec in &parsed {
            if let EdgeSpec::Edge { direction: d, .. } = spec {
                match direction {
                    Some(existing) if existing != *d => {
                        return Err(CliError::InvalidInput(
                            "cannot mix directed (>) and undirected (-) edges".into(),
                        ))
                    }
                    _ => direction = Some(*d),
                }
            }
        }
        let direction = direction.unwrap_or(EdgeDirection::Directed);

        let mut graph: Graph = Graph::new(Capabilities::new(direction, multi_edges, self_loops));
        let mut names: HashMap<String, VertexId> = HashMap::new();
        let mut rejected = 0;
        for spec in parsed {
            match spec {
                EdgeSpec::Vertex(name) => {
                    intern(&mut graph, &mut names, &name);
                }
                EdgeSpec::Edge {
                    from, to, weight, ..
                } => {
                    let u = intern(&mut graph, &mut names, &from);
                    let v = intern(&mut graph, &mut names, &to);
                    if !graph.connect(u, v, weight)?.is_added() {
                        rejected += 1;
                    }
                }
            }
        }
        Ok(Self {
            graph,
            names,
            rejected,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of specs the graph policy refused.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Id of the vertex called `name`.
    pub fn resolve(&self, name: &str) -> CliResult<VertexId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CliError::InvalidInput(format!("unknown vertex '{}'", name)))
    }

    /// Display name of `id`.
    pub fn name(&self, id: VertexId) -> String {
        self.graph
            .vertex(id)
            .and_then(|v| v.tag())
            .map_or_else(|| id.to_string(), str::to_owned)
    }

    fn names(&self, ids: impl IntoIterator<Item = VertexId>) -> Vec<String> {
        ids.into_iter().map(|id| self.name(id)).collect()
    }
}

fn intern(graph: &mut Graph, names: &mut HashMap<String, VertexId>, name: &str) -> VertexId {
    if let Some(id) = names.get(name) {
        return *id;
    }
    let id = graph.create_tagged_vertex(name, ());
    names.insert(name.to_owned(), id);
    id
}

fn render(json: bool, value: &serde_json::Value, text: String) -> CliResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text)
    }
}

fn format_distance(d: f64) -> String {
    if d == INFINITY {
        "inf".to_owned()
    } else {
        format!("{}", d)
    }
}

/// Breadth-first search from `source`.
pub fn cmd_bfs(input: &GraphInput, source: &str, json: bool) -> CliResult<String> {
    let source = input.resolve(source)?;
    let result = breadth_first_search(input.graph(), source)?;

    let rows: Vec<(String, usize, Option<String>)> = result
        .discovery_order()
        .map(|v| {
            (
                input.name(v),
                result.distance_of(v).unwrap_or(0),
                result.predecessor_of(v).map(|p| input.name(p)),
            )
        })
        .collect();

    let visited: Vec<serde_json::Value> = rows
        .iter()
        .map(|(name, depth, parent)| serde_json::json!({"vertex": name, "depth": depth, "parent": parent}))
        .collect();
    let value = serde_json::json!({
        "source": input.name(source),
        "visited": visited,
    });
    let mut text = format!("BFS from {} ({} reached)", input.name(source), rows.len());
    for (name, depth, parent) in &rows {
        text.push_str(&format!(
            "\n  {} depth {} parent {}",
            name,
            depth,
            parent.as_deref().unwrap_or("-")
        ));
    }
    render(json, &value, text)
}

/// Depth-first search over the whole graph.
pub fn cmd_dfs(input: &GraphInput, json: bool) -> CliResult<String> {
    let result = dfs(input.graph())?;
    let order = input.names(result.reverse_finish_order().iter().copied());

    // One line per descriptor; parallel edges share a class
    let mut seen: IndexSet<EdgeDescriptor> = IndexSet::new();
    let classes: Vec<(String, &'static str)> = input
        .graph()
        .edges()
        .iter()
        .filter(|e| seen.insert(e.descriptor()))
        .filter_map(|e| {
            result
                .edge_class(&e.descriptor())
                .map(|class| (describe(input, e.v1(), e.v2()), class.name()))
        })
        .collect();

    let edges: Vec<serde_json::Value> = classes
        .iter()
        .map(|(edge, class)| serde_json::json!({"edge": edge, "class": class}))
        .collect();
    let value = serde_json::json!({
        "finish_order": order,
        "contains_cycle": result.contains_cycle(),
        "edges": edges,
    });
    let mut text = format!(
        "DFS reverse finish order: {}\nCycle: {}",
        order.join(" "),
        if result.contains_cycle() { "yes" } else { "no" }
    );
    for (edge, class) in &classes {
        text.push_str(&format!("\n  {} {}", edge, class));
    }
    render(json, &value, text)
}

fn describe(input: &GraphInput, u: VertexId, v: VertexId) -> String {
    let arrow = if input.graph().is_directed() { ">" } else { "-" };
    format!("{}{}{}", input.name(u), arrow, input.name(v))
}

/// Topological order of a directed acyclic graph.
pub fn cmd_topo(input: &GraphInput, json: bool) -> CliResult<String> {
    let order = input.names(topological_sort(input.graph())?);
    let value = serde_json::json!({ "order": order });
    render(json, &value, order.join(" "))
}

/// Strongly connected components.
pub fn cmd_scc(input: &GraphInput, json: bool) -> CliResult<String> {
    let components: Vec<Vec<String>> = strongly_connected_components(input.graph())?
        .into_iter()
        .map(|set| input.names(set))
        .collect();
    let value = serde_json::json!({ "components": components });
    let mut text = format!("{} strongly connected components", components.len());
    for component in &components {
        text.push_str(&format!("\n  {{{}}}", component.join(", ")));
    }
    render(json, &value, text)
}

/// Single-source shortest paths.
pub fn cmd_sssp(
    input: &GraphInput,
    source: &str,
    algorithm: SingleSourceAlgorithm,
    json: bool,
) -> CliResult<String> {
    let source = input.resolve(source)?;
    let result = single_source_shortest_paths(input.graph(), source, algorithm)?;

    let rows: Vec<serde_json::Value> = result
        .entries()
        .into_iter()
        .map(|entry| {
            serde_json::json!({
                "vertex": input.name(entry.vertex),
                "distance": entry.distance,
                "path": result.path_to(entry.vertex).map(|p| input.names(p)),
            })
        })
        .collect();
    let value = serde_json::json!({
        "algorithm": algorithm.name(),
        "source": input.name(source),
        "distances": rows,
    });

    let mut text = format!("{} from {}", algorithm, input.name(source));
    for (v, d) in result.distances() {
        let path = result
            .path_to(v)
            .map(|p| input.names(p).join(" > "))
            .unwrap_or_else(|| "unreachable".to_owned());
        text.push_str(&format!("\n  {} {} ({})", input.name(v), format_distance(d), path));
    }
    render(json, &value, text)
}

/// All-pairs shortest paths.
pub fn cmd_apsp(input: &GraphInput, algorithm: AllPairsAlgorithm, json: bool) -> CliResult<String> {
    let result = all_pairs_shortest_paths(input.graph(), algorithm)?;
    let header = input.names(result.vertex_index().ids().iter().copied());

    let matrix: Vec<Vec<Option<f64>>> = result
        .distances()
        .iter()
        .map(|row| row.iter().map(|d| (*d != INFINITY).then_some(*d)).collect())
        .collect();
    let value = serde_json::json!({
        "algorithm": algorithm.name(),
        "vertices": header,
        "distances": matrix,
    });

    let mut text = format!("{}\n\t{}", algorithm, header.join("\t"));
    for (name, row) in header.iter().zip(result.distances()) {
        let cells: Vec<String> = row.iter().map(|d| format_distance(*d)).collect();
        text.push_str(&format!("\n{}\t{}", name, cells.join("\t")));
    }
    render(json, &value, text)
}

/// Minimum spanning tree (or forest).
pub fn cmd_mst(input: &GraphInput, algorithm: MinSpanTreeAlgorithm, json: bool) -> CliResult<String> {
    let forest = minimum_spanning_tree(input.graph(), algorithm)?;
    let edges: Vec<(String, f64)> = forest
        .edges()
        .iter()
        .map(|e| (describe(input, e.v1(), e.v2()), e.weight()))
        .collect();

    let rows: Vec<serde_json::Value> = edges
        .iter()
        .map(|(edge, weight)| serde_json::json!({"edge": edge, "weight": weight}))
        .collect();
    let value = serde_json::json!({
        "algorithm": algorithm.name(),
        "total_weight": forest.total_weight(),
        "edges": rows,
    });
    let mut text = format!("{} total weight {}", algorithm, forest.total_weight());
    for (edge, weight) in &edges {
        text.push_str(&format!("\n  {} {}", edge, weight));
    }
    render(json, &value, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_edge_spec() {
        assert_eq!(
            parse_edge_spec("A>B:2.5").unwrap(),
            EdgeSpec::Edge {
                from: "A".into(),
                to: "B".into(),
                direction: EdgeDirection::Directed,
                weight: 2.5
            }
        );
        assert_eq!(
            parse_edge_spec("A-B:-1").unwrap(),
            EdgeSpec::Edge {
                from: "A".into(),
                to: "B".into(),
                direction: EdgeDirection::Undirected,
                weight: -1.0
            }
        );
        assert_eq!(parse_edge_spec("solo").unwrap(), EdgeSpec::Vertex("solo".into()));
        assert!(matches!(parse_edge_spec("A>B:x"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_edge_spec(">B"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_hyphenated_names() {
        assert_eq!(
            parse_edge_spec("node-1>node-2:3").unwrap(),
            EdgeSpec::Edge {
                from: "node-1".into(),
                to: "node-2".into(),
                direction: EdgeDirection::Directed,
                weight: 3.0
            }
        );
        assert_eq!(
            parse_edge_spec("a-b>c").unwrap(),
            EdgeSpec::Edge {
                from: "a-b".into(),
                to: "c".into(),
                direction: EdgeDirection::Directed,
                weight: 1.0
            }
        );

        let input = GraphInput::from_specs(&specs(&["node-1>node-2"]), false, false).unwrap();
        let u = input.resolve("node-1").unwrap();
        let v = input.resolve("node-2").unwrap();
        assert!(input.graph().has_edge(u, v));
        assert_eq!(input.graph().vertex_count(), 2);
    }

    #[test]
    fn test_parse_ambiguous_separators() {
        for spec in ["a>b>c", "node-1-node-2", "a-b-c:2", "a>>b"] {
            let err = parse_edge_spec(spec).unwrap_err();
            assert!(matches!(err, CliError::InvalidInput(_)), "{}", spec);
            assert_eq!(err.exit_code(), 3);
        }
        let err = GraphInput::from_specs(&specs(&["a>b>c"]), false, false).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_dfs_lists_parallel_edges_once() {
        let input =
            GraphInput::from_specs(&specs(&["a-b:1", "b-c:1", "a-b:2"]), true, false).unwrap();
        assert_eq!(input.graph().edge_count(), 3);

        let out = cmd_dfs(&input, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let edges = value["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0]["edge"], "a-b");
        assert_eq!(edges[1]["edge"], "b-c");

        let text = cmd_dfs(&input, false).unwrap();
        assert_eq!(text.matches("a-b").count(), 1);
    }

    #[test]
    fn test_mixed_directions_are_invalid() {
        let err = GraphInput::from_specs(&specs(&["A>B", "B-C"]), false, false).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_topo_and_cycle_failure() {
        let input = GraphInput::from_specs(&specs(&["a>b", "b>c"]), false, false).unwrap();
        assert_eq!(cmd_topo(&input, false).unwrap(), "a b c");

        let cyclic = GraphInput::from_specs(&specs(&["a>b", "b>a"]), false, false).unwrap();
        let err = cmd_topo(&cyclic, false).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_mst_json_reports_total_weight() {
        let input =
            GraphInput::from_specs(&specs(&["a-b:1", "b-c:2", "a-c:5"]), false, false).unwrap();
        let out = cmd_mst(&input, MinSpanTreeAlgorithm::Kruskal, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_weight"], 3.0);
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_source_is_invalid_input() {
        let input = GraphInput::from_specs(&specs(&["a>b"]), false, false).unwrap();
        let err = cmd_bfs(&input, "zzz", false).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_duplicate_specs_are_counted() {
        let input = GraphInput::from_specs(&specs(&["a>b", "a>b:3"]), false, false).unwrap();
        assert_eq!(input.rejected(), 1);
        assert_eq!(input.graph().edge_count(), 1);
    }
}
