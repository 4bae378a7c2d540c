// Graph traversals, shortest paths and minimum spanning trees

use super::GraphState;
use crate::step::Step;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

/// Node/edge list with canvas coordinates. Neighbor order is edge-list order.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub directed: bool,
}

impl Graph {
    pub fn new(nodes: &[(&str, f64, f64)], edges: &[(usize, usize, u32)], directed: bool) -> Self {
        Graph {
            nodes: nodes
                .iter()
                .map(|&(label, x, y)| Node {
                    label: label.to_string(),
                    x,
                    y,
                })
                .collect(),
            edges: edges
                .iter()
                .map(|&(from, to, weight)| Edge { from, to, weight })
                .collect(),
            directed,
        }
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.label.eq_ignore_ascii_case(label.trim()))
    }

    pub fn label(&self, index: usize) -> &str {
        self.nodes.get(index).map_or("?", |n| n.label.as_str())
    }

    /// Outgoing `(neighbor, weight)` lists; undirected edges appear in both directions
    pub fn adjacency(&self) -> Vec<Vec<(usize, u32)>> {
        let mut adj = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            if edge.from >= self.nodes.len() || edge.to >= self.nodes.len() {
                continue;
            }
            adj[edge.from].push((edge.to, edge.weight));
            if !self.directed {
                adj[edge.to].push((edge.from, edge.weight));
            }
        }
        adj
    }

    /// Same nodes, new edges
    pub fn with_edges(&self, edges: Vec<Edge>) -> Graph {
        Graph {
            nodes: self.nodes.clone(),
            edges,
            directed: self.directed,
        }
    }
}

/// Six-node tree used by BFS and DFS
pub fn traversal_graph() -> Graph {
    Graph::new(
        &[
            ("A", 400.0, 50.0),
            ("B", 250.0, 150.0),
            ("C", 550.0, 150.0),
            ("D", 150.0, 250.0),
            ("E", 350.0, 250.0),
            ("F", 650.0, 250.0),
        ],
        &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (1, 4, 1), (2, 5, 1)],
        false,
    )
}

pub fn dijkstra_graph() -> Graph {
    Graph::new(
        &[
            ("A", 100.0, 250.0),
            ("B", 300.0, 100.0),
            ("C", 300.0, 400.0),
            ("D", 500.0, 100.0),
            ("E", 500.0, 400.0),
            ("F", 700.0, 250.0),
        ],
        &[
            (0, 1, 4),
            (0, 2, 2),
            (1, 2, 1),
            (1, 3, 5),
            (2, 3, 8),
            (2, 4, 10),
            (3, 4, 2),
            (3, 5, 6),
            (4, 5, 3),
        ],
        true,
    )
}

pub fn prim_graph() -> Graph {
    Graph::new(
        &[
            ("0", 200.0, 100.0),
            ("1", 400.0, 100.0),
            ("2", 200.0, 300.0),
            ("3", 400.0, 300.0),
            ("4", 600.0, 200.0),
        ],
        &[
            (0, 1, 2),
            (0, 2, 6),
            (1, 2, 8),
            (1, 3, 5),
            (1, 4, 10),
            (2, 3, 8),
            (3, 4, 15),
        ],
        false,
    )
}

fn format_cost(cost: Option<u64>) -> String {
    cost.map_or_else(|| "∞".to_string(), |c| c.to_string())
}

fn missing_start(graph: &Graph, start: usize) -> Vec<Step<GraphState>> {
    vec![
        Step::new(
            GraphState::default(),
            format!("Graph has {} node(s)", graph.nodes.len()),
        ),
        Step::new(
            GraphState::default(),
            format!("Start node {start} is not in the graph"),
        ),
    ]
}

fn parent_edges(parent: &[Option<usize>]) -> Vec<(usize, usize)> {
    parent
        .iter()
        .enumerate()
        .filter_map(|(v, p)| p.map(|u| (u, v)))
        .collect()
}

pub fn bfs(graph: &Graph, start: usize) -> Vec<Step<GraphState>> {
    if start >= graph.nodes.len() {
        return missing_start(graph, start);
    }
    let adj = graph.adjacency();
    let mut seen = vec![false; graph.nodes.len()];
    let mut queue = VecDeque::from([start]);
    let mut state = GraphState {
        visited: vec![start],
        frontier: vec![start],
        ..Default::default()
    };
    seen[start] = true;

    let mut steps = vec![Step::new(
        state.clone(),
        format!("Starting BFS from node {} ({start})", graph.label(start)),
    )];

    while let Some(u) = queue.pop_front() {
        state.current = Some(u);
        state.frontier = queue.iter().copied().collect();
        state.active_edge = None;
        steps.push(Step::new(
            state.clone(),
            format!("Dequeued node {}", graph.label(u)),
        ));

        for &(v, _) in &adj[u] {
            if seen[v] {
                continue;
            }
            seen[v] = true;
            queue.push_back(v);
            state.visited.push(v);
            state.frontier = queue.iter().copied().collect();
            state.active_edge = Some((u, v));
            state.tree_edges.push((u, v));
            steps.push(Step::new(
                state.clone(),
                format!(
                    "Exploring edge from {} to {}",
                    graph.label(u),
                    graph.label(v)
                ),
            ));
        }
    }

    state.current = None;
    state.active_edge = None;
    state.frontier.clear();
    steps.push(Step::new(state, "BFS traversal complete!"));
    steps
}

/// Recursive DFS unrolled onto a stack of `(node, next neighbor slot)` frames
pub fn dfs(graph: &Graph, start: usize) -> Vec<Step<GraphState>> {
    if start >= graph.nodes.len() {
        return missing_start(graph, start);
    }
    let adj = graph.adjacency();
    let mut seen = vec![false; graph.nodes.len()];
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    let mut state = GraphState::default();
    seen[start] = true;

    let mut steps = vec![Step::new(
        state.clone(),
        format!("Starting DFS from node {} ({start})", graph.label(start)),
    )];
    state.visited.push(start);
    state.current = Some(start);
    state.frontier = vec![start];
    steps.push(Step::new(
        state.clone(),
        format!("Visiting node {}", graph.label(start)),
    ));

    while let Some(&(u, slot)) = stack.last() {
        let next = adj[u]
            .iter()
            .enumerate()
            .skip(slot)
            .find(|&(_, &(v, _))| !seen[v])
            .map(|(i, &(v, _))| (i, v));

        match next {
            Some((i, v)) => {
                if let Some(top) = stack.last_mut() {
                    top.1 = i + 1;
                }
                state.active_edge = Some((u, v));
                state.tree_edges.push((u, v));
                steps.push(Step::new(
                    state.clone(),
                    format!(
                        "Exploring edge from {} to {}",
                        graph.label(u),
                        graph.label(v)
                    ),
                ));

                seen[v] = true;
                stack.push((v, 0));
                state.visited.push(v);
                state.current = Some(v);
                state.active_edge = None;
                state.frontier = stack.iter().map(|&(n, _)| n).collect();
                steps.push(Step::new(
                    state.clone(),
                    format!("Visiting node {}", graph.label(v)),
                ));
            }
            None => {
                stack.pop();
                state.frontier = stack.iter().map(|&(n, _)| n).collect();
                state.current = stack.last().map(|&(n, _)| n);
                state.active_edge = None;
                steps.push(Step::new(
                    state.clone(),
                    format!("Backtracking from {}", graph.label(u)),
                ));
            }
        }
    }

    state.current = None;
    steps.push(Step::new(state, "DFS traversal complete!"));
    steps
}

/// Binary heap Dijkstra; equal distances pop in node index order
pub fn dijkstra(graph: &Graph, start: usize) -> Vec<Step<GraphState>> {
    if start >= graph.nodes.len() {
        return missing_start(graph, start);
    }
    let n = graph.nodes.len();
    let adj = graph.adjacency();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut done = vec![false; n];
    let mut heap = BinaryHeap::new();
    dist[start] = Some(0);
    heap.push(Reverse((0u64, start)));

    let labels = |dist: &[Option<u64>]| -> Vec<String> {
        dist.iter().map(|d| format_cost(*d)).collect()
    };
    let mut state = GraphState {
        labels: labels(&dist),
        frontier: vec![start],
        ..Default::default()
    };
    let mut steps = vec![Step::new(
        state.clone(),
        format!(
            "Initialized distances: {}=0, others=∞",
            graph.label(start)
        ),
    )];

    while let Some(Reverse((d, u))) = heap.pop() {
        if done[u] {
            continue;
        }
        done[u] = true;
        state.visited.push(u);
        state.current = Some(u);
        state.active_edge = None;
        state.frontier = heap.iter().map(|Reverse((_, v))| *v).filter(|v| !done[*v]).collect();
        steps.push(Step::new(
            state.clone(),
            format!("Shortest distance to {} finalized as {d}", graph.label(u)),
        ));

        for &(v, w) in &adj[u] {
            if done[v] {
                continue;
            }
            state.active_edge = Some((u, v));
            steps.push(Step::new(
                state.clone(),
                format!(
                    "Checking neighbor {} (dist: {}) via {}",
                    graph.label(v),
                    format_cost(dist[v]),
                    graph.label(u)
                ),
            ));

            let candidate = d + u64::from(w);
            if dist[v].map_or(true, |current| candidate < current) {
                dist[v] = Some(candidate);
                parent[v] = Some(u);
                heap.push(Reverse((candidate, v)));
                state.labels = labels(&dist);
                state.tree_edges = parent_edges(&parent);
                if !state.frontier.contains(&v) {
                    state.frontier.push(v);
                }
                steps.push(Step::new(
                    state.clone(),
                    format!(
                        "Relaxed edge {}->{}. Updated {} distance to {candidate}",
                        graph.label(u),
                        graph.label(v),
                        graph.label(v)
                    ),
                ));
            }
        }
    }

    state.current = None;
    state.active_edge = None;
    state.frontier.clear();
    steps.push(Step::new(
        state,
        "Dijkstra initialized and all reachable nodes finalized.",
    ));
    steps
}

/// Prim with an O(V²) minimum key scan; ties go to the lowest index
pub fn prim(graph: &Graph, start: usize) -> Vec<Step<GraphState>> {
    if start >= graph.nodes.len() {
        return missing_start(graph, start);
    }
    let n = graph.nodes.len();
    let adj = graph.adjacency();
    let mut key: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    key[start] = Some(0);

    let labels = |key: &[Option<u64>]| -> Vec<String> {
        key.iter().map(|k| format_cost(*k)).collect()
    };
    let mut state = GraphState {
        labels: labels(&key),
        ..Default::default()
    };
    let mut steps = vec![Step::new(
        state.clone(),
        format!("Initialized keys: {}=0, others=∞", graph.label(start)),
    )];

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .filter_map(|v| key[v].map(|k| (k, v)))
            .min();
        let Some((_, u)) = next else {
            break;
        };

        in_tree[u] = true;
        state.visited.push(u);
        state.current = Some(u);
        state.active_edge = None;
        state.tree_edges = parent_edges(&parent)
            .into_iter()
            .filter(|&(_, v)| in_tree[v])
            .collect();
        steps.push(Step::new(
            state.clone(),
            format!("Added node {} to MST.", graph.label(u)),
        ));

        for &(v, w) in &adj[u] {
            if in_tree[v] {
                continue;
            }
            state.active_edge = Some((u, v));
            steps.push(Step::new(
                state.clone(),
                format!(
                    "Checking edge {}-{} (weight {w})",
                    graph.label(u),
                    graph.label(v)
                ),
            ));

            let weight = u64::from(w);
            if key[v].map_or(true, |current| weight < current) {
                key[v] = Some(weight);
                parent[v] = Some(u);
                state.labels = labels(&key);
                steps.push(Step::new(
                    state.clone(),
                    format!(
                        "Updated key of node {} to {w} (via {})",
                        graph.label(v),
                        graph.label(u)
                    ),
                ));
            }
        }
    }

    state.current = None;
    state.active_edge = None;
    let total = tree_weight(graph, &state.tree_edges);
    steps.push(Step::new(
        state,
        format!("Prim's Algorithm complete. MST formed with total weight {total}."),
    ));
    steps
}

/// Total weight of the given tree edges
pub fn tree_weight(graph: &Graph, tree: &[(usize, usize)]) -> u64 {
    tree.iter()
        .filter_map(|&(u, v)| {
            graph
                .edges
                .iter()
                .filter(|e| {
                    (e.from == u && e.to == v) || (!graph.directed && e.from == v && e.to == u)
                })
                .map(|e| u64::from(e.weight))
                .min()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_level_order() {
        let steps = bfs(&traversal_graph(), 0);
        let last = steps.last().unwrap();
        assert_eq!(last.state.visited, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(steps[0].message, "Starting BFS from node A (0)");
        assert_eq!(last.message, "BFS traversal complete!");
    }

    #[test]
    fn test_dfs_depth_order_with_backtracks() {
        let steps = dfs(&traversal_graph(), 0);
        let last = steps.last().unwrap();
        assert_eq!(last.state.visited, vec![0, 1, 3, 4, 2, 5]);
        let backtracks = steps
            .iter()
            .filter(|s| s.message.starts_with("Backtracking"))
            .count();
        assert_eq!(backtracks, 6);
    }

    #[test]
    fn test_dijkstra_distances() {
        let steps = dijkstra(&dijkstra_graph(), 0);
        let last = steps.last().unwrap();
        assert_eq!(last.state.labels, vec!["0", "4", "2", "9", "11", "14"]);
        assert_eq!(last.state.visited, vec![0, 2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_dijkstra_unreachable_stays_infinite() {
        let graph = dijkstra_graph();
        let steps = dijkstra(&graph, 5);
        let last = steps.last().unwrap();
        assert_eq!(last.state.labels[0], "∞");
        assert_eq!(last.state.visited, vec![5]);
    }

    #[test]
    fn test_prim_mst_weight() {
        let graph = prim_graph();
        let steps = prim(&graph, 0);
        let last = steps.last().unwrap();
        assert_eq!(last.state.tree_edges.len(), 4);
        assert_eq!(tree_weight(&graph, &last.state.tree_edges), 2 + 5 + 6 + 10);
        assert_eq!(
            last.message,
            "Prim's Algorithm complete. MST formed with total weight 23."
        );
    }

    #[test]
    fn test_start_out_of_range() {
        let steps = bfs(&traversal_graph(), 9);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].message, "Start node 9 is not in the graph");
    }

    #[test]
    fn test_index_of_ignores_case() {
        let graph = traversal_graph();
        assert_eq!(graph.index_of("c"), Some(2));
        assert_eq!(graph.index_of("Z"), None);
    }
}
