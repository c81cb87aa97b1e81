//! Graph traversal algorithms (BFS, DFS).
//!
//! Neighbors are always expanded in ascending label order, so results are
//! fully deterministic. An unknown or blank start yields an empty sequence.

use std::collections::{HashSet, VecDeque};

use super::Graph;

/// BFS from `start`, returning each reachable vertex once in level order.
pub fn bfs(graph: &Graph, start: &str) -> Vec<String> {
    bfs_levels(graph, start)
        .into_iter()
        .map(|(label, _)| label)
        .collect()
}

/// BFS from `start`, pairing each visited vertex with its distance.
pub fn bfs_levels(graph: &Graph, start: &str) -> Vec<(String, usize)> {
    let Some(start) = graph.resolve(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
    let mut order: Vec<(String, usize)> = Vec::new();

    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        log::trace!("bfs visit {current} at depth {depth}");
        order.push((current.to_string(), depth));
        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    order
}

/// DFS from `start`, returning each reachable vertex once in pre-order.
///
/// Uses an explicit stack; neighbors are pushed in reverse so the smallest
/// label is explored first, matching the recursive definition.
pub fn dfs(graph: &Graph, start: &str) -> Vec<String> {
    let Some(start) = graph.resolve(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![start];
    let mut order: Vec<String> = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        log::trace!("dfs visit {current}");
        order.push(current.to_string());

        let unvisited: Vec<&str> = graph
            .neighbors(current)
            .filter(|n| !visited.contains(n))
            .collect();
        stack.extend(unvisited.into_iter().rev());
    }

    order
}
