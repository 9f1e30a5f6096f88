use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{GraphPathError, Result};
use crate::graph::path::reconstruct_path;
use crate::graph::{Graph, Path};

/// Find a shortest path (fewest edges) from `start` to `end`.
///
/// Returns `Ok(None)` when `end` is unreachable, including when `end` is
/// not a node of the graph. Fails with `NodeNotFound` when `start` is not
/// a node, or when a dangling neighbor has to be expanded.
///
/// Neighbors are visited in stored order and marked as soon as they are
/// discovered, so the first-listed neighbor wins ties:
/// `{A:[B,C], B:[D], C:[D]}` yields `A -> B -> D`.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs_search(graph: &Graph, start: &str, end: &str) -> Result<Option<Path>> {
    if !graph.contains(start) {
        return Err(GraphPathError::node_not_found(start));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            tracing::debug!(nodes_visited = visited.len(), found = true, "bfs_search");
            return Ok(reconstruct_path(start, end, &predecessors));
        }

        for neighbor in graph.neighbor_ids(current)? {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(nodes_visited = visited.len(), found = false, "bfs_search");
    Ok(None)
}
