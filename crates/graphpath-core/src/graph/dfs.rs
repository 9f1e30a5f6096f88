use std::collections::HashSet;

use crate::error::Result;
use crate::graph::model::is_placeholder;
use crate::graph::{Graph, Path};

/// A node on the current path together with how far through its
/// neighbor list the search has got.
struct Frame<'g> {
    neighbors: &'g [String],
    cursor: usize,
}

/// Find some path from `start` to `end` by depth-first search.
///
/// The walk keeps a path-so-far and, on entering a node, succeeds at once
/// if `end` is one of its neighbors. Otherwise it descends into the first
/// neighbor that is neither on the current path nor already visited, and
/// backtracks when a node runs out of neighbors. The first successful
/// branch wins, so the path is simple but not necessarily shortest.
///
/// The visited set spans the whole invocation and is not cleared on
/// backtrack: a node abandoned down one branch is never entered again
/// down another. Uses an explicit stack, so depth is not limited by the
/// call stack.
///
/// ```
/// use graphpath_core::graph::{dfs_search, Graph};
///
/// let graph = Graph::from_iter([
///     ("A", vec!["B", "D"]),
///     ("B", vec!["C"]),
///     ("C", vec!["E"]),
///     ("D", vec!["E"]),
///     ("E", vec![]),
/// ]);
/// let path = dfs_search(&graph, "A", "E").unwrap().unwrap();
/// assert_eq!(path.to_string(), "A -> B -> C -> E");
/// ```
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn dfs_search(graph: &Graph, start: &str, end: &str) -> Result<Option<Path>> {
    let start_neighbors = graph.neighbors(start)?;

    let mut path: Vec<&str> = vec![start];
    let mut on_path: HashSet<&str> = HashSet::from([start]);
    let mut visited: HashSet<&str> = HashSet::new();

    if let Some(found) = arrive(&path, start_neighbors, end) {
        tracing::debug!(nodes_visited = visited.len(), found = true, "dfs_search");
        return Ok(Some(found));
    }

    let mut stack: Vec<Frame> = vec![Frame {
        neighbors: start_neighbors,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let next = next_candidate(frame, &on_path, &visited);

        let Some(next) = next else {
            stack.pop();
            if let Some(node) = path.pop() {
                on_path.remove(node);
            }
            continue;
        };

        visited.insert(next);
        let neighbors = graph.neighbors(next)?;

        path.push(next);
        on_path.insert(next);

        if let Some(found) = arrive(&path, neighbors, end) {
            tracing::debug!(nodes_visited = visited.len(), found = true, "dfs_search");
            return Ok(Some(found));
        }

        stack.push(Frame {
            neighbors,
            cursor: 0,
        });
    }

    tracing::debug!(nodes_visited = visited.len(), found = false, "dfs_search");
    Ok(None)
}

/// Success checks on entering the last node of `path`.
fn arrive(path: &[&str], neighbors: &[String], end: &str) -> Option<Path> {
    let current = path.last().copied()?;

    if current == end {
        return Some(to_path(path));
    }

    if !is_placeholder(end) && neighbors.iter().any(|n| n == end) {
        let mut nodes = to_path(path).into_nodes();
        nodes.push(end.to_string());
        return Some(Path::new(nodes));
    }

    None
}

/// Advance `frame` to its next neighbor that may be entered.
fn next_candidate<'g>(
    frame: &mut Frame<'g>,
    on_path: &HashSet<&str>,
    visited: &HashSet<&str>,
) -> Option<&'g str> {
    while let Some(neighbor) = frame.neighbors.get(frame.cursor) {
        frame.cursor += 1;
        let neighbor = neighbor.as_str();
        if is_placeholder(neighbor) || on_path.contains(neighbor) || visited.contains(neighbor) {
            continue;
        }
        return Some(neighbor);
    }
    None
}

fn to_path(path: &[&str]) -> Path {
    Path::new(path.iter().map(|n| n.to_string()).collect())
}
