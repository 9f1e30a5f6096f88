//! Path type, route formatting and predecessor-based reconstruction

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Separator used between nodes when no other is configured
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Ordered sequence of nodes from start to end inclusive.
///
/// Never empty: a search from a node to itself yields a single-node path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    pub(crate) fn new(nodes: Vec<String>) -> Self {
        debug_assert!(!nodes.is_empty(), "a path holds at least its start node");
        Path(nodes)
    }

    /// Build a path from node identifiers.
    ///
    /// Returns `None` for an empty sequence.
    #[cfg(test)]
    pub(crate) fn try_from_nodes<I, S>(nodes: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let nodes: Vec<String> = nodes.into_iter().map(Into::into).collect();
        if nodes.is_empty() {
            None
        } else {
            Some(Path(nodes))
        }
    }

    #[cfg(test)]
    pub(crate) fn from_nodes<const N: usize>(nodes: [&str; N]) -> Self {
        Path(nodes.iter().map(|n| n.to_string()).collect())
    }

    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    pub fn into_nodes(self) -> Vec<String> {
        self.0
    }

    pub fn start(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges on the path
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Join the nodes with `separator`
    pub fn join(&self, separator: &str) -> String {
        format_path(&self.0, separator)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DEFAULT_SEPARATOR))
    }
}

/// Join node identifiers into a route string, e.g. `A -> B -> D`.
pub fn format_path<S: AsRef<str>>(nodes: &[S], separator: &str) -> String {
    nodes
        .iter()
        .map(|node| node.as_ref())
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Walk a predecessor map back from `to` and return the forward path.
///
/// `predecessors` maps each discovered node to the node it was reached
/// from. Returns `None` if the chain breaks before reaching `from`.
pub(crate) fn reconstruct_path(
    from: &str,
    to: &str,
    predecessors: &HashMap<&str, &str>,
) -> Option<Path> {
    let mut nodes = vec![to.to_string()];
    let mut current = to;

    while current != from {
        let pred = predecessors.get(current)?;
        nodes.push(pred.to_string());
        current = *pred;
    }

    nodes.reverse();
    Some(Path::new(nodes))
}
