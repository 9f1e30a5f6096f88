use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{GraphPathError, Result};

/// Returns true for neighbor entries that do not name a node.
///
/// Ragged CSV rows leave empty trailing fields behind; they are kept in
/// the adjacency lists but never treated as node identifiers.
pub fn is_placeholder(id: &str) -> bool {
    id.trim().is_empty()
}

/// Adjacency-list graph keyed by node identifier.
///
/// Nodes iterate in insertion order. Neighbor lists keep the order they
/// were inserted with; the search engines rely on that order being stable.
/// Neighbors are not required to be nodes themselves: a dangling neighbor
/// is only reported when a search has to expand it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known node count.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(node_count),
            order: Vec::with_capacity(node_count),
        }
    }

    /// Set the neighbor list of `node`.
    ///
    /// Replacing an existing node keeps its original position in
    /// [`Graph::nodes`]. Returns the previous neighbor list, if any.
    pub fn insert(
        &mut self,
        node: impl Into<String>,
        neighbors: Vec<String>,
    ) -> Option<Vec<String>> {
        let node = node.into();
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.adjacency.insert(node, neighbors)
    }

    /// Neighbors of `node` in stored order, placeholders included.
    pub fn neighbors(&self, node: &str) -> Result<&[String]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphPathError::node_not_found(node))
    }

    /// Neighbors of `node` in stored order with placeholders skipped.
    pub fn neighbor_ids<'g>(&'g self, node: &str) -> Result<impl Iterator<Item = &'g str> + 'g> {
        Ok(self
            .neighbors(node)?
            .iter()
            .map(String::as_str)
            .filter(|id| !is_placeholder(id)))
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Node identifiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn first_node(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn last_node(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges, not counting placeholder entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .values()
            .map(|neighbors| neighbors.iter().filter(|n| !is_placeholder(n)).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes paired with their neighbor lists, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order.iter().filter_map(|node| {
            self.adjacency
                .get(node)
                .map(|neighbors| (node.as_str(), neighbors.as_slice()))
        })
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for Graph
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Vec<V>)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (node, neighbors) in iter {
            graph.insert(node, neighbors.into_iter().map(Into::into).collect());
        }
        graph
    }
}

/// Serializes as a map of node to neighbors in insertion order, with
/// placeholder entries omitted.
impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.node_count()))?;
        for (node, neighbors) in self.iter() {
            let real: Vec<&str> = neighbors
                .iter()
                .map(String::as_str)
                .filter(|n| !is_placeholder(n))
                .collect();
            map.serialize_entry(node, &real)?;
        }
        map.end()
    }
}
