use serde::{Deserialize, Serialize};

use crate::error::{GraphPathError, Result};
use crate::graph::{bfs_search, dfs_search, Graph, Path};

/// A single search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    /// Breadth-first: shortest path by edge count
    Bfs,
    /// Depth-first: first path found, not necessarily shortest
    Dfs,
}

impl SearchAlgorithm {
    /// Run this engine over `graph`
    pub fn search(self, graph: &Graph, start: &str, end: &str) -> Result<Option<Path>> {
        match self {
            SearchAlgorithm::Bfs => bfs_search(graph, start, end),
            SearchAlgorithm::Dfs => dfs_search(graph, start, end),
        }
    }

    /// Heading used when printing this engine's result
    pub fn title(self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "Breadth-first search",
            SearchAlgorithm::Dfs => "Depth-first search",
        }
    }
}

impl std::fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchAlgorithm::Bfs => write!(f, "bfs"),
            SearchAlgorithm::Dfs => write!(f, "dfs"),
        }
    }
}

/// Which engines a command should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmSelection {
    Bfs,
    Dfs,
    /// BFS first, then DFS
    #[default]
    Both,
}

impl AlgorithmSelection {
    /// Engines to run, in output order
    pub fn algorithms(self) -> &'static [SearchAlgorithm] {
        match self {
            AlgorithmSelection::Bfs => &[SearchAlgorithm::Bfs],
            AlgorithmSelection::Dfs => &[SearchAlgorithm::Dfs],
            AlgorithmSelection::Both => &[SearchAlgorithm::Bfs, SearchAlgorithm::Dfs],
        }
    }
}

impl std::str::FromStr for AlgorithmSelection {
    type Err = GraphPathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(AlgorithmSelection::Bfs),
            "dfs" => Ok(AlgorithmSelection::Dfs),
            "both" => Ok(AlgorithmSelection::Both),
            other => Err(GraphPathError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl std::fmt::Display for AlgorithmSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmSelection::Bfs => write!(f, "bfs"),
            AlgorithmSelection::Dfs => write!(f, "dfs"),
            AlgorithmSelection::Both => write!(f, "both"),
        }
    }
}

/// Outcome of one engine run, shaped for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub algorithm: SearchAlgorithm,
    pub from: String,
    pub to: String,
    pub found: bool,
    pub path: Vec<String>,
    /// Number of edges on the path (0 when not found)
    pub path_length: usize,
}

impl PathResult {
    pub fn new(algorithm: SearchAlgorithm, from: &str, to: &str, path: Option<Path>) -> Self {
        let (found, path_length, path) = match path {
            Some(path) => (true, path.edge_count(), path.into_nodes()),
            None => (false, 0, Vec::new()),
        };
        PathResult {
            algorithm,
            from: from.to_string(),
            to: to.to_string(),
            found,
            path,
            path_length,
        }
    }
}
