//! Graph model and path-finding
//!
//! - `model`: adjacency-list graph keyed by node identifier
//! - `bfs`: breadth-first search for a shortest path by edge count
//! - `dfs`: depth-first search for any simple path
//! - `path`: path type and route formatting

pub mod bfs;
pub mod dfs;
pub mod model;
pub mod path;
pub mod types;

pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use model::{is_placeholder, Graph};
pub use path::{format_path, Path, DEFAULT_SEPARATOR};
pub use types::{AlgorithmSelection, PathResult, SearchAlgorithm};
