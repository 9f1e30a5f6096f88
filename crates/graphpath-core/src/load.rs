//! Graph loading from CSV edge lists
//!
//! Each row names a node followed by its neighbors:
//!
//! ```text
//! From,To
//! A,B,C
//! B,D
//! C,D,,
//! D
//! ```
//!
//! Rows may have different lengths. Neighbor lists are sorted with empty
//! placeholder entries last. A header row is recognized by its second
//! field matching the configured marker (`To` by default).

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::config::DEFAULT_HEADER_MARKER;
use crate::error::{GraphPathError, Result};
use crate::graph::{is_placeholder, Graph};
use crate::trace_time;

/// Options controlling how an edge list is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip rows whose second field equals this marker (None = keep every row)
    pub header_marker: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            header_marker: Some(DEFAULT_HEADER_MARKER.to_string()),
        }
    }
}

/// Load a graph from a CSV file on disk.
pub fn load_graph(path: &Path, opts: &LoadOptions) -> Result<Graph> {
    let start = Instant::now();

    if !path.is_file() {
        return Err(GraphPathError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let graph = parse_graph(file, opts).map_err(|e| match e {
        GraphPathError::Csv(err) => GraphPathError::invalid_graph(path, describe_csv_error(&err)),
        other => other,
    })?;

    if graph.is_empty() {
        return Err(GraphPathError::EmptyGraph {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "load_graph"
    );
    trace_time!(start, "load_graph");

    Ok(graph)
}

/// Parse a graph from any CSV source.
///
/// A later row for a node already seen replaces its neighbor list.
pub fn parse_graph<R: Read>(reader: R, opts: &LoadOptions) -> Result<Graph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = Graph::new();

    for record in csv_reader.records() {
        let record = record?;

        let Some(node) = record.get(0).filter(|node| !is_placeholder(node)) else {
            continue;
        };

        if is_header(&record, opts) {
            tracing::trace!(node, "skipping header row");
            continue;
        }

        let mut neighbors: Vec<String> = record.iter().skip(1).map(str::to_string).collect();
        sort_neighbors(&mut neighbors);

        if graph.insert(node, neighbors).is_some() {
            tracing::debug!(node, "node listed more than once, keeping last row");
        }
    }

    Ok(graph)
}

/// Sort lexicographically with placeholder entries last.
pub fn sort_neighbors(neighbors: &mut [String]) {
    neighbors.sort_by(|a, b| {
        is_placeholder(a)
            .cmp(&is_placeholder(b))
            .then_with(|| a.cmp(b))
    });
}

/// One line per node: `A [B, C]`, placeholders omitted.
pub fn render_graph(graph: &Graph) -> String {
    graph
        .iter()
        .map(|(node, neighbors)| {
            let listed: Vec<&str> = neighbors
                .iter()
                .map(String::as_str)
                .filter(|n| !is_placeholder(n))
                .collect();
            format!("{} [{}]\n", node, listed.join(", "))
        })
        .collect()
}

fn is_header(record: &csv::StringRecord, opts: &LoadOptions) -> bool {
    match (&opts.header_marker, record.get(1)) {
        (Some(marker), Some(second)) => second == marker,
        _ => false,
    }
}

fn describe_csv_error(err: &csv::Error) -> String {
    match err.position() {
        Some(pos) => format!("line {}: {}", pos.line(), err),
        None => err.to_string(),
    }
}
