//! `graphpath search` command - find a path between two nodes
//!
//! Runs the selected engines (BFS, DFS, or both in that order) over a
//! loaded graph and prints one result per engine.

pub mod format;

use tracing::debug;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use graphpath_core::error::{GraphPathError, Result};
use graphpath_core::graph::{AlgorithmSelection, Graph, PathResult};

use self::format::{output_human, output_json};

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let graph = ctx.load_graph(&args.file)?;

    let selection = args.algorithm.unwrap_or(ctx.config.algorithm);
    let separator = args
        .separator
        .as_deref()
        .unwrap_or(ctx.config.separator.as_str());

    if ctx.cli.verbose {
        debug!(from = %args.from, to = %args.to, %selection, separator, "search_params");
    }

    let results = run_searches(&graph, &args.from, &args.to, selection)?;
    trace_command!(ctx.start, "run_searches");

    match ctx.cli.format {
        OutputFormat::Human => output_human(&results, separator),
        OutputFormat::Json => output_json(&results),
    }
}

/// Run each selected engine from `from` to `to`.
///
/// Both endpoints must be nodes of `graph`.
pub fn run_searches(
    graph: &Graph,
    from: &str,
    to: &str,
    selection: AlgorithmSelection,
) -> Result<Vec<PathResult>> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(GraphPathError::node_not_found(node));
        }
    }

    selection
        .algorithms()
        .iter()
        .map(|&algorithm| -> Result<PathResult> {
            let path = algorithm.search(graph, from, to)?;
            debug!(%algorithm, found = path.is_some(), "search_complete");
            Ok(PathResult::new(algorithm, from, to, path))
        })
        .collect()
}
