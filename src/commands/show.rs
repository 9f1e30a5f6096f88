//! `graphpath show` command - print a loaded graph

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphpath_core::error::Result;
use graphpath_core::load::render_graph;

/// Execute the show command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = ctx.load_graph(file)?;

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", render_graph(&graph)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
    }

    Ok(())
}
