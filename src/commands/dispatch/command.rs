//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_file;
use crate::cli::Cli;
use graphpath_core::config::Config;
use graphpath_core::error::Result;
use graphpath_core::graph::Graph;
use graphpath_core::load::load_graph;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, config: &'a Config, start: Instant) -> Self {
        Self {
            cli,
            root,
            config,
            start,
        }
    }

    /// Resolve a graph file against `--root`
    pub fn resolve(&self, file: &Path) -> PathBuf {
        resolve_file(self.root, file)
    }

    /// Resolve and load a graph file using the configured loader options
    pub fn load_graph(&self, file: &Path) -> Result<Graph> {
        let path = self.resolve(file);
        let graph = load_graph(&path, &self.config.load_options())?;
        trace_command!(self.start, "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Running without a subcommand starts the interactive session
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        crate::commands::interactive::execute(ctx, None)
    }
}
