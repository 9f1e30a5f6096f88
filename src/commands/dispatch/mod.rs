//! Command dispatch logic for graphpath

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use graphpath_core::config::Config;
use graphpath_core::error::Result;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());
    trace_command!(start, "resolve_root");

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    trace_command!(start, "load_config");

    let ctx = CommandContext::new(cli, &root, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
