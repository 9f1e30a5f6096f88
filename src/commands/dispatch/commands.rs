//! Command implementations for all graphpath commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use graphpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => crate::commands::search::execute(ctx, args),
            Commands::Show { file } => crate::commands::show::execute(ctx, file),
            Commands::Interactive { file } => {
                crate::commands::interactive::execute(ctx, file.as_deref())
            }
            Commands::Config => crate::commands::config::execute(ctx),
        }
    }
}
