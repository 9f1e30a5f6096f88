//! `graphpath config` command - print the effective configuration

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphpath_core::config::Config;
use graphpath_core::error::{GraphPathError, Result};

/// Execute the config command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let path = match &ctx.cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    match ctx.cli.format {
        OutputFormat::Human => {
            let rendered = toml::to_string_pretty(ctx.config)
                .map_err(|e| GraphPathError::Other(format!("failed to render config: {}", e)))?;
            if !ctx.cli.quiet {
                println!("# {}", path.display());
            }
            print!("{}", rendered);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
                "config": ctx.config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
