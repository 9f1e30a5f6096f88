//! CLI argument parsing for graphpath
//!
//! Supports global flags: --root, --config, --format, --quiet, --verbose

pub mod output;
pub mod parse;
pub mod paths;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use graphpath_core::graph::AlgorithmSelection;
pub use output::OutputFormat;
use parse::{parse_algorithm, parse_separator};

/// graphpath - find routes through a CSV-defined graph with BFS and DFS
#[derive(Parser, Debug)]
#[command(name = "graphpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving relative graph file paths
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file to use instead of ~/.config/graphpath/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace) or full directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two nodes
    Search(SearchArgs),

    /// Print the nodes and neighbors of a graph file
    Show {
        /// CSV edge list
        file: PathBuf,
    },

    /// Prompt for a graph file and two nodes, then search (default)
    Interactive {
        /// CSV edge list (prompted for when omitted)
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// CSV edge list
    pub file: PathBuf,

    /// Starting node
    pub from: String,

    /// Ending node
    pub to: String,

    /// Search engine(s) to run: bfs, dfs, or both
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<AlgorithmSelection>,

    /// Separator placed between nodes in the printed path
    #[arg(long, short, value_parser = parse_separator)]
    pub separator: Option<String>,
}
