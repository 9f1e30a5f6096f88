//! `graphpath interactive` - prompt for a graph file and two nodes
//!
//! Also runs when no subcommand is given. Prompts repeat until the
//! answer is usable; running out of input is a usage error.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::paths::resolve_file;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::search::format::write_human;
use crate::commands::search::run_searches;
use graphpath_core::bail_usage;
use graphpath_core::error::Result;
use graphpath_core::graph::{AlgorithmSelection, Graph, PathResult};
use graphpath_core::load::{load_graph, LoadOptions};

const FILE_PROMPT: &str = "Please enter file name with extension: ";
const FILE_RETRY: &str = "File not found, please try again.";

/// Which end of the search a node prompt asks for
#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    fn label(self) -> &'static str {
        match self {
            Endpoint::Start => "starting",
            Endpoint::End => "ending",
        }
    }
}

/// Execute the interactive session on stdin/stdout
pub fn execute(ctx: &CommandContext, file: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session {
        input: stdin.lock(),
        output: stdout.lock(),
        root: ctx.root.clone(),
        load_options: ctx.config.load_options(),
        separator: ctx.config.separator.clone(),
        selection: ctx.config.algorithm,
    };

    let results = session.run(file)?;
    trace_command!(ctx.start, "interactive_session");
    debug!(engines = results.len(), "interactive_complete");
    Ok(())
}

/// A prompt-driven search over any line source and sink
pub struct Session<R, W> {
    pub input: R,
    pub output: W,
    /// Base directory for relative file names
    pub root: PathBuf,
    pub load_options: LoadOptions,
    pub separator: String,
    pub selection: AlgorithmSelection,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Run the whole session and return what was printed
    pub fn run(&mut self, file: Option<&Path>) -> Result<Vec<PathResult>> {
        let path = match file {
            Some(file) => resolve_file(&self.root, file),
            None => self.prompt_file()?,
        };

        writeln!(self.output, "Loading...")?;
        let graph = load_graph(&path, &self.load_options)?;

        let from = self.prompt_node(&graph, Endpoint::Start)?;
        let to = self.prompt_node(&graph, Endpoint::End)?;

        let results = run_searches(&graph, &from, &to, self.selection)?;

        writeln!(self.output)?;
        write_human(&mut self.output, &results, &self.separator)?;
        self.output.flush()?;

        Ok(results)
    }

    fn prompt_file(&mut self) -> Result<PathBuf> {
        let mut answer = self.ask(FILE_PROMPT)?;
        loop {
            let path = resolve_file(&self.root, Path::new(&answer));
            if !answer.is_empty() && path.is_file() {
                return Ok(path);
            }
            writeln!(self.output, "{}", FILE_RETRY)?;
            answer = self.ask(FILE_PROMPT)?;
        }
    }

    fn prompt_node(&mut self, graph: &Graph, endpoint: Endpoint) -> Result<String> {
        let range = format!(
            "{}-{}",
            graph.first_node().unwrap_or_default(),
            graph.last_node().unwrap_or_default()
        );
        let mut answer = self.ask(&format!("Enter {} node({}): ", endpoint.label(), range))?;

        while !graph.contains(&answer) {
            writeln!(
                self.output,
                "Not a valid {} node, please try again.",
                endpoint.label()
            )?;
            answer = self.ask(&format!("Enter {} node: ", endpoint.label()))?;
        }

        Ok(answer)
    }

    /// Print `prompt` and read one trimmed line
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail_usage!("unexpected end of input while prompting");
        }
        Ok(line.trim().to_string())
    }
}
