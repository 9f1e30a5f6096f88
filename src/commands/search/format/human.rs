//! Human-readable output for search results

use std::io::{self, Write};

use graphpath_core::error::Result;
use graphpath_core::graph::{format_path, PathResult};

/// Message printed when an engine finds nothing
pub const NO_PATH_FOUND: &str = "No path was found";

/// Print results to stdout
pub fn output_human(results: &[PathResult], separator: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_human(&mut out, results, separator)?;
    Ok(())
}

/// Write each engine's heading followed by its path, blank line between engines
pub fn write_human<W: Write>(out: &mut W, results: &[PathResult], separator: &str) -> io::Result<()> {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", result.algorithm.title())?;
        if result.found {
            writeln!(out, "{}", format_path(&result.path, separator))?;
        } else {
            writeln!(out, "{}", NO_PATH_FOUND)?;
        }
    }
    Ok(())
}
