//! JSON output formatting for search command

use graphpath_core::error::Result;
use graphpath_core::graph::PathResult;

/// Output in JSON format
pub fn output_json(results: &[PathResult]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}
