//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{AlgorithmSelection, DEFAULT_SEPARATOR};

/// Default value of the CSV header marker (`From,To`)
pub const DEFAULT_HEADER_MARKER: &str = "To";

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Separator placed between nodes when printing a path
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Which search engines to run when none is requested explicitly
    #[serde(default)]
    pub algorithm: AlgorithmSelection,

    /// A row whose second field equals this marker is a header and is skipped
    #[serde(default = "default_header_marker")]
    pub header_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            algorithm: AlgorithmSelection::default(),
            header_marker: default_header_marker(),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_header_marker() -> String {
    DEFAULT_HEADER_MARKER.to_string()
}
