//! Error types and exit codes for graphpath
//!
//! Exit codes:
//! - 0: Success (including "no path found")
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unusable interactive input)
//! - 3: Data error (missing file, malformed graph, unknown node)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing file, bad graph, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading or searching a graph
#[derive(Error, Debug)]
pub enum GraphPathError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, or both)")]
    UnknownAlgorithm(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("file not found: {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    #[error("graph in {path:?} has no nodes")]
    EmptyGraph { path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphPathError {
    /// Create an error for a node missing from the graph
    pub fn node_not_found(id: impl Into<String>) -> Self {
        GraphPathError::NodeNotFound { id: id.into() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphPathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph file that could not be parsed
    pub fn invalid_graph(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphPathError::InvalidGraph {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphPathError::UsageError(_)
            | GraphPathError::UnknownAlgorithm(_)
            | GraphPathError::InvalidValue { .. } => ExitCode::Usage,

            GraphPathError::NodeNotFound { .. }
            | GraphPathError::FileNotFound { .. }
            | GraphPathError::InvalidGraph { .. }
            | GraphPathError::EmptyGraph { .. } => ExitCode::Data,

            GraphPathError::Io(_)
            | GraphPathError::Csv(_)
            | GraphPathError::Json(_)
            | GraphPathError::Toml(_)
            | GraphPathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphPathError::UsageError(_) => "usage_error",
            GraphPathError::UnknownAlgorithm(_) => "unknown_algorithm",
            GraphPathError::InvalidValue { .. } => "invalid_value",
            GraphPathError::NodeNotFound { .. } => "node_not_found",
            GraphPathError::FileNotFound { .. } => "file_not_found",
            GraphPathError::InvalidGraph { .. } => "invalid_graph",
            GraphPathError::EmptyGraph { .. } => "empty_graph",
            GraphPathError::Io(_) => "io_error",
            GraphPathError::Csv(_) => "csv_error",
            GraphPathError::Json(_) => "json_error",
            GraphPathError::Toml(_) => "toml_error",
            GraphPathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphpath operations
pub type Result<T> = std::result::Result<T, GraphPathError>;
