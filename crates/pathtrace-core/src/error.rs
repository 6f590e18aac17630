//! Error types and exit codes for pathtrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Input error (malformed graph description, unknown node ids)

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes reported by the pathtrace binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - malformed graph description, unknown ids (3)
    Input = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathtrace operations
#[derive(Error, Debug)]
pub enum PathtraceError {
    // Usage errors (exit code 2)
    #[error("unknown algorithm: {0} (expected: bfs, dfs, dijkstra, astar)")]
    UnknownAlgorithm(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Input errors (exit code 3)
    #[error("graph description line {line}: {reason}")]
    InvalidGraphLine { line: usize, reason: String },

    #[error("unknown node id: {0}")]
    UnknownNode(NodeId),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl PathtraceError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            PathtraceError::UnknownAlgorithm(_)
            | PathtraceError::UnknownFormat(_)
            | PathtraceError::UsageError(_) => ExitCode::Usage,

            // Input errors
            PathtraceError::InvalidGraphLine { .. } | PathtraceError::UnknownNode(_) => {
                ExitCode::Input
            }

            // Generic failures
            PathtraceError::Io(_)
            | PathtraceError::Toml(_)
            | PathtraceError::Json(_)
            | PathtraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathtraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            PathtraceError::UnknownFormat(_) => "unknown_format",
            PathtraceError::UsageError(_) => "usage_error",
            PathtraceError::InvalidGraphLine { .. } => "invalid_graph_line",
            PathtraceError::UnknownNode(_) => "unknown_node",
            PathtraceError::Io(_) => "io_error",
            PathtraceError::Toml(_) => "toml_error",
            PathtraceError::Json(_) => "json_error",
            PathtraceError::Other(_) => "other",
        }
    }
}

/// Result type alias for pathtrace operations
pub type Result<T> = std::result::Result<T, PathtraceError>;
