//! Error types and exit codes for rota
//!
//! Exit codes:
//! - 0: Success (including searches that find no path)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed edge table, unknown vertex)

mod macros;

use thiserror::Error;

/// Exit codes for the rota binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running route queries
#[derive(Error, Debug)]
pub enum RotaError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: bfs, dfs, dls, ids, bidi, ucs, or dijkstra)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed edge record {record}: {reason}")]
    MalformedInput { record: usize, reason: String },

    #[error("malformed location record {record}: {reason}")]
    MalformedLocation { record: usize, reason: String },

    #[error("unknown vertex: {id}")]
    UnknownVertex { id: String },

    #[error("no edge table configured (use --edges or set `edges` in rota.toml)")]
    MissingEdgeTable,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RotaError {
    /// Create an error for a malformed edge record
    pub fn malformed(record: usize, reason: impl std::fmt::Display) -> Self {
        RotaError::MalformedInput {
            record,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a vertex that is not part of the graph
    pub fn unknown_vertex(id: impl Into<String>) -> Self {
        RotaError::UnknownVertex { id: id.into() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RotaError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            RotaError::UnknownFormat(_)
            | RotaError::UnknownStrategy(_)
            | RotaError::UsageError(_) => ExitCode::Usage,

            // Data errors
            RotaError::MalformedInput { .. }
            | RotaError::MalformedLocation { .. }
            | RotaError::UnknownVertex { .. }
            | RotaError::MissingEdgeTable => ExitCode::Data,

            // Generic failures
            RotaError::Io(_)
            | RotaError::Csv(_)
            | RotaError::Json(_)
            | RotaError::Toml(_)
            | RotaError::TomlSer(_)
            | RotaError::FailedOperationWithTarget { .. }
            | RotaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RotaError::UnknownFormat(_) => "unknown_format",
            RotaError::UnknownStrategy(_) => "unknown_strategy",
            RotaError::UsageError(_) => "usage_error",
            RotaError::MalformedInput { .. } => "malformed_input",
            RotaError::MalformedLocation { .. } => "malformed_location",
            RotaError::UnknownVertex { .. } => "unknown_vertex",
            RotaError::MissingEdgeTable => "missing_edge_table",
            RotaError::Io(_) => "io_error",
            RotaError::Csv(_) => "csv_error",
            RotaError::Json(_) => "json_error",
            RotaError::Toml(_) | RotaError::TomlSer(_) => "toml_error",
            RotaError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RotaError::Other(_) => "other",
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

/// Result type alias for rota operations
pub type Result<T> = std::result::Result<T, RotaError>;
