use std::path::PathBuf;

/// Result type alias for loadplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for loadplan operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Plan document structure errors
    #[error("invalid plan document: {message}")]
    Document { message: String },

    /// Metric key already present across the phase set
    #[error("metric '{key}' already exists")]
    DuplicateMetric { key: String },

    /// Metric key collides with a fixed phase field
    #[error("'{key}' is a reserved phase field and cannot be used as a metric")]
    ReservedMetric { key: String },

    /// Refusal to remove the last remaining phase
    #[error("a plan must keep at least one phase")]
    LastPhase,

    /// Phase index outside the plan's phase list
    #[error("phase index {index} out of range for {count} phases")]
    PhaseIndex { index: usize, count: usize },

    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

// Conversion implementations
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a plan document error
    #[must_use]
    pub fn document(message: impl Into<String>) -> Self {
        Error::Document {
            message: message.into(),
        }
    }

    /// Create a duplicate metric error
    #[must_use]
    pub fn duplicate_metric(key: impl Into<String>) -> Self {
        Error::DuplicateMetric { key: key.into() }
    }

    /// Create a reserved metric-key error
    #[must_use]
    pub fn reserved_metric(key: impl Into<String>) -> Self {
        Error::ReservedMetric { key: key.into() }
    }

    /// Create a phase index error
    #[must_use]
    pub fn phase_index(index: usize, count: usize) -> Self {
        Error::PhaseIndex { index, count }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Document {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Document {
                message: format!("{}: {}", f(), base_error),
            }
        })
    }
}
