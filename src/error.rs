//! Unified error types for sbom-index.
//!
//! Only the fatal tier lives here. Per-file read and parse failures are
//! recoverable and use [`crate::parsers::ParseError`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-index operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IndexError {
    /// The configured SBOM root does not exist
    #[error("SBOM root directory does not exist: {}", path.display())]
    MissingRoot { path: PathBuf },

    /// The configured SBOM root exists but is not a directory
    #[error("SBOM root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Output serialization errors
    #[error("Failed to serialize component index: {context}")]
    Serialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for sbom-index operations
pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    /// Create a missing-root error
    pub fn missing_root(path: impl Into<PathBuf>) -> Self {
        Self::MissingRoot { path: path.into() }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error means the input tree is unusable.
    #[must_use]
    pub const fn is_root_error(&self) -> bool {
        matches!(self, Self::MissingRoot { .. } | Self::RootNotDirectory { .. })
    }
}

impl From<std::io::Error> for IndexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize {
            context: String::new(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost first, so a failure deep in the
/// emission stage reads like `"writing index: creating data: permission denied"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<IndexError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Root errors already name their path and are returned unchanged.
fn add_context_to_error(err: IndexError, new_ctx: &str) -> IndexError {
    match err {
        IndexError::Io {
            path,
            message,
            source,
        } => IndexError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        IndexError::Serialize {
            context: existing,
            source,
        } => IndexError::Serialize {
            context: chain_context(new_ctx, &existing),
            source,
        },
        IndexError::Config(msg) => IndexError::Config(chain_context(new_ctx, &msg)),
        IndexError::Validation(msg) => IndexError::Validation(chain_context(new_ctx, &msg)),
        root @ (IndexError::MissingRoot { .. } | IndexError::RootNotDirectory { .. }) => root,
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
