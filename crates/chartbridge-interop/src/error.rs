//! Error types for the foreign boundary

use chartbridge_core::PipelineError;
use thiserror::Error;

/// Result type for interop operations
pub type Result<T> = std::result::Result<T, InteropError>;

/// Failures of a single call across the boundary
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// The runtime has no function under this name
    #[error("Entry point not found: {0}")]
    EntryPointNotFound(String),

    /// The foreign function ran and failed
    #[error("Foreign call '{entry_point}' failed: {message}")]
    Foreign { entry_point: String, message: String },

    /// The foreign function answered with the wrong shape
    #[error("Entry point '{entry_point}' returned {found}")]
    UnexpectedResult { entry_point: String, found: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors that can occur in interop operations
#[derive(Debug, Error)]
pub enum InteropError {
    /// Payload preparation errors
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Boundary call errors
    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
