//! Error types for the payload pipeline

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while preparing a payload
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The graph could not be rendered to canonical text
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The text is not valid canonical form
    #[error("Parse error: {0}")]
    Parse(String),

    /// A known reference path holds a value that is not a recognized
    /// reference variant. Absorbed by the reinjector; only ever logged.
    #[error("Value at '{path}' is not a recognized reference ({found})")]
    ReinjectionTypeMismatch { path: String, found: String },
}

impl PipelineError {
    /// Create a new serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        PipelineError::Serialization(msg.into())
    }

    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        PipelineError::Parse(msg.into())
    }
}
