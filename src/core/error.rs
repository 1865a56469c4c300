//! Error types and error handling for sift.
//!
//! This module defines the error types used throughout the
//! crate. CLI-specific presentation is handled in the `cli`
//! adapter.

use thiserror::Error;

/// Result type alias for sift operations
pub type Result<T> = std::result::Result<T, SiftError>;

/// Main error type for sift
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The token stream did not supply enough operands or operators
    #[error("Malformed query: {stack} stack underflow during {phase}")]
    StackUnderflow {
        stack: &'static str,
        phase: &'static str,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Corpus error: {0}")]
    CorpusError(String),

    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SiftError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the query itself was structurally broken
    pub fn is_malformed_query(&self) -> bool {
        matches!(self, SiftError::StackUnderflow { .. })
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SiftError::InvalidQuery(_)
                | SiftError::StackUnderflow { .. }
                | SiftError::InvalidTopic(_)
                | SiftError::InvalidPath(_)
                | SiftError::ConfigError(_)
        )
    }
}
