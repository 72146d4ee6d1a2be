//! Core error types
//!
//! Noisy-data conditions (no detectable headings, out-of-range paragraph
//! windows, unknown entity tags, missing text fields) resolve to empty or
//! partial results and never surface here. Errors are reserved for caller
//! misuse at the configuration boundary.

use thiserror::Error;

/// Configuration-boundary errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A vocabulary pattern failed to compile
    #[error("invalid vocabulary pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
