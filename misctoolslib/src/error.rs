//! Error types for misctoolslib

use thiserror::Error;

/// Errors that can occur while shaping or formatting data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MisctoolsError {
    /// Malformed or missing required input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Table columns of unequal length
    #[error("column {column} has {found} rows, expected {expected}")]
    ShapeMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// No integers left to compress
    #[error("no integers to compress (input is empty after filtering)")]
    EmptyInput,

    /// No provider in the chain could supply the capability
    #[error("no provider for '{capability}' could be resolved (tried: {})", .tried.join(", "))]
    DependencyMissing {
        capability: String,
        tried: Vec<String>,
    },
}
