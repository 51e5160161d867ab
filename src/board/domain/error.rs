//! Error types for parsing board domain values.

use thiserror::Error;

/// Error returned while parsing a task status from free-form input or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
