//! Error types for the draft domain.

use thiserror::Error;

/// Error returned when a field name does not match one of the draft fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown draft field: {0}")]
pub struct ParseDraftFieldError(pub String);
