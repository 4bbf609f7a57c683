//! Error types for task draft validation and parsing.

use thiserror::Error;

/// Errors returned while building or finalizing task drafts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The due date input is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// The duration is not a positive number of minutes.
    #[error("invalid duration {0}, expected a positive number of minutes")]
    InvalidDuration(u32),
}

/// Error returned while parsing a draft field name from form input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown draft field: {0}")]
pub struct ParseDraftFieldError(pub String);

/// Error returned while parsing a list identifier from form input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid list identifier: {0}")]
pub struct ParseListIdError(pub String);
