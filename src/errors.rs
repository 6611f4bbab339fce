//! Unified application error type.
//! Stores, the chat dispatcher and the CLI all return AppError, so a failed
//! command can always be turned into a reply or an exit code in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid attendance status: {0}")]
    InvalidAttendanceStatus(String),

    #[error("Invalid employee status: {0}")]
    InvalidStatus(String),

    #[error("{0}")]
    Usage(String),

    // ---------------------------
    // Not-found conditions
    // ---------------------------
    #[error("No status found for {0}")]
    NoStatus(String),

    #[error("No attendance records found for {0}")]
    NoAttendance(String),

    #[error("Task {0} not found")]
    TaskNotFound(i64),

    // ---------------------------
    // Authorization
    // ---------------------------
    #[error("{0} is not allowed to approve tasks")]
    NotApprover(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by what the user typed or asked for, as opposed
    /// to storage or filesystem failures.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::InvalidAttendanceStatus(_)
                | AppError::InvalidStatus(_)
                | AppError::Usage(_)
                | AppError::NoStatus(_)
                | AppError::NoAttendance(_)
                | AppError::TaskNotFound(_)
                | AppError::NotApprover(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
