//! Error handling module for the kst CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use kestrel_bigint::ArithmeticError;
use thiserror::Error;

/// Main error type for the kst CLI application.
#[derive(Error, Debug)]
pub enum KstError {
    /// Error when configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command execution fails.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when lexing produced malformed tokens and they were denied.
    #[error("Lex error: {0}")]
    Lex(String),

    /// Error when a big-integer result has no unsigned representation.
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using KstError.
pub type Result<T> = std::result::Result<T, KstError>;
