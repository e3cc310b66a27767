//! Error types for the UI Gen CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application, including configuration, I/O, prompt composition,
//! MCP server, and agent invocation errors.

use thiserror::Error;

/// Unified error type for the UI Gen CLI.
///
/// All functions in the application return `Result<T, AppError>`.
/// We never panic; errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Prompt composition errors
    #[error("Compose error: {0}")]
    Compose(String),

    /// MCP server construction and serving errors
    #[error("MCP error: {0}")]
    Mcp(String),

    /// External agent invocation errors
    #[error("Agent error: {0}")]
    Agent(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
