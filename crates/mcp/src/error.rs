//! Error types for server assembly.

use thiserror::Error;
use uigen_core::AppError;
use uigen_prompt::ComposeError;

/// Errors raised while building a prompt server.
///
/// Assembly is all-or-nothing: the first failing prompt aborts the build
/// and no server is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// Two prompts were registered under the same name.
    #[error("duplicate prompt name '{0}'")]
    DuplicateName(String),

    /// A prompt's component list failed to compose.
    #[error("prompt '{name}' failed to compose: {source}")]
    Compose {
        /// Name of the prompt whose composition failed.
        name: String,
        /// The underlying composition failure.
        source: ComposeError,
    },
}

impl From<FactoryError> for AppError {
    fn from(err: FactoryError) -> Self {
        AppError::Mcp(err.to_string())
    }
}
