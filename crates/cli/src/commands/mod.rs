//! Command handlers for the UI Gen CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod generate;
pub mod mcp;
pub mod serve;

// Re-export command types for convenience
pub use generate::GenerateCommand;
pub use mcp::McpCommand;
pub use serve::ServeCommand;
