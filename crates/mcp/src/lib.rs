//! MCP server crate for the UI Gen CLI.
//!
//! This crate turns composed prompts into an MCP server that speaks the
//! Model Context Protocol over stdio. Prompt texts are assembled once,
//! when the server is built; the running server is an immutable catalog
//! that answers `prompts/list` and `prompts/get`.
//!
//! Servers are assembled through [`ServerFactory`], which collects prompt
//! specifications and composes all of them in one step. If any prompt
//! fails to compose, no server is produced. Two ready-made profiles are
//! shipped: a minimal default server and the full builtin catalog.
//!
//! # Example
//! ```no_run
//! use uigen_mcp::profiles;
//! use uigen_prompt::PromptComposer;
//!
//! # async fn example() -> uigen_core::AppResult<()> {
//! let composer = PromptComposer::with_defaults();
//! let server = profiles::builtin_server(&composer)?;
//! server.serve_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod factory;
pub mod profiles;
pub mod server;

// Re-export main types
pub use error::FactoryError;
pub use factory::ServerFactory;
pub use profiles::Profile;
pub use server::{PromptServer, ServedPrompt};
