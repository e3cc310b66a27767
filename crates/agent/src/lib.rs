//! Claude Code integration crate for the UI Gen CLI.
//!
//! This crate wraps the external `claude` binary behind a small typed
//! interface. It covers the two interactions the tool needs:
//!
//! - **Generation**: invoking a registered MCP server prompt through the
//!   agent's slash-command syntax, with the interactive session attached
//!   to the user's terminal.
//! - **Server registry**: adding, removing, and listing MCP servers via
//!   the agent's `mcp` subcommands, with output captured for display.
//!
//! Every invocation produces a [`CommandOutcome`] describing what was run
//! and how it went. Failures to launch the binary surface as errors;
//! non-zero exit codes do not, so callers can report them.
//!
//! # Example
//! ```no_run
//! use uigen_agent::{AgentCli, GenerationRequest};
//!
//! # async fn example() -> uigen_core::AppResult<()> {
//! let agent = AgentCli::new("claude");
//! let request = GenerationRequest::new("ui_gen", "frontend_generation")
//!     .with_user_prompt("Build the landing page");
//! let outcome = agent.generate(&request).await?;
//! println!("exited ok: {}", outcome.success);
//! # Ok(())
//! # }
//! ```

pub mod generate;
pub mod outcome;
pub mod registry;
pub mod runner;

// Re-export main types
pub use generate::GenerationRequest;
pub use outcome::CommandOutcome;
pub use runner::AgentCli;
