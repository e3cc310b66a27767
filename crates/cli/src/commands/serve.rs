//! Serve command handler.
//!
//! Runs one of the shipped MCP prompt servers on stdio. This is the
//! entry point a registered server launcher ultimately executes; stdout
//! carries the protocol, so all diagnostics go to stderr via tracing.

use clap::{Args, ValueEnum};
use uigen_core::AppResult;
use uigen_mcp::Profile;

/// Run a shipped MCP prompt server on stdio
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Which shipped server to run
    #[arg(long, value_enum, default_value = "default")]
    pub profile: ServeProfile,
}

/// CLI wrapper for the shipped server profiles.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServeProfile {
    /// Single-prompt server for the standard generation workflow
    Default,

    /// Full catalog of Next.js generation prompts
    Builtin,
}

impl From<ServeProfile> for Profile {
    fn from(profile: ServeProfile) -> Self {
        match profile {
            ServeProfile::Default => Profile::Default,
            ServeProfile::Builtin => Profile::Builtin,
        }
    }
}

impl ServeCommand {
    /// Execute the serve command.
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing serve command");

        let server = Profile::from(self.profile).server()?;
        tracing::info!(
            server = %server.name(),
            prompts = server.len(),
            "profile server built"
        );

        server.serve_stdio().await
    }
}
