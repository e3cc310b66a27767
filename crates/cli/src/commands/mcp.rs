//! MCP server registry command handlers.
//!
//! The `mcp` group manages which MCP servers the agent knows about:
//! adding a server launcher under a name, removing one, and listing the
//! current registrations.

use std::path::Path;

use clap::{Args, Subcommand};
use uigen_agent::AgentCli;
use uigen_core::{config::AppConfig, AppResult};

use crate::format::ResultFormatter;
use crate::interact::Prompter;

/// Manage MCP server integration with the agent
#[derive(Args, Debug)]
pub struct McpCommand {
    #[command(subcommand)]
    pub command: McpSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum McpSubcommand {
    /// Register a new MCP server with the agent
    AddServer(AddServerArgs),

    /// Remove an MCP server from the agent
    RemoveServer(RemoveServerArgs),

    /// List all MCP servers currently registered with the agent
    ListServers,
}

#[derive(Args, Debug)]
pub struct AddServerArgs {
    /// Unique identifier for the MCP server
    #[arg(long)]
    pub server_name: Option<String>,

    /// File system path to the executable that launches the MCP server
    #[arg(long)]
    pub server_path: Option<String>,
}

#[derive(Args, Debug)]
pub struct RemoveServerArgs {
    /// Unique identifier for the MCP server
    #[arg(long)]
    pub server_name: Option<String>,
}

impl McpCommand {
    /// Execute the selected registry subcommand.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing mcp command");

        let agent = AgentCli::from_config(config);
        let prompter = Prompter::from_terminal();

        let outcome = match &self.command {
            McpSubcommand::AddServer(args) => {
                let name = prompter.resolve(args.server_name.clone(), "Server name", None)?;
                let path = prompter.resolve(args.server_path.clone(), "Server path", None)?;
                agent.add_server(&name, Path::new(&path)).await?
            }
            McpSubcommand::RemoveServer(args) => {
                let name = prompter.resolve(args.server_name.clone(), "Server name", None)?;
                agent.remove_server(&name).await?
            }
            McpSubcommand::ListServers => agent.list_servers().await?,
        };

        let formatter = ResultFormatter::new(config.verbose);
        if let Some(rendered) = formatter.render(&outcome) {
            println!("{}", rendered);
        }

        Ok(())
    }
}
