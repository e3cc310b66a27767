//! Generate command handler.
//!
//! Drives a UI generation run through the agent. Values not given on the
//! command line are prompted for interactively when stdin is a terminal.

use clap::Args;
use uigen_agent::{AgentCli, GenerationRequest};
use uigen_core::config::{parse_allowed_tools, AppConfig};
use uigen_core::{AppError, AppResult};

use crate::format::ResultFormatter;
use crate::interact::Prompter;

/// Generate user interfaces via the Claude Code agent
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Generation mode: 'manual' for explicit control over the agent
    /// session, 'auto' for automated generation (under development)
    #[arg(long, value_parser = ["manual", "auto"])]
    pub mode: Option<String>,

    /// MCP server name used to locate the predefined prompt
    #[arg(long)]
    pub server_name: Option<String>,

    /// Predefined prompt name used as a system-level instruction for the agent
    #[arg(long)]
    pub server_prompt: Option<String>,

    /// User input prompt to include in the generation context (can be empty)
    #[arg(long)]
    pub user_prompt: Option<String>,

    /// Comma-separated list of tool names the agent is allowed to use
    #[arg(long)]
    pub allowed_tools: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing generate command");
        tracing::debug!("Generate command options: {:?}", self);

        let prompter = Prompter::from_terminal();

        let mode = prompter.resolve(self.mode.clone(), "Generation mode", Some("manual"))?;
        match mode.to_lowercase().as_str() {
            "manual" => {}
            "auto" => {
                println!("Auto mode is under development. Stay tuned!");
                return Ok(());
            }
            other => {
                return Err(AppError::Config(format!(
                    "Unknown generation mode '{}' (expected 'manual' or 'auto')",
                    other
                )));
            }
        }

        let server_name = prompter.resolve(self.server_name.clone(), "Server name", None)?;
        let server_prompt = prompter.resolve(self.server_prompt.clone(), "Server prompt", None)?;
        let user_prompt = prompter.resolve(self.user_prompt.clone(), "User prompt", Some(""))?;

        let default_tools = config.allowed_tools_string();
        let allowed_tools = prompter.resolve(
            self.allowed_tools.clone(),
            "Allowed tools",
            Some(&default_tools),
        )?;

        let request = GenerationRequest::new(server_name, server_prompt)
            .with_user_prompt(user_prompt)
            .with_allowed_tools(parse_allowed_tools(&allowed_tools));

        tracing::debug!("Generation request: {:?}", request);

        // The agent owns the terminal for the whole session.
        let agent = AgentCli::from_config(config);
        let outcome = agent.generate(&request).await?;

        let formatter = ResultFormatter::new(config.verbose);
        if let Some(rendered) = formatter.render(&outcome) {
            println!("{}", rendered);
        }

        Ok(())
    }
}
