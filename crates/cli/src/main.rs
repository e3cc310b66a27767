//! UI Gen CLI
//!
//! Main entry point for the uigen command-line tool.
//! Provides commands for modular UI generation through the Claude Code
//! agent: driving generation runs, managing MCP server registration, and
//! running the shipped prompt servers.

mod commands;
mod format;
mod interact;

use clap::{Parser, Subcommand};
use commands::{GenerateCommand, McpCommand, ServeCommand};
use std::path::PathBuf;
use uigen_core::{config::AppConfig, logging, AppResult};

/// UI Gen CLI - modular UI generation prompts for Claude Code
#[derive(Parser, Debug)]
#[command(name = "uigen")]
#[command(about = "Modular UI generation prompts for Claude Code", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "UIGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug, detailed command results)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also honored via NO_COLOR)
    #[arg(long, global = true)]
    no_color: bool,

    /// External agent binary to invoke
    #[arg(long, global = true, env = "UIGEN_AGENT_BIN")]
    agent_bin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate user interfaces via the Claude Code agent
    Generate(GenerateCommand),

    /// Manage MCP server integration with the agent
    Mcp(McpCommand),

    /// Run a shipped MCP prompt server on stdio
    Serve(ServeCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load_from(cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.agent_bin,
        None,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );
    config.validate()?;

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    if config.no_color {
        colored::control::set_override(false);
    }

    // Log startup
    tracing::info!("UI Gen CLI starting");
    tracing::debug!("Agent binary: {}", config.agent_binary);
    tracing::debug!("Allowed tools: {}", config.allowed_tools_string());

    // Emit command.start span
    let command_name = match &cli.command {
        Commands::Generate(_) => "generate",
        Commands::Mcp(_) => "mcp",
        Commands::Serve(_) => "serve",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Generate(cmd) => cmd.execute(&config).await,
        Commands::Mcp(cmd) => cmd.execute(&config).await,
        Commands::Serve(cmd) => cmd.execute().await,
    };

    // Log completion
    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "uigen",
            "generate",
            "--mode",
            "manual",
            "--server-name",
            "ui_gen",
            "--server-prompt",
            "frontend_generation",
            "--user-prompt",
            "Build the landing page",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.mode.as_deref(), Some("manual"));
                assert_eq!(cmd.server_name.as_deref(), Some("ui_gen"));
                assert_eq!(cmd.server_prompt.as_deref(), Some("frontend_generation"));
                assert_eq!(cmd.user_prompt.as_deref(), Some("Build the landing page"));
                assert!(cmd.allowed_tools.is_none());
            }
            other => panic!("expected generate command, got {:?}", other),
        }
    }

    #[test]
    fn test_mode_rejects_unknown_values() {
        let result = Cli::try_parse_from(["uigen", "generate", "--mode", "turbo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mcp_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "uigen",
            "mcp",
            "add-server",
            "--server-name",
            "demo",
            "--server-path",
            "/usr/local/bin/uigen",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Mcp(_)));

        let cli = Cli::try_parse_from(["uigen", "mcp", "list-servers"]).unwrap();
        assert!(matches!(cli.command, Commands::Mcp(_)));
    }

    #[test]
    fn test_serve_profile_parses() {
        let cli = Cli::try_parse_from(["uigen", "serve", "--profile", "builtin"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_global_verbose_flag() {
        let cli = Cli::try_parse_from(["uigen", "-v", "mcp", "list-servers"]).unwrap();
        assert!(cli.verbose);
    }
}
