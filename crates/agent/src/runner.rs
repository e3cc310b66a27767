//! Subprocess runner for the external agent binary.
//!
//! [`AgentCli`] is the single point where this tool shells out. It knows
//! which binary to call (normally `claude`, overridable through
//! configuration) and offers two run modes: captured, for registry
//! commands whose output we display ourselves, and streaming, for
//! interactive generation sessions that own the terminal.

use tokio::process::Command;
use tracing::{debug, warn};
use uigen_core::{AppConfig, AppError, AppResult};

use crate::outcome::CommandOutcome;

/// Handle for invoking the agent binary.
#[derive(Debug, Clone)]
pub struct AgentCli {
    binary: String,
}

impl AgentCli {
    /// Create a runner for the given binary name or path.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Create a runner using the binary configured for the application.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.agent_binary.clone())
    }

    /// The binary this runner invokes.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run the agent with output captured.
    ///
    /// The returned outcome carries stdout and stderr regardless of exit
    /// status. Only a failure to launch the binary is an error.
    pub async fn run_captured(&self, args: &[String]) -> AppResult<CommandOutcome> {
        let command = self.render(args);
        debug!(binary = %self.binary, args = ?args, "running agent command");

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .await
            .map_err(|err| {
                AppError::Agent(format!("failed to launch '{}': {}", self.binary, err))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string();
        let stderr = String::from_utf8_lossy(&output.stderr)
            .trim_end()
            .to_string();

        if !output.status.success() {
            warn!(command = %command, stderr = %stderr, "agent command failed");
        }

        Ok(CommandOutcome::new(
            output.status.success(),
            command,
            stdout,
            stderr,
        ))
    }

    /// Run the agent with stdio inherited from this process.
    ///
    /// Used for interactive sessions where the agent must talk to the
    /// user's terminal directly. Nothing is captured; the outcome only
    /// records the command and its exit status.
    pub async fn run_streaming(&self, args: &[String]) -> AppResult<CommandOutcome> {
        let command = self.render(args);
        debug!(binary = %self.binary, args = ?args, "running agent command with inherited stdio");

        let status = Command::new(&self.binary)
            .args(args)
            .status()
            .await
            .map_err(|err| {
                AppError::Agent(format!("failed to launch '{}': {}", self.binary, err))
            })?;

        if !status.success() {
            warn!(command = %command, code = ?status.code(), "agent command exited with failure");
        }

        Ok(CommandOutcome::inherited(status.success(), command))
    }

    /// Render the full command line for logs and outcome reporting.
    /// Arguments containing whitespace are quoted.
    fn render(&self, args: &[String]) -> String {
        let mut parts = Vec::with_capacity(args.len() + 1);
        parts.push(self.binary.clone());
        for arg in args {
            if arg.contains(char::is_whitespace) {
                parts.push(format!("\"{}\"", arg));
            } else {
                parts.push(arg.clone());
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_render_joins_plain_arguments() {
        let agent = AgentCli::new("claude");
        assert_eq!(
            agent.render(&args(&["mcp", "list"])),
            "claude mcp list"
        );
    }

    #[test]
    fn test_render_quotes_arguments_with_whitespace() {
        let agent = AgentCli::new("claude");
        assert_eq!(
            agent.render(&args(&["/ui:gen (MCP) hello", "--allowedTools", "Bash,Edit"])),
            "claude \"/ui:gen (MCP) hello\" --allowedTools Bash,Edit"
        );
    }

    #[test]
    fn test_from_config_uses_configured_binary() {
        let mut config = AppConfig::default();
        config.agent_binary = "claude-dev".to_string();
        assert_eq!(AgentCli::from_config(&config).binary(), "claude-dev");
    }

    #[tokio::test]
    async fn test_run_captured_collects_stdout() {
        let agent = AgentCli::new("echo");
        let outcome = agent.run_captured(&args(&["hello", "world"])).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.command, "echo hello world");
        assert_eq!(outcome.stdout, "hello world");
        assert!(outcome.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_run_captured_missing_binary_is_an_error() {
        let agent = AgentCli::new("uigen-no-such-binary");
        match agent.run_captured(&args(&["mcp", "list"])).await {
            Err(AppError::Agent(message)) => {
                assert!(message.contains("uigen-no-such-binary"));
            }
            other => panic!("expected launch error, got {:?}", other),
        }
    }
}
