//! MCP server registry operations.
//!
//! These wrap the agent's `mcp add`, `mcp remove`, and `mcp list`
//! subcommands. Output is captured so the CLI can present it through its
//! own formatting.

use std::path::Path;

use uigen_core::{AppError, AppResult};

use crate::outcome::CommandOutcome;
use crate::runner::AgentCli;

impl AgentCli {
    /// Register an MCP server launcher under the given name.
    ///
    /// The path must point to an existing executable; a missing path is
    /// rejected before anything is spawned.
    pub async fn add_server(&self, name: &str, path: &Path) -> AppResult<CommandOutcome> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "cannot register server '{}': path does not exist: {}",
                name,
                path.display()
            )));
        }

        let path_arg = path
            .to_str()
            .ok_or_else(|| {
                AppError::Config(format!(
                    "cannot register server '{}': path is not valid UTF-8",
                    name
                ))
            })?
            .to_string();

        let args = vec![
            "mcp".to_string(),
            "add".to_string(),
            name.to_string(),
            "--".to_string(),
            path_arg,
        ];
        self.run_captured(&args).await
    }

    /// Remove a registered MCP server by name.
    pub async fn remove_server(&self, name: &str) -> AppResult<CommandOutcome> {
        let args = vec!["mcp".to_string(), "remove".to_string(), name.to_string()];
        self.run_captured(&args).await
    }

    /// List all registered MCP servers.
    pub async fn list_servers(&self) -> AppResult<CommandOutcome> {
        let args = vec!["mcp".to_string(), "list".to_string()];
        self.run_captured(&args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_server_rejects_missing_path() {
        let agent = AgentCli::new("echo");
        let path = Path::new("/definitely/not/a/real/server/launcher");
        match agent.add_server("demo", path).await {
            Err(AppError::Config(message)) => {
                assert!(message.contains("demo"));
                assert!(message.contains("/definitely/not/a/real/server/launcher"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_server_builds_registration_command() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let agent = AgentCli::new("echo");
        let outcome = agent.add_server("demo", file.path()).await.unwrap();
        assert!(outcome.success);
        assert_eq!(
            outcome.stdout,
            format!("mcp add demo -- {}", file.path().display())
        );
    }

    #[tokio::test]
    async fn test_remove_server_command_shape() {
        let agent = AgentCli::new("echo");
        let outcome = agent.remove_server("demo").await.unwrap();
        assert_eq!(outcome.command, "echo mcp remove demo");
        assert_eq!(outcome.stdout, "mcp remove demo");
    }

    #[tokio::test]
    async fn test_list_servers_command_shape() {
        let agent = AgentCli::new("echo");
        let outcome = agent.list_servers().await.unwrap();
        assert_eq!(outcome.command, "echo mcp list");
    }
}
