//! Generation invocations against a registered MCP server.
//!
//! A generation run asks the agent to execute one of the prompts a server
//! exposes, using the agent's slash-command syntax. The session is
//! interactive, so stdio is handed to the terminal rather than captured.

use uigen_core::config::DEFAULT_ALLOWED_TOOLS;
use uigen_core::AppResult;

use crate::outcome::CommandOutcome;
use crate::runner::AgentCli;

/// A single generation invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Name of the MCP server holding the prompt.
    pub server_name: String,

    /// Name of the server prompt that supplies system-level instructions.
    pub prompt_name: String,

    /// Free-form user input appended to the prompt. May be empty.
    pub user_prompt: String,

    /// Tools the agent is allowed to use during the run.
    pub allowed_tools: Vec<String>,
}

impl GenerationRequest {
    /// Create a request targeting a server prompt, with no user prompt
    /// and the default tool allowlist.
    pub fn new(server_name: impl Into<String>, prompt_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            prompt_name: prompt_name.into(),
            user_prompt: String::new(),
            allowed_tools: DEFAULT_ALLOWED_TOOLS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Set the user prompt.
    pub fn with_user_prompt(mut self, user_prompt: impl Into<String>) -> Self {
        self.user_prompt = user_prompt.into();
        self
    }

    /// Replace the tool allowlist.
    pub fn with_allowed_tools(mut self, allowed_tools: Vec<String>) -> Self {
        self.allowed_tools = allowed_tools;
        self
    }

    /// The slash-command argument that routes the agent to the server
    /// prompt: `/{server}:{prompt} (MCP) {user prompt}`.
    pub fn prompt_argument(&self) -> String {
        format!(
            "/{}:{} (MCP) {}",
            self.server_name, self.prompt_name, self.user_prompt
        )
    }

    /// Full argument vector for the agent binary.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            self.prompt_argument(),
            "--allowedTools".to_string(),
            self.allowed_tools.join(","),
        ]
    }
}

impl AgentCli {
    /// Drive a full generation session.
    ///
    /// The agent owns the terminal for the duration of the run; the
    /// returned outcome records only the command and its exit status.
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<CommandOutcome> {
        self.run_streaming(&request.to_args()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_argument_routes_to_server_prompt() {
        let request = GenerationRequest::new("ui_gen", "frontend_generation")
            .with_user_prompt("Build the landing page");
        assert_eq!(
            request.prompt_argument(),
            "/ui_gen:frontend_generation (MCP) Build the landing page"
        );
    }

    #[test]
    fn test_prompt_argument_with_empty_user_prompt() {
        let request = GenerationRequest::new("ui_gen", "frontend_generation");
        assert_eq!(
            request.prompt_argument(),
            "/ui_gen:frontend_generation (MCP) "
        );
    }

    #[test]
    fn test_to_args_joins_allowed_tools() {
        let request = GenerationRequest::new("ui_gen", "nextjs_form_builder")
            .with_user_prompt("A signup form")
            .with_allowed_tools(vec!["Bash".to_string(), "Edit".to_string()]);
        assert_eq!(
            request.to_args(),
            vec![
                "/ui_gen:nextjs_form_builder (MCP) A signup form".to_string(),
                "--allowedTools".to_string(),
                "Bash,Edit".to_string(),
            ]
        );
    }

    #[test]
    fn test_new_request_defaults_to_standard_allowlist() {
        let request = GenerationRequest::new("ui_gen", "frontend_generation");
        assert!(!request.allowed_tools.is_empty());
        assert!(request.allowed_tools.contains(&"Bash".to_string()));
        assert!(request.allowed_tools.contains(&"Read".to_string()));
    }
}
