//! MCP prompt server.
//!
//! [`PromptServer`] holds fully composed prompt texts and serves them over
//! the Model Context Protocol. All composition happens before the server
//! exists, so request handling never touches the component catalog and
//! never fails for a prompt the server advertises.

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use tracing::{debug, info, warn};
use uigen_core::{AppError, AppResult};

/// One prompt as exposed over MCP: a description for discovery and the
/// composed text returned on `prompts/get`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedPrompt {
    /// Human-readable description shown by MCP clients.
    pub description: String,

    /// The fully composed prompt text.
    pub text: String,
}

/// An immutable MCP server over a set of composed prompts.
///
/// Built exclusively through [`crate::ServerFactory`], which guarantees
/// every advertised prompt composed successfully. Prompts keep their
/// registration order.
#[derive(Debug, Clone)]
pub struct PromptServer {
    name: String,
    prompts: Vec<(String, ServedPrompt)>,
}

impl PromptServer {
    pub(crate) fn new(name: impl Into<String>, prompts: Vec<(String, ServedPrompt)>) -> Self {
        Self {
            name: name.into(),
            prompts,
        }
    }

    /// The server name advertised to MCP clients.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prompt names in registration order.
    pub fn prompt_names(&self) -> Vec<&str> {
        self.prompts.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a served prompt by name.
    pub fn get(&self, name: &str) -> Option<&ServedPrompt> {
        self.prompts
            .iter()
            .find(|(prompt_name, _)| prompt_name == name)
            .map(|(_, served)| served)
    }

    /// Number of prompts this server exposes.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the server exposes no prompts at all.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Run the server on stdio until the client disconnects.
    pub async fn serve_stdio(self) -> AppResult<()> {
        use rmcp::serve_server;
        use rmcp::transport::io::stdio;

        info!(
            server = %self.name,
            prompts = self.prompts.len(),
            "starting MCP server on stdio"
        );

        let running_service = serve_server(self, stdio())
            .await
            .map_err(|err| AppError::Mcp(format!("failed to start MCP server: {}", err)))?;

        // Returns when the client disconnects or the server is cancelled.
        let quit_reason = running_service
            .waiting()
            .await
            .map_err(|err| AppError::Mcp(format!("MCP server task failed: {}", err)))?;

        info!(reason = ?quit_reason, "MCP server stopped");
        Ok(())
    }
}

impl ServerHandler for PromptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: Some(PromptsCapability { list_changed: None }),
                tools: None,
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: Some(self.name.clone()),
                website_url: None,
            },
            instructions: Some(
                "Prompt server for UI generation. Each prompt returns composed \
                 system-level instructions for a generation task."
                    .into(),
            ),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        debug!(count = self.prompts.len(), "listing prompts");

        let prompts = self
            .prompts
            .iter()
            .map(|(name, served)| Prompt {
                name: name.clone(),
                description: Some(served.description.clone()),
                arguments: None,
                icons: None,
                title: Some(name.clone()),
            })
            .collect();

        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        let served = self.get(&request.name).ok_or_else(|| {
            warn!(prompt = %request.name, "requested prompt is not on this server");
            McpError::invalid_request(
                format!("prompt '{}' is not available on this server", request.name),
                None,
            )
        })?;

        debug!(prompt = %request.name, "serving prompt");

        Ok(GetPromptResult {
            description: Some(served.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::Text {
                    text: served.text.clone(),
                },
            }],
        })
    }
}
