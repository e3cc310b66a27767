//! Configuration management for the UI Gen CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Config files (.uigen/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Precedence is lowest to highest in that order.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Tools the external agent is allowed to use unless overridden.
pub const DEFAULT_ALLOWED_TOOLS: &[&str] = &[
    "Bash",
    "Edit",
    "Replace",
    "Bash(docker*)",
    "url",
    "Bash(ls)",
    "Bash(cp)",
    "Bash(npm)",
    "Bash(next)",
    "Read",
    "List",
];

/// Main application configuration.
///
/// This struct holds all global configuration options that affect
/// CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Name or path of the external agent binary
    pub agent_binary: String,

    /// Tool allowlist passed to the agent on generation runs
    pub allowed_tools: Vec<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging and detailed command output)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    agent: Option<AgentConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AgentConfig {
    binary: Option<String>,
    #[serde(rename = "allowedTools")]
    allowed_tools: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            agent_binary: "claude".to_string(),
            allowed_tools: DEFAULT_ALLOWED_TOOLS.iter().map(|s| s.to_string()).collect(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, config file, and environment.
    ///
    /// Environment variables:
    /// - `UIGEN_CONFIG`: Path to config file
    /// - `UIGEN_AGENT_BIN`: External agent binary
    /// - `UIGEN_ALLOWED_TOOLS`: Comma-separated tool allowlist
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use uigen_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Agent binary: {}", config.agent_binary);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration, preferring an explicitly given config file.
    ///
    /// An explicit file (CLI flag or `UIGEN_CONFIG`) must exist; the default
    /// `.uigen/config.yaml` is skipped silently when absent.
    pub fn load_from(config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        config.config_file = config_file
            .or_else(|| std::env::var("UIGEN_CONFIG").ok().map(PathBuf::from));

        match config.config_file.clone() {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config = config.merge_yaml(&path)?;
            }
            None => {
                let default_path = PathBuf::from(".uigen/config.yaml");
                if default_path.exists() {
                    config = config.merge_yaml(&default_path)?;
                }
            }
        }

        // Environment variables override YAML config
        if let Ok(binary) = std::env::var("UIGEN_AGENT_BIN") {
            config.agent_binary = binary;
        }

        if let Ok(tools) = std::env::var("UIGEN_ALLOWED_TOOLS") {
            config.allowed_tools = parse_allowed_tools(&tools);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        // Merge agent settings
        if let Some(agent) = config_file.agent {
            if let Some(binary) = agent.binary {
                result.agent_binary = binary;
            }
            if let Some(tools) = agent.allowed_tools {
                result.allowed_tools = tools;
            }
        }

        // Merge logging settings
        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    pub fn with_overrides(
        mut self,
        agent_binary: Option<String>,
        allowed_tools: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(binary) = agent_binary {
            self.agent_binary = binary;
        }

        if let Some(tools) = allowed_tools {
            self.allowed_tools = parse_allowed_tools(&tools);
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// The allowlist rendered the way the agent CLI expects it.
    pub fn allowed_tools_string(&self) -> String {
        self.allowed_tools.join(",")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.agent_binary.trim().is_empty() {
            return Err(AppError::Config(
                "Agent binary must not be empty".to_string(),
            ));
        }

        if self.allowed_tools.iter().any(|t| t.trim().is_empty()) {
            return Err(AppError::Config(
                "Allowed tools list contains an empty entry".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse a comma-separated tool allowlist, dropping empty entries.
pub fn parse_allowed_tools(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.agent_binary, "claude");
        assert!(config.allowed_tools.contains(&"Bash".to_string()));
        assert!(config.allowed_tools.contains(&"Read".to_string()));
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_allowed_tools_string() {
        let config = AppConfig::default();
        let joined = config.allowed_tools_string();
        assert!(joined.starts_with("Bash,Edit,Replace"));
        assert!(joined.ends_with("Read,List"));
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            Some("claude-dev".to_string()),
            Some("Bash, Edit".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(overridden.agent_binary, "claude-dev");
        assert_eq!(overridden.allowed_tools, vec!["Bash", "Edit"]);
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_with_overrides_keeps_explicit_log_level() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(None, None, Some("trace".to_string()), true, false);
        assert_eq!(overridden.log_level, Some("trace".to_string()));
    }

    #[test]
    fn test_parse_allowed_tools() {
        let tools = parse_allowed_tools("Bash, Edit,,Bash(npm) ,");
        assert_eq!(tools, vec!["Bash", "Edit", "Bash(npm)"]);
    }

    #[test]
    fn test_merge_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "agent:\n  binary: claude-beta\n  allowedTools:\n    - Bash\n    - Read\nlogging:\n  level: warn\n  color: false\n",
        )
        .unwrap();

        let config = AppConfig::default().merge_yaml(&path).unwrap();
        assert_eq!(config.agent_binary, "claude-beta");
        assert_eq!(config.allowed_tools, vec!["Bash", "Read"]);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert!(config.no_color);
    }

    #[test]
    fn test_merge_yaml_partial_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "logging:\n  level: debug\n").unwrap();

        let config = AppConfig::default().merge_yaml(&path).unwrap();
        assert_eq!(config.agent_binary, "claude");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(
            config.allowed_tools.len(),
            DEFAULT_ALLOWED_TOOLS.len()
        );
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let result = AppConfig::load_from(Some(missing));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_empty_binary() {
        let config = AppConfig {
            agent_binary: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
