//! Interactive prompting for missing command values.
//!
//! Commands accept every value as a flag; anything left out is asked for
//! on the terminal. When stdin is not a terminal the prompt is skipped:
//! defaults apply where they exist, and truly required values become
//! configuration errors so scripted runs fail fast instead of hanging.

use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, IsTerminal};
use uigen_core::{AppError, AppResult};

/// Resolves command values from flags, interactive input, or defaults.
#[derive(Debug, Clone, Copy)]
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    /// A prompter that asks on the terminal when stdin is interactive.
    pub fn from_terminal() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    /// Resolve one value.
    ///
    /// Order: the flag value when given; otherwise an interactive prompt
    /// (showing `default` when present); otherwise the default; otherwise
    /// an error naming the missing value.
    pub fn resolve(
        &self,
        flag: Option<String>,
        label: &str,
        default: Option<&str>,
    ) -> AppResult<String> {
        if let Some(value) = flag {
            return Ok(value);
        }

        if !self.interactive {
            return match default {
                Some(value) => Ok(value.to_string()),
                None => Err(AppError::Config(format!(
                    "Missing required value for '{}'; pass it as a flag or run interactively",
                    label
                ))),
            };
        }

        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt(label);

        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        input
            .interact()
            .map_err(|e| AppError::Config(format!("Failed to read input: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_interactive() -> Prompter {
        Prompter { interactive: false }
    }

    #[test]
    fn test_flag_value_wins() {
        let prompter = non_interactive();
        let value = prompter
            .resolve(Some("ui_gen".to_string()), "Server name", None)
            .unwrap();
        assert_eq!(value, "ui_gen");
    }

    #[test]
    fn test_default_applies_without_terminal() {
        let prompter = non_interactive();
        let value = prompter.resolve(None, "Generation mode", Some("manual")).unwrap();
        assert_eq!(value, "manual");
    }

    #[test]
    fn test_empty_default_is_a_valid_value() {
        let prompter = non_interactive();
        let value = prompter.resolve(None, "User prompt", Some("")).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_missing_required_value_is_a_config_error() {
        let prompter = non_interactive();
        match prompter.resolve(None, "Server name", None) {
            Err(AppError::Config(message)) => assert!(message.contains("Server name")),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
