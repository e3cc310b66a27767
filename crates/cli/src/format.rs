//! Rendering of agent command outcomes.
//!
//! [`ResultFormatter`] turns a [`CommandOutcome`] into displayable text.
//! Rendering and printing are separated so the output is testable; the
//! command handlers print whatever is returned.

use colored::Colorize;
use uigen_agent::CommandOutcome;

/// Formats command outcomes for terminal display.
///
/// Simple mode shows only the relevant stream: stdout on success, stderr
/// on failure. Verbose mode shows a styled four-line breakdown of the
/// whole outcome.
#[derive(Debug, Clone, Copy)]
pub struct ResultFormatter {
    verbose: bool,
}

impl ResultFormatter {
    /// Create a formatter; `verbose` selects the detailed rendering.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Render an outcome to displayable text.
    ///
    /// Returns `None` when there is nothing worth printing, such as a
    /// successful interactive run with no captured output.
    pub fn render(&self, outcome: &CommandOutcome) -> Option<String> {
        if self.verbose {
            Some(self.render_verbose(outcome))
        } else {
            self.render_simple(outcome)
        }
    }

    fn render_verbose(&self, outcome: &CommandOutcome) -> String {
        [
            format!("Successful: {}", outcome.success).cyan().to_string(),
            format!("Command: {}", outcome.command).yellow().to_string(),
            format!("Output: {}", outcome.stdout).green().to_string(),
            format!("Error: {}", outcome.stderr).red().to_string(),
        ]
        .join("\n")
    }

    fn render_simple(&self, outcome: &CommandOutcome) -> Option<String> {
        let stream = if outcome.success {
            &outcome.stdout
        } else {
            &outcome.stderr
        };

        if stream.is_empty() {
            None
        } else {
            Some(stream.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured_outcome() -> CommandOutcome {
        CommandOutcome::new(
            true,
            "claude mcp list",
            "server-one\nserver-two",
            "",
        )
    }

    #[test]
    fn test_simple_mode_shows_stdout_on_success() {
        let formatter = ResultFormatter::new(false);
        let rendered = formatter.render(&captured_outcome()).unwrap();
        assert_eq!(rendered, "server-one\nserver-two");
    }

    #[test]
    fn test_simple_mode_shows_stderr_on_failure() {
        let formatter = ResultFormatter::new(false);
        let outcome = CommandOutcome::new(false, "claude mcp remove demo", "", "no such server");
        assert_eq!(formatter.render(&outcome).unwrap(), "no such server");
    }

    #[test]
    fn test_simple_mode_skips_empty_output() {
        let formatter = ResultFormatter::new(false);
        let outcome = CommandOutcome::inherited(true, "claude \"/ui:gen (MCP) \" --allowedTools Bash");
        assert!(formatter.render(&outcome).is_none());
    }

    #[test]
    fn test_verbose_mode_shows_all_sections() {
        let formatter = ResultFormatter::new(true);
        let rendered = formatter.render(&captured_outcome()).unwrap();

        assert!(rendered.contains("Successful: true"));
        assert!(rendered.contains("Command: claude mcp list"));
        assert!(rendered.contains("Output: server-one"));
        assert!(rendered.contains("Error: "));
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_verbose_mode_renders_even_with_nothing_captured() {
        let formatter = ResultFormatter::new(true);
        let outcome = CommandOutcome::inherited(false, "claude mcp list");
        let rendered = formatter.render(&outcome).unwrap();
        assert!(rendered.contains("Successful: false"));
    }
}
