//! Outcome type for agent CLI invocations.

/// Result of one completed agent CLI invocation.
///
/// An outcome exists only for commands that actually ran; launch failures
/// are reported as errors instead. A non-zero exit code is still an
/// outcome, with `success` set to `false`, so callers decide how loudly
/// to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the process exited with status zero.
    pub success: bool,

    /// The command line that was run, rendered for display.
    pub command: String,

    /// Captured standard output. Empty when stdio was inherited.
    pub stdout: String,

    /// Captured standard error. Empty when stdio was inherited.
    pub stderr: String,
}

impl CommandOutcome {
    /// Create an outcome from captured process output.
    pub fn new(
        success: bool,
        command: impl Into<String>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            success,
            command: command.into(),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an outcome for a run whose stdio went straight to the
    /// terminal, leaving nothing to capture.
    pub fn inherited(success: bool, command: impl Into<String>) -> Self {
        Self::new(success, command, "", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherited_outcome_has_no_captured_streams() {
        let outcome = CommandOutcome::inherited(true, "claude mcp list");
        assert!(outcome.success);
        assert_eq!(outcome.command, "claude mcp list");
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.is_empty());
    }
}
