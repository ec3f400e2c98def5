//! Command Types
//!
//! Output model shared by every command handler.

use serde::Serialize;
use thiserror::Error;

use crate::fs::FsError;

/// Action the presentation layer performs after showing a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    ClearScreen,
    OpenLink { url: String },
    /// Open an editor on `path` (resolved) with its current content
    OpenEditor { path: String, content: String },
    /// Reset the session to its initial state
    Reboot,
    Exit,
}

/// Command execution result.
///
/// Output text carries no trailing newline; each result is one display entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub effect: Option<Effect>,
}

impl CommandResult {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), ..Self::default() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn error(stderr: impl Into<String>) -> Self {
        Self::with_exit_code(String::new(), stderr, 1)
    }

    pub fn with_exit_code(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
            effect: None,
        }
    }

    /// Failure of a filesystem operation, shown as `<command>: <path>: <reason>`.
    pub fn fs_error(command: &str, err: &FsError) -> Self {
        Self::error(format!("{}: {}", command, err))
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

impl From<CommandError> for CommandResult {
    fn from(err: CommandError) -> Self {
        Self::with_exit_code(String::new(), err.to_string(), err.exit_code())
    }
}

/// Failures detected before a command runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command}: missing operand")]
    MissingOperand { command: String },

    #[error("{name}: command not found")]
    UnknownCommand { name: String },

    #[error("Usage: {usage}")]
    Usage { usage: String },
}

impl CommandError {
    pub fn missing_operand(command: &str) -> Self {
        CommandError::MissingOperand { command: command.to_string() }
    }

    pub fn usage(usage: &str) -> Self {
        CommandError::Usage { usage: usage.to_string() }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::MissingOperand { .. } | CommandError::Usage { .. } => 2,
            CommandError::UnknownCommand { .. } => 127,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_format() {
        let err = FsError::NotFound { path: "nope.txt".to_string() };
        let result = CommandResult::fs_error("cat", &err);
        assert_eq!(result.stderr, "cat: nope.txt: No such file or directory");
        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.is_empty());
    }

    #[test]
    fn test_command_error_results() {
        let result: CommandResult = CommandError::UnknownCommand { name: "frobnicate".to_string() }.into();
        assert_eq!(result.stderr, "frobnicate: command not found");
        assert_eq!(result.exit_code, 127);

        let result: CommandResult = CommandError::missing_operand("mkdir").into();
        assert_eq!(result.stderr, "mkdir: missing operand");
        assert_eq!(result.exit_code, 2);

        let result: CommandResult = CommandError::usage("grep PATTERN FILE").into();
        assert_eq!(result.stderr, "Usage: grep PATTERN FILE");
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn test_effect_serializes_tagged() {
        let json = serde_json::to_value(Effect::OpenLink { url: "CV.pdf".to_string() }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "openLink", "url": "CV.pdf"}));
        let json = serde_json::to_value(Effect::ClearScreen).unwrap();
        assert_eq!(json, serde_json::json!({"type": "clearScreen"}));
    }
}
