//! Terminal
//!
//! Main entry point for a presentation layer. Ties together the session,
//! the command interpreter and history/completion handling.

use tracing::{debug, info};

use crate::commands::{self, Completion, CommandResult, Effect};
use crate::config::TerminalConfig;
use crate::content;
use crate::fs::FsError;
use crate::session::Session;

/// A terminal: one session plus the profile it was built from.
pub struct Terminal {
    config: TerminalConfig,
    session: Session,
}

impl Terminal {
    /// Create a terminal with a freshly seeded session.
    pub fn new(config: TerminalConfig) -> Self {
        let session = Session::new(config.clone());
        Self { config, session }
    }

    /// Create a terminal and change into `cwd`.
    pub fn with_cwd(config: TerminalConfig, cwd: &str) -> Result<Self, FsError> {
        let mut terminal = Self::new(config);
        terminal.session.cd(cwd)?;
        Ok(terminal)
    }

    /// Execute one input line.
    ///
    /// Non-blank lines are recorded in history before they run. A `reboot`
    /// replaces the session with a fresh one after producing its output.
    pub fn exec(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        self.session.history_mut().push(line);
        if line.is_empty() {
            return CommandResult::empty();
        }

        let result = commands::run_line(&mut self.session, line);
        if result.effect == Some(Effect::Reboot) {
            self.reboot();
        }
        result
    }

    /// Execute a script, one command per line, stopping at `exit`.
    pub fn exec_script(&mut self, script: &str) -> Vec<CommandResult> {
        let mut results = Vec::new();
        for line in script.lines() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let result = self.exec(line);
            let exit = result.effect == Some(Effect::Exit);
            results.push(result);
            if exit {
                break;
            }
        }
        results
    }

    /// Reset the session to its initial seeded state.
    pub fn reboot(&mut self) {
        info!("rebooting session");
        self.session = Session::new(self.config.clone());
    }

    /// `user@host:~/sub$ `
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.session.user(),
            self.session.prompt_host(),
            self.session.display_cwd()
        )
    }

    /// Banner and welcome text shown at session start.
    pub fn greeting(&self) -> String {
        format!("{}\n\n{}", content::BANNER, content::WELCOME)
    }

    /// Recall the previous history entry (arrow up).
    pub fn history_previous(&mut self) -> Option<String> {
        self.session.history_mut().older().map(str::to_string)
    }

    /// Recall the next history entry (arrow down); empty past the newest.
    pub fn history_next(&mut self) -> Option<String> {
        self.session.history_mut().newer().map(str::to_string)
    }

    pub fn complete(&self, input: &str) -> Completion {
        commands::complete(input)
    }

    /// Finish an editor session by writing the buffer to `path`.
    pub fn save_editor(&mut self, path: &str, content: &str) -> CommandResult {
        match self.session.write_file(path, content) {
            Ok(()) => {
                debug!(path, bytes = content.len(), "editor saved");
                CommandResult::success(format!(
                    "Wrote {} bytes to {}",
                    content.chars().count(),
                    self.session.resolve_path(path)
                ))
            }
            Err(e) => CommandResult::fs_error("nano", &e),
        }
    }

    pub fn pwd(&self) -> &str {
        self.session.pwd()
    }

    pub fn get_env(&self, name: &str) -> &str {
        self.session.get_env(name)
    }

    pub fn set_env(&mut self, name: &str, value: &str) {
        self.session.set_env(name, value);
    }

    pub fn all_env(&self) -> String {
        self.session.all_env()
    }

    pub fn history(&self) -> &[String] {
        self.session.history().entries()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(TerminalConfig::default())
    }
}
