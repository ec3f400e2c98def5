//! Tab completion over the fixed command list.

use super::registry::KNOWN_COMMANDS;

/// Outcome of completing a partial input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one command matched; it replaces the input.
    Unique(String),
    /// Several commands matched; the input stays as typed.
    Candidates(Vec<String>),
    NoMatch,
}

impl Completion {
    /// Candidate list as printed under the prompt.
    pub fn render(&self) -> Option<String> {
        match self {
            Completion::Candidates(names) => Some(names.join("  ")),
            _ => None,
        }
    }
}

/// Complete against the built-in command list.
pub fn complete(input: &str) -> Completion {
    complete_from(KNOWN_COMMANDS, input)
}

/// Case-insensitive prefix match against `commands`, keeping their order.
pub fn complete_from(commands: &[&str], input: &str) -> Completion {
    let prefix = input.to_lowercase();
    let mut matches: Vec<String> = commands
        .iter()
        .filter(|cmd| cmd.starts_with(&prefix))
        .map(|cmd| cmd.to_string())
        .collect();
    match matches.len() {
        0 => Completion::NoMatch,
        1 => Completion::Unique(matches.remove(0)),
        _ => Completion::Candidates(matches),
    }
}
