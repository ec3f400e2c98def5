//! Environment and history commands

use crate::session::Session;

use super::registry::Redirect;
use super::types::CommandResult;

/// Print the words, `$NAME` expanded from the environment. A redirect
/// writes the line (newline-terminated) to a file instead.
pub fn echo(session: &mut Session, words: &[String], redirect: Option<&Redirect>) -> CommandResult {
    let line = words
        .iter()
        .map(|word| match word.strip_prefix('$') {
            Some(name) => session.get_env(name).to_string(),
            None => word.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let result = match redirect {
        None => return CommandResult::success(line),
        Some(Redirect::Write(path)) => session.write_file(path, &format!("{}\n", line)),
        Some(Redirect::Append(path)) => session.append_file(path, &format!("{}\n", line)),
    };
    match result {
        Ok(()) => CommandResult::empty(),
        Err(e) => CommandResult::fs_error("echo", &e),
    }
}

pub fn env(session: &Session) -> CommandResult {
    CommandResult::success(session.all_env())
}

/// `export NAME=VALUE`; without an assignment, list the environment.
pub fn export(session: &mut Session, assignment: Option<&str>) -> CommandResult {
    let Some((name, value)) = assignment.and_then(|a| a.split_once('=')) else {
        return env(session);
    };
    if name.is_empty() {
        return CommandResult::error(format!("export: `{}': not a valid identifier", assignment.unwrap_or_default()));
    }
    session.set_env(name, value);
    CommandResult::empty()
}

pub fn history(session: &Session) -> CommandResult {
    let entries = session.history().entries();
    if entries.is_empty() {
        return CommandResult::success("No commands in history");
    }
    CommandResult::success(
        entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("  {}  {}", i + 1, cmd))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
