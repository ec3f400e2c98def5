//! Command interpreter
//!
//! One input line goes through [`tokenizer::tokenize`], is parsed into a
//! [`Command`] by the registry and then runs against the session.

pub mod completion;
pub mod env_ops;
pub mod file_ops;
pub mod registry;
pub mod system_info;
pub mod tokenizer;
pub mod types;

use tracing::debug;

use crate::session::Session;

pub use completion::{complete, complete_from, Completion};
pub use registry::{Command, FindQuery, LinkTarget, NodeKind, Redirect, KNOWN_COMMANDS};
pub use types::{CommandError, CommandResult, Effect};

/// Tokenize, parse and run one line. Blank input produces an empty result.
pub fn run_line(session: &mut Session, line: &str) -> CommandResult {
    let Some((name, args)) = tokenizer::split_command(tokenizer::tokenize(line)) else {
        return CommandResult::empty();
    };
    match Command::parse(&name, &args) {
        Ok(command) => {
            debug!(command = %name, args = ?args, "dispatch");
            execute(session, &command)
        }
        Err(err) => {
            debug!(command = %name, error = %err, "rejected");
            err.into()
        }
    }
}

/// Run a parsed command against the session.
pub fn execute(session: &mut Session, command: &Command) -> CommandResult {
    match command {
        Command::Pwd => file_ops::pwd(session),
        Command::Cd { path } => file_ops::cd(session, path.as_deref()),
        Command::Ls { options, path } => file_ops::ls(session, path, *options),
        Command::Cat { path } => file_ops::cat(session, path),
        Command::Mkdir { path } => file_ops::mkdir(session, path),
        Command::Touch { path } => file_ops::touch(session, path),
        Command::Rm { path } => file_ops::rm(session, path),
        Command::Rmdir { path } => file_ops::rmdir(session, path),
        Command::Cp { src, dest } => file_ops::cp(session, src, dest),
        Command::Mv { src, dest } => file_ops::mv(session, src, dest),
        Command::Head { path, lines } => file_ops::head(session, path, *lines),
        Command::Tail { path, lines } => file_ops::tail(session, path, *lines),
        Command::Wc { path } => file_ops::wc(session, path),
        Command::Grep { pattern, path } => file_ops::grep(session, pattern, path),
        Command::Find(query) => file_ops::find(session, query),
        Command::Tree => file_ops::tree(session),
        Command::Nano { path } => file_ops::nano(session, path),

        Command::Echo { words, redirect } => env_ops::echo(session, words, redirect.as_ref()),
        Command::Env => env_ops::env(session),
        Command::Export { assignment } => env_ops::export(session, assignment.as_deref()),
        Command::History => env_ops::history(session),

        Command::Help => system_info::help(),
        Command::Banner => system_info::banner(),
        Command::Section(section) => system_info::section(section),
        Command::Neofetch => system_info::neofetch(session),
        Command::Date => system_info::date(),
        Command::Cal => system_info::cal(),
        Command::Uptime => system_info::uptime(session),
        Command::Top => system_info::top(session),
        Command::Uname { flags } => system_info::uname(session, flags),
        Command::Which { name } => system_info::which(name),
        Command::Man { page } => system_info::man(page.as_deref()),
        Command::Ping { host } => system_info::ping(host),
        Command::Cowsay { message } => {
            let message = message.clone().unwrap_or_else(|| session.config().cowsay_default.clone());
            system_info::cowsay(&message)
        }
        Command::Fortune => system_info::fortune(),
        Command::Sudo { args } => system_info::sudo(args),
        Command::Whoami => system_info::whoami(session),
        Command::Hostname => system_info::hostname(session),
        Command::Id => system_info::id(session),
        Command::Canned(text) => CommandResult::success(*text),

        Command::Clear => system_info::clear(),
        Command::Open(target) => system_info::open(session, *target),
        Command::Reboot => system_info::reboot(),
        Command::Exit => system_info::exit(),
    }
}
