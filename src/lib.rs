//! termfolio - A portfolio terminal over an in-memory filesystem
//!
//! This library provides a simulated shell for a personal portfolio: a
//! tree-shaped virtual filesystem, a session carrying the working directory,
//! environment and history, and an interpreter for a fixed set of commands.

pub mod commands;
pub mod config;
pub mod content;
pub mod fs;
pub mod session;
pub mod terminal;

pub use commands::{CommandResult, Completion, Effect};
pub use config::TerminalConfig;
pub use fs::{FileSystem, FsError, Node, VirtualFs};
pub use session::Session;
pub use terminal::Terminal;
