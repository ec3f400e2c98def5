//! File System Module
//!
//! Provides the virtual file system backing every file-like command:
//! - `VirtualFs`: tree of owned child maps rooted at `/`
//! - `path`: normalization and resolution helpers

pub mod path;
pub mod types;
pub mod virtual_fs;

pub use path::{normalize_path, resolve_path};
pub use types::*;
pub use virtual_fs::VirtualFs;
