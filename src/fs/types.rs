//! File System Types
//!
//! Core types and traits for the virtual file system.

use std::collections::BTreeMap;
use thiserror::Error;

use super::path::{basename, join_path};

/// File system errors.
///
/// `path` is whatever the user typed, so the message can be shown verbatim
/// as `<command>: <path>: <reason>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{path}: No such file or directory")]
    NotFound { path: String },

    #[error("{path}: Not a directory")]
    NotADirectory { path: String },

    #[error("{path}: Is a directory")]
    IsADirectory { path: String },

    #[error("{path}: File exists")]
    AlreadyExists { path: String },

    #[error("{path}: Directory not empty")]
    NotEmpty { path: String },

    #[error("{path}: Invalid argument")]
    InvalidArgument { path: String },
}

/// Failure kind without the path payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    NotFound,
    NotADirectory,
    IsADirectory,
    AlreadyExists,
    NotEmpty,
    InvalidArgument,
}

impl FsError {
    pub fn kind(&self) -> FsErrorKind {
        match self {
            FsError::NotFound { .. } => FsErrorKind::NotFound,
            FsError::NotADirectory { .. } => FsErrorKind::NotADirectory,
            FsError::IsADirectory { .. } => FsErrorKind::IsADirectory,
            FsError::AlreadyExists { .. } => FsErrorKind::AlreadyExists,
            FsError::NotEmpty { .. } => FsErrorKind::NotEmpty,
            FsError::InvalidArgument { .. } => FsErrorKind::InvalidArgument,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            FsError::NotFound { path }
            | FsError::NotADirectory { path }
            | FsError::IsADirectory { path }
            | FsError::AlreadyExists { path }
            | FsError::NotEmpty { path }
            | FsError::InvalidArgument { path } => path,
        }
    }

    /// Replace the path carried by the error, keeping the kind.
    pub fn with_path(self, new_path: impl Into<String>) -> Self {
        let path = new_path.into();
        match self {
            FsError::NotFound { .. } => FsError::NotFound { path },
            FsError::NotADirectory { .. } => FsError::NotADirectory { path },
            FsError::IsADirectory { .. } => FsError::IsADirectory { path },
            FsError::AlreadyExists { .. } => FsError::AlreadyExists { path },
            FsError::NotEmpty { .. } => FsError::NotEmpty { path },
            FsError::InvalidArgument { .. } => FsError::InvalidArgument { path },
        }
    }
}

/// A node in the tree. Each directory exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory { children: BTreeMap<String, Node> },
    File { content: String },
}

impl Node {
    pub fn empty_dir() -> Self {
        Node::Directory { children: BTreeMap::new() }
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File { content: content.into() }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Content length in characters; directories report 0.
    pub fn size(&self) -> usize {
        match self {
            Node::File { content } => content.chars().count(),
            Node::Directory { .. } => 0,
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }
}

/// Directory entry with type information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
    pub size: usize,
}

/// Options for listing a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LsOptions {
    /// Include entries whose name starts with `.`, plus `.` and `..`.
    pub all: bool,
    /// Type/size annotated lines instead of a bare name list.
    pub long: bool,
}

impl LsOptions {
    /// Build from a flag string such as `la` (the characters after `-`).
    pub fn from_flags(flags: &str) -> Self {
        Self {
            all: flags.contains('a'),
            long: flags.contains('l'),
        }
    }
}

/// Tree-shaped filesystem interface. Every path is absolute and normalized;
/// resolution against a working directory happens in the session.
pub trait FileSystem {
    /// Walk the tree from the root. Absent if any segment is missing or a
    /// non-final segment is a file.
    fn get_node(&self, path: &str) -> Option<&Node>;

    /// Read a file's content verbatim.
    fn read_file(&self, path: &str) -> Result<String, FsError>;

    /// List a directory's children in name order.
    fn readdir(&self, path: &str) -> Result<Vec<DirEntry>, FsError>;

    /// Create an empty directory; the parent must exist.
    fn mkdir(&mut self, path: &str) -> Result<(), FsError>;

    /// Create an empty file unless something already exists there.
    fn touch(&mut self, path: &str) -> Result<(), FsError>;

    /// Replace a file's content, creating the file if absent.
    fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError>;

    /// Append to a file's content, creating the file if absent.
    fn append_file(&mut self, path: &str, content: &str) -> Result<(), FsError>;

    /// Remove a file. Directories are rejected.
    fn remove_file(&mut self, path: &str) -> Result<(), FsError>;

    /// Remove an empty directory.
    fn remove_dir(&mut self, path: &str) -> Result<(), FsError>;

    /// Copy a file, returning the path the copy landed at.
    fn copy_file(&mut self, src: &str, dest: &str) -> Result<String, FsError>;

    fn exists(&self, path: &str) -> bool {
        self.get_node(path).is_some()
    }

    /// Where a copy of `src` to `dest` ends up: inside `dest` when it is an
    /// existing directory, at `dest` itself otherwise.
    fn copy_destination(&self, src: &str, dest: &str) -> String {
        match self.get_node(dest) {
            Some(node) if node.is_directory() => join_path(dest, basename(src)),
            _ => dest.to_string(),
        }
    }
}
