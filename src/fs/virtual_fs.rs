//! Tree-backed Virtual File System
//!
//! A pure in-memory tree for the terminal session. Each directory owns its
//! child map; deletion is done by the parent removing its own entry, and
//! every operation re-walks from the root.

use std::collections::BTreeMap;

use super::path::{basename, dirname, segments};
use super::types::*;

/// In-memory virtual file system rooted at `/`.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    root: Node,
}

impl VirtualFs {
    /// Create a filesystem holding only the root directory.
    pub fn new() -> Self {
        Self { root: Node::empty_dir() }
    }

    /// Create a directory and any missing ancestors. Existing directories
    /// along the way are kept.
    pub fn create_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        let mut current = &mut self.root;
        for part in segments(path) {
            current = match current {
                Node::Directory { children } => {
                    children.entry(part.to_string()).or_insert_with(Node::empty_dir)
                }
                Node::File { .. } => {
                    return Err(FsError::NotADirectory { path: path.to_string() });
                }
            };
        }
        if current.is_directory() {
            Ok(())
        } else {
            Err(FsError::NotADirectory { path: path.to_string() })
        }
    }

    /// Write a file, creating parent directories as needed. Used for seeding.
    pub fn insert_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        self.create_dir_all(&dirname(path))?;
        self.write_file(path, content)
    }

    fn get_node_mut(&mut self, path: &str) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for part in segments(path) {
            current = match current {
                Node::Directory { children } => children.get_mut(part)?,
                Node::File { .. } => return None,
            };
        }
        Some(current)
    }

    /// Child map of the directory that would hold `path`.
    fn parent_children_mut(&mut self, path: &str) -> Result<&mut BTreeMap<String, Node>, FsError> {
        match self.get_node_mut(&dirname(path)) {
            Some(Node::Directory { children }) => Ok(children),
            Some(Node::File { .. }) => Err(FsError::NotADirectory { path: path.to_string() }),
            None => Err(FsError::NotFound { path: path.to_string() }),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FileSystem trait implementation
// ============================================================================

impl FileSystem for VirtualFs {
    fn get_node(&self, path: &str) -> Option<&Node> {
        let mut current = &self.root;
        for part in segments(path) {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    fn read_file(&self, path: &str) -> Result<String, FsError> {
        match self.get_node(path) {
            Some(Node::File { content }) => Ok(content.clone()),
            Some(Node::Directory { .. }) => Err(FsError::IsADirectory { path: path.to_string() }),
            None => Err(FsError::NotFound { path: path.to_string() }),
        }
    }

    fn readdir(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        match self.get_node(path) {
            Some(Node::Directory { children }) => Ok(children
                .iter()
                .map(|(name, node)| DirEntry {
                    name: name.clone(),
                    is_directory: node.is_directory(),
                    size: node.size(),
                })
                .collect()),
            Some(Node::File { .. }) => Err(FsError::NotADirectory { path: path.to_string() }),
            None => Err(FsError::NotFound { path: path.to_string() }),
        }
    }

    fn mkdir(&mut self, path: &str) -> Result<(), FsError> {
        let name = basename(path);
        if name.is_empty() {
            return Err(FsError::AlreadyExists { path: path.to_string() });
        }
        let children = self.parent_children_mut(path)?;
        if children.contains_key(name) {
            return Err(FsError::AlreadyExists { path: path.to_string() });
        }
        children.insert(name.to_string(), Node::empty_dir());
        Ok(())
    }

    fn touch(&mut self, path: &str) -> Result<(), FsError> {
        let name = basename(path);
        if name.is_empty() {
            return Ok(());
        }
        let children = self.parent_children_mut(path)?;
        children.entry(name.to_string()).or_insert_with(|| Node::file(""));
        Ok(())
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        match self.get_node(path) {
            Some(Node::Directory { .. }) => {
                return Err(FsError::IsADirectory { path: path.to_string() });
            }
            Some(Node::File { .. }) => {}
            None => self.touch(path)?,
        }
        if let Some(Node::File { content: existing }) = self.get_node_mut(path) {
            *existing = content.to_string();
        }
        Ok(())
    }

    fn append_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        match self.get_node(path) {
            Some(Node::Directory { .. }) => {
                return Err(FsError::IsADirectory { path: path.to_string() });
            }
            Some(Node::File { .. }) => {}
            None => self.touch(path)?,
        }
        if let Some(Node::File { content: existing }) = self.get_node_mut(path) {
            existing.push_str(content);
        }
        Ok(())
    }

    fn remove_file(&mut self, path: &str) -> Result<(), FsError> {
        match self.get_node(path) {
            None => return Err(FsError::NotFound { path: path.to_string() }),
            Some(Node::Directory { .. }) => {
                return Err(FsError::IsADirectory { path: path.to_string() });
            }
            Some(Node::File { .. }) => {}
        }
        self.parent_children_mut(path)?.remove(basename(path));
        Ok(())
    }

    fn remove_dir(&mut self, path: &str) -> Result<(), FsError> {
        match self.get_node(path) {
            None => return Err(FsError::NotFound { path: path.to_string() }),
            Some(Node::File { .. }) => {
                return Err(FsError::NotADirectory { path: path.to_string() });
            }
            Some(Node::Directory { children }) if !children.is_empty() => {
                return Err(FsError::NotEmpty { path: path.to_string() });
            }
            Some(Node::Directory { .. }) => {}
        }
        let name = basename(path);
        if name.is_empty() {
            return Err(FsError::InvalidArgument { path: path.to_string() });
        }
        self.parent_children_mut(path)?.remove(name);
        Ok(())
    }

    fn copy_file(&mut self, src: &str, dest: &str) -> Result<String, FsError> {
        let content = match self.get_node(src) {
            Some(Node::File { content }) => content.clone(),
            Some(Node::Directory { .. }) => {
                return Err(FsError::IsADirectory { path: src.to_string() });
            }
            None => return Err(FsError::NotFound { path: src.to_string() }),
        };

        let target = self.copy_destination(src, dest);
        if matches!(self.get_node(&target), Some(Node::Directory { .. })) {
            return Err(FsError::IsADirectory { path: dest.to_string() });
        }
        let name = basename(&target).to_string();
        let children = self
            .parent_children_mut(&target)
            .map_err(|e| e.with_path(dest))?;
        // Same-name targets are overwritten without complaint.
        children.insert(name, Node::File { content });
        Ok(target)
    }
}

// ============================================================================
// Tests
// ============================================================================
