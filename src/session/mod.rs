//! Terminal Session
//!
//! Carries everything one visitor's session owns: the filesystem tree, the
//! working directory, the environment and the command history. Every
//! filesystem operation takes paths as typed by the user, resolves them
//! against the working directory and reports failures with the typed path.

pub mod history;

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::TerminalConfig;
use crate::content::{seed_files, SEED_DIRS};
use crate::fs::path::{basename, display_path};
use crate::fs::{normalize_path, resolve_path, FileSystem, FsError, LsOptions, Node, VirtualFs};

pub use history::History;

/// State of a single terminal session.
pub struct Session {
    fs: Box<dyn FileSystem>,
    cwd: String,
    home: String,
    env: IndexMap<String, String>,
    history: History,
    config: TerminalConfig,
    started: Instant,
}

impl Session {
    /// Create a session over the seed dataset.
    pub fn new(config: TerminalConfig) -> Self {
        let mut fs = VirtualFs::new();
        let home = config.home_dir();

        for dir in SEED_DIRS.iter().copied().chain(std::iter::once(home.as_str())) {
            if let Err(e) = fs.create_dir_all(dir) {
                warn!(error = %e, "failed to seed directory");
            }
        }
        for (path, content) in seed_files(&config.user, &config.hostname, &home) {
            if let Err(e) = fs.insert_file(&path, &content) {
                warn!(error = %e, "failed to seed file");
            }
        }
        for (path, content) in &config.files {
            if let Err(e) = fs.insert_file(&normalize_path(path), content) {
                warn!(error = %e, "failed to seed configured file");
            }
        }

        Self::with_fs(config, Box::new(fs))
    }

    /// Create a session over an existing filesystem.
    pub fn with_fs(config: TerminalConfig, fs: Box<dyn FileSystem>) -> Self {
        let home = config.home_dir();
        let cwd = match fs.get_node(&home) {
            Some(node) if node.is_directory() => home.clone(),
            _ => "/".to_string(),
        };

        let mut env = IndexMap::new();
        env.insert("USER".to_string(), config.user.clone());
        env.insert("HOME".to_string(), home.clone());
        env.insert("PWD".to_string(), cwd.clone());
        env.insert("SHELL".to_string(), "/bin/bash".to_string());
        env.insert("TERM".to_string(), "xterm-256color".to_string());
        env.insert("LANG".to_string(), "en_US.UTF-8".to_string());
        env.insert("PATH".to_string(), "/usr/local/bin:/usr/bin:/bin".to_string());
        env.extend(config.env.iter().map(|(k, v)| (k.clone(), v.clone())));

        Self {
            fs,
            cwd,
            home,
            env,
            history: History::new(),
            config,
            started: Instant::now(),
        }
    }

    // ========================================================================
    // Paths
    // ========================================================================

    /// Resolve user input to an absolute, `.`/`..`-free path.
    pub fn resolve_path(&self, input: &str) -> String {
        let home = self
            .env
            .get("HOME")
            .map(String::as_str)
            .filter(|h| !h.is_empty())
            .unwrap_or(&self.home);
        resolve_path(&self.cwd, home, input)
    }

    /// Look up the node a user path points at.
    pub fn get_node(&self, input: &str) -> Option<&Node> {
        self.fs.get_node(&self.resolve_path(input))
    }

    pub fn pwd(&self) -> &str {
        &self.cwd
    }

    /// Working directory with the home directory shown as `~`.
    pub fn display_cwd(&self) -> String {
        display_path(&self.cwd, &self.home)
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    // ========================================================================
    // Filesystem operations
    // ========================================================================

    /// Change directory. A failed `cd` leaves the working directory alone.
    pub fn cd(&mut self, input: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(input);
        match self.fs.get_node(&resolved) {
            None => return Err(FsError::NotFound { path: input.to_string() }),
            Some(Node::File { .. }) => return Err(FsError::NotADirectory { path: input.to_string() }),
            Some(Node::Directory { .. }) => {}
        }
        debug!(from = %self.cwd, to = %resolved, "cd");
        self.env.insert("PWD".to_string(), resolved.clone());
        self.cwd = resolved;
        Ok(())
    }

    /// List a directory, or echo a file's name.
    pub fn ls(&self, input: &str, options: LsOptions) -> Result<String, FsError> {
        let resolved = self.resolve_path(input);
        let node = self
            .fs
            .get_node(&resolved)
            .ok_or_else(|| FsError::NotFound { path: input.to_string() })?;
        if node.is_file() {
            return Ok(basename(&resolved).to_string());
        }

        let entries = self.fs.readdir(&resolved).map_err(|e| e.with_path(input))?;
        let mut lines: Vec<String> = Vec::new();
        if options.all {
            for dot in [".", ".."] {
                lines.push(if options.long { format!("drwxr-xr-x  {}", dot) } else { dot.to_string() });
            }
        }
        for entry in entries.iter().filter(|e| options.all || !e.name.starts_with('.')) {
            if options.long {
                let (kind, perms) = if entry.is_directory { ('d', "rwxr-xr-x") } else { ('-', "rw-r--r--") };
                lines.push(format!("{}{}  {:>5}  {}", kind, perms, entry.size, entry.name));
            } else {
                lines.push(entry.name.clone());
            }
        }
        Ok(lines.join(if options.long { "\n" } else { "  " }))
    }

    /// Read a file's content verbatim.
    pub fn cat(&self, input: &str) -> Result<String, FsError> {
        self.fs
            .read_file(&self.resolve_path(input))
            .map_err(|e| e.with_path(input))
    }

    pub fn mkdir(&mut self, input: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(input);
        self.fs.mkdir(&resolved).map_err(|e| e.with_path(input))
    }

    pub fn touch(&mut self, input: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(input);
        self.fs.touch(&resolved).map_err(|e| e.with_path(input))
    }

    pub fn rm(&mut self, input: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(input);
        self.fs.remove_file(&resolved).map_err(|e| e.with_path(input))
    }

    /// Remove an empty directory. The working directory itself is refused;
    /// its ancestors are never empty, so they fail with `NotEmpty`.
    pub fn rmdir(&mut self, input: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(input);
        if resolved == self.cwd {
            return Err(FsError::InvalidArgument { path: input.to_string() });
        }
        self.fs.remove_dir(&resolved).map_err(|e| e.with_path(input))
    }

    /// Copy a file. An existing directory destination receives the file
    /// under its own name; an existing file destination is overwritten.
    pub fn cp(&mut self, src: &str, dest: &str) -> Result<(), FsError> {
        let src_abs = self.resolve_path(src);
        let dest_abs = self.resolve_path(dest);
        self.fs
            .copy_file(&src_abs, &dest_abs)
            .map(|_| ())
            .map_err(|e| relabel(e, &src_abs, src, dest))
    }

    /// Copy, then delete the source only if the copy succeeded.
    pub fn mv(&mut self, src: &str, dest: &str) -> Result<(), FsError> {
        let src_abs = self.resolve_path(src);
        let dest_abs = self.resolve_path(dest);

        if self.fs.copy_destination(&src_abs, &dest_abs) == src_abs {
            // Moving a file onto itself keeps it.
            return match self.fs.get_node(&src_abs) {
                None => Err(FsError::NotFound { path: src.to_string() }),
                Some(Node::Directory { .. }) => Err(FsError::IsADirectory { path: src.to_string() }),
                Some(Node::File { .. }) => Ok(()),
            };
        }

        self.fs
            .copy_file(&src_abs, &dest_abs)
            .map_err(|e| relabel(e, &src_abs, src, dest))?;
        self.fs.remove_file(&src_abs).map_err(|e| e.with_path(src))
    }

    /// Replace a file's content, creating it first when absent.
    pub fn write_file(&mut self, input: &str, content: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(input);
        self.fs.write_file(&resolved, content).map_err(|e| e.with_path(input))
    }

    pub fn append_file(&mut self, input: &str, content: &str) -> Result<(), FsError> {
        let resolved = self.resolve_path(input);
        self.fs.append_file(&resolved, content).map_err(|e| e.with_path(input))
    }

    // ========================================================================
    // Environment, history, profile
    // ========================================================================

    /// Value of an environment variable, empty when unset.
    pub fn get_env(&self, name: &str) -> &str {
        self.env.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set_env(&mut self, name: &str, value: &str) {
        self.env.insert(name.to_string(), value.to_string());
    }

    /// Every variable as `NAME=value` lines, in definition order.
    pub fn all_env(&self) -> String {
        self.env
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn env(&self) -> &IndexMap<String, String> {
        &self.env
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn user(&self) -> &str {
        &self.config.user
    }

    pub fn hostname(&self) -> &str {
        &self.config.hostname
    }

    pub fn prompt_host(&self) -> &str {
        &self.config.prompt_host
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TerminalConfig::default())
    }
}

/// Point a copy error back at whichever argument it concerns.
fn relabel(err: FsError, src_abs: &str, src: &str, dest: &str) -> FsError {
    if err.path() == src_abs {
        err.with_path(src)
    } else {
        err.with_path(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FsErrorKind;

    fn session() -> Session {
        Session::default()
    }

    #[test]
    fn test_starts_in_home() {
        let s = session();
        assert_eq!(s.pwd(), "/home/shibam");
        assert_eq!(s.get_env("PWD"), "/home/shibam");
        assert_eq!(s.display_cwd(), "~");
        assert!(s.get_node("about.txt").unwrap().is_file());
        assert!(s.get_node("/tmp").unwrap().is_directory());
        assert!(s.get_node("/usr/share/man").unwrap().is_directory());
    }

    #[test]
    fn test_cd_then_pwd_is_resolved_form() {
        let mut s = session();
        s.cd("/usr/share/../bin/.").unwrap();
        assert_eq!(s.pwd(), "/usr/bin");
        assert_eq!(s.get_env("PWD"), "/usr/bin");
        s.cd("..").unwrap();
        assert_eq!(s.pwd(), "/usr");
        s.cd("~").unwrap();
        assert_eq!(s.pwd(), "/home/shibam");
        s.cd("/../../..").unwrap();
        assert_eq!(s.pwd(), "/");
    }

    #[test]
    fn test_failed_cd_leaves_cwd() {
        let mut s = session();
        let err = s.cd("nowhere").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotFound);
        assert_eq!(err.to_string(), "nowhere: No such file or directory");
        assert_eq!(s.pwd(), "/home/shibam");

        let err = s.cd("about.txt").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotADirectory);
        assert_eq!(s.pwd(), "/home/shibam");
    }

    #[test]
    fn test_rmdir_refuses_working_directory() {
        let mut s = session();
        s.mkdir("/tmp/a").unwrap();
        s.mkdir("/tmp/a/b").unwrap();
        s.cd("/tmp/a/b").unwrap();

        let err = s.rmdir(".").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), ".: Invalid argument");
        let err = s.rmdir("/tmp/a/b").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::InvalidArgument);
        assert_eq!(s.rmdir("/tmp/a").unwrap_err().kind(), FsErrorKind::NotEmpty);

        assert_eq!(s.pwd(), "/tmp/a/b");
        assert!(s.get_node(".").is_some_and(Node::is_directory));
        s.touch("x").unwrap();
        assert!(s.get_node("/tmp/a/b/x").is_some());

        s.rm("x").unwrap();
        s.cd("..").unwrap();
        s.rmdir("b").unwrap();
        assert!(s.get_node("/tmp/a/b").is_none());
    }

    #[test]
    fn test_ls_hides_dotfiles_by_default() {
        let s = session();
        let listing = s.ls(".", LsOptions::default()).unwrap();
        assert!(listing.contains("about.txt"));
        assert!(!listing.contains(".bashrc"));

        let listing = s.ls(".", LsOptions { all: true, long: false }).unwrap();
        assert!(listing.starts_with(".  ..  "));
        assert!(listing.contains(".bashrc"));
    }

    #[test]
    fn test_ls_long_format() {
        let mut s = session();
        s.write_file("/tmp/hi.txt", "hello").unwrap();
        s.mkdir("/tmp/sub").unwrap();
        let listing = s.ls("/tmp", LsOptions { all: false, long: true }).unwrap();
        assert_eq!(listing, "-rw-r--r--      5  hi.txt\ndrwxr-xr-x      0  sub");

        let listing = s.ls("/tmp", LsOptions { all: true, long: true }).unwrap();
        assert!(listing.starts_with("drwxr-xr-x  .\ndrwxr-xr-x  ..\n"));
    }

    #[test]
    fn test_ls_file_and_missing() {
        let s = session();
        assert_eq!(s.ls("~/about.txt", LsOptions::default()).unwrap(), "about.txt");
        assert_eq!(s.ls("nope", LsOptions::default()).unwrap_err().kind(), FsErrorKind::NotFound);
    }

    #[test]
    fn test_mkdir_twice_and_listing() {
        let mut s = session();
        s.mkdir("/a").unwrap();
        let err = s.mkdir("/a").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::AlreadyExists);
        assert_eq!(err.to_string(), "/a: File exists");
        let root = s.ls("/", LsOptions::default()).unwrap();
        assert!(root.split("  ").any(|name| name == "a"));
    }

    #[test]
    fn test_touch_cat_write() {
        let mut s = session();
        s.touch("/x").unwrap();
        assert_eq!(s.cat("/x").unwrap(), "");
        s.write_file("/x", "hi").unwrap();
        assert_eq!(s.cat("/x").unwrap(), "hi");
        s.append_file("/x", " there").unwrap();
        assert_eq!(s.cat("/x").unwrap(), "hi there");
        assert_eq!(s.cat("/tmp").unwrap_err().to_string(), "/tmp: Is a directory");
    }

    #[test]
    fn test_rm_dir_then_rmdir_after_emptying() {
        let mut s = session();
        s.mkdir("d").unwrap();
        s.touch("d/only").unwrap();
        assert_eq!(s.rm("d").unwrap_err().kind(), FsErrorKind::IsADirectory);
        assert_eq!(s.rmdir("d").unwrap_err().kind(), FsErrorKind::NotEmpty);
        s.rm("d/only").unwrap();
        s.rmdir("d").unwrap();
        assert!(s.get_node("d").is_none());
    }

    #[test]
    fn test_mv_into_directory() {
        let mut s = session();
        s.mkdir("/a").unwrap();
        s.mkdir("/b").unwrap();
        s.write_file("/a/f", "payload").unwrap();
        s.mv("/a/f", "/b/f").unwrap();
        assert!(s.get_node("/a/f").is_none());
        assert_eq!(s.cat("/b/f").unwrap(), "payload");

        s.mv("/b/f", "/a").unwrap();
        assert_eq!(s.cat("/a/f").unwrap(), "payload");
        assert!(s.get_node("/b/f").is_none());
    }

    #[test]
    fn test_mv_failure_keeps_source() {
        let mut s = session();
        let err = s.mv("about.txt", "/missing/dir/x").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::NotFound);
        assert_eq!(err.path(), "/missing/dir/x");
        assert!(s.get_node("about.txt").is_some());

        let err = s.mv("/tmp", "/var").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::IsADirectory);
        assert_eq!(err.path(), "/tmp");
    }

    #[test]
    fn test_mv_onto_itself_keeps_file() {
        let mut s = session();
        s.mv("about.txt", "about.txt").unwrap();
        s.mv("about.txt", ".").unwrap();
        assert!(s.cat("about.txt").unwrap().starts_with("About Me"));
    }

    #[test]
    fn test_cp_copies_are_independent() {
        let mut s = session();
        let before = s.cat("about.txt").unwrap();
        s.cp("about.txt", "/tmp/copy.txt").unwrap();
        s.write_file("/tmp/copy.txt", "mutated").unwrap();
        assert_eq!(s.cat("about.txt").unwrap(), before);
    }

    #[test]
    fn test_cp_error_paths_use_typed_arguments() {
        let mut s = session();
        assert_eq!(s.cp("ghost", "/tmp").unwrap_err().to_string(), "ghost: No such file or directory");
        assert_eq!(s.cp("/tmp", "x").unwrap_err().to_string(), "/tmp: Is a directory");
        assert_eq!(
            s.cp("about.txt", "nope/x").unwrap_err().to_string(),
            "nope/x: No such file or directory"
        );
    }

    #[test]
    fn test_environment() {
        let mut s = session();
        assert_eq!(s.get_env("USER"), "shibam");
        assert_eq!(s.get_env("MISSING"), "");
        s.set_env("EDITOR", "nano");
        let all = s.all_env();
        assert!(all.starts_with("USER=shibam\nHOME=/home/shibam\n"));
        assert!(all.ends_with("EDITOR=nano"));
    }

    #[test]
    fn test_tilde_follows_home_variable() {
        let mut s = session();
        s.set_env("HOME", "/tmp");
        assert_eq!(s.resolve_path("~/x"), "/tmp/x");
    }

    #[test]
    fn test_configured_profile() {
        let mut config = TerminalConfig::default();
        config.user = "ada".to_string();
        config.files.insert("/home/ada/notes.txt".to_string(), "bernoulli".to_string());
        config.env.insert("EDITOR".to_string(), "nano".to_string());
        let s = Session::new(config);
        assert_eq!(s.pwd(), "/home/ada");
        assert_eq!(s.cat("notes.txt").unwrap(), "bernoulli");
        assert_eq!(s.get_env("EDITOR"), "nano");
        assert_eq!(s.cat("/etc/passwd").unwrap().split(':').next(), Some("ada"));
    }

    #[test]
    fn test_with_fs_falls_back_to_root() {
        let s = Session::with_fs(TerminalConfig::default(), Box::new(VirtualFs::new()));
        assert_eq!(s.pwd(), "/");
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = session();
        let b = session();
        a.rm("about.txt").unwrap();
        a.cd("/tmp").unwrap();
        assert!(b.get_node("about.txt").is_some());
        assert_eq!(b.pwd(), "/home/shibam");
    }
}
