//! Terminal configuration
//!
//! Profile settings for a session. Every field has a default, so a config
//! file only needs to mention what it changes:
//!
//! ```toml
//! user = "ada"
//! hostname = "engine"
//! prompt_host = "engine"
//!
//! [env]
//! EDITOR = "nano"
//!
//! [files]
//! "/home/ada/notes.txt" = "remember the bernoulli numbers"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// External links opened by the portfolio shortcuts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
    pub resume: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            github: "https://github.com/shibammandal".to_string(),
            linkedin: "https://linkedin.com/in/shibammandalfy".to_string(),
            resume: "CV.pdf".to_string(),
        }
    }
}

/// Options for creating a terminal session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Login name shown in the prompt and owning the home directory
    pub user: String,
    /// Host name reported by `hostname`, `uname -n` and `/etc/hostname`
    pub hostname: String,
    /// Short host label shown in the prompt and the neofetch header
    pub prompt_host: String,
    /// Home directory (defaults to `/home/<user>`)
    pub home: Option<String>,
    /// Extra environment variables, appended after the defaults
    pub env: IndexMap<String, String>,
    /// Extra seed files, path to content; parents are created
    pub files: BTreeMap<String, String>,
    /// Message for `cowsay` without arguments
    pub cowsay_default: String,
    pub links: Links,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "shibam".to_string(),
            hostname: "shibam-portfolio".to_string(),
            prompt_host: "portfolio".to_string(),
            home: None,
            env: IndexMap::new(),
            files: BTreeMap::new(),
            cowsay_default: "Hire Shibam!".to_string(),
            links: Links::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Absolute home directory for the configured user.
    pub fn home_dir(&self) -> String {
        match &self.home {
            Some(home) => crate::fs::normalize_path(home),
            None => format!("/home/{}", self.user),
        }
    }
}
