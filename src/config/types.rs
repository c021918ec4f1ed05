use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default zone for resolving the report week
pub const DEFAULT_TIMEZONE: &str = "Asia/Hong_Kong";

/// Default message used for every report commit
pub const DEFAULT_COMMIT_MESSAGE: &str = "update weekly report";

/// Goweek configuration, read from `config.json` in the profile directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Reports root, also the Git working tree that gets committed
    pub docs_dir: PathBuf,

    /// Editor executable used to open a freshly generated report
    #[serde(default, alias = "typora_path")]
    pub editor_path: Option<PathBuf>,

    /// Arguments passed to the editor before the report path
    #[serde(default = "default_editor_args")]
    pub editor_args: Vec<String>,

    /// IANA timezone the current date is read in
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Message for the report commit
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

fn default_editor_args() -> Vec<String> {
    vec!["--fullscreen".to_string()]
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_commit_message() -> String {
    DEFAULT_COMMIT_MESSAGE.to_string()
}

#[cfg(test)]
impl Config {
    /// Configuration with every optional field at its default
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            editor_path: None,
            editor_args: default_editor_args(),
            timezone: default_timezone(),
            commit_message: default_commit_message(),
        }
    }
}

/// Per-user directory holding `config.json` and `template.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    dir: PathBuf,
}

impl Profile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.json")
    }

    pub fn template_path(&self) -> PathBuf {
        self.dir.join("template.md")
    }
}
