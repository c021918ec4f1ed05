use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{GoweekError, Result};
use crate::vcs::Committer;

/// Committer that shells out to `git` inside the repository directory
pub struct GitCli {
    repo_dir: PathBuf,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Run a git subcommand and return its stdout
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!("Running `{}` in {}", command, self.repo_dir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| GoweekError::Command {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            output.status.to_string()
        } else {
            stderr
        };

        Err(GoweekError::Command { command, message })
    }
}

impl Committer for GitCli {
    fn has_changes(&self) -> Result<bool> {
        let status = self.run(&["status", "--porcelain"])?;
        Ok(!status.is_empty())
    }

    fn add_all(&self) -> Result<()> {
        self.run(&["add", "."]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    fn push(&self) -> Result<()> {
        self.run(&["push"]).map(|_| ())
    }
}
