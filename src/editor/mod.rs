//! Editor launch module
//!
//! Opens a generated report in an external editor without waiting for it.
use log::info;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{GoweekError, Result};

/// Something that can open a file for the user
pub trait Launcher {
    fn open(&self, file: &Path) -> Result<()>;
}

/// Launcher that spawns an editor executable as a detached process
pub struct EditorLauncher {
    program: PathBuf,
    args: Vec<String>,
}

impl EditorLauncher {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn command(&self, file: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Launcher for EditorLauncher {
    fn open(&self, file: &Path) -> Result<()> {
        let child = self.command(file).spawn().map_err(|e| {
            GoweekError::Editor(format!(
                "Cannot start '{}': {}",
                self.program.display(),
                e
            ))
        })?;

        info!(
            "Opened {} with {} (pid {})",
            file.display(),
            self.program.display(),
            child.id()
        );
        Ok(())
    }
}
