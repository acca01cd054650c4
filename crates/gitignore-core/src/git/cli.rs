//! `Synchronizer` backed by the `git` executable.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::Synchronizer;
use crate::error::SyncError;

const GIT_ENV_OVERRIDES: [&str; 4] = [
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_COMMON_DIR",
];

/// A `git` command with repository overrides from the caller's
/// environment removed.
pub fn git_command() -> Command {
    let mut cmd = Command::new("git");
    for key in GIT_ENV_OVERRIDES {
        cmd.env_remove(key);
    }
    cmd
}

/// Runs `git clone` / `git pull` as child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    /// Run a git command, capturing its output.
    ///
    /// Captured stdout is discarded so it can never reach the template
    /// output stream; stderr is kept for the error message.
    fn run_git(args: &[&OsStr]) -> Result<(), SyncError> {
        let command = args
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(%command, "running git");

        let output = git_command()
            .args(args)
            .output()
            .map_err(|source| SyncError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SyncError::Command {
                command,
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Synchronizer for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), SyncError> {
        Self::run_git(&[OsStr::new("clone"), OsStr::new(url), dest.as_os_str()])
    }

    fn pull(&self, dest: &Path, branch: &str) -> Result<(), SyncError> {
        Self::run_git(&[
            OsStr::new("-C"),
            dest.as_os_str(),
            OsStr::new("pull"),
            OsStr::new("origin"),
            OsStr::new(branch),
        ])
    }
}
