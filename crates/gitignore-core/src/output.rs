//! Selection of where generated templates are written.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::git::repo_root;

/// Name of the ignore file written in repository modes.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// How the repository's ignore file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoWriteMode {
    Append,
    Overwrite,
}

/// Output flags as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRequest {
    /// Append to `.gitignore` at the repository root.
    pub append: bool,
    /// Truncate and write `.gitignore` at the repository root.
    pub write: bool,
    /// Explicit output file, opened for append.
    pub out: Option<PathBuf>,
}

impl OutputRequest {
    /// Append wins over write.
    pub fn repo_mode(&self) -> Option<RepoWriteMode> {
        if self.append {
            Some(RepoWriteMode::Append)
        } else if self.write {
            Some(RepoWriteMode::Overwrite)
        } else {
            None
        }
    }

    /// Open the destination for this request, relative to `cwd`.
    ///
    /// Repository modes outside a working tree fall back to the `out`
    /// file or stdout and record `cwd` in `not_a_repo`.
    pub fn select(&self, cwd: &Path) -> anyhow::Result<OutputSelection> {
        let mut not_a_repo = None;

        if let Some(mode) = self.repo_mode() {
            match repo_root(cwd) {
                Ok(root) => {
                    let path = root.join(IGNORE_FILE_NAME);
                    let file = open_ignore_file(&path, mode)?;
                    return Ok(OutputSelection {
                        target: OutputTarget::File { path, file },
                        not_a_repo: None,
                    });
                }
                Err(err) => {
                    debug!(error = %err, "Writing to fallback output");
                    not_a_repo = Some(cwd.to_path_buf());
                }
            }
        }

        let target = match &self.out {
            Some(path) => OutputTarget::File {
                path: path.clone(),
                file: open_ignore_file(path, RepoWriteMode::Append)?,
            },
            None => OutputTarget::Stdout,
        };
        Ok(OutputSelection { target, not_a_repo })
    }
}

/// An opened output destination.
#[derive(Debug)]
pub enum OutputTarget {
    Stdout,
    File { path: PathBuf, file: File },
}

impl OutputTarget {
    /// `stdout` or the file path, for messages.
    pub fn describe(&self) -> String {
        match self {
            OutputTarget::Stdout => "stdout".to_string(),
            OutputTarget::File { path, .. } => path.display().to_string(),
        }
    }
}

/// Chosen target plus the directory that turned out not to be a
/// repository, when a repository mode had to fall back.
#[derive(Debug)]
pub struct OutputSelection {
    pub target: OutputTarget,
    pub not_a_repo: Option<PathBuf>,
}

fn open_ignore_file(path: &Path, mode: RepoWriteMode) -> anyhow::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        RepoWriteMode::Append => options.append(true),
        RepoWriteMode::Overwrite => options.write(true).truncate(true),
    };
    options
        .open(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))
}
