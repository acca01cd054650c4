//! Typed errors for the failures callers branch on.
//!
//! Everything else in the crate reports through `anyhow` with context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A cache synchronization step that did not complete.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to create cache directory {}: {source}", .path.display())]
    CreateCacheDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to run git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("git {command} failed ({status}): {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Failure to locate the git working tree around a directory.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("{} is not a git repository", .path.display())]
    NotAGitRepository { path: PathBuf },

    #[error("Failed to inspect git repository at {}: {source}", .path.display())]
    Git {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },
}
