//! Clone/pull capability used to keep the template cache current.

use std::path::Path;

use crate::error::SyncError;

/// Clones and updates a local mirror of a remote repository.
///
/// Only success or failure is reported; no output of the underlying
/// tool is interpreted.
pub trait Synchronizer {
    /// Clone `url` into `dest`, which must not exist yet.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), SyncError>;

    /// Pull `branch` from `origin` into the clone at `dest`.
    fn pull(&self, dest: &Path, branch: &str) -> Result<(), SyncError>;
}
