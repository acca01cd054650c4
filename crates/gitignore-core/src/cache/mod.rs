//! The local template cache and its synchronization.
//!
//! The cache is a clone of the remote template repository. It is cloned on
//! first use, pulled on refresh, and never removed by this tool.

mod layout;
mod remote;

pub use layout::{CacheLayout, TEMPLATE_EXTENSION, template_file_name};
pub use remote::{DEFAULT_BRANCH, DEFAULT_REPO_URL, RemoteSpec};

use std::cell::Cell;
use std::fmt;
use std::fs;

use tracing::{debug, info, warn};

use crate::error::SyncError;
use crate::git::{Synchronizer, current_branch};

/// What a successful synchronization did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// The repository was cloned into an empty cache.
    Cloned,
    /// An existing clone was updated from `origin/<branch>`.
    Pulled { branch: String },
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncAction::Cloned => write!(f, "cloned"),
            SyncAction::Pulled { branch } => write!(f, "pulled {branch}"),
        }
    }
}

/// Template cache bound to a remote and a synchronizer.
///
/// After a failed refresh, lookups no longer retry synchronization for the
/// lifetime of this value; an explicit `refresh` still does.
pub struct TemplateCache {
    layout: CacheLayout,
    remote: RemoteSpec,
    synchronizer: Box<dyn Synchronizer>,
    sync_failed: Cell<bool>,
}

impl TemplateCache {
    pub fn new(
        layout: CacheLayout,
        remote: RemoteSpec,
        synchronizer: Box<dyn Synchronizer>,
    ) -> Self {
        Self {
            layout,
            remote,
            synchronizer,
            sync_failed: Cell::new(false),
        }
    }

    pub fn layout(&self) -> &CacheLayout {
        &self.layout
    }

    pub fn remote(&self) -> &RemoteSpec {
        &self.remote
    }

    /// Clone the remote if the cache is empty, otherwise pull it.
    pub fn sync(&self) -> Result<SyncAction, SyncError> {
        let root = self.layout.root();
        fs::create_dir_all(root).map_err(|source| SyncError::CreateCacheDir {
            path: root.to_path_buf(),
            source,
        })?;

        let repo_dir = self.layout.repo_dir();
        if !repo_dir.exists() {
            info!(
                url = %self.remote.url,
                dest = %repo_dir.display(),
                "Cloning template repository"
            );
            self.synchronizer.clone_repo(&self.remote.url, repo_dir)?;
            return Ok(SyncAction::Cloned);
        }

        let branch = current_branch(repo_dir).unwrap_or_else(|| {
            debug!(
                fallback = %self.remote.default_branch,
                "Cache has no current branch"
            );
            self.remote.default_branch.clone()
        });
        info!(%branch, dest = %repo_dir.display(), "Pulling template repository");
        self.synchronizer.pull(repo_dir, &branch)?;
        Ok(SyncAction::Pulled { branch })
    }

    /// Best-effort `sync`: failures are logged and reported as `false`.
    pub fn refresh(&self) -> bool {
        let refreshed = match self.sync() {
            Ok(action) => {
                info!(%action, "gitignore cache is updated");
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to refresh gitignore cache");
                false
            }
        };
        self.sync_failed.set(!refreshed);
        refreshed
    }

    /// Refresh the cache when its template directory is missing, unless a
    /// refresh has already failed.
    pub fn ensure_templates(&self) {
        if self.layout.templates_dir().exists() {
            return;
        }
        if self.sync_failed.get() {
            debug!("Skipping cache refresh after earlier failure");
            return;
        }
        self.refresh();
    }
}
