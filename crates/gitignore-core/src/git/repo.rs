//! Working tree and branch discovery.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};

use crate::error::RepoError;

/// Find the root of the git working tree containing `start`.
///
/// Bare repositories have no working tree and are reported as
/// `NotAGitRepository`.
pub fn repo_root(start: &Path) -> Result<PathBuf, RepoError> {
    let repo = match Repository::discover(start) {
        Ok(repo) => repo,
        Err(err) if err.code() == ErrorCode::NotFound => {
            return Err(RepoError::NotAGitRepository {
                path: start.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(RepoError::Git {
                path: start.to_path_buf(),
                source,
            });
        }
    };

    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| RepoError::NotAGitRepository {
            path: start.to_path_buf(),
        })
}

/// Name of the branch `HEAD` points at in the repository at `repo_dir`.
///
/// Reads the symbolic target of `HEAD`, so an unborn branch still has a
/// name. Returns `None` when `repo_dir` is not a repository or `HEAD` is
/// detached.
pub fn current_branch(repo_dir: &Path) -> Option<String> {
    let repo = Repository::open(repo_dir).ok()?;
    let head = repo.find_reference("HEAD").ok()?;
    head.symbolic_target()?
        .strip_prefix("refs/heads/")
        .map(str::to_string)
}
