//! Git operations backing the template cache.
//!
//! This module provides:
//! - The `Synchronizer` capability (clone / pull) used to refresh the cache
//! - `GitCli`, which runs the `git` executable
//! - Working tree and branch discovery through libgit2

mod cli;
mod repo;
mod sync;

pub use cli::{GitCli, git_command};
pub use repo::{current_branch, repo_root};
pub use sync::Synchronizer;
