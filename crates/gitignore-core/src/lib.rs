//! gitignore Core Library
//!
//! Provides template lookup against a locally cached mirror of the
//! gitignore template repository, cache synchronization through git,
//! and the output handling behind the `gitignore` command.

pub mod cache;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod git;
pub mod output;
pub mod templates;

/// Re-exports of commonly used types
pub mod prelude {
    // Cache
    pub use crate::cache::{CacheLayout, RemoteSpec, SyncAction, TemplateCache};

    // Commands
    pub use crate::commands::{GenerateCommand, GenerateOptions, GenerateOutcome};

    // Configuration
    pub use crate::config::Settings;
    pub use crate::context::AppContext;

    // Errors
    pub use crate::error::{RepoError, SyncError};

    // Git
    pub use crate::git::{GitCli, Synchronizer};

    // Templates
    pub use crate::templates::{Resolution, TemplateResolver};
}
