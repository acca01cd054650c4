//! Application context for dependency injection.

use std::path::{Path, PathBuf};

use crate::cache::TemplateCache;
use crate::config::Settings;
use crate::git::{GitCli, Synchronizer};

/// Resolved settings plus the directory the tool was invoked from.
///
/// Frontends create this once and build services from it.
#[derive(Debug, Clone)]
pub struct AppContext {
    cwd: PathBuf,
    settings: Settings,
}

impl AppContext {
    pub fn new(cwd: PathBuf, settings: Settings) -> Self {
        Self { cwd, settings }
    }

    /// Context for the current process: working directory and
    /// environment-derived settings.
    pub fn from_env() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd, Settings::from_env()?))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Template cache synchronized with the given backend.
    pub fn template_cache(&self, synchronizer: Box<dyn Synchronizer>) -> TemplateCache {
        TemplateCache::new(
            self.settings.cache_layout(),
            self.settings.remote(),
            synchronizer,
        )
    }

    /// Template cache synchronized by the `git` executable.
    pub fn git_template_cache(&self) -> TemplateCache {
        self.template_cache(Box::new(GitCli::new()))
    }
}
