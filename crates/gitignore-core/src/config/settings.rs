//! Effective settings after layering file config and environment.

use std::path::PathBuf;

use anyhow::Result;

use super::{CACHE_DIR_ENV, CONFIG_ENV, TEMPLATE_DIR_ENV};
use super::file::{FileConfig, default_config_path, parse_config_file};
use crate::cache::{CacheLayout, DEFAULT_BRANCH, DEFAULT_REPO_URL, RemoteSpec};

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repo_url: String,
    pub default_branch: String,
    pub cache_dir: PathBuf,
    pub custom_templates_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the process environment and the config file it
    /// points at.
    pub fn from_env() -> Result<Self> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load settings using `env` for variable lookups.
    pub fn load<F>(env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = non_empty(env(CONFIG_ENV))
            .map(PathBuf::from)
            .or_else(default_config_path);
        let file = match config_path {
            Some(path) => parse_config_file(&path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, env)
    }

    /// Layer environment variables over a parsed config file.
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_dir = match non_empty(env(CACHE_DIR_ENV))
            .map(PathBuf::from)
            .or(file.cache_dir)
        {
            Some(dir) => dir,
            None => CacheLayout::default_root()?,
        };
        let custom_templates_dir = non_empty(env(TEMPLATE_DIR_ENV))
            .map(PathBuf::from)
            .or(file.custom_templates_dir);

        Ok(Self {
            repo_url: file.repo_url.unwrap_or_else(|| DEFAULT_REPO_URL.to_string()),
            default_branch: file
                .default_branch
                .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            cache_dir,
            custom_templates_dir,
        })
    }

    pub fn remote(&self) -> RemoteSpec {
        RemoteSpec::new(self.repo_url.clone()).with_default_branch(self.default_branch.clone())
    }

    pub fn cache_layout(&self) -> CacheLayout {
        CacheLayout::new(self.cache_dir.clone())
    }
}

/// Empty variables count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
