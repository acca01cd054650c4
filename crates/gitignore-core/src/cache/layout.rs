//! On-disk layout of the template cache.

use std::path::{Path, PathBuf};

/// File extension shared by every template file.
pub const TEMPLATE_EXTENSION: &str = "gitignore";

const APP_DIR_NAME: &str = "gitignore-cli";
const REPO_DIR_NAME: &str = "gitignore";
const TEMPLATES_DIR_NAME: &str = "templates";

/// Paths of the cache, derived from a single root directory.
///
/// ```text
/// <root>/
///   gitignore/            clone of the remote repository
///     templates/          one <name>.gitignore per template
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
    repo_dir: PathBuf,
    templates_dir: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let repo_dir = root.join(REPO_DIR_NAME);
        let templates_dir = repo_dir.join(TEMPLATES_DIR_NAME);
        Self {
            root,
            repo_dir,
            templates_dir,
        }
    }

    /// Default cache root: `~/.cache/gitignore-cli`.
    pub fn default_root() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
        Ok(home.join(".cache").join(APP_DIR_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Path the cached copy of `name` would have.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(template_file_name(name))
    }
}

/// `<name>.gitignore`
pub fn template_file_name(name: &str) -> String {
    format!("{name}.{TEMPLATE_EXTENSION}")
}
