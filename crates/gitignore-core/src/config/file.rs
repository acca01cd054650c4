//! The optional TOML config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contents of `config.toml`. Every key is optional.
///
/// ```toml
/// repo_url = "https://github.com/toptal/gitignore"
/// default_branch = "master"
/// cache_dir = "/home/me/.cache/gitignore-cli"
/// custom_templates_dir = "/home/me/dotfiles/gitignore"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub repo_url: Option<String>,
    pub default_branch: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub custom_templates_dir: Option<PathBuf>,
}

/// `<config_dir>/gitignore-cli/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gitignore-cli").join("config.toml"))
}

/// Read a config file. A missing file yields the empty config.
pub fn parse_config_file(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config_str(content: &str) -> Result<FileConfig> {
    let config: FileConfig =
        toml::from_str(content).map_err(|e| anyhow::anyhow!("TOML parsing error: {}", e))?;

    if let Some(url) = &config.repo_url
        && url.trim().is_empty()
    {
        anyhow::bail!("repo_url must not be empty");
    }
    if let Some(branch) = &config.default_branch
        && branch.trim().is_empty()
    {
        anyhow::bail!("default_branch must not be empty");
    }

    Ok(config)
}
