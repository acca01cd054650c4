//! Remote template repository specification.

/// Upstream template repository.
pub const DEFAULT_REPO_URL: &str = "https://github.com/toptal/gitignore";

/// Branch pulled when the clone's own branch cannot be determined.
pub const DEFAULT_BRANCH: &str = "master";

/// Where the cache is cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    /// Repository URL (anything `git clone` accepts)
    pub url: String,
    /// Fallback branch for pulls
    pub default_branch: String,
}

impl RemoteSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Set the fallback branch.
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }
}

impl Default for RemoteSpec {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_URL)
    }
}
