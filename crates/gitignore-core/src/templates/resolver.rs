//! Resolves template names to file contents.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use super::Resolution;
use crate::cache::{TEMPLATE_EXTENSION, TemplateCache, template_file_name};

/// Looks templates up in a custom directory first, then in the cache.
///
/// Every lookup first makes sure the cache has been cloned.
pub struct TemplateResolver<'a> {
    cache: &'a TemplateCache,
    custom_dir: Option<&'a Path>,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(cache: &'a TemplateCache, custom_dir: Option<&'a Path>) -> Self {
        Self { cache, custom_dir }
    }

    /// Resolve `name` to the contents of `<name>.gitignore`.
    ///
    /// A template in the custom directory wins over the cached one.
    /// Only a file that exists but cannot be read is an error.
    pub fn resolve(&self, name: &str) -> anyhow::Result<Resolution> {
        self.cache.ensure_templates();

        if !is_template_name(name) {
            return Ok(Resolution::NotFound(name.to_string()));
        }
        let file_name = template_file_name(name);

        if let Some(custom_dir) = self.custom_dir {
            let custom_path = custom_dir.join(&file_name);
            if custom_path.is_file() {
                debug!(template = name, path = %custom_path.display(), "Using custom template");
                return read_template(&custom_path).map(Resolution::Found);
            }
        }

        let cached_path = self.cache.layout().template_path(name);
        if cached_path.is_file() {
            return read_template(&cached_path).map(Resolution::Found);
        }

        debug!(template = name, "Template is undefined");
        Ok(Resolution::NotFound(name.to_string()))
    }

    /// Names of all templates in the cache and the custom directory.
    pub fn list(&self) -> anyhow::Result<BTreeSet<String>> {
        self.cache.ensure_templates();

        let mut names = BTreeSet::new();
        collect_template_names(self.cache.layout().templates_dir(), &mut names)?;
        if let Some(custom_dir) = self.custom_dir {
            collect_template_names(custom_dir, &mut names)?;
        }
        Ok(names)
    }
}

/// A name must stay inside the template directory.
fn is_template_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\'])
}

fn read_template(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("Failed to read template: {}", path.display()))
}

/// Add the stem of every `*.gitignore` file in `dir`. A missing
/// directory contributes nothing.
fn collect_template_names(dir: &Path, names: &mut BTreeSet<String>) -> anyhow::Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read template directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension() != Some(OsStr::new(TEMPLATE_EXTENSION)) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
            names.insert(stem.to_string());
        }
    }
    Ok(())
}
