//! The `gitignore` command: list templates or concatenate them into an
//! output target.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cache::TemplateCache;
use crate::output::{OutputRequest, OutputTarget};
use crate::templates::TemplateResolver;

/// Options for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Template names, emitted in this order
    pub templates: Vec<String>,
    /// Directory searched before the cache
    pub custom_templates_dir: Option<PathBuf>,
    /// Where output goes
    pub output: OutputRequest,
    /// Synchronize the cache before doing anything else
    pub refresh: bool,
    /// Print available template names instead of templates
    pub list: bool,
    /// Program name used in the usage hint
    pub program_name: String,
}

/// How an invocation ended. All variants are successful exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Template names were printed.
    Listed { count: usize },
    /// No template names were given; a usage hint was printed.
    NoTemplates,
    /// Templates were written; `undefined` holds names that had no template.
    Emitted {
        written: usize,
        undefined: Vec<String>,
    },
}

/// Runs one invocation against a template cache.
pub struct GenerateCommand<'a> {
    cache: &'a TemplateCache,
    cwd: &'a Path,
}

impl<'a> GenerateCommand<'a> {
    pub fn new(cache: &'a TemplateCache, cwd: &'a Path) -> Self {
        Self { cache, cwd }
    }

    /// Execute with the given standard streams.
    ///
    /// The output target is opened only when there are templates to
    /// write, so `--write` never truncates `.gitignore` for a list or a
    /// usage hint.
    pub fn execute(
        &self,
        options: &GenerateOptions,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<GenerateOutcome> {
        if options.refresh {
            self.cache.refresh();
        }

        let resolver = TemplateResolver::new(self.cache, options.custom_templates_dir.as_deref());

        if options.list {
            let names = resolver.list()?;
            let listing = names.iter().map(String::as_str).collect::<Vec<_>>().join("\n");
            writeln!(stdout, "{listing}").context("Failed to write template list")?;
            stdout.flush()?;
            return Ok(GenerateOutcome::Listed { count: names.len() });
        }

        if options.templates.is_empty() {
            write_usage_hint(stderr, &options.program_name)?;
            return Ok(GenerateOutcome::NoTemplates);
        }

        let mut selection = options.output.select(self.cwd)?;
        let target_name = selection.target.describe();
        debug!(target = %target_name, "Writing templates");

        let out: &mut dyn Write = match &mut selection.target {
            OutputTarget::Stdout => stdout,
            OutputTarget::File { file, .. } => file,
        };

        let mut undefined = Vec::new();
        for name in &options.templates {
            let resolution = resolver.resolve(name)?;
            if !resolution.is_found() {
                undefined.push(name.clone());
            }
            out.write_all(&resolution.into_output())
                .and_then(|()| out.write_all(b"\n"))
                .with_context(|| format!("Failed to write to {}", target_name))?;
            out.flush()
                .with_context(|| format!("Failed to flush {}", target_name))?;
        }

        if let Some(dir) = &selection.not_a_repo {
            writeln!(
                stderr,
                "{} is not a git repository, outputted to {} instead.",
                dir.display(),
                target_name
            )?;
        }

        Ok(GenerateOutcome::Emitted {
            written: options.templates.len() - undefined.len(),
            undefined,
        })
    }
}

fn write_usage_hint(stderr: &mut dyn Write, program_name: &str) -> anyhow::Result<()> {
    writeln!(stderr, "No templates specified")?;
    writeln!(stderr, "Run `{program_name} --help' to get help")?;
    writeln!(stderr, "Run `{program_name} --list' to see available templates")?;
    Ok(())
}
