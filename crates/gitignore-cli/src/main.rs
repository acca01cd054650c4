//! gitignore - fetch .gitignore templates from a local mirror of
//! github.com/toptal/gitignore
//!
//! Usage:
//!   gitignore Python Node        # Print templates to stdout
//!   gitignore -a Rust            # Append to the repository's .gitignore
//!   gitignore --list             # Show available templates
//!   gitignore --refresh          # Update the template cache

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitignore_core::commands::{GenerateCommand, GenerateOptions};
use gitignore_core::context::AppContext;
use gitignore_core::output::OutputRequest;

const DEFAULT_PROGRAM_NAME: &str = "gitignore";

#[derive(Parser)]
#[command(name = "gitignore", version)]
#[command(about = "gitignore CLI", long_about = None)]
struct Cli {
    /// Template names, written in the order given
    #[arg(value_name = "TEMPLATES")]
    templates: Vec<String>,

    /// Custom templates dir, searched for *.gitignore before the cache
    ///
    /// Defaults to the value of $GITIGNORE_CLI_TEMPLATE_DIR
    #[arg(short, long, value_name = "PATH")]
    custom_templates_dir: Option<PathBuf>,

    /// Output to FILE (appended if it exists) unless -a or -w is given
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Refresh the gitignore cache
    #[arg(short, long)]
    refresh: bool,

    /// List available gitignore templates
    #[arg(short, long)]
    list: bool,

    /// Append to the .gitignore of the current git repository
    #[arg(short, long)]
    append: bool,

    /// Write to the .gitignore of the current git repository (overwrite)
    #[arg(short, long)]
    write: bool,
}

impl Cli {
    fn into_options(self, context: &AppContext, program_name: String) -> GenerateOptions {
        GenerateOptions {
            templates: self.templates,
            custom_templates_dir: self
                .custom_templates_dir
                .or_else(|| context.settings().custom_templates_dir.clone()),
            output: OutputRequest {
                append: self.append,
                write: self.write,
                out: self.out,
            },
            refresh: self.refresh,
            list: self.list,
            program_name,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so they never mix with templates
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,gitignore_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let context = AppContext::from_env()?;
    let cache = context.git_template_cache();
    let options = cli.into_options(&context, program_name());

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let outcome = GenerateCommand::new(&cache, context.cwd()).execute(
        &options,
        &mut stdout,
        &mut stderr,
    )?;
    stdout.flush()?;
    tracing::debug!(?outcome, "Finished");

    Ok(())
}

/// Name the binary was invoked as, for the usage hint.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}
