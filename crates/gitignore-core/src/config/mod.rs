//! Configuration for the gitignore tool.
//!
//! Settings are layered, lowest precedence first:
//! - Built-in defaults
//! - Optional TOML file (`$GITIGNORE_CLI_CONFIG` or
//!   `<config_dir>/gitignore-cli/config.toml`)
//! - Environment variables
//!
//! Command-line flags are applied on top by the caller.

pub mod file;
pub mod settings;

pub use file::{FileConfig, default_config_path, parse_config_file, parse_config_str};
pub use settings::Settings;

/// Path of the TOML config file to load.
pub const CONFIG_ENV: &str = "GITIGNORE_CLI_CONFIG";

/// Custom templates directory.
pub const TEMPLATE_DIR_ENV: &str = "GITIGNORE_CLI_TEMPLATE_DIR";

/// Cache root directory.
pub const CACHE_DIR_ENV: &str = "GITIGNORE_CLI_CACHE_DIR";
