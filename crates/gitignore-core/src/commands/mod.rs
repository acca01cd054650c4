//! Commands shared by frontends.

pub mod generate;

pub use generate::{GenerateCommand, GenerateOptions, GenerateOutcome};
