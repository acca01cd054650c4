//! Template lookup against the cache and an optional override directory.

mod resolution;
mod resolver;

pub use resolution::{Resolution, undefined_sentinel};
pub use resolver::TemplateResolver;
