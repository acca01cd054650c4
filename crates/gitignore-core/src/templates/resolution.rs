//! Outcome of resolving a single template name.

/// Result of looking up a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Template contents, byte for byte.
    Found(Vec<u8>),
    /// No template with this name exists.
    NotFound(String),
}

impl Resolution {
    /// 0 when found, 1 when undefined.
    pub fn status_code(&self) -> i32 {
        match self {
            Resolution::Found(_) => 0,
            Resolution::NotFound(_) => 1,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Text written to the output stream: the contents, or the
    /// undefined-template sentinel line.
    pub fn into_output(self) -> Vec<u8> {
        match self {
            Resolution::Found(content) => content,
            Resolution::NotFound(name) => undefined_sentinel(&name).into_bytes(),
        }
    }
}

/// Placeholder emitted inline in place of an undefined template.
pub fn undefined_sentinel(name: &str) -> String {
    format!(
        "#!! ERROR: {name} is undefined. Use list command to see defined gitignore types !!#"
    )
}
