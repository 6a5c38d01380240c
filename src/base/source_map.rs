//! Source provenance for model fields.
//!
//! Every model object carries a parallel source-map struct whose fields are
//! `Option<SourceMap>`. `None` means the data field was never set from
//! source text.

use std::fmt;

/// Text used when rendering a missing source map.
pub const NO_SOURCE_MAP: &str = "NoSourceMap";

/// The location and captured text of the token (or rule) that set a field.
///
/// `line` is 1-based, `column` is 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceMap {
    pub line: u32,
    pub column: u32,
    pub token_text: String,
}

impl SourceMap {
    pub fn new(line: u32, column: u32, token_text: impl Into<String>) -> Self {
        Self {
            line,
            column,
            token_text: token_text.into(),
        }
    }
}

impl fmt::Display for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} '{}'", self.line, self.column, self.token_text)
    }
}

/// Render an optional source map, using [`NO_SOURCE_MAP`] for `None`.
pub fn describe(source_map: Option<&SourceMap>) -> String {
    match source_map {
        Some(map) => map.to_string(),
        None => NO_SOURCE_MAP.to_string(),
    }
}
