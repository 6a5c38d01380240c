//! Foundation types for the MetaEd toolchain.
//!
//! This module provides fundamental types used throughout the builder:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`SourceMap`] - Provenance attached to every field set from source text
//!
//! This module has NO dependencies on other metaed modules.

mod position;
mod source_map;

pub use position::{LineCol, LineIndex};
pub use source_map::{NO_SOURCE_MAP, SourceMap, describe};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
