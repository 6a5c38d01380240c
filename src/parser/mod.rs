//! Rowan-based parser for MetaEd
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind (every word is IDENT)
//!     ↓
//! Parser → GreenNode tree, keywords re-tagged in keyword position
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! Listener walk → enter/exit rule events for the model builders
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod keywords;
mod lexer;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::{MetaEdLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
