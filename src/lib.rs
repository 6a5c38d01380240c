//! # metaed-base
//!
//! Semantic-model builder for the MetaEd data-modeling language.
//!
//! Source text is parsed into a lossless CST; listeners walk it and build a
//! namespace-scoped repository of entities, with a source map for every field
//! and a list of validation failures.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! builder   → Namespace/entity builders, build pipeline
//!   ↓
//! listener  → RuleContext, MetaEdListener, ParseTreeWalker
//!   ↓
//! model     → Environment, namespaces, entities, properties, failures
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, Rowan CST
//!   ↓
//! base      → Primitives (LineIndex, SourceMap, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use metaed::builder::build_from_source;
//! use metaed::model::EntityKind;
//!
//! let result = build_from_source(
//!     "Begin Namespace EdFi core
//!      Domain Entity Student
//!          documentation \"A student.\"
//!          integer StudentUSI
//!              documentation \"Identifier.\"
//!              is part of identity
//!      End Namespace",
//! );
//! let repository = &result.environment.namespace("EdFi").unwrap().repository;
//! let student = repository
//!     .top_level_entity(EntityKind::DomainEntity, "Student")
//!     .unwrap();
//! assert_eq!(student.identity_properties().count(), 1);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → model → listener → builder)
// ============================================================================

/// Foundation types: line index, source maps, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, Rowan CST
pub mod parser;

/// Semantic model: environment, namespaces, repositories, failures
pub mod model;

/// Parse-tree walker and the listener protocol
pub mod listener;

/// Builders and the build pipeline
pub mod builder;

/// Model lookup errors
pub mod error;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{LineCol, LineIndex, SourceMap, TextRange, TextSize};
pub use builder::{BuildOptions, BuildResult, MetaEdBuild, build_from_source};
pub use error::{ModelError, ModelResult};
pub use model::{MetaEdEnvironment, ValidationFailure, ValidationFailures};
