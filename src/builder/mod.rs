//! Builders: listeners that turn parse events into the semantic model.
//!
//! ```text
//! NamespaceBuilder      → registers namespaces (always runs first)
//! TopLevelEntityBuilder → entities with properties, enumerations, descriptors
//! DomainBuilder         → Domain
//! SubdomainBuilder      → Subdomain
//! InterchangeBuilder    → Interchange, Interchange additions
//! SharedSimpleBuilder   → Shared String/Decimal/Integer/Short
//! ```
//!
//! Every entity builder tracks the enclosing namespace, fills in one object
//! per declaration with a source map for each field it sets, and finishes it
//! with a duplicate-checked insert into that namespace's repository.

mod base;
mod domain;
mod interchange;
mod namespace;
mod pipeline;
mod shared_simple;
mod top_level_entity;

pub use base::{duplicate_declaration_message, split_qualified_name};
pub use domain::{DOMAIN_BUILDER, DomainBuilder, SUBDOMAIN_BUILDER, SubdomainBuilder};
pub use interchange::{INTERCHANGE_BUILDER, InterchangeBuilder};
pub use namespace::NamespaceBuilder;
pub use pipeline::{
    BuildOptions, BuildResult, BuilderKind, BuilderSet, MetaEdBuild, SourceSyntaxError,
    WalkStrategy, build_from_source,
};
pub use shared_simple::{SHARED_SIMPLE_BUILDER, SharedSimpleBuilder};
pub use top_level_entity::{TOP_LEVEL_ENTITY_BUILDER, TopLevelEntityBuilder, property_kind_for};
