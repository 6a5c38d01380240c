//! The semantic model produced by the builders.
//!
//! ```text
//! MetaEdEnvironment
//!   └── Namespace (one per `Begin Namespace`)
//!         └── EntityRepository: EntityKind → name → ModelEntity
//!               ├── TopLevelEntity (+ EntityProperty*)
//!               ├── Domain / Subdomain (+ DomainItem*)
//!               ├── Interchange (+ InterchangeItem*)
//!               └── SharedSimple
//! ```
//!
//! Every object carries a parallel `*SourceMap` struct recording where each
//! of its fields was set.

mod domain;
mod entity;
mod environment;
mod interchange;
mod kinds;
mod namespace;
mod property;
mod repository;
mod shared_simple;
mod validation;

pub use domain::{
    Domain, DomainItem, DomainItemSourceMap, DomainSourceMap, Subdomain, SubdomainSourceMap,
};
pub use entity::{
    EntityDetails, EntitySourceMap, EnumerationItem, EnumerationItemSourceMap,
    MapTypeEnumeration, MapTypeEnumerationSourceMap, TopLevelEntity,
};
pub use environment::MetaEdEnvironment;
pub use interchange::{Interchange, InterchangeItem, InterchangeItemSourceMap, InterchangeSourceMap};
pub use kinds::{EntityKind, PropertyKind};
pub use namespace::{CORE_NAMESPACE_TYPE, Namespace};
pub use property::{
    DecimalRestrictions, EntityProperty, LengthRestrictions, MergeDirective,
    MergeDirectiveSourceMap, NumericRestrictions, PropertyDetails, PropertySourceMap,
    ReferenceDetails, SharedReference,
};
pub use repository::{Declaration, EntityRepository, ModelEntity};
pub use shared_simple::{SharedSimple, SharedSimpleKind, SharedSimpleSourceMap};
pub use validation::{Category, ValidationFailure, ValidationFailures};
