//! Domains and subdomains: named groupings of entity references.

use super::kinds::EntityKind;
use crate::base::SourceMap;

/// A reference to an entity from a domain or subdomain. Recorded, not
/// resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainItem {
    pub referenced_type: EntityKind,
    pub referenced_namespace_name: String,
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    pub source_map: DomainItemSourceMap,
}

impl DomainItem {
    pub fn new(referenced_type: EntityKind) -> Self {
        Self {
            referenced_type,
            referenced_namespace_name: String::new(),
            meta_ed_name: String::new(),
            meta_ed_id: String::new(),
            source_map: DomainItemSourceMap::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainItemSourceMap {
    pub referenced_type: Option<SourceMap>,
    pub referenced_namespace_name: Option<SourceMap>,
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainSourceMap {
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
    pub is_deprecated: Option<SourceMap>,
    pub deprecation_reason: Option<SourceMap>,
    pub footer_documentation: Option<SourceMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Domain {
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    pub documentation: String,
    pub namespace: String,
    pub is_deprecated: bool,
    pub deprecation_reason: String,
    pub domain_items: Vec<DomainItem>,
    pub footer_documentation: String,
    pub source_map: DomainSourceMap,
}

impl Domain {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubdomainSourceMap {
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
    pub is_deprecated: Option<SourceMap>,
    pub deprecation_reason: Option<SourceMap>,
    pub parent_meta_ed_name: Option<SourceMap>,
    pub position: Option<SourceMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subdomain {
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    pub documentation: String,
    pub namespace: String,
    pub is_deprecated: bool,
    pub deprecation_reason: String,
    pub domain_items: Vec<DomainItem>,
    /// Empty when the subdomain names no parent.
    pub parent_meta_ed_name: String,
    /// 0 when no position value is given.
    pub position: u32,
    pub source_map: SubdomainSourceMap,
}

impl Subdomain {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }
}
