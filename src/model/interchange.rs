//! Interchanges and interchange extensions.

use indexmap::IndexSet;

use super::kinds::EntityKind;
use crate::base::SourceMap;

/// An element or identity template of an interchange.
///
/// `referenced_type` is a set because an element may legally resolve to any
/// of several kinds; a domain entity element may name a domain entity or a
/// domain entity subclass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterchangeItem {
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    pub referenced_namespace_name: String,
    pub referenced_type: IndexSet<EntityKind>,
    pub source_map: InterchangeItemSourceMap,
}

impl InterchangeItem {
    pub fn new(referenced_type: impl IntoIterator<Item = EntityKind>) -> Self {
        Self {
            meta_ed_name: String::new(),
            meta_ed_id: String::new(),
            referenced_namespace_name: String::new(),
            referenced_type: referenced_type.into_iter().collect(),
            source_map: InterchangeItemSourceMap::default(),
        }
    }

    pub fn references(&self, kind: EntityKind) -> bool {
        self.referenced_type.contains(&kind)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterchangeItemSourceMap {
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub referenced_namespace_name: Option<SourceMap>,
    pub referenced_type: Option<SourceMap>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterchangeSourceMap {
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
    pub extended_documentation: Option<SourceMap>,
    pub use_case_documentation: Option<SourceMap>,
    pub is_deprecated: Option<SourceMap>,
    pub deprecation_reason: Option<SourceMap>,
    pub base_entity_name: Option<SourceMap>,
    pub base_entity_namespace_name: Option<SourceMap>,
}

/// `Interchange X` or `Interchange X additions`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interchange {
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    pub documentation: String,
    pub extended_documentation: String,
    pub use_case_documentation: String,
    pub namespace: String,
    pub is_deprecated: bool,
    pub deprecation_reason: String,
    pub is_extension: bool,
    /// For extensions: the interchange being extended.
    pub base_entity_name: String,
    pub base_entity_namespace_name: String,
    pub elements: Vec<InterchangeItem>,
    pub identity_templates: Vec<InterchangeItem>,
    pub source_map: InterchangeSourceMap,
}

impl Interchange {
    pub fn new(namespace: impl Into<String>, is_extension: bool) -> Self {
        Self {
            namespace: namespace.into(),
            is_extension,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> EntityKind {
        if self.is_extension {
            EntityKind::InterchangeExtension
        } else {
            EntityKind::Interchange
        }
    }
}
