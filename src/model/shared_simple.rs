//! Shared simple types: named, restricted string/decimal/integer/short types
//! that properties can reuse.

use super::kinds::EntityKind;
use crate::base::SourceMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SharedSimpleKind {
    String,
    Decimal,
    Integer,
    Short,
}

impl SharedSimpleKind {
    pub fn entity_kind(&self) -> EntityKind {
        match self {
            Self::String => EntityKind::SharedString,
            Self::Decimal => EntityKind::SharedDecimal,
            Self::Integer => EntityKind::SharedInteger,
            Self::Short => EntityKind::SharedShort,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedSimpleSourceMap {
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
    pub is_deprecated: Option<SourceMap>,
    pub deprecation_reason: Option<SourceMap>,
    pub min_length: Option<SourceMap>,
    pub max_length: Option<SourceMap>,
    pub min_value: Option<SourceMap>,
    pub max_value: Option<SourceMap>,
    pub total_digits: Option<SourceMap>,
    pub decimal_places: Option<SourceMap>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedSimple {
    pub kind: SharedSimpleKind,
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    pub documentation: String,
    pub namespace: String,
    pub is_deprecated: bool,
    pub deprecation_reason: String,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub total_digits: Option<String>,
    pub decimal_places: Option<String>,
    pub source_map: SharedSimpleSourceMap,
}

impl SharedSimple {
    pub fn new(kind: SharedSimpleKind, namespace: impl Into<String>) -> Self {
        Self {
            kind,
            meta_ed_name: String::new(),
            meta_ed_id: String::new(),
            documentation: String::new(),
            namespace: namespace.into(),
            is_deprecated: false,
            deprecation_reason: String::new(),
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
            total_digits: None,
            decimal_places: None,
            source_map: SharedSimpleSourceMap::default(),
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        self.kind.entity_kind()
    }
}
