//! Top-level entities: everything that declares properties, plus
//! enumerations.

use super::kinds::EntityKind;
use super::property::EntityProperty;
use crate::base::SourceMap;

/// One `item "..."` of an enumeration or descriptor map type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumerationItem {
    pub short_description: String,
    pub meta_ed_id: String,
    pub documentation: String,
    pub source_map: EnumerationItemSourceMap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumerationItemSourceMap {
    pub short_description: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
}

/// The enumeration a descriptor declares `with map type`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapTypeEnumeration {
    pub is_required: bool,
    pub documentation: String,
    pub enumeration_items: Vec<EnumerationItem>,
    pub source_map: MapTypeEnumerationSourceMap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapTypeEnumerationSourceMap {
    pub is_required: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
}

/// Kind-specific entity data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityDetails {
    Association,
    AssociationExtension,
    AssociationSubclass,
    Choice,
    Common,
    CommonExtension,
    CommonSubclass,
    Descriptor {
        map_type_enumeration: Option<MapTypeEnumeration>,
    },
    DomainEntity,
    DomainEntityExtension,
    DomainEntitySubclass,
    Enumeration {
        enumeration_items: Vec<EnumerationItem>,
    },
    InlineCommon,
}

impl EntityDetails {
    /// Empty details for `kind`, or `None` for kinds that are not top-level
    /// entities (domains, interchanges, shared simple types).
    pub fn new(kind: EntityKind) -> Option<Self> {
        let details = match kind {
            EntityKind::Association => Self::Association,
            EntityKind::AssociationExtension => Self::AssociationExtension,
            EntityKind::AssociationSubclass => Self::AssociationSubclass,
            EntityKind::Choice => Self::Choice,
            EntityKind::Common => Self::Common,
            EntityKind::CommonExtension => Self::CommonExtension,
            EntityKind::CommonSubclass => Self::CommonSubclass,
            EntityKind::Descriptor => Self::Descriptor {
                map_type_enumeration: None,
            },
            EntityKind::DomainEntity => Self::DomainEntity,
            EntityKind::DomainEntityExtension => Self::DomainEntityExtension,
            EntityKind::DomainEntitySubclass => Self::DomainEntitySubclass,
            EntityKind::Enumeration => Self::Enumeration {
                enumeration_items: Vec::new(),
            },
            EntityKind::InlineCommon => Self::InlineCommon,
            EntityKind::Domain
            | EntityKind::Subdomain
            | EntityKind::Interchange
            | EntityKind::InterchangeExtension
            | EntityKind::SharedDecimal
            | EntityKind::SharedInteger
            | EntityKind::SharedShort
            | EntityKind::SharedString => return None,
        };
        Some(details)
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Association => EntityKind::Association,
            Self::AssociationExtension => EntityKind::AssociationExtension,
            Self::AssociationSubclass => EntityKind::AssociationSubclass,
            Self::Choice => EntityKind::Choice,
            Self::Common => EntityKind::Common,
            Self::CommonExtension => EntityKind::CommonExtension,
            Self::CommonSubclass => EntityKind::CommonSubclass,
            Self::Descriptor { .. } => EntityKind::Descriptor,
            Self::DomainEntity => EntityKind::DomainEntity,
            Self::DomainEntityExtension => EntityKind::DomainEntityExtension,
            Self::DomainEntitySubclass => EntityKind::DomainEntitySubclass,
            Self::Enumeration { .. } => EntityKind::Enumeration,
            Self::InlineCommon => EntityKind::InlineCommon,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntitySourceMap {
    /// The declaration rule itself.
    pub entity_type: Option<SourceMap>,
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
    pub is_deprecated: Option<SourceMap>,
    pub deprecation_reason: Option<SourceMap>,
    pub is_abstract: Option<SourceMap>,
    pub allow_primary_key_updates: Option<SourceMap>,
    pub base_entity_name: Option<SourceMap>,
    pub base_entity_namespace_name: Option<SourceMap>,
}

/// A declared entity with properties (or, for enumerations, items).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopLevelEntity {
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    pub documentation: String,
    pub namespace: String,
    pub is_deprecated: bool,
    pub deprecation_reason: String,
    /// Set for `Abstract Entity`, which is stored as a domain entity.
    pub is_abstract: bool,
    pub allow_primary_key_updates: bool,
    /// For subclasses and extensions: the entity being specialized.
    pub base_entity_name: String,
    pub base_entity_namespace_name: String,
    pub properties: Vec<EntityProperty>,
    pub details: EntityDetails,
    pub source_map: EntitySourceMap,
}

impl TopLevelEntity {
    pub fn new(details: EntityDetails, namespace: impl Into<String>) -> Self {
        Self {
            meta_ed_name: String::new(),
            meta_ed_id: String::new(),
            documentation: String::new(),
            namespace: namespace.into(),
            is_deprecated: false,
            deprecation_reason: String::new(),
            is_abstract: false,
            allow_primary_key_updates: false,
            base_entity_name: String::new(),
            base_entity_namespace_name: String::new(),
            properties: Vec::new(),
            details,
            source_map: EntitySourceMap::default(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.details.kind()
    }

    pub fn humanized_name(&self) -> &'static str {
        if self.is_abstract {
            "Abstract Entity"
        } else {
            self.kind().humanized_name()
        }
    }

    /// Properties that are part of identity, in declaration order.
    pub fn identity_properties(&self) -> impl Iterator<Item = &EntityProperty> {
        self.properties.iter().filter(|p| p.is_identity())
    }

    /// Properties marked `is queryable field`, in declaration order.
    pub fn queryable_fields(&self) -> impl Iterator<Item = &EntityProperty> {
        self.properties.iter().filter(|p| p.is_queryable_field)
    }

    pub fn property(&self, full_property_name: &str) -> Option<&EntityProperty> {
        self.properties
            .iter()
            .find(|p| p.full_property_name == full_property_name)
    }

    pub fn enumeration_items(&self) -> &[EnumerationItem] {
        match &self.details {
            EntityDetails::Enumeration { enumeration_items } => enumeration_items,
            _ => &[],
        }
    }

    pub fn map_type_enumeration(&self) -> Option<&MapTypeEnumeration> {
        match &self.details {
            EntityDetails::Descriptor {
                map_type_enumeration,
            } => map_type_enumeration.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::kinds::PropertyKind;

    fn property(name: &str, identity: bool, queryable: bool) -> EntityProperty {
        let mut property = EntityProperty::new(PropertyKind::Integer, "EdFi", "Student");
        property.meta_ed_name = name.to_string();
        property.update_full_property_name();
        property.is_part_of_identity = identity;
        property.is_queryable_field = queryable;
        property
    }

    #[test]
    fn test_details_for_non_entity_kinds() {
        assert!(EntityDetails::new(EntityKind::Domain).is_none());
        assert!(EntityDetails::new(EntityKind::SharedString).is_none());
        let details = EntityDetails::new(EntityKind::Descriptor).unwrap();
        assert_eq!(details.kind(), EntityKind::Descriptor);
    }

    #[test]
    fn test_derived_lists_keep_declaration_order() {
        let details = EntityDetails::new(EntityKind::DomainEntity).unwrap();
        let mut entity = TopLevelEntity::new(details, "EdFi");
        entity.properties.push(property("A", true, false));
        entity.properties.push(property("B", false, true));
        entity.properties.push(property("C", true, true));

        let identity: Vec<_> = entity
            .identity_properties()
            .map(|p| p.meta_ed_name.as_str())
            .collect();
        assert_eq!(identity, vec!["A", "C"]);
        let queryable: Vec<_> = entity
            .queryable_fields()
            .map(|p| p.meta_ed_name.as_str())
            .collect();
        assert_eq!(queryable, vec!["B", "C"]);
        assert!(entity.property("B").is_some());
    }

    #[test]
    fn test_abstract_humanized_name() {
        let details = EntityDetails::new(EntityKind::DomainEntity).unwrap();
        let mut entity = TopLevelEntity::new(details, "EdFi");
        assert_eq!(entity.humanized_name(), "Domain Entity");
        entity.is_abstract = true;
        assert_eq!(entity.humanized_name(), "Abstract Entity");
    }
}
