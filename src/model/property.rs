//! Entity properties.
//!
//! Fields common to every property live on [`EntityProperty`]; fields that
//! only some kinds carry live in the [`PropertyDetails`] payload. String
//! fields use `""` for "not declared", restriction values use `None`.

use super::kinds::PropertyKind;
use crate::base::SourceMap;

/// `merge <source path> with <target path>` on a reference property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeDirective {
    pub source_property_path: String,
    pub target_property_path: String,
    pub source_map: MergeDirectiveSourceMap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeDirectiveSourceMap {
    pub directive: Option<SourceMap>,
    pub source_property_path: Option<SourceMap>,
    pub target_property_path: Option<SourceMap>,
}

/// Flags carried by properties that reference another entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceDetails {
    pub is_weak: bool,
    pub potentially_logical: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LengthRestrictions {
    pub min_length: Option<String>,
    pub max_length: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumericRestrictions {
    pub min_value: Option<String>,
    pub max_value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecimalRestrictions {
    pub total_digits: Option<String>,
    pub decimal_places: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
}

/// The shared simple type a shared property is declared against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedReference {
    pub referenced_type: String,
}

/// Kind-specific property data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyDetails {
    Association(ReferenceDetails),
    Boolean,
    Choice(ReferenceDetails),
    Common {
        reference: ReferenceDetails,
        is_extension_override: bool,
    },
    Currency,
    Date,
    Datetime,
    Decimal(DecimalRestrictions),
    Descriptor(ReferenceDetails),
    DomainEntity(ReferenceDetails),
    Duration,
    Enumeration(ReferenceDetails),
    InlineCommon(ReferenceDetails),
    Integer(NumericRestrictions),
    Percent,
    SchoolYearEnumeration(ReferenceDetails),
    SharedDecimal(SharedReference),
    SharedInteger(SharedReference),
    SharedShort(SharedReference),
    SharedString(SharedReference),
    Short(NumericRestrictions),
    String(LengthRestrictions),
    Time,
    Year,
}

impl PropertyDetails {
    /// Empty details for a freshly started property of `kind`.
    pub fn new(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Association => Self::Association(ReferenceDetails::default()),
            PropertyKind::Boolean => Self::Boolean,
            PropertyKind::Choice => Self::Choice(ReferenceDetails::default()),
            PropertyKind::Common => Self::Common {
                reference: ReferenceDetails::default(),
                is_extension_override: false,
            },
            PropertyKind::Currency => Self::Currency,
            PropertyKind::Date => Self::Date,
            PropertyKind::Datetime => Self::Datetime,
            PropertyKind::Decimal => Self::Decimal(DecimalRestrictions::default()),
            PropertyKind::Descriptor => Self::Descriptor(ReferenceDetails::default()),
            PropertyKind::DomainEntity => Self::DomainEntity(ReferenceDetails::default()),
            PropertyKind::Duration => Self::Duration,
            PropertyKind::Enumeration => Self::Enumeration(ReferenceDetails::default()),
            PropertyKind::InlineCommon => Self::InlineCommon(ReferenceDetails::default()),
            PropertyKind::Integer => Self::Integer(NumericRestrictions::default()),
            PropertyKind::Percent => Self::Percent,
            PropertyKind::SchoolYearEnumeration => {
                Self::SchoolYearEnumeration(ReferenceDetails::default())
            }
            PropertyKind::SharedDecimal => Self::SharedDecimal(SharedReference::default()),
            PropertyKind::SharedInteger => Self::SharedInteger(SharedReference::default()),
            PropertyKind::SharedShort => Self::SharedShort(SharedReference::default()),
            PropertyKind::SharedString => Self::SharedString(SharedReference::default()),
            PropertyKind::Short => Self::Short(NumericRestrictions::default()),
            PropertyKind::String => Self::String(LengthRestrictions::default()),
            PropertyKind::Time => Self::Time,
            PropertyKind::Year => Self::Year,
        }
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Association(_) => PropertyKind::Association,
            Self::Boolean => PropertyKind::Boolean,
            Self::Choice(_) => PropertyKind::Choice,
            Self::Common { .. } => PropertyKind::Common,
            Self::Currency => PropertyKind::Currency,
            Self::Date => PropertyKind::Date,
            Self::Datetime => PropertyKind::Datetime,
            Self::Decimal(_) => PropertyKind::Decimal,
            Self::Descriptor(_) => PropertyKind::Descriptor,
            Self::DomainEntity(_) => PropertyKind::DomainEntity,
            Self::Duration => PropertyKind::Duration,
            Self::Enumeration(_) => PropertyKind::Enumeration,
            Self::InlineCommon(_) => PropertyKind::InlineCommon,
            Self::Integer(_) => PropertyKind::Integer,
            Self::Percent => PropertyKind::Percent,
            Self::SchoolYearEnumeration(_) => PropertyKind::SchoolYearEnumeration,
            Self::SharedDecimal(_) => PropertyKind::SharedDecimal,
            Self::SharedInteger(_) => PropertyKind::SharedInteger,
            Self::SharedShort(_) => PropertyKind::SharedShort,
            Self::SharedString(_) => PropertyKind::SharedString,
            Self::Short(_) => PropertyKind::Short,
            Self::String(_) => PropertyKind::String,
            Self::Time => PropertyKind::Time,
            Self::Year => PropertyKind::Year,
        }
    }

    pub fn reference(&self) -> Option<&ReferenceDetails> {
        match self {
            Self::Association(r)
            | Self::Choice(r)
            | Self::Common { reference: r, .. }
            | Self::Descriptor(r)
            | Self::DomainEntity(r)
            | Self::Enumeration(r)
            | Self::InlineCommon(r)
            | Self::SchoolYearEnumeration(r) => Some(r),
            _ => None,
        }
    }

    pub fn reference_mut(&mut self) -> Option<&mut ReferenceDetails> {
        match self {
            Self::Association(r)
            | Self::Choice(r)
            | Self::Common { reference: r, .. }
            | Self::Descriptor(r)
            | Self::DomainEntity(r)
            | Self::Enumeration(r)
            | Self::InlineCommon(r)
            | Self::SchoolYearEnumeration(r) => Some(r),
            _ => None,
        }
    }

    pub fn shared_mut(&mut self) -> Option<&mut SharedReference> {
        match self {
            Self::SharedDecimal(s)
            | Self::SharedInteger(s)
            | Self::SharedShort(s)
            | Self::SharedString(s) => Some(s),
            _ => None,
        }
    }

    pub fn length_mut(&mut self) -> Option<&mut LengthRestrictions> {
        match self {
            Self::String(r) => Some(r),
            _ => None,
        }
    }

    /// Value bounds for integer, short and decimal properties.
    pub fn value_bounds_mut(&mut self) -> Option<(&mut Option<String>, &mut Option<String>)> {
        match self {
            Self::Integer(r) | Self::Short(r) => Some((&mut r.min_value, &mut r.max_value)),
            Self::Decimal(r) => Some((&mut r.min_value, &mut r.max_value)),
            _ => None,
        }
    }

    pub fn decimal_mut(&mut self) -> Option<&mut DecimalRestrictions> {
        match self {
            Self::Decimal(r) => Some(r),
            _ => None,
        }
    }
}

/// Provenance for every settable [`EntityProperty`] field, including the
/// kind-specific ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertySourceMap {
    /// The property declaration rule itself.
    pub property_type: Option<SourceMap>,
    pub meta_ed_name: Option<SourceMap>,
    pub meta_ed_id: Option<SourceMap>,
    pub documentation: Option<SourceMap>,
    pub documentation_inherited: Option<SourceMap>,
    pub referenced_namespace_name: Option<SourceMap>,
    pub is_deprecated: Option<SourceMap>,
    pub deprecation_reason: Option<SourceMap>,
    pub is_required: Option<SourceMap>,
    pub is_optional: Option<SourceMap>,
    pub is_required_collection: Option<SourceMap>,
    pub is_optional_collection: Option<SourceMap>,
    pub is_collection: Option<SourceMap>,
    pub role_name: Option<SourceMap>,
    pub shorten_to: Option<SourceMap>,
    pub is_part_of_identity: Option<SourceMap>,
    pub is_identity_rename: Option<SourceMap>,
    pub base_key_name: Option<SourceMap>,
    pub is_queryable_only: Option<SourceMap>,
    pub is_queryable_field: Option<SourceMap>,
    pub has_restriction: Option<SourceMap>,
    pub min_length: Option<SourceMap>,
    pub max_length: Option<SourceMap>,
    pub min_value: Option<SourceMap>,
    pub max_value: Option<SourceMap>,
    pub total_digits: Option<SourceMap>,
    pub decimal_places: Option<SourceMap>,
    pub is_weak: Option<SourceMap>,
    pub potentially_logical: Option<SourceMap>,
    pub referenced_type: Option<SourceMap>,
    pub is_extension_override: Option<SourceMap>,
}

/// A property declared on a top-level entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityProperty {
    pub meta_ed_name: String,
    pub meta_ed_id: String,
    /// `role_name + meta_ed_name` when a role name is present, else `meta_ed_name`.
    pub full_property_name: String,
    pub documentation: String,
    pub documentation_inherited: bool,
    pub namespace: String,
    pub parent_entity_name: String,
    /// Namespace of the referenced entity or shared type; empty for simple
    /// properties.
    pub referenced_namespace_name: String,
    pub is_deprecated: bool,
    pub deprecation_reason: String,
    pub is_required: bool,
    pub is_optional: bool,
    pub is_required_collection: bool,
    pub is_optional_collection: bool,
    pub is_collection: bool,
    pub role_name: String,
    pub shorten_to: String,
    pub is_part_of_identity: bool,
    pub is_identity_rename: bool,
    pub base_key_name: String,
    pub is_queryable_only: bool,
    pub is_queryable_field: bool,
    pub has_restriction: bool,
    pub merge_directives: Vec<MergeDirective>,
    pub details: PropertyDetails,
    pub source_map: PropertySourceMap,
}

impl EntityProperty {
    pub fn new(
        kind: PropertyKind,
        namespace: impl Into<String>,
        parent_entity_name: impl Into<String>,
    ) -> Self {
        Self {
            meta_ed_name: String::new(),
            meta_ed_id: String::new(),
            full_property_name: String::new(),
            documentation: String::new(),
            documentation_inherited: false,
            namespace: namespace.into(),
            parent_entity_name: parent_entity_name.into(),
            referenced_namespace_name: String::new(),
            is_deprecated: false,
            deprecation_reason: String::new(),
            is_required: false,
            is_optional: false,
            is_required_collection: false,
            is_optional_collection: false,
            is_collection: false,
            role_name: String::new(),
            shorten_to: String::new(),
            is_part_of_identity: false,
            is_identity_rename: false,
            base_key_name: String::new(),
            is_queryable_only: false,
            is_queryable_field: false,
            has_restriction: false,
            merge_directives: Vec::new(),
            details: PropertyDetails::new(kind),
            source_map: PropertySourceMap::default(),
        }
    }

    pub fn kind(&self) -> PropertyKind {
        self.details.kind()
    }

    /// Recompute `full_property_name` from the role name and name.
    pub fn update_full_property_name(&mut self) {
        self.full_property_name = if self.role_name.is_empty() {
            self.meta_ed_name.clone()
        } else {
            format!("{}{}", self.role_name, self.meta_ed_name)
        };
    }

    /// Whether this property contributes to its entity's identity.
    pub fn is_identity(&self) -> bool {
        self.is_part_of_identity || self.is_identity_rename
    }

    pub fn is_weak(&self) -> bool {
        self.details.reference().is_some_and(|r| r.is_weak)
    }

    pub fn is_extension_override(&self) -> bool {
        matches!(
            self.details,
            PropertyDetails::Common {
                is_extension_override: true,
                ..
            }
        )
    }

    pub fn referenced_type(&self) -> Option<&str> {
        match &self.details {
            PropertyDetails::SharedDecimal(s)
            | PropertyDetails::SharedInteger(s)
            | PropertyDetails::SharedShort(s)
            | PropertyDetails::SharedString(s) => Some(&s.referenced_type),
            _ => None,
        }
    }

    pub fn min_length(&self) -> Option<&str> {
        match &self.details {
            PropertyDetails::String(r) => r.min_length.as_deref(),
            _ => None,
        }
    }

    pub fn max_length(&self) -> Option<&str> {
        match &self.details {
            PropertyDetails::String(r) => r.max_length.as_deref(),
            _ => None,
        }
    }

    pub fn min_value(&self) -> Option<&str> {
        match &self.details {
            PropertyDetails::Integer(r) | PropertyDetails::Short(r) => r.min_value.as_deref(),
            PropertyDetails::Decimal(r) => r.min_value.as_deref(),
            _ => None,
        }
    }

    pub fn max_value(&self) -> Option<&str> {
        match &self.details {
            PropertyDetails::Integer(r) | PropertyDetails::Short(r) => r.max_value.as_deref(),
            PropertyDetails::Decimal(r) => r.max_value.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_property_is_blank() {
        let property = EntityProperty::new(PropertyKind::String, "EdFi", "Student");
        assert_eq!(property.kind(), PropertyKind::String);
        assert_eq!(property.parent_entity_name, "Student");
        assert!(property.meta_ed_name.is_empty());
        assert_eq!(property.source_map, PropertySourceMap::default());
        assert_eq!(property.min_length(), None);
    }

    #[test]
    fn test_full_property_name_uses_role_name() {
        let mut property = EntityProperty::new(PropertyKind::Date, "EdFi", "Student");
        property.meta_ed_name = "BeginDate".to_string();
        property.update_full_property_name();
        assert_eq!(property.full_property_name, "BeginDate");

        property.role_name = "Entry".to_string();
        property.update_full_property_name();
        assert_eq!(property.full_property_name, "EntryBeginDate");
    }

    #[test]
    fn test_details_round_trip_kind() {
        for kind in PropertyKind::ALL {
            assert_eq!(PropertyDetails::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_detail_accessors_match_family() {
        let mut details = PropertyDetails::new(PropertyKind::Decimal);
        assert!(details.value_bounds_mut().is_some());
        assert!(details.decimal_mut().is_some());
        assert!(details.length_mut().is_none());
        assert!(details.reference().is_none());

        let mut details = PropertyDetails::new(PropertyKind::Common);
        assert!(details.reference_mut().is_some());
        assert!(details.shared_mut().is_none());
    }
}
