//! Entity and property kind tags.
//!
//! `EntityKind` is the key of the per-namespace repository. Both enums render
//! as the camelCase type names used throughout MetaEd tooling
//! (`domainEntitySubclass`) and offer a humanized form for messages
//! (`Domain Entity Subclass`).

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Every kind of top-level declaration the repository can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Association,
    AssociationExtension,
    AssociationSubclass,
    Choice,
    Common,
    CommonExtension,
    CommonSubclass,
    Descriptor,
    Domain,
    DomainEntity,
    DomainEntityExtension,
    DomainEntitySubclass,
    Enumeration,
    InlineCommon,
    Interchange,
    InterchangeExtension,
    SharedDecimal,
    SharedInteger,
    SharedShort,
    SharedString,
    Subdomain,
}

impl EntityKind {
    pub const ALL: [EntityKind; 21] = [
        Self::Association,
        Self::AssociationExtension,
        Self::AssociationSubclass,
        Self::Choice,
        Self::Common,
        Self::CommonExtension,
        Self::CommonSubclass,
        Self::Descriptor,
        Self::Domain,
        Self::DomainEntity,
        Self::DomainEntityExtension,
        Self::DomainEntitySubclass,
        Self::Enumeration,
        Self::InlineCommon,
        Self::Interchange,
        Self::InterchangeExtension,
        Self::SharedDecimal,
        Self::SharedInteger,
        Self::SharedShort,
        Self::SharedString,
        Self::Subdomain,
    ];

    /// The camelCase type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Association => "association",
            Self::AssociationExtension => "associationExtension",
            Self::AssociationSubclass => "associationSubclass",
            Self::Choice => "choice",
            Self::Common => "common",
            Self::CommonExtension => "commonExtension",
            Self::CommonSubclass => "commonSubclass",
            Self::Descriptor => "descriptor",
            Self::Domain => "domain",
            Self::DomainEntity => "domainEntity",
            Self::DomainEntityExtension => "domainEntityExtension",
            Self::DomainEntitySubclass => "domainEntitySubclass",
            Self::Enumeration => "enumeration",
            Self::InlineCommon => "inlineCommon",
            Self::Interchange => "interchange",
            Self::InterchangeExtension => "interchangeExtension",
            Self::SharedDecimal => "sharedDecimal",
            Self::SharedInteger => "sharedInteger",
            Self::SharedShort => "sharedShort",
            Self::SharedString => "sharedString",
            Self::Subdomain => "subdomain",
        }
    }

    /// Name for use in messages, e.g. `Domain Entity`.
    pub fn humanized_name(&self) -> &'static str {
        match self {
            Self::Association => "Association",
            Self::AssociationExtension => "Association Extension",
            Self::AssociationSubclass => "Association Subclass",
            Self::Choice => "Choice",
            Self::Common => "Common",
            Self::CommonExtension => "Common Extension",
            Self::CommonSubclass => "Common Subclass",
            Self::Descriptor => "Descriptor",
            Self::Domain => "Domain",
            Self::DomainEntity => "Domain Entity",
            Self::DomainEntityExtension => "Domain Entity Extension",
            Self::DomainEntitySubclass => "Domain Entity Subclass",
            Self::Enumeration => "Enumeration",
            Self::InlineCommon => "Inline Common",
            Self::Interchange => "Interchange",
            Self::InterchangeExtension => "Interchange Extension",
            Self::SharedDecimal => "Shared Decimal",
            Self::SharedInteger => "Shared Integer",
            Self::SharedShort => "Shared Short",
            Self::SharedString => "Shared String",
            Self::Subdomain => "Subdomain",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownEntityKind(s.to_string()))
    }
}

/// Every kind of entity property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKind {
    Association,
    Boolean,
    Choice,
    Common,
    Currency,
    Date,
    Datetime,
    Decimal,
    Descriptor,
    DomainEntity,
    Duration,
    Enumeration,
    InlineCommon,
    Integer,
    Percent,
    SchoolYearEnumeration,
    SharedDecimal,
    SharedInteger,
    SharedShort,
    SharedString,
    Short,
    String,
    Time,
    Year,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 24] = [
        Self::Association,
        Self::Boolean,
        Self::Choice,
        Self::Common,
        Self::Currency,
        Self::Date,
        Self::Datetime,
        Self::Decimal,
        Self::Descriptor,
        Self::DomainEntity,
        Self::Duration,
        Self::Enumeration,
        Self::InlineCommon,
        Self::Integer,
        Self::Percent,
        Self::SchoolYearEnumeration,
        Self::SharedDecimal,
        Self::SharedInteger,
        Self::SharedShort,
        Self::SharedString,
        Self::Short,
        Self::String,
        Self::Time,
        Self::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Association => "association",
            Self::Boolean => "boolean",
            Self::Choice => "choice",
            Self::Common => "common",
            Self::Currency => "currency",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Decimal => "decimal",
            Self::Descriptor => "descriptor",
            Self::DomainEntity => "domainEntity",
            Self::Duration => "duration",
            Self::Enumeration => "enumeration",
            Self::InlineCommon => "inlineCommon",
            Self::Integer => "integer",
            Self::Percent => "percent",
            Self::SchoolYearEnumeration => "schoolYearEnumeration",
            Self::SharedDecimal => "sharedDecimal",
            Self::SharedInteger => "sharedInteger",
            Self::SharedShort => "sharedShort",
            Self::SharedString => "sharedString",
            Self::Short => "short",
            Self::String => "string",
            Self::Time => "time",
            Self::Year => "year",
        }
    }

    pub fn humanized_name(&self) -> &'static str {
        match self {
            Self::Association => "Association",
            Self::Boolean => "Boolean",
            Self::Choice => "Choice",
            Self::Common => "Common",
            Self::Currency => "Currency",
            Self::Date => "Date",
            Self::Datetime => "Datetime",
            Self::Decimal => "Decimal",
            Self::Descriptor => "Descriptor",
            Self::DomainEntity => "Domain Entity",
            Self::Duration => "Duration",
            Self::Enumeration => "Enumeration",
            Self::InlineCommon => "Inline Common",
            Self::Integer => "Integer",
            Self::Percent => "Percent",
            Self::SchoolYearEnumeration => "School Year Enumeration",
            Self::SharedDecimal => "Shared Decimal",
            Self::SharedInteger => "Shared Integer",
            Self::SharedShort => "Shared Short",
            Self::SharedString => "Shared String",
            Self::Short => "Short",
            Self::String => "String",
            Self::Time => "Time",
            Self::Year => "Year",
        }
    }

    /// Properties that point at another declared entity.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::Association
                | Self::Choice
                | Self::Common
                | Self::Descriptor
                | Self::DomainEntity
                | Self::Enumeration
                | Self::InlineCommon
                | Self::SchoolYearEnumeration
        )
    }

    /// Properties that point at a shared simple type.
    pub fn is_shared_simple(&self) -> bool {
        matches!(
            self,
            Self::SharedDecimal | Self::SharedInteger | Self::SharedShort | Self::SharedString
        )
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownPropertyKind(s.to_string()))
    }
}
