//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Node kinds double as the "rules" that listeners receive enter/exit events
//! for.

/// All syntax kinds (tokens and nodes) in MetaEd
///
/// Tokens are leaf nodes (identifiers, keywords, literals).
/// Nodes are composite (namespaces, entities, properties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,     // Student
    INTEGER,   // 42, -5
    DECIMAL,   // 3.14
    STRING,    // "hello"
    METAED_ID, // [1234]
    DOT,       // .

    // =========================================================================
    // KEYWORDS (contextual - lexed as IDENT, re-tagged by the parser)
    // =========================================================================
    // Namespace
    BEGIN_KW,
    NAMESPACE_KW,
    END_KW,
    CORE_KW,

    // Declarations
    ABSTRACT_KW,
    ENTITY_KW,
    ASSOCIATION_KW,
    CHOICE_KW,
    COMMON_KW,
    DESCRIPTOR_KW,
    DOMAIN_KW,
    SUBDOMAIN_KW,
    ENUMERATION_KW,
    INLINE_KW,
    INTERCHANGE_KW,
    SHARED_KW,
    ADDITIONS_KW,
    BASED_KW,
    ON_KW,
    OF_KW,
    POSITION_KW,

    // Documentation and metadata
    DEPRECATED_KW,
    DOCUMENTATION_KW,
    INHERITED_KW,
    FOOTER_KW,
    EXTENDED_KW,
    USE_KW,
    CASE_KW,
    ALLOW_KW,
    PRIMARY_KW,
    KEY_KW,
    UPDATES_KW,
    ITEM_KW,
    WITH_KW,
    MAP_KW,
    TYPE_KW,

    // Simple type keywords
    BOOL_KW,
    CURRENCY_KW,
    DATE_KW,
    DATETIME_KW,
    DECIMAL_KW,
    DURATION_KW,
    INTEGER_KW,
    PERCENT_KW,
    SHORT_KW,
    STRING_KW,
    TIME_KW,
    YEAR_KW,
    EXTENSION_KW,
    OVERRIDE_KW,
    NAMED_KW,

    // Property annotations
    IS_KW,
    PART_KW,
    IDENTITY_KW,
    RENAMES_KW,
    PROPERTY_KW,
    REQUIRED_KW,
    OPTIONAL_KW,
    COLLECTION_KW,
    QUERYABLE_KW,
    ONLY_KW,
    FIELD_KW,
    ROLE_KW,
    NAME_KW,
    SHORTEN_KW,
    TO_KW,
    WEAK_KW,
    POTENTIALLY_KW,
    LOGICAL_KW,
    MERGE_KW,

    // Restrictions
    MIN_KW,
    MAX_KW,
    LENGTH_KW,
    VALUE_KW,
    TOTAL_KW,
    DIGITS_KW,
    PLACES_KW,

    // =========================================================================
    // NODES - Structure
    // =========================================================================
    SOURCE_FILE,
    NAMESPACE,
    NAMESPACE_NAME,
    NAMESPACE_TYPE,

    // =========================================================================
    // NODES - Top-level declarations
    // =========================================================================
    ABSTRACT_ENTITY,
    ASSOCIATION,
    ASSOCIATION_EXTENSION,
    ASSOCIATION_SUBCLASS,
    CHOICE,
    COMMON,
    COMMON_EXTENSION,
    COMMON_SUBCLASS,
    DESCRIPTOR,
    DOMAIN,
    DOMAIN_ENTITY,
    DOMAIN_ENTITY_EXTENSION,
    DOMAIN_ENTITY_SUBCLASS,
    ENUMERATION,
    INLINE_COMMON,
    INTERCHANGE,
    INTERCHANGE_EXTENSION,
    SHARED_DECIMAL,
    SHARED_INTEGER,
    SHARED_SHORT,
    SHARED_STRING,
    SUBDOMAIN,

    // =========================================================================
    // NODES - Declaration components
    // =========================================================================
    ENTITY_NAME,
    BASE_NAME,
    PARENT_DOMAIN_NAME,
    META_ED_ID,
    DEPRECATED,
    DOCUMENTATION,
    INHERITED_DOCUMENTATION,
    FOOTER_DOCUMENTATION,
    EXTENDED_DOCUMENTATION,
    USE_CASE_DOCUMENTATION,
    ALLOW_PRIMARY_KEY_UPDATES,
    ENUMERATION_ITEM,
    SHORT_DESCRIPTION,
    MAP_TYPE_ENUMERATION,
    DOMAIN_ITEM,
    ITEM_NAME,
    SUBDOMAIN_POSITION,
    INTERCHANGE_ELEMENT,
    INTERCHANGE_IDENTITY,

    // =========================================================================
    // NODES - Properties
    // =========================================================================
    ASSOCIATION_PROPERTY,
    BOOLEAN_PROPERTY,
    CHOICE_PROPERTY,
    COMMON_PROPERTY,
    CURRENCY_PROPERTY,
    DATE_PROPERTY,
    DATETIME_PROPERTY,
    DECIMAL_PROPERTY,
    DESCRIPTOR_PROPERTY,
    DOMAIN_ENTITY_PROPERTY,
    DURATION_PROPERTY,
    ENUMERATION_PROPERTY,
    INLINE_COMMON_PROPERTY,
    INTEGER_PROPERTY,
    PERCENT_PROPERTY,
    SCHOOL_YEAR_ENUMERATION_PROPERTY,
    SHARED_DECIMAL_PROPERTY,
    SHARED_INTEGER_PROPERTY,
    SHARED_SHORT_PROPERTY,
    SHARED_STRING_PROPERTY,
    SHORT_PROPERTY,
    STRING_PROPERTY,
    TIME_PROPERTY,
    YEAR_PROPERTY,
    FIRST_DOMAIN_ENTITY,
    SECOND_DOMAIN_ENTITY,

    // =========================================================================
    // NODES - Property components
    // =========================================================================
    PROPERTY_NAME,
    SHARED_PROPERTY_TYPE,
    SHARED_PROPERTY_NAME,
    COMMON_EXTENSION_OVERRIDE,
    IS_PART_OF_IDENTITY,
    IDENTITY_RENAME,
    BASE_KEY_NAME,
    REQUIRED,
    OPTIONAL,
    REQUIRED_COLLECTION,
    OPTIONAL_COLLECTION,
    IS_QUERYABLE_ONLY,
    IS_QUERYABLE_FIELD,
    ROLE_NAME,
    ROLE_NAME_NAME,
    SHORTEN_TO,
    IS_WEAK_REFERENCE,
    POTENTIALLY_LOGICAL,
    MIN_LENGTH,
    MAX_LENGTH,
    MIN_VALUE,
    MAX_VALUE,
    TOTAL_DIGITS,
    DECIMAL_PLACES,
    MERGE_DIRECTIVE,
    SOURCE_PROPERTY_PATH,
    TARGET_PROPERTY_PATH,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::BEGIN_KW as u16) && (self as u16) <= (Self::PLACES_KW as u16)
    }

    /// Check if this node kind declares a property
    pub fn is_property(self) -> bool {
        (self as u16) >= (Self::ASSOCIATION_PROPERTY as u16)
            && (self as u16) <= (Self::SECOND_DOMAIN_ENTITY as u16)
    }

    /// Check if this node kind is a top-level declaration
    pub fn is_top_level(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_ENTITY as u16) && (self as u16) <= (Self::SUBDOMAIN as u16)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaEdLanguage {}

impl rowan::Language for MetaEdLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<MetaEdLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MetaEdLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<MetaEdLanguage>;
