//! Contextual keywords.
//!
//! MetaEd keywords are ordinary words: `Domain` starts a declaration but is a
//! perfectly good entity name elsewhere. The lexer therefore produces `IDENT`
//! for every word and the parser re-tags a word with its keyword kind when it
//! consumes it in a keyword position. Matching is case-sensitive in the
//! parser (`Domain` vs `domain`); the kind lookup here is not.

use super::syntax_kind::SyntaxKind;

/// Look up the keyword kind for a word, ignoring case.
pub fn keyword_kind(word: &str) -> Option<SyntaxKind> {
    let kind = match word.to_ascii_lowercase().as_str() {
        "begin" => SyntaxKind::BEGIN_KW,
        "namespace" => SyntaxKind::NAMESPACE_KW,
        "end" => SyntaxKind::END_KW,
        "core" => SyntaxKind::CORE_KW,
        "abstract" => SyntaxKind::ABSTRACT_KW,
        "entity" => SyntaxKind::ENTITY_KW,
        "association" => SyntaxKind::ASSOCIATION_KW,
        "choice" => SyntaxKind::CHOICE_KW,
        "common" => SyntaxKind::COMMON_KW,
        "descriptor" => SyntaxKind::DESCRIPTOR_KW,
        "domain" => SyntaxKind::DOMAIN_KW,
        "subdomain" => SyntaxKind::SUBDOMAIN_KW,
        "enumeration" => SyntaxKind::ENUMERATION_KW,
        "inline" => SyntaxKind::INLINE_KW,
        "interchange" => SyntaxKind::INTERCHANGE_KW,
        "shared" => SyntaxKind::SHARED_KW,
        "additions" => SyntaxKind::ADDITIONS_KW,
        "based" => SyntaxKind::BASED_KW,
        "on" => SyntaxKind::ON_KW,
        "of" => SyntaxKind::OF_KW,
        "position" => SyntaxKind::POSITION_KW,
        "deprecated" => SyntaxKind::DEPRECATED_KW,
        "documentation" => SyntaxKind::DOCUMENTATION_KW,
        "inherited" => SyntaxKind::INHERITED_KW,
        "footer" => SyntaxKind::FOOTER_KW,
        "extended" => SyntaxKind::EXTENDED_KW,
        "use" => SyntaxKind::USE_KW,
        "case" => SyntaxKind::CASE_KW,
        "allow" => SyntaxKind::ALLOW_KW,
        "primary" => SyntaxKind::PRIMARY_KW,
        "key" => SyntaxKind::KEY_KW,
        "updates" => SyntaxKind::UPDATES_KW,
        "item" => SyntaxKind::ITEM_KW,
        "with" => SyntaxKind::WITH_KW,
        "map" => SyntaxKind::MAP_KW,
        "type" => SyntaxKind::TYPE_KW,
        "bool" => SyntaxKind::BOOL_KW,
        "currency" => SyntaxKind::CURRENCY_KW,
        "date" => SyntaxKind::DATE_KW,
        "datetime" => SyntaxKind::DATETIME_KW,
        "decimal" => SyntaxKind::DECIMAL_KW,
        "duration" => SyntaxKind::DURATION_KW,
        "integer" => SyntaxKind::INTEGER_KW,
        "percent" => SyntaxKind::PERCENT_KW,
        "short" => SyntaxKind::SHORT_KW,
        "string" => SyntaxKind::STRING_KW,
        "time" => SyntaxKind::TIME_KW,
        "year" => SyntaxKind::YEAR_KW,
        "extension" => SyntaxKind::EXTENSION_KW,
        "override" => SyntaxKind::OVERRIDE_KW,
        "named" => SyntaxKind::NAMED_KW,
        "is" => SyntaxKind::IS_KW,
        "part" => SyntaxKind::PART_KW,
        "identity" => SyntaxKind::IDENTITY_KW,
        "renames" => SyntaxKind::RENAMES_KW,
        "property" => SyntaxKind::PROPERTY_KW,
        "required" => SyntaxKind::REQUIRED_KW,
        "optional" => SyntaxKind::OPTIONAL_KW,
        "collection" => SyntaxKind::COLLECTION_KW,
        "queryable" => SyntaxKind::QUERYABLE_KW,
        "only" => SyntaxKind::ONLY_KW,
        "field" => SyntaxKind::FIELD_KW,
        "role" => SyntaxKind::ROLE_KW,
        "name" => SyntaxKind::NAME_KW,
        "shorten" => SyntaxKind::SHORTEN_KW,
        "to" => SyntaxKind::TO_KW,
        "weak" => SyntaxKind::WEAK_KW,
        "potentially" => SyntaxKind::POTENTIALLY_KW,
        "logical" => SyntaxKind::LOGICAL_KW,
        "merge" => SyntaxKind::MERGE_KW,
        "min" => SyntaxKind::MIN_KW,
        "max" => SyntaxKind::MAX_KW,
        "length" => SyntaxKind::LENGTH_KW,
        "value" => SyntaxKind::VALUE_KW,
        "total" => SyntaxKind::TOTAL_KW,
        "digits" => SyntaxKind::DIGITS_KW,
        "places" => SyntaxKind::PLACES_KW,
        _ => return None,
    };
    Some(kind)
}

/// Words that begin a top-level declaration (case-sensitive).
pub const DECLARATION_STARTS: &[&str] = &[
    "Abstract",
    "Association",
    "Choice",
    "Common",
    "Descriptor",
    "Domain",
    "Enumeration",
    "Inline",
    "Interchange",
    "Shared",
    "Subdomain",
];
