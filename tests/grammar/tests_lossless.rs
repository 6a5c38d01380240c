//! The CST reproduces its input exactly.

#![allow(clippy::unwrap_used)]

use metaed::parser::{SyntaxKind, parse};
use rstest::rstest;

use crate::helpers::source_fixtures::{EVERY_DECLARATION, ROLE_NAMED_PROPERTIES};

#[rstest]
#[case(EVERY_DECLARATION)]
#[case(ROLE_NAMED_PROPERTIES)]
#[case("Begin Namespace EdFi core // trailing\n\n  End Namespace")]
#[case("garbage Begin Namespace EdFi core End Namespace ~~")]
#[case("")]
fn test_round_trip(#[case] source: &str) {
    let parse = parse(source);
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn test_top_level_node_kinds() {
    let parse = parse(crate::helpers::source_fixtures::EVERY_DECLARATION);
    assert!(parse.ok(), "{:?}", parse.errors);
    let kinds: Vec<_> = parse
        .syntax()
        .descendants()
        .filter(|n| n.kind().is_top_level())
        .map(|n| n.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::SHARED_STRING,
            SyntaxKind::ABSTRACT_ENTITY,
            SyntaxKind::DOMAIN_ENTITY_SUBCLASS,
            SyntaxKind::DOMAIN_ENTITY,
            SyntaxKind::COMMON,
            SyntaxKind::ASSOCIATION,
            SyntaxKind::DESCRIPTOR,
            SyntaxKind::ENUMERATION,
            SyntaxKind::DOMAIN,
            SyntaxKind::SUBDOMAIN,
            SyntaxKind::INTERCHANGE,
        ]
    );
}
