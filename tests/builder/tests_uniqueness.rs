//! Names are unique per namespace and entity kind.

#![allow(clippy::unwrap_used)]

use metaed::model::EntityKind;
use rstest::rstest;

use crate::helpers::build_helpers::{build_ok, failure_lines, repository};
use crate::helpers::source_fixtures::in_edfi;

#[rstest]
#[case(
    "Common Address\n    documentation \"a\"\n    bool A\n        documentation \"x\"\n        is optional\n",
    "Common",
    "TopLevelEntityBuilder"
)]
#[case(
    "Enumeration Term\n    documentation \"a\"\n    item \"Fall\"\n",
    "Enumeration",
    "TopLevelEntityBuilder"
)]
#[case(
    "Abstract Entity Base\n    documentation \"a\"\n    bool A\n        documentation \"x\"\n        is optional\n",
    "Abstract Entity",
    "TopLevelEntityBuilder"
)]
#[case(
    "Subdomain S\n    documentation \"a\"\n    domain entity A\n",
    "Subdomain",
    "SubdomainBuilder"
)]
#[case(
    "Interchange I\n    documentation \"a\"\n    descriptor A\n",
    "Interchange",
    "InterchangeBuilder"
)]
#[case(
    "Shared Integer Count\n    documentation \"a\"\n",
    "Shared Integer",
    "SharedSimpleBuilder"
)]
fn test_duplicate_declarations(
    #[case] declaration: &str,
    #[case] humanized: &str,
    #[case] validator: &str,
) {
    let result = build_ok(&in_edfi(&format!("{declaration}{declaration}")));
    let lines_per_declaration = declaration.lines().count() as u32;

    assert_eq!(result.failures.len(), 2);
    assert_eq!(
        failure_lines(&result.failures),
        vec![2 + lines_per_declaration, 2]
    );
    for failure in &result.failures {
        assert_eq!(failure.validator_name, validator);
        assert!(
            failure.message.starts_with(&format!("{humanized} named ")),
            "{}",
            failure.message
        );
        assert!(failure.message.ends_with(" is a duplicate declaration of that name."));
    }
}

#[test]
fn test_same_name_different_kinds_is_allowed() {
    let result = build_ok(&in_edfi(
        "Domain Entity Thing\n    documentation \"a\"\n    bool A\n        documentation \"x\"\n        is optional\nCommon Thing\n    documentation \"b\"\n    bool A\n        documentation \"x\"\n        is optional\n",
    ));
    assert!(result.failures.is_empty());
    let edfi = repository(&result, "EdFi");
    assert!(edfi.contains(EntityKind::DomainEntity, "Thing"));
    assert!(edfi.contains(EntityKind::Common, "Thing"));
}

#[test]
fn test_same_name_different_namespaces_is_allowed() {
    let result = build_ok(
        "Begin Namespace EdFi core\nDomain D\n    documentation \"a\"\n    domain entity A\nEnd Namespace\nBegin Namespace Sample SampleExtension\nDomain D\n    documentation \"b\"\n    domain entity A\nEnd Namespace\n",
    );
    assert!(result.failures.is_empty());
    assert!(repository(&result, "EdFi").domain("D").is_some());
    assert!(repository(&result, "Sample").domain("D").is_some());
}

#[test]
fn test_reopened_namespace_shares_its_repository() {
    let result = build_ok(
        "Begin Namespace EdFi core\nDomain D\n    documentation \"a\"\n    domain entity A\nEnd Namespace\nBegin Namespace EdFi core\nDomain D\n    documentation \"b\"\n    domain entity A\nEnd Namespace\n",
    );
    assert_eq!(result.failures.len(), 2);
    assert_eq!(result.environment.namespace_count(), 1);
}
