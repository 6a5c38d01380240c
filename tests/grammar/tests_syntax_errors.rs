//! Grammar mismatches surface as positioned syntax errors, never as
//! validation failures.

#![allow(clippy::unwrap_used)]

use metaed::build_from_source;
use rstest::rstest;

use crate::helpers::source_fixtures::in_edfi;

#[rstest]
#[case(
    "Subdomain S\n    documentation \"x\"\n    domain entity A\n    position",
    "position value"
)]
#[case(
    "Domain Entity student\n    documentation \"x\"\n    bool A\n        documentation \"y\"\n        is optional",
    "must begin with an uppercase letter"
)]
#[case("Domain Entity Student\n    documentation \"x\"", "at least one property")]
#[case(
    "Common C\n    documentation \"x\"\n    bool A\n        documentation \"y\"",
    "property annotation"
)]
#[case(
    "Shared String S\n    documentation \"x\"",
    "max length"
)]
fn test_syntax_error_messages(#[case] body: &str, #[case] expected: &str) {
    let result = build_from_source(&in_edfi(body));
    assert!(
        result
            .syntax_errors
            .iter()
            .any(|e| e.error.message.contains(expected)),
        "expected '{expected}' in {:?}",
        result.syntax_errors
    );
    assert!(result.failures.is_empty());
}

#[test]
fn test_syntax_error_position() {
    let result = build_from_source(&in_edfi("Domain Entity student\n    documentation \"x\"\n    bool A\n        documentation \"y\"\n        is optional"));
    let error = &result.syntax_errors[0];
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 14);
}

#[test]
fn test_missing_end_namespace() {
    let result = build_from_source("Begin Namespace EdFi core\n");
    assert!(
        result
            .syntax_errors
            .iter()
            .any(|e| e.error.message.contains("End Namespace"))
    );
    assert_eq!(result.environment.namespace_count(), 1);
}
