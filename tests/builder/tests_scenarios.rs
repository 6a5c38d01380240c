//! End-to-end build scenarios.

#![allow(clippy::unwrap_used)]

use metaed::model::{Category, EntityKind};

use crate::helpers::build_helpers::{
    assert_no_failures, build_ok, failure_lines, repository, top_level,
};
use crate::helpers::source_fixtures::{
    DUPLICATE_DOMAIN, EVERY_DECLARATION, entity_with_property, in_edfi,
};

#[test]
fn test_duplicate_domain_is_stored_once_and_reported_twice() {
    let result = build_ok(DUPLICATE_DOMAIN);

    let domains = repository(&result, "EdFi");
    assert_eq!(domains.count(EntityKind::Domain), 1);
    assert_eq!(domains.domain("D").unwrap().documentation, "first");

    assert_eq!(result.failures.len(), 2);
    for failure in &result.failures {
        assert_eq!(failure.category, Category::Error);
        assert_eq!(failure.validator_name, "DomainBuilder");
        assert_eq!(
            failure.message,
            "Domain named D is a duplicate declaration of that name."
        );
    }
    // New declaration first, then the one already stored
    assert_eq!(failure_lines(&result.failures), vec![5, 2]);
}

#[test]
fn test_string_length_restrictions() {
    let result = build_ok(&entity_with_property(
        "string Code\n        documentation \"A code.\"\n        is required\n        min length 2\n        max length 100",
    ));
    assert_no_failures(&result);

    let holder = top_level(&result, "EdFi", EntityKind::DomainEntity, "Holder");
    let code = holder.property("Code").unwrap();
    assert_eq!(code.min_length(), Some("2"));
    assert_eq!(code.max_length(), Some("100"));
    assert!(code.has_restriction);
    assert!(code.source_map.min_length.is_some());
    assert!(code.source_map.max_length.is_some());
    assert!(code.source_map.has_restriction.is_some());
    assert!(code.source_map.meta_ed_name.is_some());
}

#[test]
fn test_interchange_element_defaults_to_declaring_namespace() {
    let result = build_ok(
        "Begin Namespace NS NsProject\nInterchange I\n    documentation \"x\"\n    domain entity MyEntity\nEnd Namespace\n",
    );
    assert_no_failures(&result);

    let interchange = repository(&result, "NS")
        .interchange(EntityKind::Interchange, "I")
        .unwrap();
    let element = &interchange.elements[0];
    assert_eq!(element.meta_ed_name, "MyEntity");
    assert_eq!(element.referenced_namespace_name, "NS");
    assert!(element.references(EntityKind::DomainEntity));
    assert!(element.references(EntityKind::DomainEntitySubclass));
}

#[test]
fn test_missing_subdomain_position_is_a_syntax_error_only() {
    let result = metaed::build_from_source(&in_edfi(
        "Subdomain S of D\n    documentation \"x\"\n    domain entity A\n    position",
    ));

    assert_eq!(result.syntax_errors.len(), 1);
    assert!(result.failures.is_empty());
    let subdomain = repository(&result, "EdFi").subdomain("S").unwrap();
    assert_eq!(subdomain.position, 0);
    assert!(subdomain.source_map.position.is_none());
    assert_eq!(subdomain.parent_meta_ed_name, "D");
}

#[test]
fn test_every_declaration_kind_is_stored() {
    let result = build_ok(EVERY_DECLARATION);
    assert_no_failures(&result);

    let edfi = repository(&result, "EdFi");
    for (kind, name) in [
        (EntityKind::SharedString, "Name"),
        (EntityKind::DomainEntity, "EducationOrganization"),
        (EntityKind::DomainEntitySubclass, "School"),
        (EntityKind::DomainEntity, "Student"),
        (EntityKind::Common, "Address"),
        (EntityKind::Association, "StudentSchoolAssociation"),
        (EntityKind::Descriptor, "GradeLevel"),
        (EntityKind::Enumeration, "Term"),
        (EntityKind::Domain, "Enrollment"),
        (EntityKind::Subdomain, "Attendance"),
        (EntityKind::Interchange, "StudentEnrollment"),
    ] {
        assert!(edfi.contains(kind, name), "missing {kind} {name}");
    }
    assert_eq!(edfi.len(), 11);

    let organization =
        top_level(&result, "EdFi", EntityKind::DomainEntity, "EducationOrganization");
    assert!(organization.is_abstract);
    assert_eq!(organization.humanized_name(), "Abstract Entity");

    let school = top_level(&result, "EdFi", EntityKind::DomainEntitySubclass, "School");
    assert_eq!(school.base_entity_name, "EducationOrganization");
    assert_eq!(school.properties[0].full_property_name, "NameOfInstitution");
}

#[test]
fn test_extension_namespace_entities() {
    let result = build_ok(
        r#"Begin Namespace EdFi core
Domain Entity Student
    documentation "x"
    integer Id
        documentation "y"
        is part of identity
End Namespace
Begin Namespace Sample SampleExtension
Domain Entity EdFi.Student additions
    string PetName
        documentation "z"
        is optional
        max length 20
End Namespace
"#,
    );
    assert_no_failures(&result);

    let sample = result.environment.namespace("Sample").unwrap();
    assert!(sample.is_extension);
    let extension = top_level(&result, "Sample", EntityKind::DomainEntityExtension, "Student");
    assert_eq!(extension.base_entity_namespace_name, "EdFi");
    assert_eq!(extension.base_entity_name, "Student");
    assert_eq!(extension.namespace, "Sample");
    assert_eq!(extension.properties[0].parent_entity_name, "Student");
}

#[test]
fn test_declaration_outside_namespace_builds_nothing() {
    let result = metaed::builder::build_from_source("Domain Entity Orphan\n");
    assert!(result.has_syntax_errors());
    assert_eq!(result.environment.namespace_count(), 0);
    assert!(result.failures.is_empty());
}
