//! Property dispatch and property-level fields.

#![allow(clippy::unwrap_used)]

use metaed::model::{EntityKind, PropertyKind};
use rstest::rstest;

use crate::helpers::build_helpers::{assert_no_failures, build_ok, top_level};
use crate::helpers::source_fixtures::{ROLE_NAMED_PROPERTIES, entity_with_property};

const BODY: &str = "\n        documentation \"doc\"\n        is optional";

fn single_property(declaration: &str, tail: &str) -> metaed::model::EntityProperty {
    let result = build_ok(&entity_with_property(&format!("{declaration}{BODY}{tail}")));
    assert_no_failures(&result);
    let holder = top_level(&result, "EdFi", EntityKind::DomainEntity, "Holder");
    assert_eq!(holder.properties.len(), 1);
    holder.properties[0].clone()
}

#[rstest]
#[case("association StudentSchool", "", PropertyKind::Association)]
#[case("bool IsActive", "", PropertyKind::Boolean)]
#[case("choice Pick", "", PropertyKind::Choice)]
#[case("common Address", "", PropertyKind::Common)]
#[case("currency Amount", "", PropertyKind::Currency)]
#[case("date BirthDate", "", PropertyKind::Date)]
#[case("datetime Stamp", "", PropertyKind::Datetime)]
#[case(
    "decimal Rate",
    "\n        total digits 5\n        decimal places 2",
    PropertyKind::Decimal
)]
#[case("descriptor GradeLevel", "", PropertyKind::Descriptor)]
#[case("domain entity School", "", PropertyKind::DomainEntity)]
#[case("duration Length", "", PropertyKind::Duration)]
#[case("enumeration Term", "", PropertyKind::Enumeration)]
#[case("inline common Name", "", PropertyKind::InlineCommon)]
#[case("integer Count", "", PropertyKind::Integer)]
#[case("percent Share", "", PropertyKind::Percent)]
#[case("enumeration SchoolYear", "", PropertyKind::SchoolYearEnumeration)]
#[case("shared decimal Money", "", PropertyKind::SharedDecimal)]
#[case("shared integer Count", "", PropertyKind::SharedInteger)]
#[case("shared short Count", "", PropertyKind::SharedShort)]
#[case("shared string Name", "", PropertyKind::SharedString)]
#[case("short Age", "", PropertyKind::Short)]
#[case("string City", "\n        max length 30", PropertyKind::String)]
#[case("time Start", "", PropertyKind::Time)]
#[case("year Year", "", PropertyKind::Year)]
fn test_property_dispatch(
    #[case] declaration: &str,
    #[case] tail: &str,
    #[case] expected: PropertyKind,
) {
    let property = single_property(declaration, tail);
    assert_eq!(property.kind(), expected, "for '{declaration}'");
    assert!(property.is_optional);
    assert_eq!(property.documentation, "doc");
    assert_eq!(property.parent_entity_name, "Holder");
    assert!(property.source_map.property_type.is_some());
    if expected.is_reference() || expected.is_shared_simple() {
        assert_eq!(property.referenced_namespace_name, "EdFi");
    }
}

#[rstest]
#[case("domain entity Core.School", "Core", "School")]
#[case("domain entity Core . School", "Core", "School")]
#[case("shared string Core. Name", "Core", "Name")]
#[case("domain entity School", "EdFi", "School")]
#[case("descriptor Core.GradeLevel", "Core", "GradeLevel")]
#[case("shared string Core.Name", "Core", "Name")]
fn test_reference_qualifiers(
    #[case] declaration: &str,
    #[case] namespace: &str,
    #[case] name: &str,
) {
    let property = single_property(declaration, "");
    assert_eq!(property.referenced_namespace_name, namespace);
    assert_eq!(property.meta_ed_name, name);
}

#[rstest]
#[case("is required", true, false, false)]
#[case("is optional", false, false, false)]
#[case("is required collection", false, true, true)]
#[case("is optional collection", false, false, true)]
fn test_annotations(
    #[case] annotation: &str,
    #[case] required: bool,
    #[case] required_collection: bool,
    #[case] collection: bool,
) {
    let result = build_ok(&entity_with_property(&format!(
        "integer Count\n        documentation \"doc\"\n        {annotation}"
    )));
    let holder = top_level(&result, "EdFi", EntityKind::DomainEntity, "Holder");
    let property = &holder.properties[0];
    assert_eq!(property.is_required, required);
    assert_eq!(property.is_required_collection, required_collection);
    assert_eq!(property.is_collection, collection);
    assert_eq!(property.source_map.is_collection.is_some(), collection);
}

#[test]
fn test_role_names_disambiguate() {
    let result = build_ok(ROLE_NAMED_PROPERTIES);
    assert_no_failures(&result);

    let transfer = top_level(&result, "EdFi", EntityKind::Association, "StudentTransfer");
    let names: Vec<_> = transfer
        .properties
        .iter()
        .map(|p| p.full_property_name.as_str())
        .collect();
    assert_eq!(names, vec!["Student", "ReceivingSchool", "SendingSchool"]);
    assert_eq!(transfer.properties[2].shorten_to, "Send");
    assert_eq!(transfer.identity_properties().count(), 2);
}

#[test]
fn test_same_name_without_role_is_reported_per_occurrence() {
    let result = build_ok(
        r#"Begin Namespace EdFi core
Association StudentTransfer
    documentation "A transfer."
    domain entity Student
        documentation "Student."
    domain entity School
        documentation "Source."
    domain entity School
        documentation "Target."
        is optional
End Namespace
"#,
    );
    assert_eq!(result.failures.len(), 2);
    let expected = "Association StudentTransfer has duplicate properties named School. \
                    Use a role name to disambiguate.";
    for failure in &result.failures {
        assert_eq!(failure.validator_name, "TopLevelEntityBuilder");
        assert_eq!(failure.message, expected);
    }
    let transfer = top_level(&result, "EdFi", EntityKind::Association, "StudentTransfer");
    assert_eq!(transfer.properties.len(), 3);
}

#[test]
fn test_decimal_restrictions() {
    let property = single_property(
        "decimal Rate",
        "\n        total digits 9\n        decimal places 4\n        min value -1.5\n        max value 100",
    );
    assert_eq!(property.min_value(), Some("-1.5"));
    assert_eq!(property.max_value(), Some("100"));
    assert!(property.has_restriction);
    assert!(property.source_map.total_digits.is_some());
    assert!(property.source_map.decimal_places.is_some());
}

#[test]
fn test_identity_rename_and_queryable_field() {
    let result = build_ok(
        r#"Begin Namespace EdFi core
Domain Entity School based on EducationOrganization
    documentation "x"
    integer SchoolId
        documentation "y"
        renames identity property EducationOrganizationId
        is queryable field
End Namespace
"#,
    );
    assert_no_failures(&result);
    let school = top_level(&result, "EdFi", EntityKind::DomainEntitySubclass, "School");
    let property = &school.properties[0];
    assert!(property.is_identity_rename);
    assert_eq!(property.base_key_name, "EducationOrganizationId");
    assert!(property.is_identity());
    assert_eq!(school.queryable_fields().count(), 1);
}

#[test]
fn test_property_deprecation_and_inherited_documentation() {
    let property = {
        let result = build_ok(&entity_with_property(
            "string Old [77] deprecated \"Use New.\"\n        inherited documentation\n        is optional\n        max length 5",
        ));
        assert_no_failures(&result);
        top_level(&result, "EdFi", EntityKind::DomainEntity, "Holder").properties[0].clone()
    };
    assert!(property.is_deprecated);
    assert_eq!(property.deprecation_reason, "Use New.");
    assert_eq!(property.meta_ed_id, "77");
    assert!(property.documentation_inherited);
    assert_eq!(property.documentation, "");
}
