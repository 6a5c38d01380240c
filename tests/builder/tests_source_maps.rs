//! A populated field always has a source map, and an untouched one never does.

#![allow(clippy::unwrap_used)]

use metaed::model::{EntityKind, EntityProperty};
use metaed::{SourceMap, build_from_source};

use crate::helpers::build_helpers::{build_ok, repository, top_level};
use crate::helpers::source_fixtures::EVERY_DECLARATION;

fn text_field_consistent(value: &str, source_map: &Option<SourceMap>) -> bool {
    value.is_empty() == source_map.is_none()
}

fn flag_consistent(value: bool, source_map: &Option<SourceMap>) -> bool {
    value == source_map.is_some()
}

fn assert_property_maps(property: &EntityProperty) {
    let maps = &property.source_map;
    let name = &property.full_property_name;
    assert!(text_field_consistent(&property.meta_ed_name, &maps.meta_ed_name), "{name}");
    assert!(text_field_consistent(&property.documentation, &maps.documentation), "{name}");
    assert!(text_field_consistent(&property.role_name, &maps.role_name), "{name}");
    assert!(text_field_consistent(&property.meta_ed_id, &maps.meta_ed_id), "{name}");
    assert!(flag_consistent(property.is_required, &maps.is_required), "{name}");
    assert!(flag_consistent(property.is_optional, &maps.is_optional), "{name}");
    assert!(flag_consistent(property.is_collection, &maps.is_collection), "{name}");
    assert!(flag_consistent(property.is_part_of_identity, &maps.is_part_of_identity), "{name}");
    assert!(flag_consistent(property.has_restriction, &maps.has_restriction), "{name}");
    assert_eq!(property.max_length().is_some(), maps.max_length.is_some(), "{name}");
}

#[test]
fn test_every_populated_field_has_a_source_map() {
    let result = build_ok(EVERY_DECLARATION);
    let edfi = repository(&result, "EdFi");

    for kind in [
        EntityKind::DomainEntity,
        EntityKind::DomainEntitySubclass,
        EntityKind::Common,
        EntityKind::Association,
        EntityKind::Descriptor,
        EntityKind::Enumeration,
    ] {
        for entity in edfi.entities_of(kind).filter_map(|e| e.as_top_level()) {
            let maps = &entity.source_map;
            assert!(maps.entity_type.is_some());
            assert!(text_field_consistent(&entity.meta_ed_name, &maps.meta_ed_name));
            assert!(text_field_consistent(&entity.documentation, &maps.documentation));
            assert!(text_field_consistent(&entity.meta_ed_id, &maps.meta_ed_id));
            assert!(text_field_consistent(&entity.base_entity_name, &maps.base_entity_name));
            assert!(flag_consistent(entity.is_abstract, &maps.is_abstract));
            assert!(flag_consistent(entity.is_deprecated, &maps.is_deprecated));
            entity.properties.iter().for_each(assert_property_maps);
        }
    }

    let domain = edfi.domain("Enrollment").unwrap();
    assert!(domain.source_map.footer_documentation.is_none());
    for item in &domain.domain_items {
        assert!(item.source_map.meta_ed_name.is_some());
        assert!(item.source_map.referenced_type.is_some());
        assert!(item.source_map.meta_ed_id.is_none());
    }
}

#[test]
fn test_source_map_positions() {
    let result = build_ok(EVERY_DECLARATION);

    // `Domain Entity Student` is on line 15
    let student = top_level(&result, "EdFi", EntityKind::DomainEntity, "Student");
    assert_eq!(student.source_map.meta_ed_name, Some(SourceMap::new(15, 14, "Student")));
    assert_eq!(
        student.source_map.entity_type,
        Some(SourceMap::new(15, 0, "Domain Entity"))
    );

    let usi = &student.properties[0];
    assert_eq!(usi.source_map.property_type, Some(SourceMap::new(17, 4, "integer")));
    assert_eq!(usi.source_map.meta_ed_name, Some(SourceMap::new(17, 12, "StudentUSI")));
    assert_eq!(
        usi.source_map.is_part_of_identity,
        Some(SourceMap::new(19, 8, "is part of identity"))
    );
}

const MISSING_STRINGS: &str = r#"Begin Namespace EdFi core
Domain Entity Student deprecated
    documentation "A student."
    integer Id
        documentation
        is part of identity
Domain Enrollment deprecated
    documentation
    domain entity Student
    footer documentation
Subdomain Attendance of Enrollment
    documentation
    domain entity Student
Interchange StudentEnrollment deprecated
    documentation
    extended documentation
    use case documentation
    domain entity Student
Shared String Name deprecated
    documentation
    max length 75
End Namespace
"#;

#[test]
fn test_missing_string_leaves_field_unmapped() {
    let result = build_from_source(MISSING_STRINGS);
    assert!(result.has_syntax_errors());
    let edfi = repository(&result, "EdFi");

    let student = top_level(&result, "EdFi", EntityKind::DomainEntity, "Student");
    assert!(flag_consistent(student.is_deprecated, &student.source_map.is_deprecated));
    assert!(student.is_deprecated);
    assert!(student.deprecation_reason.is_empty());
    assert!(student.source_map.deprecation_reason.is_none());
    assert_eq!(student.properties.len(), 1);
    assert_property_maps(&student.properties[0]);
    assert!(student.properties[0].source_map.documentation.is_none());

    let domain = edfi.domain("Enrollment").unwrap();
    assert!(domain.is_deprecated);
    assert!(text_field_consistent(
        &domain.deprecation_reason,
        &domain.source_map.deprecation_reason
    ));
    assert!(text_field_consistent(&domain.documentation, &domain.source_map.documentation));
    assert!(domain.source_map.footer_documentation.is_none());
    assert_eq!(domain.domain_items.len(), 1);

    let subdomain = edfi.subdomain("Attendance").unwrap();
    assert!(subdomain.documentation.is_empty());
    assert!(subdomain.source_map.documentation.is_none());

    let interchange = edfi
        .interchange(EntityKind::Interchange, "StudentEnrollment")
        .unwrap();
    let maps = &interchange.source_map;
    assert!(interchange.is_deprecated);
    assert!(maps.deprecation_reason.is_none());
    assert!(maps.documentation.is_none());
    assert!(maps.extended_documentation.is_none());
    assert!(maps.use_case_documentation.is_none());
    assert_eq!(interchange.elements.len(), 1);

    let name = edfi.shared_simple(EntityKind::SharedString, "Name").unwrap();
    assert!(name.is_deprecated);
    assert!(name.source_map.deprecation_reason.is_none());
    assert!(name.source_map.documentation.is_none());
    assert_eq!(name.max_length.as_deref(), Some("75"));
}
