//! Declaration order survives any builder order or walk strategy.

#![allow(clippy::unwrap_used)]

use metaed::builder::{BuildOptions, BuilderKind, BuilderSet, WalkStrategy};
use metaed::model::EntityKind;
use rstest::rstest;

use crate::helpers::build_helpers::{build_ok, build_sources, repository};
use crate::helpers::source_fixtures::{DUPLICATE_DOMAIN, EVERY_DECLARATION};

fn reversed() -> BuilderSet {
    BuilderSet::only(BuilderKind::ALL.into_iter().rev())
}

#[rstest]
#[case(WalkStrategy::SinglePass, BuilderSet::all())]
#[case(WalkStrategy::SinglePass, reversed())]
#[case(WalkStrategy::PerBuilder, BuilderSet::all())]
#[case(WalkStrategy::PerBuilder, reversed())]
fn test_same_model_for_every_strategy(#[case] walk: WalkStrategy, #[case] builders: BuilderSet) {
    let baseline = build_ok(EVERY_DECLARATION);
    let options = BuildOptions::default().with_walk(walk).with_builders(builders);
    let result = build_sources(options, &[EVERY_DECLARATION]);

    assert_eq!(result.environment, baseline.environment);
    assert!(result.failures.is_empty());
}

#[rstest]
#[case(WalkStrategy::SinglePass)]
#[case(WalkStrategy::PerBuilder)]
fn test_lists_keep_declaration_order(#[case] walk: WalkStrategy) {
    let result = build_sources(BuildOptions::default().with_walk(walk), &[EVERY_DECLARATION]);
    let edfi = repository(&result, "EdFi");

    let interchange = edfi
        .interchange(EntityKind::Interchange, "StudentEnrollment")
        .unwrap();
    let elements: Vec<_> = interchange
        .elements
        .iter()
        .map(|e| e.meta_ed_name.as_str())
        .collect();
    assert_eq!(elements, vec!["Student", "StudentSchoolAssociation"]);
    assert_eq!(interchange.identity_templates[0].meta_ed_name, "School");

    let domain = edfi.domain("Enrollment").unwrap();
    let items: Vec<_> = domain
        .domain_items
        .iter()
        .map(|i| i.meta_ed_name.as_str())
        .collect();
    assert_eq!(items, vec!["Student", "StudentSchoolAssociation"]);

    let association = edfi
        .top_level_entity(EntityKind::Association, "StudentSchoolAssociation")
        .unwrap();
    let properties: Vec<_> = association
        .properties
        .iter()
        .map(|p| p.full_property_name.as_str())
        .collect();
    assert_eq!(properties, vec!["Student", "School", "EntryDate"]);

    let term = edfi
        .top_level_entity(EntityKind::Enumeration, "Term")
        .unwrap();
    let descriptions: Vec<_> = term
        .enumeration_items()
        .iter()
        .map(|i| i.short_description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["Fall", "Spring"]);
}

#[test]
fn test_failures_follow_source_order_across_sources() {
    let result = build_sources(BuildOptions::default(), &[DUPLICATE_DOMAIN, DUPLICATE_DOMAIN]);
    // The second source duplicates the first source's stored `D` twice more
    assert_eq!(result.failures.len(), 6);
    assert_eq!(repository(&result, "EdFi").count(EntityKind::Domain), 1);
    let source_lines: Vec<_> = result
        .failures
        .iter()
        .map(|f| f.source_map.as_ref().unwrap().line)
        .collect();
    assert_eq!(source_lines, vec![5, 2, 2, 2, 5, 2]);
}
