//! Helpers for building sources and digging into the resulting model.

use metaed::builder::{BuildOptions, BuildResult, MetaEdBuild, build_from_source};
use metaed::model::{
    EntityKind, EntityRepository, TopLevelEntity, ValidationFailure, ValidationFailures,
};

/// Build a source that must parse cleanly.
pub fn build_ok(source: &str) -> BuildResult {
    let result = build_from_source(source);
    assert!(
        !result.has_syntax_errors(),
        "Expected no syntax errors, got:\n{}",
        result
            .syntax_errors
            .iter()
            .map(|e| format!("  Line {}: {}", e.line, e.error.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
    result
}

/// Build several sources with the given options.
pub fn build_sources(options: BuildOptions, sources: &[&str]) -> BuildResult {
    let mut build = MetaEdBuild::new(options);
    for source in sources {
        build.add_source(*source);
    }
    build.run()
}

pub fn repository<'r>(result: &'r BuildResult, namespace: &str) -> &'r EntityRepository {
    &result
        .environment
        .namespace(namespace)
        .unwrap_or_else(|| panic!("namespace '{namespace}' was not registered"))
        .repository
}

pub fn top_level<'r>(
    result: &'r BuildResult,
    namespace: &str,
    kind: EntityKind,
    name: &str,
) -> &'r TopLevelEntity {
    repository(result, namespace)
        .top_level_entity(kind, name)
        .unwrap_or_else(|| panic!("{kind} '{name}' not found in '{namespace}'"))
}

/// Lines of every failure, in report order.
pub fn failure_lines(failures: &ValidationFailures) -> Vec<u32> {
    failures
        .iter()
        .map(|f| f.source_map.as_ref().map(|m| m.line).unwrap_or(0))
        .collect()
}

/// Assert no validation failures were reported.
pub fn assert_no_failures(result: &BuildResult) {
    assert!(
        result.failures.is_empty(),
        "Expected no failures, got {}:\n{}",
        result.failures.len(),
        result
            .failures
            .iter()
            .map(ValidationFailure::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}
