//! Pieces shared by every builder: namespace tracking, name qualifiers,
//! source-mapped field setters and the duplicate-checked insert that ends
//! every declaration.

use crate::base::SourceMap;
use crate::listener::{BuildContext, RuleContext};
use crate::model::{Declaration, ModelEntity};
use crate::parser::SyntaxKind;

/// Tracks the namespace the walk is currently inside.
#[derive(Debug, Default, Clone)]
pub struct NamespaceTracker {
    current: Option<String>,
}

impl NamespaceTracker {
    /// Handle `NAMESPACE` enter/exit. Returns true if the rule was consumed.
    pub fn enter_rule(&mut self, ctx: &RuleContext<'_>, cx: &BuildContext<'_>) -> bool {
        if ctx.kind() != SyntaxKind::NAMESPACE {
            return false;
        }
        let name = ctx
            .child(SyntaxKind::NAMESPACE_NAME)
            .map(|name| name.text())
            .unwrap_or_default();
        if cx.environment.namespace(&name).is_none() {
            tracing::warn!(
                "[BUILD] namespace '{}' at line {} was not registered; its declarations will be dropped",
                name,
                ctx.line()
            );
        }
        self.current = Some(name);
        true
    }

    pub fn exit_rule(&mut self, ctx: &RuleContext<'_>) -> bool {
        if ctx.kind() != SyntaxKind::NAMESPACE {
            return false;
        }
        self.current = None;
        true
    }

    /// Name of the enclosing namespace, empty outside of one.
    pub fn current(&self) -> &str {
        self.current.as_deref().unwrap_or("")
    }
}

/// Split `Namespace.Name` into its parts. An unqualified name belongs to
/// `current_namespace`.
pub fn split_qualified_name<'n>(text: &'n str, current_namespace: &'n str) -> (&'n str, &'n str) {
    match text.split_once('.') {
        Some((namespace, name)) => (namespace, name),
        None => (current_namespace, text),
    }
}

/// `[1234]` → `1234`
pub fn meta_ed_id_value(text: &str) -> &str {
    text.trim_start_matches('[').trim_end_matches(']')
}

/// Text of the first numeric literal in a restriction rule.
pub fn restriction_value(ctx: &RuleContext<'_>) -> Option<String> {
    ctx.first_token_text(SyntaxKind::INTEGER)
        .or_else(|| ctx.first_token_text(SyntaxKind::DECIMAL))
}

/// Set a text field and its provenance together.
pub fn set_text(
    field: &mut String,
    source_map: &mut Option<SourceMap>,
    value: impl Into<String>,
    location: SourceMap,
) {
    *field = value.into();
    *source_map = Some(location);
}

/// Set a text field from a string literal the parser may have reported
/// missing. A missing literal leaves the field and its source map unset.
pub fn set_literal(
    field: &mut String,
    source_map: &mut Option<SourceMap>,
    value: Option<String>,
    location: SourceMap,
) {
    if let Some(value) = value {
        set_text(field, source_map, value, location);
    }
}

/// Set a flag and its provenance together.
pub fn set_flag(field: &mut bool, source_map: &mut Option<SourceMap>, location: SourceMap) {
    *field = true;
    *source_map = Some(location);
}

/// Set an optional value and its provenance together.
pub fn set_value(
    field: &mut Option<String>,
    source_map: &mut Option<SourceMap>,
    value: String,
    location: SourceMap,
) {
    *field = Some(value);
    *source_map = Some(location);
}

/// The message reported for both declarations of a duplicated name.
pub fn duplicate_declaration_message(humanized_name: &str, name: &str) -> String {
    format!("{humanized_name} named {name} is a duplicate declaration of that name.")
}

/// Finish a declaration: insert it into its namespace, or report it twice
/// if the name is already taken for its kind.
///
/// Returns true if the declaration was stored.
pub fn finish_declaration<T>(
    validator_name: &str,
    namespace: &str,
    declaration: T,
    cx: &mut BuildContext<'_>,
) -> bool
where
    T: Declaration + Into<ModelEntity>,
{
    let kind = declaration.entity_kind();
    let name = declaration.meta_ed_name().to_string();
    if name.is_empty() {
        tracing::trace!("[BUILD] dropping unnamed {}", kind.humanized_name());
        return false;
    }

    let Some(target) = cx.environment.namespace_mut(namespace) else {
        tracing::warn!(
            "[BUILD] {} '{}' declared in unregistered namespace '{}'",
            kind.humanized_name(),
            name,
            namespace
        );
        return false;
    };

    if let Some(existing) = target.repository.get(kind, &name) {
        let message = duplicate_declaration_message(declaration.humanized_name(), &name);
        let existing_source_map = existing.name_source_map().cloned();
        cx.failures.error(
            validator_name,
            message.clone(),
            declaration.name_source_map().cloned(),
        );
        cx.failures.error(validator_name, message, existing_source_map);
        tracing::debug!(
            "[BUILD] duplicate {} '{}' in namespace '{}'",
            kind.humanized_name(),
            name,
            namespace
        );
        return false;
    }

    tracing::trace!(
        "[BUILD] storing {} '{}' in namespace '{}'",
        kind.humanized_name(),
        name,
        namespace
    );
    target.repository.insert(kind, name, declaration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Domain, EntityKind, MetaEdEnvironment, ValidationFailures};

    #[test]
    fn test_split_qualified_name() {
        assert_eq!(split_qualified_name("Core.Foo", "Mine"), ("Core", "Foo"));
        assert_eq!(split_qualified_name("Foo", "Mine"), ("Mine", "Foo"));
    }

    #[test]
    fn test_meta_ed_id_value() {
        assert_eq!(meta_ed_id_value("[1234]"), "1234");
    }

    #[test]
    fn test_set_text_sets_source_map() {
        let mut field = String::new();
        let mut source_map = None;
        set_text(&mut field, &mut source_map, "x", SourceMap::new(1, 0, "x"));
        assert_eq!(field, "x");
        assert_eq!(source_map, Some(SourceMap::new(1, 0, "x")));
    }

    fn domain(name: &str, line: u32) -> Domain {
        let mut domain = Domain::new("EdFi");
        domain.meta_ed_name = name.to_string();
        domain.source_map.meta_ed_name = Some(SourceMap::new(line, 7, name));
        domain
    }

    #[test]
    fn test_finish_declaration_reports_duplicate_twice() {
        let mut environment = MetaEdEnvironment::new();
        environment.register_namespace("EdFi", "core");
        let mut failures = ValidationFailures::new();
        let mut cx = BuildContext::new(&mut environment, &mut failures);

        assert!(finish_declaration("DomainBuilder", "EdFi", domain("D", 2), &mut cx));
        assert!(!finish_declaration("DomainBuilder", "EdFi", domain("D", 8), &mut cx));

        let lines: Vec<_> = failures
            .iter()
            .map(|f| f.source_map.as_ref().unwrap().line)
            .collect();
        assert_eq!(lines, vec![8, 2]);
        assert!(failures.iter().all(|f| f.message
            == "Domain named D is a duplicate declaration of that name."));
        assert_eq!(
            environment
                .namespace("EdFi")
                .unwrap()
                .repository
                .count(EntityKind::Domain),
            1
        );
    }

    #[test]
    fn test_finish_declaration_unregistered_namespace() {
        let mut environment = MetaEdEnvironment::new();
        let mut failures = ValidationFailures::new();
        let mut cx = BuildContext::new(&mut environment, &mut failures);
        assert!(!finish_declaration("DomainBuilder", "Nope", domain("D", 1), &mut cx));
        assert!(failures.is_empty());
    }
}
