//! Builds `Shared String`, `Shared Decimal`, `Shared Integer` and
//! `Shared Short` declarations.

use super::base::{
    NamespaceTracker, finish_declaration, meta_ed_id_value, restriction_value, set_flag,
    set_literal, set_text, set_value,
};
use crate::listener::{BuildContext, MetaEdListener, RuleContext};
use crate::model::{SharedSimple, SharedSimpleKind};
use crate::parser::SyntaxKind;

pub const SHARED_SIMPLE_BUILDER: &str = "SharedSimpleBuilder";

fn shared_simple_kind(kind: SyntaxKind) -> Option<SharedSimpleKind> {
    match kind {
        SyntaxKind::SHARED_STRING => Some(SharedSimpleKind::String),
        SyntaxKind::SHARED_DECIMAL => Some(SharedSimpleKind::Decimal),
        SyntaxKind::SHARED_INTEGER => Some(SharedSimpleKind::Integer),
        SyntaxKind::SHARED_SHORT => Some(SharedSimpleKind::Short),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct SharedSimpleBuilder {
    namespace: NamespaceTracker,
    shared: Option<SharedSimple>,
}

impl SharedSimpleBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetaEdListener for SharedSimpleBuilder {
    fn enter_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.enter_rule(ctx, cx) {
            return;
        }
        if let Some(kind) = shared_simple_kind(ctx.kind()) {
            self.shared = Some(SharedSimple::new(kind, self.namespace.current()));
        }
    }

    fn exit_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.exit_rule(ctx) {
            return;
        }
        if shared_simple_kind(ctx.kind()).is_some() {
            if let Some(shared) = self.shared.take() {
                let namespace = shared.namespace.clone();
                finish_declaration(SHARED_SIMPLE_BUILDER, &namespace, shared, cx);
            }
            return;
        }
        let Some(shared) = self.shared.as_mut() else {
            return;
        };
        let location = ctx.source_map();
        let source_map = &mut shared.source_map;
        match ctx.kind() {
            SyntaxKind::ENTITY_NAME => set_text(
                &mut shared.meta_ed_name,
                &mut source_map.meta_ed_name,
                ctx.text(),
                location,
            ),
            SyntaxKind::META_ED_ID => set_text(
                &mut shared.meta_ed_id,
                &mut source_map.meta_ed_id,
                meta_ed_id_value(&ctx.text()),
                location,
            ),
            SyntaxKind::DEPRECATED => {
                set_flag(
                    &mut shared.is_deprecated,
                    &mut source_map.is_deprecated,
                    location.clone(),
                );
                set_literal(
                    &mut shared.deprecation_reason,
                    &mut source_map.deprecation_reason,
                    ctx.string_value(),
                    ctx.string_source_map().unwrap_or(location),
                );
            }
            SyntaxKind::DOCUMENTATION => set_literal(
                &mut shared.documentation,
                &mut source_map.documentation,
                ctx.string_value(),
                location,
            ),
            kind => {
                let Some(value) = restriction_value(ctx) else {
                    return;
                };
                let (field, field_map) = match kind {
                    SyntaxKind::MIN_LENGTH => (&mut shared.min_length, &mut source_map.min_length),
                    SyntaxKind::MAX_LENGTH => (&mut shared.max_length, &mut source_map.max_length),
                    SyntaxKind::MIN_VALUE => (&mut shared.min_value, &mut source_map.min_value),
                    SyntaxKind::MAX_VALUE => (&mut shared.max_value, &mut source_map.max_value),
                    SyntaxKind::TOTAL_DIGITS => {
                        (&mut shared.total_digits, &mut source_map.total_digits)
                    }
                    SyntaxKind::DECIMAL_PLACES => {
                        (&mut shared.decimal_places, &mut source_map.decimal_places)
                    }
                    _ => return,
                };
                set_value(field, field_map, value, location);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{LineIndex, SourceMap};
    use crate::builder::NamespaceBuilder;
    use crate::listener::ParseTreeWalker;
    use crate::model::{EntityKind, MetaEdEnvironment, ValidationFailures};
    use crate::parser::parse;

    fn build(source: &str) -> (MetaEdEnvironment, ValidationFailures) {
        let parse = parse(source);
        assert!(parse.ok(), "{:?}", parse.errors);
        let line_index = LineIndex::new(source);
        let mut environment = MetaEdEnvironment::new();
        let mut failures = ValidationFailures::new();
        {
            let mut cx = BuildContext::new(&mut environment, &mut failures);
            let root = parse.syntax();
            ParseTreeWalker::walk(&mut [&mut NamespaceBuilder::new()], &root, &line_index, &mut cx);
            ParseTreeWalker::walk(
                &mut [&mut SharedSimpleBuilder::new()],
                &root,
                &line_index,
                &mut cx,
            );
        }
        (environment, failures)
    }

    #[test]
    fn test_shared_string_restrictions() {
        let (environment, failures) = build(
            r#"Begin Namespace EdFi core
Shared String Name [5]
    documentation "A name."
    min length 1
    max length 75
End Namespace"#,
        );
        assert!(failures.is_empty());
        let name = environment
            .namespace("EdFi")
            .unwrap()
            .repository
            .shared_simple(EntityKind::SharedString, "Name")
            .unwrap();
        assert_eq!(name.kind, SharedSimpleKind::String);
        assert_eq!(name.meta_ed_id, "5");
        assert_eq!(name.min_length.as_deref(), Some("1"));
        assert_eq!(name.max_length.as_deref(), Some("75"));
        assert_eq!(name.source_map.max_length.as_ref().map(|m| m.line), Some(5));
        assert!(name.min_value.is_none());
    }

    #[test]
    fn test_shared_decimal_and_integer() {
        let (environment, failures) = build(
            r#"Begin Namespace EdFi core
Shared Decimal Amount
    documentation "x"
    total digits 9
    decimal places 2
    min value -1.5
Shared Integer Count
    documentation "y"
    max value 10
End Namespace"#,
        );
        assert!(failures.is_empty());
        let repository = &environment.namespace("EdFi").unwrap().repository;
        let amount = repository
            .shared_simple(EntityKind::SharedDecimal, "Amount")
            .unwrap();
        assert_eq!(amount.total_digits.as_deref(), Some("9"));
        assert_eq!(amount.decimal_places.as_deref(), Some("2"));
        assert_eq!(amount.min_value.as_deref(), Some("-1.5"));
        assert_eq!(
            amount.source_map.meta_ed_name,
            Some(SourceMap::new(2, 15, "Amount"))
        );
        let count = repository
            .shared_simple(EntityKind::SharedInteger, "Count")
            .unwrap();
        assert_eq!(count.max_value.as_deref(), Some("10"));
    }
}
