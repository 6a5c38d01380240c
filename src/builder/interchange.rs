//! Builds `Interchange` and `Interchange ... additions` declarations.

use super::base::{
    NamespaceTracker, finish_declaration, meta_ed_id_value, set_flag, set_literal, set_text,
    split_qualified_name,
};
use crate::listener::{BuildContext, MetaEdListener, RuleContext};
use crate::model::{EntityKind, Interchange, InterchangeItem};
use crate::parser::SyntaxKind;

pub const INTERCHANGE_BUILDER: &str = "InterchangeBuilder";

/// Kinds an interchange element or identity template may resolve to.
fn interchange_item_kinds(keyword: Option<SyntaxKind>) -> &'static [EntityKind] {
    match keyword {
        Some(SyntaxKind::DOMAIN_KW) => {
            &[EntityKind::DomainEntity, EntityKind::DomainEntitySubclass]
        }
        Some(SyntaxKind::ASSOCIATION_KW) => {
            &[EntityKind::Association, EntityKind::AssociationSubclass]
        }
        Some(SyntaxKind::DESCRIPTOR_KW) => &[EntityKind::Descriptor],
        _ => &[],
    }
}

#[derive(Debug, Default)]
pub struct InterchangeBuilder {
    namespace: NamespaceTracker,
    interchange: Option<Interchange>,
    item: Option<InterchangeItem>,
}

impl InterchangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_item_field(&mut self, ctx: &RuleContext<'_>) -> bool {
        let current_namespace = self.namespace.current();
        let Some(item) = self.item.as_mut() else {
            return false;
        };
        let location = ctx.source_map();
        match ctx.kind() {
            SyntaxKind::ITEM_NAME => {
                let text = ctx.text();
                let (namespace, name) = split_qualified_name(&text, current_namespace);
                set_text(
                    &mut item.referenced_namespace_name,
                    &mut item.source_map.referenced_namespace_name,
                    namespace,
                    location.clone(),
                );
                set_text(
                    &mut item.meta_ed_name,
                    &mut item.source_map.meta_ed_name,
                    name,
                    location,
                );
            }
            SyntaxKind::META_ED_ID => set_text(
                &mut item.meta_ed_id,
                &mut item.source_map.meta_ed_id,
                meta_ed_id_value(&ctx.text()),
                location,
            ),
            _ => return false,
        }
        true
    }

    fn set_interchange_field(&mut self, ctx: &RuleContext<'_>) {
        let current_namespace = self.namespace.current();
        let Some(interchange) = self.interchange.as_mut() else {
            return;
        };
        let location = ctx.source_map();
        let source_map = &mut interchange.source_map;
        match ctx.kind() {
            SyntaxKind::ENTITY_NAME if interchange.is_extension => {
                let text = ctx.text();
                let (namespace, name) = split_qualified_name(&text, current_namespace);
                set_text(
                    &mut interchange.base_entity_namespace_name,
                    &mut source_map.base_entity_namespace_name,
                    namespace,
                    location.clone(),
                );
                set_text(
                    &mut interchange.base_entity_name,
                    &mut source_map.base_entity_name,
                    name,
                    location.clone(),
                );
                set_text(
                    &mut interchange.meta_ed_name,
                    &mut source_map.meta_ed_name,
                    name,
                    location,
                );
            }
            SyntaxKind::ENTITY_NAME => set_text(
                &mut interchange.meta_ed_name,
                &mut source_map.meta_ed_name,
                ctx.text(),
                location,
            ),
            SyntaxKind::META_ED_ID => set_text(
                &mut interchange.meta_ed_id,
                &mut source_map.meta_ed_id,
                meta_ed_id_value(&ctx.text()),
                location,
            ),
            SyntaxKind::DEPRECATED => {
                set_flag(
                    &mut interchange.is_deprecated,
                    &mut source_map.is_deprecated,
                    location.clone(),
                );
                set_literal(
                    &mut interchange.deprecation_reason,
                    &mut source_map.deprecation_reason,
                    ctx.string_value(),
                    ctx.string_source_map().unwrap_or(location),
                );
            }
            SyntaxKind::DOCUMENTATION => set_literal(
                &mut interchange.documentation,
                &mut source_map.documentation,
                ctx.string_value(),
                location,
            ),
            SyntaxKind::EXTENDED_DOCUMENTATION => set_literal(
                &mut interchange.extended_documentation,
                &mut source_map.extended_documentation,
                ctx.string_value(),
                location,
            ),
            SyntaxKind::USE_CASE_DOCUMENTATION => set_literal(
                &mut interchange.use_case_documentation,
                &mut source_map.use_case_documentation,
                ctx.string_value(),
                location,
            ),
            _ => {}
        }
    }
}

impl MetaEdListener for InterchangeBuilder {
    fn enter_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.enter_rule(ctx, cx) {
            return;
        }
        match ctx.kind() {
            SyntaxKind::INTERCHANGE => {
                self.interchange = Some(Interchange::new(self.namespace.current(), false));
            }
            SyntaxKind::INTERCHANGE_EXTENSION => {
                self.interchange = Some(Interchange::new(self.namespace.current(), true));
            }
            SyntaxKind::INTERCHANGE_ELEMENT | SyntaxKind::INTERCHANGE_IDENTITY
                if self.interchange.is_some() =>
            {
                let kinds = interchange_item_kinds(ctx.first_keyword());
                let mut item = InterchangeItem::new(kinds.iter().copied());
                item.source_map.referenced_type = Some(ctx.keyword_source_map());
                self.item = Some(item);
            }
            _ => {}
        }
    }

    fn exit_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.exit_rule(ctx) {
            return;
        }
        if self.interchange.is_none() || self.set_item_field(ctx) {
            return;
        }
        match ctx.kind() {
            SyntaxKind::INTERCHANGE_ELEMENT | SyntaxKind::INTERCHANGE_IDENTITY => {
                if let (Some(interchange), Some(item)) =
                    (self.interchange.as_mut(), self.item.take())
                {
                    if ctx.kind() == SyntaxKind::INTERCHANGE_ELEMENT {
                        interchange.elements.push(item);
                    } else {
                        interchange.identity_templates.push(item);
                    }
                }
            }
            SyntaxKind::INTERCHANGE | SyntaxKind::INTERCHANGE_EXTENSION => {
                if let Some(interchange) = self.interchange.take() {
                    let namespace = interchange.namespace.clone();
                    finish_declaration(INTERCHANGE_BUILDER, &namespace, interchange, cx);
                }
            }
            _ => self.set_interchange_field(ctx),
        }
    }
}
