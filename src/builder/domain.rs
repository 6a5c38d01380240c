//! Builds `Domain` and `Subdomain` declarations.

use super::base::{
    NamespaceTracker, finish_declaration, meta_ed_id_value, set_flag, set_literal, set_text,
    split_qualified_name,
};
use crate::listener::{BuildContext, MetaEdListener, RuleContext};
use crate::model::{Domain, DomainItem, EntityKind, Subdomain};
use crate::parser::SyntaxKind;

pub const DOMAIN_BUILDER: &str = "DomainBuilder";
pub const SUBDOMAIN_BUILDER: &str = "SubdomainBuilder";

/// Entity kind a domain item refers to, taken from its opening keyword.
fn domain_item_kind(keyword: Option<SyntaxKind>) -> Option<EntityKind> {
    match keyword? {
        SyntaxKind::DOMAIN_KW => Some(EntityKind::DomainEntity),
        SyntaxKind::ASSOCIATION_KW => Some(EntityKind::Association),
        SyntaxKind::COMMON_KW => Some(EntityKind::Common),
        SyntaxKind::INLINE_KW => Some(EntityKind::InlineCommon),
        SyntaxKind::DESCRIPTOR_KW => Some(EntityKind::Descriptor),
        _ => None,
    }
}

/// Item cursor shared by both builders.
#[derive(Debug, Default)]
struct DomainItemCursor {
    item: Option<DomainItem>,
}

impl DomainItemCursor {
    fn enter(&mut self, ctx: &RuleContext<'_>) {
        self.item = domain_item_kind(ctx.first_keyword()).map(|kind| {
            let mut item = DomainItem::new(kind);
            item.source_map.referenced_type = Some(ctx.keyword_source_map());
            item
        });
    }

    /// Returns true if the rule belonged to the open item.
    fn exit(&mut self, ctx: &RuleContext<'_>, current_namespace: &str) -> bool {
        let Some(item) = self.item.as_mut() else {
            return false;
        };
        match ctx.kind() {
            SyntaxKind::ITEM_NAME => {
                let text = ctx.text();
                let (namespace, name) = split_qualified_name(&text, current_namespace);
                let location = ctx.source_map();
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
                true
            }
            SyntaxKind::META_ED_ID => {
                set_text(
                    &mut item.meta_ed_id,
                    &mut item.source_map.meta_ed_id,
                    meta_ed_id_value(&ctx.text()),
                    ctx.source_map(),
                );
                true
            }
            _ => false,
        }
    }

    fn take(&mut self) -> Option<DomainItem> {
        self.item.take()
    }
}

#[derive(Debug, Default)]
pub struct DomainBuilder {
    namespace: NamespaceTracker,
    domain: Option<Domain>,
    items: DomainItemCursor,
}

impl DomainBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetaEdListener for DomainBuilder {
    fn enter_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.enter_rule(ctx, cx) {
            return;
        }
        match ctx.kind() {
            SyntaxKind::DOMAIN => self.domain = Some(Domain::new(self.namespace.current())),
            SyntaxKind::DOMAIN_ITEM if self.domain.is_some() => self.items.enter(ctx),
            _ => {}
        }
    }

    fn exit_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.exit_rule(ctx) {
            return;
        }
        if self.domain.is_none() || self.items.exit(ctx, self.namespace.current()) {
            return;
        }
        let Some(domain) = self.domain.as_mut() else {
            return;
        };
        let location = ctx.source_map();
        let source_map = &mut domain.source_map;
        match ctx.kind() {
            SyntaxKind::ENTITY_NAME => set_text(
                &mut domain.meta_ed_name,
                &mut source_map.meta_ed_name,
                ctx.text(),
                location,
            ),
            SyntaxKind::META_ED_ID => set_text(
                &mut domain.meta_ed_id,
                &mut source_map.meta_ed_id,
                meta_ed_id_value(&ctx.text()),
                location,
            ),
            SyntaxKind::DEPRECATED => {
                set_flag(
                    &mut domain.is_deprecated,
                    &mut source_map.is_deprecated,
                    location.clone(),
                );
                set_literal(
                    &mut domain.deprecation_reason,
                    &mut source_map.deprecation_reason,
                    ctx.string_value(),
                    ctx.string_source_map().unwrap_or(location),
                );
            }
            SyntaxKind::DOCUMENTATION => set_literal(
                &mut domain.documentation,
                &mut source_map.documentation,
                ctx.string_value(),
                location,
            ),
            SyntaxKind::FOOTER_DOCUMENTATION => set_literal(
                &mut domain.footer_documentation,
                &mut source_map.footer_documentation,
                ctx.string_value(),
                location,
            ),
            SyntaxKind::DOMAIN_ITEM => {
                if let Some(item) = self.items.take() {
                    domain.domain_items.push(item);
                }
            }
            SyntaxKind::DOMAIN => {
                if let Some(domain) = self.domain.take() {
                    let namespace = domain.namespace.clone();
                    finish_declaration(DOMAIN_BUILDER, &namespace, domain, cx);
                }
            }
            _ => {}
        }
    }
}

#[derive(Debug, Default)]
pub struct SubdomainBuilder {
    namespace: NamespaceTracker,
    subdomain: Option<Subdomain>,
    items: DomainItemCursor,
}

impl SubdomainBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetaEdListener for SubdomainBuilder {
    fn enter_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.enter_rule(ctx, cx) {
            return;
        }
        match ctx.kind() {
            SyntaxKind::SUBDOMAIN => {
                self.subdomain = Some(Subdomain::new(self.namespace.current()))
            }
            SyntaxKind::DOMAIN_ITEM if self.subdomain.is_some() => self.items.enter(ctx),
            _ => {}
        }
    }

    fn exit_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.exit_rule(ctx) {
            return;
        }
        if self.subdomain.is_none() || self.items.exit(ctx, self.namespace.current()) {
            return;
        }
        let Some(subdomain) = self.subdomain.as_mut() else {
            return;
        };
        let location = ctx.source_map();
        let source_map = &mut subdomain.source_map;
        match ctx.kind() {
            SyntaxKind::ENTITY_NAME => set_text(
                &mut subdomain.meta_ed_name,
                &mut source_map.meta_ed_name,
                ctx.text(),
                location,
            ),
            SyntaxKind::PARENT_DOMAIN_NAME => set_text(
                &mut subdomain.parent_meta_ed_name,
                &mut source_map.parent_meta_ed_name,
                ctx.text(),
                location,
            ),
            SyntaxKind::META_ED_ID => set_text(
                &mut subdomain.meta_ed_id,
                &mut source_map.meta_ed_id,
                meta_ed_id_value(&ctx.text()),
                location,
            ),
            SyntaxKind::DEPRECATED => {
                set_flag(
                    &mut subdomain.is_deprecated,
                    &mut source_map.is_deprecated,
                    location.clone(),
                );
                set_literal(
                    &mut subdomain.deprecation_reason,
                    &mut source_map.deprecation_reason,
                    ctx.string_value(),
                    ctx.string_source_map().unwrap_or(location),
                );
            }
            SyntaxKind::DOCUMENTATION => set_literal(
                &mut subdomain.documentation,
                &mut source_map.documentation,
                ctx.string_value(),
                location,
            ),
            SyntaxKind::SUBDOMAIN_POSITION => {
                // A missing value was already reported by the parser
                let position = ctx
                    .first_token_text(SyntaxKind::INTEGER)
                    .and_then(|value| value.parse::<u32>().ok());
                if let Some(position) = position {
                    subdomain.position = position;
                    source_map.position = Some(location);
                }
            }
            SyntaxKind::DOMAIN_ITEM => {
                if let Some(item) = self.items.take() {
                    subdomain.domain_items.push(item);
                }
            }
            SyntaxKind::SUBDOMAIN => {
                if let Some(subdomain) = self.subdomain.take() {
                    let namespace = subdomain.namespace.clone();
                    finish_declaration(SUBDOMAIN_BUILDER, &namespace, subdomain, cx);
                }
            }
            _ => {}
        }
    }
}
