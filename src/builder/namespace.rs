//! Registers every `Begin Namespace` before any entity builder runs.

use crate::listener::{BuildContext, MetaEdListener, RuleContext};
use crate::parser::SyntaxKind;

#[derive(Debug, Default)]
pub struct NamespaceBuilder;

impl NamespaceBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl MetaEdListener for NamespaceBuilder {
    fn enter_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if ctx.kind() != SyntaxKind::NAMESPACE {
            return;
        }
        let Some(name) = ctx
            .child(SyntaxKind::NAMESPACE_NAME)
            .filter(|name| !name.is_missing())
        else {
            return;
        };
        let namespace_type = ctx
            .child(SyntaxKind::NAMESPACE_TYPE)
            .map(|ty| ty.text())
            .unwrap_or_default();
        cx.environment
            .register_namespace(&name.text(), &namespace_type);
    }
}
