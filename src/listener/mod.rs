//! Parse-tree listeners.
//!
//! The walker performs a depth-first preorder traversal of the CST and, for
//! every rule (node), calls `enter_rule` on each listener before visiting the
//! rule's children and `exit_rule` after. Listeners share one
//! [`BuildContext`], which is how builders reach the environment and the
//! failure list without holding references of their own.

mod context;

pub use context::RuleContext;

use rowan::WalkEvent;

use crate::base::LineIndex;
use crate::model::{MetaEdEnvironment, ValidationFailures};
use crate::parser::SyntaxNode;

/// Mutable state shared by every listener of a walk.
#[derive(Debug)]
pub struct BuildContext<'a> {
    pub environment: &'a mut MetaEdEnvironment,
    pub failures: &'a mut ValidationFailures,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        environment: &'a mut MetaEdEnvironment,
        failures: &'a mut ValidationFailures,
    ) -> Self {
        Self {
            environment,
            failures,
        }
    }
}

/// Receives enter/exit events for grammar rules.
///
/// Both hooks default to doing nothing, so a listener only implements the
/// side it needs and ignores rules it does not care about.
pub trait MetaEdListener {
    fn enter_rule(&mut self, _ctx: &RuleContext<'_>, _cx: &mut BuildContext<'_>) {}

    fn exit_rule(&mut self, _ctx: &RuleContext<'_>, _cx: &mut BuildContext<'_>) {}
}

/// Drives listeners over a parse tree.
pub struct ParseTreeWalker;

impl ParseTreeWalker {
    /// Walk `root`, delivering every event to each listener in order.
    pub fn walk(
        listeners: &mut [&mut dyn MetaEdListener],
        root: &SyntaxNode,
        line_index: &LineIndex,
        cx: &mut BuildContext<'_>,
    ) {
        for event in root.preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    let ctx = RuleContext::new(node, line_index);
                    for listener in listeners.iter_mut() {
                        listener.enter_rule(&ctx, cx);
                    }
                }
                WalkEvent::Leave(node) => {
                    let ctx = RuleContext::new(node, line_index);
                    for listener in listeners.iter_mut() {
                        listener.exit_rule(&ctx, cx);
                    }
                }
            }
        }
    }
}
