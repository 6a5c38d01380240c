//! The view of a grammar rule handed to listeners.

use rowan::NodeOrToken;

use crate::base::{LineIndex, SourceMap};
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken};

/// A grammar rule (CST node) as seen by a listener.
///
/// Positions are reported the way source maps record them: 1-based line,
/// 0-based column of the rule's first significant token.
#[derive(Clone, Debug)]
pub struct RuleContext<'a> {
    node: SyntaxNode,
    line_index: &'a LineIndex,
}

impl<'a> RuleContext<'a> {
    pub fn new(node: SyntaxNode, line_index: &'a LineIndex) -> Self {
        Self { node, line_index }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.node.kind()
    }

    pub fn node(&self) -> &SyntaxNode {
        &self.node
    }

    fn significant_tokens(&self) -> impl Iterator<Item = SyntaxToken> {
        self.node
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| !token.kind().is_trivia())
    }

    /// The rule's text with comments dropped and whitespace runs collapsed to
    /// a single space. Qualified names join on `.` with no space around it.
    pub fn text(&self) -> String {
        let mut text = String::new();
        let mut pending_space = false;
        let mut after_dot = false;
        for token in self
            .node
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
        {
            if token.kind().is_trivia() {
                pending_space = !text.is_empty();
                continue;
            }
            let is_dot = token.kind() == SyntaxKind::DOT;
            if pending_space && !is_dot && !after_dot {
                text.push(' ');
            }
            pending_space = false;
            after_dot = is_dot;
            text.push_str(token.text());
        }
        text
    }

    /// True when the rule matched no tokens (the parser reported it missing).
    pub fn is_missing(&self) -> bool {
        self.significant_tokens().next().is_none()
    }

    fn start_line_col(&self) -> (u32, u32) {
        let offset = self
            .significant_tokens()
            .next()
            .map(|t| t.text_range().start())
            .unwrap_or_else(|| self.node.text_range().start());
        let position = self.line_index.line_col(offset);
        (position.line + 1, position.col)
    }

    /// 1-based line of the rule's first token.
    pub fn line(&self) -> u32 {
        self.start_line_col().0
    }

    /// 0-based column of the rule's first token.
    pub fn column(&self) -> u32 {
        self.start_line_col().1
    }

    /// Source map covering the whole rule.
    pub fn source_map(&self) -> SourceMap {
        let (line, column) = self.start_line_col();
        SourceMap::new(line, column, self.text())
    }

    /// Source map for a single token.
    pub fn token_source_map(&self, token: &SyntaxToken) -> SourceMap {
        let position = self.line_index.line_col(token.text_range().start());
        SourceMap::new(position.line + 1, position.col, token.text())
    }

    /// Direct child keyword tokens that open the rule, before any child rule.
    fn leading_keywords(&self) -> Vec<SyntaxToken> {
        let mut keywords = Vec::new();
        for element in self.node.children_with_tokens() {
            match element {
                NodeOrToken::Token(token) if token.kind().is_trivia() => continue,
                NodeOrToken::Token(token) if token.kind().is_keyword() => keywords.push(token),
                _ => break,
            }
        }
        keywords
    }

    /// Kind of the rule's first keyword, e.g. `DOMAIN_KW` for `domain entity`.
    pub fn first_keyword(&self) -> Option<SyntaxKind> {
        self.leading_keywords().first().map(|token| token.kind())
    }

    /// Source map of the keywords that open the rule, e.g. `domain entity`.
    pub fn keyword_source_map(&self) -> SourceMap {
        let keywords = self.leading_keywords();
        let text = keywords
            .iter()
            .map(|token| token.text())
            .collect::<Vec<_>>()
            .join(" ");
        match keywords.first() {
            Some(first) => {
                let mut source_map = self.token_source_map(first);
                source_map.token_text = text;
                source_map
            }
            None => self.source_map(),
        }
    }

    /// First direct child token of `kind`.
    pub fn token(&self, kind: SyntaxKind) -> Option<SyntaxToken> {
        self.node
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| token.kind() == kind)
    }

    /// First direct child rule of `kind`.
    pub fn child(&self, kind: SyntaxKind) -> Option<RuleContext<'a>> {
        self.node
            .children()
            .find(|node| node.kind() == kind)
            .map(|node| RuleContext::new(node, self.line_index))
    }

    /// The first string literal of the rule, without its quotes.
    pub fn string_value(&self) -> Option<String> {
        let token = self
            .significant_tokens()
            .find(|token| token.kind() == SyntaxKind::STRING)?;
        let text = token.text();
        let inner = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(text);
        Some(inner.to_string())
    }

    /// Source map of the first string literal, if any.
    pub fn string_source_map(&self) -> Option<SourceMap> {
        self.significant_tokens()
            .find(|token| token.kind() == SyntaxKind::STRING)
            .map(|token| self.token_source_map(&token))
    }

    /// Text of the first token of `kind` anywhere in the rule.
    pub fn first_token_text(&self, kind: SyntaxKind) -> Option<String> {
        self.significant_tokens()
            .find(|token| token.kind() == kind)
            .map(|token| token.text().to_string())
    }
}
