//! Recursive descent parser for MetaEd
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.

use super::keywords::{DECLARATION_STARTS, keyword_kind};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::base::{LineCol, LineIndex};
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }

    /// Zero-indexed start position of the error.
    pub fn line_col(&self, line_index: &LineIndex) -> LineCol {
        line_index.line_col(self.range.start())
    }
}

/// Parse MetaEd source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, input.len());
    parser.parse_source_file();
    parser.finish()
}

/// How a property declaration begins.
#[derive(Debug, Clone, Copy)]
struct PropertyStart {
    kind: SyntaxKind,
    keyword_count: usize,
    extension_override: bool,
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    input_len: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], input_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            input_len,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection (all lookahead skips trivia)
    // =========================================================================

    fn nth_token(&self, n: usize) -> Option<&Token<'a>> {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
    }

    fn nth_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.nth_token(n).map(|t| t.kind)
    }

    fn nth_is_word(&self, n: usize, word: &str) -> bool {
        self.nth_token(n)
            .is_some_and(|t| t.kind == SyntaxKind::IDENT && t.text == word)
    }

    fn at_kind(&self, kind: SyntaxKind) -> bool {
        self.nth_kind(0) == Some(kind)
    }

    fn at_word(&self, word: &str) -> bool {
        self.nth_is_word(0, word)
    }

    fn at_words(&self, words: &[&str]) -> bool {
        words
            .iter()
            .enumerate()
            .all(|(n, word)| self.nth_is_word(n, word))
    }

    /// The word following a possibly dotted name that starts at lookahead `n`.
    fn word_after_name(&self, n: usize) -> Option<&'a str> {
        if self.nth_kind(n) != Some(SyntaxKind::IDENT) {
            return None;
        }
        let mut last = n;
        while self.nth_kind(last + 1) == Some(SyntaxKind::DOT)
            && self.nth_kind(last + 2) == Some(SyntaxKind::IDENT)
        {
            last += 2;
        }
        self.nth_token(last + 1)
            .filter(|t| t.kind == SyntaxKind::IDENT)
            .map(|t| t.text)
    }

    fn at_eof(&self) -> bool {
        self.nth_token(0).is_none()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the next significant token with its lexed kind.
    fn bump(&mut self) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the next significant token, re-tagging a word as its keyword.
    fn bump_keyword(&mut self) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            let kind = if token.kind == SyntaxKind::IDENT {
                keyword_kind(token.text).unwrap_or(SyntaxKind::IDENT)
            } else {
                token.kind
            };
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump_keywords(&mut self, count: usize) {
        for _ in 0..count {
            self.bump_keyword();
        }
    }

    fn expect_words(&mut self, words: &[&str]) -> bool {
        if self.at_words(words) {
            self.bump_keywords(words.len());
            true
        } else {
            self.error(format!("expected '{}'", words.join(" ")));
            false
        }
    }

    fn expect_kind(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.at_kind(kind) {
            self.bump();
            true
        } else {
            self.error(format!("expected {what}"));
            false
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .nth_token(0)
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(TextSize::new(self.input_len as u32)));
        self.errors.push(SyntaxError::new(message, range));
    }

    /// Whether the next token can restart parsing after an error.
    fn at_sync_point(&self) -> bool {
        self.at_words(&["End", "Namespace"])
            || self.at_words(&["Begin", "Namespace"])
            || DECLARATION_STARTS.iter().any(|word| self.at_word(word))
    }

    fn error_recover(&mut self, message: impl Into<String>) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        self.bump();
        while !self.at_eof() && !self.at_sync_point() {
            self.bump();
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Start a node; pending trivia stays with the enclosing node.
    fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Wrap a single expected token in a node of `kind`.
    fn token_node(&mut self, kind: SyntaxKind, token: SyntaxKind, what: &str) {
        self.start_node(kind);
        self.expect_kind(token, what);
        self.finish_node();
    }

    /// `words` followed by a single value token, wrapped in a node.
    fn keyword_value_node(&mut self, kind: SyntaxKind, words: &[&str], values: &[SyntaxKind]) {
        self.start_node(kind);
        self.bump_keywords(words.len());
        if self.nth_kind(0).is_some_and(|k| values.contains(&k)) {
            self.bump();
        } else {
            self.error(format!("expected a value after '{}'", words.join(" ")));
        }
        self.finish_node();
    }

    fn keyword_node(&mut self, kind: SyntaxKind, word_count: usize) {
        self.start_node(kind);
        self.bump_keywords(word_count);
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules - structure
    // =========================================================================

    /// SourceFile = Namespace*
    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());

        while !self.at_eof() {
            if self.at_words(&["Begin", "Namespace"]) {
                self.parse_namespace();
            } else {
                self.error_recover("expected 'Begin Namespace'");
            }
        }
        self.skip_trivia();

        self.builder.finish_node();
    }

    /// Namespace = 'Begin' 'Namespace' NamespaceName NamespaceType TopLevel* 'End' 'Namespace'
    fn parse_namespace(&mut self) {
        self.start_node(SyntaxKind::NAMESPACE);
        self.bump_keywords(2);

        self.token_node(SyntaxKind::NAMESPACE_NAME, SyntaxKind::IDENT, "namespace name");

        // The token after the namespace name is always its type
        self.start_node(SyntaxKind::NAMESPACE_TYPE);
        if self.at_word("core") {
            self.bump_keyword();
        } else if self.at_kind(SyntaxKind::IDENT) {
            self.bump();
        } else {
            self.error("expected 'core' or a project extension");
        }
        self.finish_node();

        loop {
            if self.at_eof() || self.at_words(&["Begin", "Namespace"]) {
                self.error("expected 'End Namespace'");
                break;
            }
            if self.at_words(&["End", "Namespace"]) {
                self.bump_keywords(2);
                break;
            }
            let pos_before = self.pos;
            self.parse_top_level();
            if self.pos == pos_before {
                self.error_recover("expected a top-level declaration");
            }
        }

        self.finish_node();
    }

    fn parse_top_level(&mut self) {
        if self.at_words(&["Abstract", "Entity"]) {
            self.parse_plain_entity(SyntaxKind::ABSTRACT_ENTITY, 2, false);
        } else if self.at_word("Association") {
            if self.word_after_name(1) == Some("additions") {
                self.parse_extension_entity(SyntaxKind::ASSOCIATION_EXTENSION, 1);
            } else if self.word_after_name(1) == Some("based") {
                self.parse_subclass_entity(SyntaxKind::ASSOCIATION_SUBCLASS, 1);
            } else {
                self.parse_association();
            }
        } else if self.at_word("Choice") {
            self.parse_plain_entity(SyntaxKind::CHOICE, 1, false);
        } else if self.at_word("Common") {
            if self.word_after_name(1) == Some("additions") {
                self.parse_extension_entity(SyntaxKind::COMMON_EXTENSION, 1);
            } else if self.word_after_name(1) == Some("based") {
                self.parse_subclass_entity(SyntaxKind::COMMON_SUBCLASS, 1);
            } else {
                self.parse_plain_entity(SyntaxKind::COMMON, 1, false);
            }
        } else if self.at_word("Descriptor") {
            self.parse_descriptor();
        } else if self.at_words(&["Domain", "Entity"]) {
            if self.word_after_name(2) == Some("additions") {
                self.parse_extension_entity(SyntaxKind::DOMAIN_ENTITY_EXTENSION, 2);
            } else if self.word_after_name(2) == Some("based") {
                self.parse_subclass_entity(SyntaxKind::DOMAIN_ENTITY_SUBCLASS, 2);
            } else {
                self.parse_plain_entity(SyntaxKind::DOMAIN_ENTITY, 2, true);
            }
        } else if self.at_word("Domain") {
            self.parse_domain();
        } else if self.at_word("Enumeration") {
            self.parse_enumeration();
        } else if self.at_words(&["Inline", "Common"]) {
            self.parse_plain_entity(SyntaxKind::INLINE_COMMON, 2, false);
        } else if self.at_word("Interchange") {
            if self.word_after_name(1) == Some("additions") {
                self.parse_interchange_extension();
            } else {
                self.parse_interchange();
            }
        } else if self.at_words(&["Shared", "Decimal"]) {
            self.parse_shared_decimal();
        } else if self.at_words(&["Shared", "Integer"]) {
            self.parse_shared_numeric(SyntaxKind::SHARED_INTEGER);
        } else if self.at_words(&["Shared", "Short"]) {
            self.parse_shared_numeric(SyntaxKind::SHARED_SHORT);
        } else if self.at_words(&["Shared", "String"]) {
            self.parse_shared_string();
        } else if self.at_word("Subdomain") {
            self.parse_subdomain();
        }
    }

    // =========================================================================
    // Grammar rules - declaration components
    // =========================================================================

    /// EntityName = IDENT (must begin with an uppercase letter)
    fn parse_entity_name(&mut self) {
        self.start_node(SyntaxKind::ENTITY_NAME);
        match self.nth_token(0) {
            Some(token) if token.kind == SyntaxKind::IDENT => {
                let text = token.text;
                if !text.starts_with(|c: char| c.is_ascii_uppercase()) {
                    self.error(format!(
                        "entity name '{text}' must begin with an uppercase letter"
                    ));
                }
                self.bump();
            }
            _ => self.error("expected entity name"),
        }
        self.finish_node();
    }

    /// Header = EntityName MetaEdId? Deprecated?
    fn parse_header(&mut self) {
        self.parse_entity_name();
        self.parse_optional_metaed_id();
        self.parse_optional_deprecated();
    }

    fn parse_optional_metaed_id(&mut self) {
        if self.at_kind(SyntaxKind::METAED_ID) {
            self.start_node(SyntaxKind::META_ED_ID);
            self.bump();
            self.finish_node();
        }
    }

    fn parse_optional_deprecated(&mut self) {
        if self.at_word("deprecated") {
            self.start_node(SyntaxKind::DEPRECATED);
            self.bump_keyword();
            self.expect_kind(SyntaxKind::STRING, "deprecation reason");
            self.finish_node();
        }
    }

    /// Documentation = 'documentation' STRING
    fn parse_documentation(&mut self) {
        if self.at_word("documentation") {
            self.start_node(SyntaxKind::DOCUMENTATION);
            self.bump_keyword();
            self.expect_kind(SyntaxKind::STRING, "documentation text");
            self.finish_node();
        } else {
            self.error("expected 'documentation'");
        }
    }

    /// A dotted name such as `EdFi.Student` or `StudentReference.SchoolId`
    fn parse_qualified_name(&mut self, kind: SyntaxKind, what: &str) {
        self.start_node(kind);
        if self.at_kind(SyntaxKind::IDENT) {
            self.bump();
            while self.at_kind(SyntaxKind::DOT) && self.nth_kind(1) == Some(SyntaxKind::IDENT) {
                self.bump();
                self.bump();
            }
        } else {
            self.error(format!("expected {what}"));
        }
        self.finish_node();
    }

    fn parse_allow_primary_key_updates(&mut self) {
        if self.at_words(&["allow", "primary", "key", "updates"]) {
            self.keyword_node(SyntaxKind::ALLOW_PRIMARY_KEY_UPDATES, 4);
        }
    }

    // =========================================================================
    // Grammar rules - entities with properties
    // =========================================================================

    /// Keyword(s) Header Documentation AllowPkUpdates? Property+
    fn parse_plain_entity(&mut self, kind: SyntaxKind, keyword_count: usize, allow_pk: bool) {
        self.start_node(kind);
        self.bump_keywords(keyword_count);
        self.parse_header();
        self.parse_documentation();
        if allow_pk {
            self.parse_allow_primary_key_updates();
        }
        self.parse_properties(true);
        self.finish_node();
    }

    /// Keyword(s) EntityName 'based' 'on' BaseName MetaEdId? Deprecated? Documentation Property+
    fn parse_subclass_entity(&mut self, kind: SyntaxKind, keyword_count: usize) {
        self.start_node(kind);
        self.bump_keywords(keyword_count);
        self.parse_entity_name();
        self.expect_words(&["based", "on"]);
        self.parse_qualified_name(SyntaxKind::BASE_NAME, "base entity name");
        self.parse_optional_metaed_id();
        self.parse_optional_deprecated();
        self.parse_documentation();
        self.parse_properties(true);
        self.finish_node();
    }

    /// Keyword(s) ExtendeeName 'additions' MetaEdId? Property+
    fn parse_extension_entity(&mut self, kind: SyntaxKind, keyword_count: usize) {
        self.start_node(kind);
        self.bump_keywords(keyword_count);
        self.parse_qualified_name(SyntaxKind::ENTITY_NAME, "name of the extended entity");
        self.expect_words(&["additions"]);
        self.parse_optional_metaed_id();
        self.parse_properties(true);
        self.finish_node();
    }

    /// 'Association' Header Documentation AllowPkUpdates?
    /// FirstDomainEntity SecondDomainEntity Property*
    fn parse_association(&mut self) {
        self.start_node(SyntaxKind::ASSOCIATION);
        self.bump_keyword();
        self.parse_header();
        self.parse_documentation();
        self.parse_allow_primary_key_updates();
        for kind in [SyntaxKind::FIRST_DOMAIN_ENTITY, SyntaxKind::SECOND_DOMAIN_ENTITY] {
            if self.at_words(&["domain", "entity"]) {
                self.parse_property(PropertyStart {
                    kind,
                    keyword_count: 2,
                    extension_override: false,
                });
            } else {
                self.error("expected 'domain entity'");
            }
        }
        self.parse_properties(false);
        self.finish_node();
    }

    /// 'Descriptor' Header Documentation Property* MapType?
    fn parse_descriptor(&mut self) {
        self.start_node(SyntaxKind::DESCRIPTOR);
        self.bump_keyword();
        self.parse_header();
        self.parse_documentation();
        self.parse_properties(false);
        let with_map_type = self.at_words(&["with", "map", "type"]);
        let with_optional_map_type = self.at_words(&["with", "optional", "map", "type"]);
        if with_map_type || with_optional_map_type {
            self.start_node(SyntaxKind::MAP_TYPE_ENUMERATION);
            self.bump_keywords(if with_map_type { 3 } else { 4 });
            self.parse_documentation();
            self.parse_enumeration_items();
            self.finish_node();
        }
        self.finish_node();
    }

    /// 'Enumeration' Header Documentation EnumerationItem+
    fn parse_enumeration(&mut self) {
        self.start_node(SyntaxKind::ENUMERATION);
        self.bump_keyword();
        self.parse_header();
        self.parse_documentation();
        self.parse_enumeration_items();
        self.finish_node();
    }

    fn parse_enumeration_items(&mut self) {
        if !self.at_word("item") {
            self.error("expected 'item'");
            return;
        }
        while self.at_word("item") {
            self.start_node(SyntaxKind::ENUMERATION_ITEM);
            self.bump_keyword();
            self.token_node(
                SyntaxKind::SHORT_DESCRIPTION,
                SyntaxKind::STRING,
                "item short description",
            );
            self.parse_optional_metaed_id();
            if self.at_word("documentation") {
                self.parse_documentation();
            }
            self.finish_node();
        }
    }

    // =========================================================================
    // Grammar rules - properties
    // =========================================================================

    fn property_start(&self) -> Option<PropertyStart> {
        let simple = |kind| PropertyStart {
            kind,
            keyword_count: 1,
            extension_override: false,
        };
        let two_words = |kind| PropertyStart {
            kind,
            keyword_count: 2,
            extension_override: false,
        };

        let token = self.nth_token(0)?;
        if token.kind != SyntaxKind::IDENT {
            return None;
        }
        let start = match token.text {
            "association" => simple(SyntaxKind::ASSOCIATION_PROPERTY),
            "bool" => simple(SyntaxKind::BOOLEAN_PROPERTY),
            "choice" => simple(SyntaxKind::CHOICE_PROPERTY),
            "common" if self.nth_is_word(1, "extension") && self.nth_is_word(2, "override") => {
                PropertyStart {
                    kind: SyntaxKind::COMMON_PROPERTY,
                    keyword_count: 3,
                    extension_override: true,
                }
            }
            "common" => simple(SyntaxKind::COMMON_PROPERTY),
            "currency" => simple(SyntaxKind::CURRENCY_PROPERTY),
            "date" => simple(SyntaxKind::DATE_PROPERTY),
            "datetime" => simple(SyntaxKind::DATETIME_PROPERTY),
            "decimal" => simple(SyntaxKind::DECIMAL_PROPERTY),
            "descriptor" => simple(SyntaxKind::DESCRIPTOR_PROPERTY),
            "domain" if self.nth_is_word(1, "entity") => {
                two_words(SyntaxKind::DOMAIN_ENTITY_PROPERTY)
            }
            "duration" => simple(SyntaxKind::DURATION_PROPERTY),
            "enumeration" if self.nth_is_word(1, "SchoolYear") => {
                simple(SyntaxKind::SCHOOL_YEAR_ENUMERATION_PROPERTY)
            }
            "enumeration" => simple(SyntaxKind::ENUMERATION_PROPERTY),
            "inline" if self.nth_is_word(1, "common") => {
                two_words(SyntaxKind::INLINE_COMMON_PROPERTY)
            }
            "integer" => simple(SyntaxKind::INTEGER_PROPERTY),
            "percent" => simple(SyntaxKind::PERCENT_PROPERTY),
            "shared" if self.nth_is_word(1, "decimal") => {
                two_words(SyntaxKind::SHARED_DECIMAL_PROPERTY)
            }
            "shared" if self.nth_is_word(1, "integer") => {
                two_words(SyntaxKind::SHARED_INTEGER_PROPERTY)
            }
            "shared" if self.nth_is_word(1, "short") => {
                two_words(SyntaxKind::SHARED_SHORT_PROPERTY)
            }
            "shared" if self.nth_is_word(1, "string") => {
                two_words(SyntaxKind::SHARED_STRING_PROPERTY)
            }
            "short" => simple(SyntaxKind::SHORT_PROPERTY),
            "string" => simple(SyntaxKind::STRING_PROPERTY),
            "time" => simple(SyntaxKind::TIME_PROPERTY),
            "year" => simple(SyntaxKind::YEAR_PROPERTY),
            _ => return None,
        };
        Some(start)
    }

    fn parse_properties(&mut self, required: bool) {
        let mut count = 0;
        while let Some(start) = self.property_start() {
            self.parse_property(start);
            count += 1;
        }
        if required && count == 0 {
            self.error("expected at least one property");
        }
    }

    /// Property = Keyword(s) Name MetaEdId? Deprecated? PropertyDocumentation
    ///            Annotation RoleName? QueryableField? KindTail
    fn parse_property(&mut self, start: PropertyStart) {
        let kind = start.kind;
        self.start_node(kind);

        if start.extension_override {
            self.bump_keyword();
            self.keyword_node(SyntaxKind::COMMON_EXTENSION_OVERRIDE, 2);
        } else {
            self.bump_keywords(start.keyword_count);
        }

        let is_shared = matches!(
            kind,
            SyntaxKind::SHARED_DECIMAL_PROPERTY
                | SyntaxKind::SHARED_INTEGER_PROPERTY
                | SyntaxKind::SHARED_SHORT_PROPERTY
                | SyntaxKind::SHARED_STRING_PROPERTY
        );
        if is_shared {
            self.parse_qualified_name(SyntaxKind::SHARED_PROPERTY_TYPE, "shared type name");
            if self.at_word("named") {
                self.start_node(SyntaxKind::SHARED_PROPERTY_NAME);
                self.bump_keyword();
                self.expect_kind(SyntaxKind::IDENT, "property name");
                self.finish_node();
            }
        } else {
            self.parse_qualified_name(SyntaxKind::PROPERTY_NAME, "property name");
        }

        self.parse_optional_metaed_id();
        self.parse_optional_deprecated();

        if self.at_words(&["inherited", "documentation"]) {
            self.keyword_node(SyntaxKind::INHERITED_DOCUMENTATION, 2);
        } else {
            self.parse_documentation();
        }

        let is_association_end = matches!(
            kind,
            SyntaxKind::FIRST_DOMAIN_ENTITY | SyntaxKind::SECOND_DOMAIN_ENTITY
        );
        if !self.parse_annotation() && !is_association_end {
            self.error("expected a property annotation such as 'is required'");
        }

        if self.at_words(&["role", "name"]) {
            self.start_node(SyntaxKind::ROLE_NAME);
            self.bump_keywords(2);
            self.token_node(SyntaxKind::ROLE_NAME_NAME, SyntaxKind::IDENT, "role name");
            if self.at_words(&["shorten", "to"]) {
                self.start_node(SyntaxKind::SHORTEN_TO);
                self.bump_keywords(2);
                self.expect_kind(SyntaxKind::IDENT, "shortened name");
                self.finish_node();
            }
            self.finish_node();
        }

        if self.at_words(&["is", "queryable", "field"]) {
            self.keyword_node(SyntaxKind::IS_QUERYABLE_FIELD, 3);
        }

        self.parse_property_tail(kind);
        self.finish_node();
    }

    /// Returns false when no annotation is present.
    fn parse_annotation(&mut self) -> bool {
        if self.at_words(&["is", "part", "of", "identity"]) {
            self.keyword_node(SyntaxKind::IS_PART_OF_IDENTITY, 4);
        } else if self.at_words(&["renames", "identity", "property"]) {
            self.start_node(SyntaxKind::IDENTITY_RENAME);
            self.bump_keywords(3);
            self.token_node(SyntaxKind::BASE_KEY_NAME, SyntaxKind::IDENT, "base key name");
            self.finish_node();
        } else if self.at_words(&["is", "required", "collection"]) {
            self.keyword_node(SyntaxKind::REQUIRED_COLLECTION, 3);
        } else if self.at_words(&["is", "optional", "collection"]) {
            self.keyword_node(SyntaxKind::OPTIONAL_COLLECTION, 3);
        } else if self.at_words(&["is", "required"]) {
            self.keyword_node(SyntaxKind::REQUIRED, 2);
        } else if self.at_words(&["is", "optional"]) {
            self.keyword_node(SyntaxKind::OPTIONAL, 2);
        } else if self.at_words(&["is", "queryable", "only"]) {
            self.keyword_node(SyntaxKind::IS_QUERYABLE_ONLY, 3);
        } else {
            return false;
        }
        true
    }

    fn parse_property_tail(&mut self, kind: SyntaxKind) {
        const INTEGER: &[SyntaxKind] = &[SyntaxKind::INTEGER];
        const NUMBER: &[SyntaxKind] = &[SyntaxKind::INTEGER, SyntaxKind::DECIMAL];

        match kind {
            SyntaxKind::STRING_PROPERTY => {
                self.parse_length_restrictions(false);
            }
            SyntaxKind::INTEGER_PROPERTY | SyntaxKind::SHORT_PROPERTY => {
                self.parse_value_restrictions(INTEGER);
            }
            SyntaxKind::DECIMAL_PROPERTY => {
                self.parse_decimal_restrictions();
                self.parse_value_restrictions(NUMBER);
            }
            SyntaxKind::ASSOCIATION_PROPERTY
            | SyntaxKind::DOMAIN_ENTITY_PROPERTY
            | SyntaxKind::FIRST_DOMAIN_ENTITY
            | SyntaxKind::SECOND_DOMAIN_ENTITY => {
                if self.at_words(&["is", "weak"]) {
                    self.keyword_node(SyntaxKind::IS_WEAK_REFERENCE, 2);
                }
                self.parse_reference_tail();
            }
            SyntaxKind::CHOICE_PROPERTY
            | SyntaxKind::COMMON_PROPERTY
            | SyntaxKind::DESCRIPTOR_PROPERTY
            | SyntaxKind::ENUMERATION_PROPERTY
            | SyntaxKind::INLINE_COMMON_PROPERTY
            | SyntaxKind::SCHOOL_YEAR_ENUMERATION_PROPERTY => {
                self.parse_reference_tail();
            }
            _ => {}
        }
    }

    fn parse_reference_tail(&mut self) {
        if self.at_words(&["potentially", "logical"]) {
            self.keyword_node(SyntaxKind::POTENTIALLY_LOGICAL, 2);
        }
        while self.at_word("merge") {
            self.start_node(SyntaxKind::MERGE_DIRECTIVE);
            self.bump_keyword();
            self.parse_qualified_name(SyntaxKind::SOURCE_PROPERTY_PATH, "merge source path");
            self.expect_words(&["with"]);
            self.parse_qualified_name(SyntaxKind::TARGET_PROPERTY_PATH, "merge target path");
            self.finish_node();
        }
    }

    fn parse_length_restrictions(&mut self, max_required: bool) {
        const INTEGER: &[SyntaxKind] = &[SyntaxKind::INTEGER];
        if self.at_words(&["min", "length"]) {
            self.keyword_value_node(SyntaxKind::MIN_LENGTH, &["min", "length"], INTEGER);
        }
        if self.at_words(&["max", "length"]) {
            self.keyword_value_node(SyntaxKind::MAX_LENGTH, &["max", "length"], INTEGER);
        } else if max_required {
            self.error("expected 'max length'");
        }
    }

    fn parse_value_restrictions(&mut self, values: &[SyntaxKind]) {
        if self.at_words(&["min", "value"]) {
            self.keyword_value_node(SyntaxKind::MIN_VALUE, &["min", "value"], values);
        }
        if self.at_words(&["max", "value"]) {
            self.keyword_value_node(SyntaxKind::MAX_VALUE, &["max", "value"], values);
        }
    }

    fn parse_decimal_restrictions(&mut self) {
        const INTEGER: &[SyntaxKind] = &[SyntaxKind::INTEGER];
        if self.at_words(&["total", "digits"]) {
            self.keyword_value_node(SyntaxKind::TOTAL_DIGITS, &["total", "digits"], INTEGER);
        } else {
            self.error("expected 'total digits'");
        }
        if self.at_words(&["decimal", "places"]) {
            self.keyword_value_node(SyntaxKind::DECIMAL_PLACES, &["decimal", "places"], INTEGER);
        } else {
            self.error("expected 'decimal places'");
        }
    }

    // =========================================================================
    // Grammar rules - domains
    // =========================================================================

    /// 'Domain' Header Documentation DomainItem+ FooterDocumentation?
    fn parse_domain(&mut self) {
        self.start_node(SyntaxKind::DOMAIN);
        self.bump_keyword();
        self.parse_header();
        self.parse_documentation();
        self.parse_domain_items();
        if self.at_words(&["footer", "documentation"]) {
            self.start_node(SyntaxKind::FOOTER_DOCUMENTATION);
            self.bump_keywords(2);
            self.expect_kind(SyntaxKind::STRING, "footer documentation text");
            self.finish_node();
        }
        self.finish_node();
    }

    /// 'Subdomain' EntityName ('of' ParentDomainName)? MetaEdId? Deprecated?
    /// Documentation DomainItem+ SubdomainPosition?
    fn parse_subdomain(&mut self) {
        self.start_node(SyntaxKind::SUBDOMAIN);
        self.bump_keyword();
        self.parse_entity_name();
        if self.at_word("of") {
            self.bump_keyword();
            self.token_node(
                SyntaxKind::PARENT_DOMAIN_NAME,
                SyntaxKind::IDENT,
                "parent domain name",
            );
        }
        self.parse_optional_metaed_id();
        self.parse_optional_deprecated();
        self.parse_documentation();
        self.parse_domain_items();
        if self.at_word("position") {
            self.start_node(SyntaxKind::SUBDOMAIN_POSITION);
            self.bump_keyword();
            self.expect_kind(SyntaxKind::INTEGER, "position value");
            self.finish_node();
        }
        self.finish_node();
    }

    fn domain_item_keyword_count(&self) -> Option<usize> {
        if self.at_words(&["domain", "entity"]) || self.at_words(&["inline", "common"]) {
            Some(2)
        } else if self.at_word("association")
            || self.at_word("common")
            || self.at_word("descriptor")
        {
            Some(1)
        } else {
            None
        }
    }

    fn parse_domain_items(&mut self) {
        if self.domain_item_keyword_count().is_none() {
            self.error("expected a domain item");
            return;
        }
        while let Some(keyword_count) = self.domain_item_keyword_count() {
            self.start_node(SyntaxKind::DOMAIN_ITEM);
            self.bump_keywords(keyword_count);
            self.parse_qualified_name(SyntaxKind::ITEM_NAME, "domain item name");
            self.parse_optional_metaed_id();
            self.finish_node();
        }
    }

    // =========================================================================
    // Grammar rules - interchanges
    // =========================================================================

    /// 'Interchange' Header Documentation ExtendedDoc? UseCaseDoc? InterchangeComponent+
    fn parse_interchange(&mut self) {
        self.start_node(SyntaxKind::INTERCHANGE);
        self.bump_keyword();
        self.parse_header();
        self.parse_documentation();
        if self.at_words(&["extended", "documentation"]) {
            self.start_node(SyntaxKind::EXTENDED_DOCUMENTATION);
            self.bump_keywords(2);
            self.expect_kind(SyntaxKind::STRING, "extended documentation text");
            self.finish_node();
        }
        if self.at_words(&["use", "case", "documentation"]) {
            self.start_node(SyntaxKind::USE_CASE_DOCUMENTATION);
            self.bump_keywords(3);
            self.expect_kind(SyntaxKind::STRING, "use case documentation text");
            self.finish_node();
        }
        self.parse_interchange_components();
        self.finish_node();
    }

    /// 'Interchange' ExtendeeName 'additions' MetaEdId? InterchangeComponent+
    fn parse_interchange_extension(&mut self) {
        self.start_node(SyntaxKind::INTERCHANGE_EXTENSION);
        self.bump_keyword();
        self.parse_qualified_name(SyntaxKind::ENTITY_NAME, "name of the extended interchange");
        self.expect_words(&["additions"]);
        self.parse_optional_metaed_id();
        self.parse_interchange_components();
        self.finish_node();
    }

    /// Returns the node kind and keyword count of the next interchange component.
    fn interchange_component_start(&self) -> Option<(SyntaxKind, usize)> {
        if self.at_words(&["domain", "entity", "identity"]) {
            Some((SyntaxKind::INTERCHANGE_IDENTITY, 3))
        } else if self.at_words(&["association", "identity"]) {
            Some((SyntaxKind::INTERCHANGE_IDENTITY, 2))
        } else if self.at_words(&["domain", "entity"]) {
            Some((SyntaxKind::INTERCHANGE_ELEMENT, 2))
        } else if self.at_word("association") || self.at_word("descriptor") {
            Some((SyntaxKind::INTERCHANGE_ELEMENT, 1))
        } else {
            None
        }
    }

    fn parse_interchange_components(&mut self) {
        if self.interchange_component_start().is_none() {
            self.error("expected an interchange element");
            return;
        }
        while let Some((kind, keyword_count)) = self.interchange_component_start() {
            self.start_node(kind);
            self.bump_keywords(keyword_count);
            self.parse_qualified_name(SyntaxKind::ITEM_NAME, "interchange element name");
            self.parse_optional_metaed_id();
            self.finish_node();
        }
    }

    // =========================================================================
    // Grammar rules - shared simple types
    // =========================================================================

    /// 'Shared' 'Decimal' Header Documentation TotalDigits DecimalPlaces MinValue? MaxValue?
    fn parse_shared_decimal(&mut self) {
        self.start_node(SyntaxKind::SHARED_DECIMAL);
        self.bump_keywords(2);
        self.parse_header();
        self.parse_documentation();
        self.parse_decimal_restrictions();
        self.parse_value_restrictions(&[SyntaxKind::INTEGER, SyntaxKind::DECIMAL]);
        self.finish_node();
    }

    /// 'Shared' ('Integer' | 'Short') Header Documentation MinValue? MaxValue?
    fn parse_shared_numeric(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump_keywords(2);
        self.parse_header();
        self.parse_documentation();
        self.parse_value_restrictions(&[SyntaxKind::INTEGER]);
        self.finish_node();
    }

    /// 'Shared' 'String' Header Documentation MinLength? MaxLength
    fn parse_shared_string(&mut self) {
        self.start_node(SyntaxKind::SHARED_STRING);
        self.bump_keywords(2);
        self.parse_header();
        self.parse_documentation();
        self.parse_length_restrictions(true);
        self.finish_node();
    }
}
