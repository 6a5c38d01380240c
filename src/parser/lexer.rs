//! Logos-based lexer for MetaEd
//!
//! Fast tokenization using the logos crate. Every word is an `IDENT`;
//! keywords are assigned by the parser (see [`super::keywords`]).

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"-?[0-9]+")]
    Integer,

    #[regex(r"-?[0-9]*\.[0-9]+")]
    Decimal,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"\[[0-9]+\]")]
    MetaEdId,

    #[token(".")]
    Dot,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Integer => SyntaxKind::INTEGER,
            LogosToken::Decimal => SyntaxKind::DECIMAL,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::MetaEdId => SyntaxKind::METAED_ID,
            LogosToken::Dot => SyntaxKind::DOT,
        }
    }
}
