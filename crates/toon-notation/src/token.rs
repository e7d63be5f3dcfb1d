//! Token types shared by the tokenizer and the parser.

use std::fmt;

/// Closed set of token kinds produced by [`crate::tokenizer::tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    String,
    Number,
    Boolean,
    Colon,
    Comma,
    Dash,
    LBrace,
    RBrace,
    Newline,
    Eof,
}

impl TokenKind {
    /// Upper-case name used in diagnostics, e.g. `COLON`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dash => "DASH",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token. `value` holds the literal text, except for strings where it
/// holds the unescaped contents without the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// Human-friendly description for "got ..." diagnostics.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "EOF".to_string(),
            TokenKind::String => format!("{} \"{}\"", self.kind, self.value),
            _ => format!("{} '{}'", self.kind, self.value),
        }
    }
}

/// Reserved upper-case words. Membership only decides KEYWORD vs IDENTIFIER
/// while lexing; nothing downstream gives these words meaning.
pub const KEYWORDS: &[&str] = &[
    "STORY",
    "GENRE",
    "TONE",
    "STYLE",
    "SETTING",
    "THEME",
    "PLOT",
    "SCENE",
    "SCENES",
    "CHARACTER",
    "CHARACTERS",
    "NAME",
    "ROLE",
    "PERSONA",
    "AUDIENCE",
    "GOAL",
    "CONTEXT",
    "PROMPT",
    "RULES",
    "CONSTRAINTS",
    "EXAMPLES",
    "FORMAT",
    "OUTPUT",
    "LENGTH",
    "LANGUAGE",
    "TRUE",
    "FALSE",
];

/// Whether `word` is in the reserved keyword set.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}
