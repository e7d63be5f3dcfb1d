//! Tokenizer — turns TOON source text into a flat token list.
//!
//! A single forward pass with no backtracking. Spaces, tabs and carriage
//! returns are skipped; `\n` becomes a NEWLINE token so positions stay
//! meaningful even though the parser ignores line structure. `#` and `//`
//! start comments that run to the end of the line.
//!
//! The first bad character or unterminated string aborts the whole call; no
//! partial token list is ever returned. On success the list always ends with
//! exactly one EOF token.

use crate::error::{Result, ToonError};
use crate::token::{is_keyword, Token, TokenKind};

/// Tokenize `source` into a token list terminated by EOF.
///
/// # Example
/// ```
/// use toon_notation::token::TokenKind;
/// use toon_notation::tokenize;
///
/// let tokens = tokenize("GENRE: FANTASY").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Keyword, TokenKind::Colon, TokenKind::Identifier, TokenKind::Eof]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let tokens = Lexer::new(source).run()?;
    tracing::trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Consume one character, keeping line/column in step.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, value: impl Into<String>, line: usize, column: usize) {
        self.tokens.push(Token::new(kind, value, line, column));
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(c) = self.peek() {
            let (line, column) = (self.line, self.column);
            match c {
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '\n' => {
                    self.bump();
                    self.push(TokenKind::Newline, "\n", line, column);
                }
                '#' => self.skip_comment(),
                '/' if self.peek_next() == Some('/') => self.skip_comment(),
                '{' | '}' | ':' | ',' => {
                    self.bump();
                    let kind = match c {
                        '{' => TokenKind::LBrace,
                        '}' => TokenKind::RBrace,
                        ':' => TokenKind::Colon,
                        _ => TokenKind::Comma,
                    };
                    self.push(kind, c.to_string(), line, column);
                }
                '"' | '\'' => self.lex_string(c)?,
                '-' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => self.lex_number(),
                '-' => {
                    self.bump();
                    self.push(TokenKind::Dash, "-", line, column);
                }
                c if c.is_ascii_digit() => self.lex_number(),
                c if c.is_ascii_alphabetic() || c == '_' => self.lex_word(),
                other => {
                    return Err(ToonError::tokenize(
                        format!("Unexpected character '{}'", other),
                        line,
                        column,
                    ));
                }
            }
        }

        let (line, column) = (self.line, self.column);
        self.push(TokenKind::Eof, "", line, column);
        Ok(self.tokens)
    }

    /// Skip to (not past) the next newline so it still produces a NEWLINE token.
    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Quoted string. `\<quote>` is the only escape; any other backslash is kept.
    fn lex_string(&mut self, quote: char) -> Result<()> {
        let (line, column) = (self.line, self.column);
        self.bump();

        let mut value = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(ToonError::tokenize("Unterminated string", line, column));
                }
                Some('\\') if self.peek_next() == Some(quote) => {
                    self.bump();
                    self.bump();
                    value.push(quote);
                }
                Some(c) if c == quote => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    self.bump();
                    value.push(c);
                }
            }
        }

        self.push(TokenKind::String, value, line, column);
        Ok(())
    }

    /// `-?[0-9]+(\.[0-9]+)?`, no exponents.
    fn lex_number(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();

        if self.peek() == Some('-') {
            self.bump();
            text.push('-');
        }
        self.take_digits(&mut text);

        if self.peek() == Some('.') && self.peek_next().is_some_and(|n| n.is_ascii_digit()) {
            self.bump();
            text.push('.');
            self.take_digits(&mut text);
        }

        self.push(TokenKind::Number, text, line, column);
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            self.bump();
            text.push(c);
        }
    }

    fn lex_word(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut word = String::new();
        while let Some(c) = self
            .peek()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        {
            self.bump();
            word.push(c);
        }

        let kind = match word.as_str() {
            "TRUE" | "FALSE" => TokenKind::Boolean,
            w if is_keyword(w) => TokenKind::Keyword,
            _ => TokenKind::Identifier,
        };
        self.push(kind, word, line, column);
    }
}
