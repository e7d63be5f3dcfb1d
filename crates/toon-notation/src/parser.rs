//! Recursive-descent parser — token list to [`AstNode`].
//!
//! Grammar (NEWLINE tokens are dropped before parsing):
//!
//! ```text
//! document   := rootObject EOF
//! rootObject := KEY '{' members '}'      // KEY upper-case; wraps into {KEY: {members}}
//!             | '{' members '}'
//!             | members                   // implicit root, as the compiler emits it
//! members    := (member (','? member)*)?
//! member     := key ':' value
//! key        := KEYWORD | IDENTIFIER | STRING
//! value      := STRING | NUMBER | BOOLEAN | KEYWORD | IDENTIFIER | array | object
//! array      := (DASH value)+            // comma between items optional
//! object     := '{' members '}'
//! ```
//!
//! The cursor only moves forward. Choosing between the three root forms looks
//! at the first two tokens; everything else needs one token of lookahead.
//! Parsing stops at the first mismatch, with no recovery.

use crate::ast::{number_from_literal, AstNode, Scalar};
use crate::error::{Result, ToonError};
use crate::token::{Token, TokenKind};

/// Deepest `{`/`-` nesting accepted before the parser refuses the input.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse a token list (as produced by [`crate::tokenizer::tokenize`]) into a tree.
///
/// NEWLINE tokens are ignored. A list without a trailing EOF is treated as if
/// it had one.
pub fn parse(tokens: Vec<Token>) -> Result<AstNode> {
    let mut parser = Parser::new(tokens);
    let ast = parser.document()?;
    tracing::trace!(kind = ast.kind(), "parsed");
    Ok(ast)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Newline)
            .collect();
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, column) = tokens.last().map_or((1, 1), |t| (t.line, t.column));
            tokens.push(Token::new(TokenKind::Eof, "", line, column));
        }
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Token `offset` places ahead of the cursor, clamped to the final EOF.
    fn peek_at(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.as_str()))
        }
    }

    fn unexpected(&self, expected: &str) -> ToonError {
        let got = self.peek();
        ToonError::parse(
            format!(
                "Expected {}, got {} at line {}",
                expected,
                got.describe(),
                got.line
            ),
            got.line,
            got.column,
        )
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            let at = self.peek();
            return Err(ToonError::parse(
                format!("Maximum nesting depth of {} exceeded", MAX_NESTING_DEPTH),
                at.line,
                at.column,
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn document(&mut self) -> Result<AstNode> {
        let first = self.peek().kind;
        let second = self.peek_at(1).kind;

        let root = match (first, second) {
            (TokenKind::Keyword | TokenKind::Identifier, TokenKind::LBrace)
                if is_root_key(&self.peek().value) =>
            {
                let key = self.advance().value;
                let body = self.object()?;
                AstNode::Object(vec![(key, body)])
            }
            (TokenKind::LBrace, _) => self.object()?,
            _ => AstNode::Object(self.members(TokenKind::Eof)?),
        };

        if !self.check(TokenKind::Eof) {
            let extra = self.peek();
            return Err(ToonError::parse(
                format!(
                    "Unexpected token {} after end of document at line {}",
                    extra.describe(),
                    extra.line
                ),
                extra.line,
                extra.column,
            ));
        }
        Ok(root)
    }

    /// Members up to (not including) `terminator`.
    fn members(&mut self, terminator: TokenKind) -> Result<Vec<(String, AstNode)>> {
        let mut members = Vec::new();
        while !self.check(terminator) {
            if self.check(TokenKind::Eof) {
                return Err(self.unexpected(terminator.as_str()));
            }
            if !members.is_empty() && self.check(TokenKind::Comma) {
                self.advance();
            }
            members.push(self.member()?);
        }
        Ok(members)
    }

    fn member(&mut self) -> Result<(String, AstNode)> {
        let key = match self.peek().kind {
            TokenKind::Keyword | TokenKind::Identifier | TokenKind::String => self.advance().value,
            _ => return Err(self.unexpected("KEYWORD, IDENTIFIER or STRING")),
        };
        self.expect(TokenKind::Colon)?;
        let value = self.value()?;
        Ok((key, value))
    }

    fn value(&mut self) -> Result<AstNode> {
        match self.peek().kind {
            TokenKind::String | TokenKind::Keyword | TokenKind::Identifier => {
                Ok(AstNode::string(self.advance().value))
            }
            TokenKind::Boolean => Ok(AstNode::bool(self.advance().value == "TRUE")),
            TokenKind::Number => {
                let token = self.advance();
                let number = number_from_literal(&token.value).ok_or_else(|| {
                    ToonError::parse(
                        format!("Invalid number '{}' at line {}", token.value, token.line),
                        token.line,
                        token.column,
                    )
                })?;
                Ok(AstNode::Value(Scalar::Number(number)))
            }
            TokenKind::Dash => self.array(),
            TokenKind::LBrace => self.object(),
            _ => Err(self.unexpected(
                "STRING, NUMBER, BOOLEAN, KEYWORD, IDENTIFIER, DASH or LBRACE",
            )),
        }
    }

    fn array(&mut self) -> Result<AstNode> {
        self.enter()?;
        let mut items = Vec::new();
        while self.check(TokenKind::Dash) {
            self.advance();
            items.push(self.value()?);
            // Only a comma that leads into another item belongs to the array;
            // otherwise it separates the enclosing object's members.
            if self.check(TokenKind::Comma) && self.peek_at(1).kind == TokenKind::Dash {
                self.advance();
            }
        }
        self.leave();
        Ok(AstNode::Array(items))
    }

    fn object(&mut self) -> Result<AstNode> {
        self.enter()?;
        self.expect(TokenKind::LBrace)?;
        let members = self.members(TokenKind::RBrace)?;
        self.expect(TokenKind::RBrace)?;
        self.leave();
        Ok(AstNode::Object(members))
    }
}

/// A root wrapper key has no lower-case letters, matching what the compiler
/// writes in `KEY { … }` form.
fn is_root_key(word: &str) -> bool {
    word.to_uppercase() == word
}
