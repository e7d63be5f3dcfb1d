//! # toon-notation
//!
//! Lexer, parser, validator and compiler for **TOON**, the text notation used to
//! write AI prompt specifications by hand. TOON is JSON-shaped data written with
//! upper-case bare keys, dash-prefixed list items and an optional named root
//! wrapper:
//!
//! ```text
//! STORY {
//!   GENRE: FANTASY
//!   RULES:
//!     - "no violence"
//! }
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use toon_notation::{decode, encode, format};
//!
//! // TOON → structured value
//! let value = decode("STORY { GENRE: FANTASY }").unwrap();
//! assert_eq!(value, json!({"STORY": {"GENRE": "FANTASY"}}));
//!
//! // structured value → TOON
//! assert_eq!(encode(&json!({"COUNT": 0})), "COUNT: 0");
//!
//! // TOON → canonical TOON
//! let pretty = format("STORY{GENRE:FANTASY}").unwrap();
//! assert_eq!(pretty, "STORY {\n  GENRE: FANTASY\n}");
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] — source text → tokens
//! - [`parser`] — tokens → [`AstNode`]
//! - [`validator`] — checks every leaf of a tree has a value
//! - [`compiler`] — structured value → canonical TOON text
//! - [`ast`] — the parse tree and its flattening to `serde_json::Value`
//! - [`token`] — token kinds and the reserved keyword set
//! - [`error`] — [`ToonError`] and the `{message, line, column}` diagnostic
//!
//! Every function here is pure: no I/O, no shared state, safe to call from any
//! number of threads at once.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod parser;
pub mod token;
pub mod tokenizer;
pub mod validator;

pub use ast::{AstNode, Scalar};
pub use compiler::{compile, compile_ast};
pub use error::{Diagnostic, Result, ToonError};
pub use parser::parse;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
pub use validator::validate;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Decode TOON text into a structured value.
///
/// Runs tokenize → parse → validate → flatten, stopping at the first stage
/// that fails and returning its error unchanged.
pub fn decode(source: &str) -> Result<Value> {
    let tokens = tokenize(source).inspect_err(|e| log_rejection("tokenize", e))?;
    let ast = parse(tokens).inspect_err(|e| log_rejection("parse", e))?;
    validate(&ast).inspect_err(|e| log_rejection("validate", e))?;
    Ok(ast.into_value())
}

/// Encode a structured value as canonical TOON text. Never fails.
pub fn encode(value: &Value) -> String {
    compile(value)
}

/// Normalize TOON text: decode it, then encode the result.
pub fn format(source: &str) -> Result<String> {
    let value = decode(source)?;
    Ok(encode(&value))
}

/// Decode TOON text straight into any `T: DeserializeOwned`.
///
/// ```rust
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Story {
///     #[serde(rename = "GENRE")]
///     genre: String,
/// }
///
/// let story: Story = toon_notation::from_str("GENRE: FANTASY").unwrap();
/// assert_eq!(story.genre, "FANTASY");
/// ```
pub fn from_str<T: DeserializeOwned>(source: &str) -> Result<T> {
    let value = decode(source)?;
    Ok(serde_json::from_value(value)?)
}

/// Encode any `T: Serialize` as TOON text.
pub fn to_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(encode(&value))
}

fn log_rejection(stage: &'static str, err: &ToonError) {
    tracing::debug!(
        stage,
        line = err.line(),
        column = err.column(),
        message = %err.message(),
        "toon input rejected"
    );
}
