//! Error types for the TOON pipeline.
//!
//! Every fallible stage stops at its first failure and returns exactly one
//! error. Tokenizer and parser errors carry the 1-based source position of the
//! offending input; validation errors carry a structural path instead and
//! report line and column 0.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while decoding or formatting TOON text.
#[derive(Error, Debug)]
pub enum ToonError {
    /// The input contained a character no token starts with, or a string
    /// that never closed.
    #[error("Tokenize error at line {line}, column {column}: {message}")]
    Tokenize {
        message: String,
        line: usize,
        column: usize,
    },

    /// The token stream did not match the grammar.
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    /// A leaf of the tree carried no value.
    #[error("Validation error: {message}")]
    Validation { message: String, path: String },

    /// Serde conversion failed (only from `from_str` / `to_string`).
    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToonError {
    pub(crate) fn tokenize(message: impl Into<String>, line: usize, column: usize) -> Self {
        ToonError::Tokenize {
            message: message.into(),
            line,
            column,
        }
    }

    pub(crate) fn parse(message: impl Into<String>, line: usize, column: usize) -> Self {
        ToonError::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    pub(crate) fn validation(path: impl Into<String>) -> Self {
        let path = path.into();
        ToonError::Validation {
            message: format!("Undefined value at path '{}'", path),
            path,
        }
    }

    /// The bare diagnostic message, without the position prefix of `Display`.
    pub fn message(&self) -> String {
        match self {
            ToonError::Tokenize { message, .. }
            | ToonError::Parse { message, .. }
            | ToonError::Validation { message, .. } => message.clone(),
            ToonError::Json(e) => e.to_string(),
        }
    }

    /// 1-based line of the failure, or 0 when the error has no source position.
    pub fn line(&self) -> usize {
        match self {
            ToonError::Tokenize { line, .. } | ToonError::Parse { line, .. } => *line,
            ToonError::Validation { .. } | ToonError::Json(_) => 0,
        }
    }

    /// 1-based column of the failure, or 0 when the error has no source position.
    pub fn column(&self) -> usize {
        match self {
            ToonError::Tokenize { column, .. } | ToonError::Parse { column, .. } => *column,
            ToonError::Validation { .. } | ToonError::Json(_) => 0,
        }
    }

    /// The `{message, line, column}` triple editors render as an inline diagnostic.
    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic {
            message: self.message(),
            line: self.line(),
            column: self.column(),
        }
    }
}

/// Serializable form of a pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Convenience alias used throughout toon-notation.
pub type Result<T> = std::result::Result<T, ToonError>;
