//! Validator — checks that every leaf of a tree carries a value.
//!
//! Walks object members and array items in order and stops at the first
//! null leaf, reporting its path (`a.b[2]`). No positions are tracked here;
//! errors report line and column 0. Keyword legality and shape are not
//! checked.

use crate::ast::{AstNode, Scalar};
use crate::error::{Result, ToonError};

/// Path reported when the root itself is an empty leaf.
const ROOT_PATH: &str = "<root>";

/// Validate `ast`, failing on the first leaf without a value.
pub fn validate(ast: &AstNode) -> Result<()> {
    walk(ast, &mut String::new())
}

fn walk(node: &AstNode, path: &mut String) -> Result<()> {
    match node {
        AstNode::Value(Scalar::Null) => {
            let at = if path.is_empty() { ROOT_PATH } else { path.as_str() };
            Err(ToonError::validation(at))
        }
        AstNode::Value(_) => Ok(()),
        AstNode::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let mark = path.len();
                path.push_str(&format!("[{}]", i));
                walk(item, path)?;
                path.truncate(mark);
            }
            Ok(())
        }
        AstNode::Object(members) => {
            for (key, child) in members {
                let mark = path.len();
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(key);
                walk(child, path)?;
                path.truncate(mark);
            }
            Ok(())
        }
    }
}
