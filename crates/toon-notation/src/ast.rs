//! The parser's intermediate tree and its mapping to plain structured values.
//!
//! `AstNode` is a closed three-variant union. It is a pure tree: each child
//! has exactly one parent and the whole thing is dropped after the call that
//! built it. Object members are a `Vec` of pairs so source order is kept
//! without relying on the map type.

use serde_json::{Map, Number, Value};

/// A leaf primitive. The parser only produces `Bool`, `Number` and `String`;
/// `Null` appears when a tree is built from a value containing `null`, and is
/// what the validator rejects.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// Parse tree for one TOON document.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    Value(Scalar),
    Array(Vec<AstNode>),
    /// Members in source order.
    Object(Vec<(String, AstNode)>),
}

impl AstNode {
    pub fn string(s: impl Into<String>) -> Self {
        AstNode::Value(Scalar::String(s.into()))
    }

    pub fn bool(b: bool) -> Self {
        AstNode::Value(Scalar::Bool(b))
    }

    pub fn number(n: impl Into<Number>) -> Self {
        AstNode::Value(Scalar::Number(n.into()))
    }

    /// Short name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::Value(_) => "value",
            AstNode::Array(_) => "array",
            AstNode::Object(_) => "object",
        }
    }

    /// Flatten into a structured value, preserving member order.
    ///
    /// A key that appears twice keeps its first position and takes the last
    /// value.
    pub fn into_value(self) -> Value {
        match self {
            AstNode::Value(scalar) => scalar.into_value(),
            AstNode::Array(items) => {
                Value::Array(items.into_iter().map(AstNode::into_value).collect())
            }
            AstNode::Object(members) => {
                let mut map = Map::with_capacity(members.len());
                for (key, node) in members {
                    map.insert(key, node.into_value());
                }
                Value::Object(map)
            }
        }
    }

    /// Borrowing form of [`AstNode::into_value`].
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Build a tree with the same shape as `value`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => AstNode::Value(Scalar::Null),
            Value::Bool(b) => AstNode::bool(*b),
            Value::Number(n) => AstNode::number(n.clone()),
            Value::String(s) => AstNode::string(s.as_str()),
            Value::Array(items) => AstNode::Array(items.iter().map(AstNode::from_value).collect()),
            Value::Object(map) => AstNode::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), AstNode::from_value(v)))
                    .collect(),
            ),
        }
    }
}

impl Scalar {
    pub fn into_value(self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::String(s) => Value::String(s),
        }
    }
}

impl From<&Value> for AstNode {
    fn from(value: &Value) -> Self {
        AstNode::from_value(value)
    }
}

impl From<AstNode> for Value {
    fn from(node: AstNode) -> Self {
        node.into_value()
    }
}

/// Convert NUMBER token text (`-?\d+(\.\d+)?`) to a JSON number.
///
/// Integers stay integers (`i64`, then `u64`, falling back to `f64` past
/// both); decimals with no fractional part collapse to integers so `1.0` and
/// `1` decode alike.
pub(crate) fn number_from_literal(text: &str) -> Option<Number> {
    if !text.contains('.') {
        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::from(i));
        }
        if let Ok(u) = text.parse::<u64>() {
            return Some(Number::from(u));
        }
    }
    let f = text.parse::<f64>().ok()?;
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return Some(Number::from(f as i64));
    }
    Number::from_f64(f)
}
