//! Compiler — renders a structured value as canonical TOON text.
//!
//! Total over every `serde_json::Value`: there is no error path. The output
//! is deterministic and is what `format` normalizes documents to:
//!
//! - **Keys**: upper-cased, with `_` inserted wherever an ASCII lowercase
//!   letter is directly followed by an ASCII uppercase one (`maxLength` →
//!   `MAX_LENGTH`). Nothing else about the key changes. A key that would not
//!   lex back as one word (`"NOTE 2"`, `"TRUE"`) is quoted.
//! - **Strings**: bare when they match `^[A-Z_]+$`, otherwise double-quoted
//!   with `"` escaped as `\"`.
//! - **Numbers** in plain decimal, **booleans** as `TRUE`/`FALSE`, **null**
//!   as `""`.
//! - **Lists**: `KEY:` then one `- item` line per element, one level deeper.
//!   Empty lists are dropped together with their key line.
//! - **Mappings**: `KEY: {` … `}`, or `KEY: {}` when empty.
//! - **Root wrapper**: a root mapping with a single fully upper-case key whose
//!   value is a mapping is written `KEY {` … `}`.
//!
//! Indentation is two spaces per level and carries no meaning on decode.
//!
//! Two round-trip gaps follow from these rules: a string matching
//! `^[A-Z_]+$` comes back from decode looking like any other bare word (and
//! `TRUE`/`FALSE` come back as booleans), and an empty list member does not
//! come back at all.
//!
//! # Example
//! ```
//! use serde_json::json;
//! use toon_notation::compile;
//!
//! let toon = compile(&json!({"STORY": {"GENRE": "FANTASY", "RULES": ["no violence"]}}));
//! assert_eq!(
//!     toon,
//!     "STORY {\n  GENRE: FANTASY\n  RULES:\n    - \"no violence\"\n}"
//! );
//! ```

use crate::ast::AstNode;
use serde_json::{Map, Number, Value};

/// Compile a structured value to TOON text.
pub fn compile(value: &Value) -> String {
    let mut out = Output::default();
    compile_root(value, &mut out);
    out.finish()
}

/// Compile a parse tree to TOON text, via its structured-value form.
pub fn compile_ast(ast: &AstNode) -> String {
    compile(&ast.to_value())
}

/// Line-oriented output buffer. Lines are joined with `\n`, no trailing newline.
#[derive(Default)]
struct Output {
    buf: String,
    lines: usize,
}

impl Output {
    fn line(&mut self, depth: usize, text: &str) {
        if self.lines > 0 {
            self.buf.push('\n');
        }
        self.buf.push_str(&make_indent(depth));
        self.buf.push_str(text);
        self.lines += 1;
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Top-level dispatch: the root wrapper, a plain member list, dash items for
/// a root list, or a bare scalar.
fn compile_root(value: &Value, out: &mut Output) {
    match value {
        Value::Object(map) => match root_wrapper(map) {
            Some((key, body)) => {
                out.line(0, &format!("{} {{", encode_key(key)));
                compile_members(body, 1, out);
                out.line(0, "}");
            }
            None => compile_members(map, 0, out),
        },
        Value::Array(items) => compile_list_items(items, 0, out),
        scalar => out.line(0, &encode_scalar(scalar)),
    }
}

/// The single `(key, mapping)` member eligible for `KEY { … }` form, if any.
fn root_wrapper(map: &Map<String, Value>) -> Option<(&String, &Map<String, Value>)> {
    if map.len() != 1 {
        return None;
    }
    let (key, value) = map.iter().next()?;
    let body = value.as_object()?;
    if key.is_empty() || key.to_uppercase() != *key || !is_bare_key(key) {
        return None;
    }
    Some((key, body))
}

/// Emit each member of `map` at `depth`, in the map's own iteration order.
fn compile_members(map: &Map<String, Value>, depth: usize, out: &mut Output) {
    for (key, value) in map {
        let key = encode_key(key);
        match value {
            Value::Array(items) if is_empty_list(items) => {}
            Value::Array(items) => {
                out.line(depth, &format!("{}:", key));
                compile_list_items(items, depth + 1, out);
            }
            Value::Object(inner) if inner.is_empty() => {
                out.line(depth, &format!("{}: {{}}", key));
            }
            Value::Object(inner) => {
                out.line(depth, &format!("{}: {{", key));
                compile_members(inner, depth + 1, out);
                out.line(depth, "}");
            }
            scalar => {
                out.line(depth, &format!("{}: {}", key, encode_scalar(scalar)));
            }
        }
    }
}

/// Emit `- item` lines at `depth`.
///
/// A nested list goes on a lone `-` line with its items one level deeper.
/// Decoding reads dash items greedily, so such nesting does not survive a
/// round trip.
fn compile_list_items(items: &[Value], depth: usize, out: &mut Output) {
    for item in items {
        match item {
            Value::Array(inner) if is_empty_list(inner) => {}
            Value::Array(inner) => {
                out.line(depth, "-");
                compile_list_items(inner, depth + 1, out);
            }
            Value::Object(inner) if inner.is_empty() => out.line(depth, "- {}"),
            Value::Object(inner) => {
                out.line(depth, "- {");
                compile_members(inner, depth + 1, out);
                out.line(depth, "}");
            }
            scalar => out.line(depth, &format!("- {}", encode_scalar(scalar))),
        }
    }
}

/// A list emits no lines when it is empty or holds only such lists.
fn is_empty_list(items: &[Value]) -> bool {
    items.iter().all(|item| match item {
        Value::Array(inner) => is_empty_list(inner),
        _ => false,
    })
}

/// Render a primitive. Only reached for null, booleans, numbers and strings.
fn encode_scalar(value: &Value) -> String {
    match value {
        Value::Null => "\"\"".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => encode_string(s),
        Value::Array(_) | Value::Object(_) => "\"\"".to_string(),
    }
}

/// Plain decimal: integers verbatim, whole floats as integers, `-0` as `0`,
/// other floats in shortest round-trip form (never with an exponent).
fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) => (f as i64).to_string(),
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}

fn encode_string(s: &str) -> String {
    if is_bare(s) {
        s.to_string()
    } else {
        quote(s)
    }
}

/// Wrap in double quotes, escaping only `"`.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push_str("\\\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
    out
}

/// `^[A-Z_]+$`
fn is_bare(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}

/// Render a member key: the transformed key, bare when it lexes as a single
/// word, otherwise quoted like a string value.
fn encode_key(key: &str) -> String {
    let key = transform_key(key);
    if is_bare_key(&key) {
        key
    } else {
        quote(&key)
    }
}

/// Upper-case `key`, inserting `_` at every ASCII lowercase→uppercase boundary.
///
/// This is the only rule: `URLPath` stays `URLPATH`, `already_snake` becomes
/// `ALREADY_SNAKE`, and spaces or punctuation pass through untouched.
fn transform_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for ch in key.chars() {
        if prev.is_some_and(|p| p.is_ascii_lowercase()) && ch.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out.to_uppercase()
}

/// Whether `key` tokenizes as a KEYWORD or IDENTIFIER: `^[A-Za-z_][A-Za-z0-9_]*$`
/// and not one of the boolean words.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && key != "TRUE" && key != "FALSE"
}

/// 2-space-per-level indentation.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
