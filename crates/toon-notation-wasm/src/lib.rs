//! WASM bindings for toon-notation.
//!
//! Exposes `decode`, `encode` and `format` as `#[wasm_bindgen]` functions that
//! can be called from JavaScript/TypeScript, e.g. by an editor that renders
//! TOON diagnostics inline. Built with `wasm-bindgen-cli`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p toon-notation-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/toon_notation_wasm.wasm
//! ```
//!
//! Every failure is thrown as a string holding the diagnostic JSON
//! `{"message": ..., "line": ..., "column": ...}`. Line and column are 1-based,
//! or 0 when the failure has no source position.

use toon_notation::Diagnostic;
use wasm_bindgen::prelude::*;

/// Decode TOON text into compact JSON.
#[wasm_bindgen]
pub fn decode(toon: &str) -> std::result::Result<String, JsValue> {
    let value = toon_notation::decode(toon).map_err(|e| throw(e.diagnostic()))?;
    serde_json::to_string(&value).map_err(|e| throw(json_diagnostic(&e)))
}

/// Encode a JSON string as canonical TOON text.
///
/// Throws if the input is not valid JSON.
#[wasm_bindgen]
pub fn encode(json: &str) -> std::result::Result<String, JsValue> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| throw(json_diagnostic(&e)))?;
    Ok(toon_notation::encode(&value))
}

/// Rewrite TOON text in canonical form.
#[wasm_bindgen]
pub fn format(toon: &str) -> std::result::Result<String, JsValue> {
    toon_notation::format(toon).map_err(|e| throw(e.diagnostic()))
}

fn json_diagnostic(err: &serde_json::Error) -> Diagnostic {
    Diagnostic {
        message: err.to_string(),
        line: err.line(),
        column: err.column(),
    }
}

fn throw(diagnostic: Diagnostic) -> JsValue {
    JsValue::from_str(&diagnostic_json(&diagnostic))
}

/// The thrown payload. Falls back to the bare message if serialization fails.
pub fn diagnostic_json(diagnostic: &Diagnostic) -> String {
    serde_json::to_string(diagnostic).unwrap_or_else(|_| diagnostic.message.clone())
}
