//! Structured-data (JSON-LD) injection.
//!
//! The payload is embedded as raw script content, so HTML entity escaping
//! is not an option: it would corrupt the JSON. Instead every character
//! that could terminate the `<script>` element or start markup is written
//! as a JSON `\uXXXX` escape. The result parses back to the same document
//! and contains no `<` at all.

use leptos::prelude::*;

/// Element id of the emitted `<script>`. At most one block per page.
pub const SCHEMA_ELEMENT_ID: &str = "schema-jsonld";

/// An arbitrary structured-data document.
pub type SchemaPayload = serde_json::Map<String, serde_json::Value>;

/// Serialize `payload` into JSON that is safe to place inside `<script>`.
#[must_use]
pub fn serialize_json_ld(payload: &SchemaPayload) -> String {
    let json = serde_json::Value::Object(payload.clone()).to_string();
    escape_script_json(&json)
}

fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    out
}

/// Emits `payload` as a JSON-LD block for search engines.
#[component]
pub fn Schema(schema: SchemaPayload) -> impl IntoView {
    let json = serialize_json_ld(&schema);
    view! { <script type="application/ld+json" id=SCHEMA_ELEMENT_ID inner_html=json></script> }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
