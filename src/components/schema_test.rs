use super::*;
use crate::layout::render_to_html;

fn payload(value: serde_json::Value) -> SchemaPayload {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn script_body(html: &str) -> &str {
    let open_end = html.find('>').unwrap() + 1;
    let close = html.rfind("</script>").unwrap();
    &html[open_end..close]
}

#[test]
fn serialize_round_trips_hostile_string() {
    let original = payload(serde_json::json!({ "@type": "Product", "name": "A\"<script>" }));
    let json = serialize_json_ld(&original);
    let parsed: SchemaPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn serialize_leaves_no_markup_characters() {
    let original = payload(serde_json::json!({
        "@type": "Product",
        "name": "A\"<script>",
        "description": "</script><img src=x onerror=alert(1)> & more",
    }));
    let json = serialize_json_ld(&original);
    assert!(!json.contains('<'));
    assert!(!json.contains('>'));
    assert!(!json.contains('&'));
    assert!(json.contains("\\u003cscript\\u003e"));
}

#[test]
fn serialize_escapes_line_separators() {
    let original = payload(serde_json::json!({ "text": "a\u{2028}b\u{2029}c" }));
    let json = serialize_json_ld(&original);
    assert!(!json.contains('\u{2028}'));
    assert!(!json.contains('\u{2029}'));
    let parsed: SchemaPayload = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn serialize_nested_values_round_trip() {
    let original = payload(serde_json::json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "offers": { "@type": "Offer", "price": 19.5, "availability": null },
        "image": ["a.png", "b.png"],
    }));
    let parsed: SchemaPayload = serde_json::from_str(&serialize_json_ld(&original)).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn schema_component_emits_single_contained_script() {
    let original = payload(serde_json::json!({ "@type": "Product", "name": "A\"<script>" }));
    let schema = original.clone();
    let html = render_to_html(move || view! { <Schema schema=schema /> });

    assert!(html.starts_with("<script"));
    assert!(html.contains("type=\"application/ld+json\""));
    assert!(html.contains(&format!("id=\"{SCHEMA_ELEMENT_ID}\"")));
    assert_eq!(html.matches("<script").count(), 1);
    assert_eq!(html.matches("</script>").count(), 1);

    let parsed: SchemaPayload = serde_json::from_str(script_body(&html)).unwrap();
    assert_eq!(parsed, original);
}
