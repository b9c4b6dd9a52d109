use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, StorefrontConfig::default());
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.catalog_api_url.is_none());
    assert_eq!(cfg.default_locale, "en");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = StorefrontConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("CATALOG_API_URL", "https://catalog.test/api/"),
        ("CATALOG_REQUEST_TIMEOUT_SECS", "42"),
        ("CATALOG_CONNECT_TIMEOUT_SECS", "7"),
        ("SITE_BASE_URL", "https://shop.test/"),
        ("DEFAULT_LOCALE", "uk"),
        ("COMMITMENTS_PATH", "content/commitments.json"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.catalog_api_url.as_deref(), Some("https://catalog.test/api"));
    assert_eq!(cfg.catalog_timeouts, CatalogTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.site_base_url, "https://shop.test");
    assert_eq!(cfg.default_locale, "uk");
    assert_eq!(cfg.commitments_path.as_deref(), Some("content/commitments.json"));
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = StorefrontConfig::from_lookup(lookup_from(&[("CATALOG_API_URL", "  "), ("PORT", "")])).unwrap();
    assert!(cfg.catalog_api_url.is_none());
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = StorefrontConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT".into(), value: "eighty".into() });
}

#[test]
fn from_lookup_rejects_bad_timeout() {
    let err = StorefrontConfig::from_lookup(lookup_from(&[("CATALOG_CONNECT_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var, .. } if var == "CATALOG_CONNECT_TIMEOUT_SECS"));
}
