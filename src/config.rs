//! Storefront configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value for {var}: {value}")]
    Invalid { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for CatalogTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub port: u16,
    pub catalog_api_url: Option<String>,
    pub catalog_timeouts: CatalogTimeouts,
    pub site_base_url: String,
    pub default_locale: String,
    pub commitments_path: Option<String>,
}

impl StorefrontConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_API_URL`: catalog base URL; built-in categories when absent
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: default 10
    /// - `CATALOG_CONNECT_TIMEOUT_SECS`: default 3
    /// - `SITE_BASE_URL`: default `http://localhost:3000`
    /// - `DEFAULT_LOCALE`: default `en`
    /// - `COMMITMENTS_PATH`: JSON file with commitment content
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let catalog_api_url = non_empty(lookup("CATALOG_API_URL")).map(|url| trim_url(&url));
        let catalog_timeouts = CatalogTimeouts {
            request_secs: parse_or(
                "CATALOG_REQUEST_TIMEOUT_SECS",
                lookup("CATALOG_REQUEST_TIMEOUT_SECS"),
                DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "CATALOG_CONNECT_TIMEOUT_SECS",
                lookup("CATALOG_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let site_base_url =
            trim_url(&non_empty(lookup("SITE_BASE_URL")).unwrap_or_else(|| DEFAULT_SITE_BASE_URL.to_string()));
        let default_locale = non_empty(lookup("DEFAULT_LOCALE")).unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let commitments_path = non_empty(lookup("COMMITMENTS_PATH"));

        Ok(Self { port, catalog_api_url, catalog_timeouts, site_base_url, default_locale, commitments_path })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_api_url: None,
            catalog_timeouts: CatalogTimeouts::default(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            commitments_path: None,
        }
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn trim_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn parse_or<T: std::str::FromStr>(var: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match non_empty(raw) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var: var.to_string(), value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
