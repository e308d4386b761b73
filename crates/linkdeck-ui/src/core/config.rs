//! Runtime configuration for the dashboard.
//!
//! # Design
//! - Resolution is pure; the app shell supplies the stored override and page URL.
//! - An explicit override wins over the page origin, which wins over the default.

use log::warn;
use url::Url;

/// Base URL used when neither an override nor the page origin is usable.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Favicon lookup service; the apex domain is appended.
pub const GOOGLE_FAVICON_URL: &str = "https://www.google.com/s2/favicons?sz=64&domain_url=";

/// Resolved UI configuration shared through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Origin API paths are resolved against, without a trailing slash.
    pub api_base_url: String,
    /// Favicon service prefix.
    pub favicon_service: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            favicon_service: GOOGLE_FAVICON_URL.to_string(),
        }
    }
}

impl UiConfig {
    /// Resolve configuration from an optional stored override and the page URL.
    #[must_use]
    pub fn resolve(override_url: Option<&str>, page_href: Option<&str>) -> Self {
        let api_base_url = override_url
            .and_then(|raw| {
                let parsed = normalize_base_url(raw);
                if parsed.is_none() && !raw.trim().is_empty() {
                    warn!("ignoring invalid API base URL override {raw:?}");
                }
                parsed
            })
            .or_else(|| page_href.and_then(origin_of))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self {
            api_base_url,
            ..Self::default()
        }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

/// Accept an http(s) URL and strip any trailing slash.
fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_string())
}

/// Scheme, host and non-default port of the page URL.
fn origin_of(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    Some(url.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_page_origin() {
        let config = UiConfig::resolve(
            Some("https://api.example.com/"),
            Some("http://localhost:8080/acme"),
        );
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn page_origin_keeps_port_and_drops_path() {
        let config = UiConfig::resolve(None, Some("http://localhost:8080/acme?x=1"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(
            config.api_url("/api/links-app"),
            "http://localhost:8080/api/links-app"
        );
    }

    #[test]
    fn invalid_override_falls_back_to_page() {
        let config = UiConfig::resolve(Some("not a url"), Some("https://app.dub.co/acme"));
        assert_eq!(config.api_base_url, "https://app.dub.co");
    }

    #[test]
    fn non_http_sources_fall_back_to_default() {
        let config = UiConfig::resolve(Some("ftp://files"), Some("file:///tmp/index.html"));
        assert_eq!(config, UiConfig::default());
    }
}
