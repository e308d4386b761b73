//! Link display helpers: short links, apex domains and favicons.

use linkdeck_api_models::Link;
use url::Url;

/// Country-code TLDs that commonly carry a second-level registry (`co.uk`).
const CC_TLDS: &[&str] = &[
    "au", "br", "cn", "id", "il", "in", "jp", "kr", "mx", "nz", "sg", "th", "tr", "tw", "uk",
    "za",
];

/// Second-level labels used under the ccTLDs above.
const SECOND_LEVEL_DOMAINS: &[&str] = &["ac", "co", "com", "edu", "gov", "net", "or", "org"];

/// Full short link URL for `link`. Empty when the domain is unknown.
#[must_use]
pub fn short_url(link: &Link) -> String {
    if link.domain.is_empty() {
        return String::new();
    }
    if link.key.is_empty() || link.is_root() {
        format!("https://{}", link.domain)
    } else {
        format!("https://{}/{}", link.domain, link.key)
    }
}

/// Human-readable short link without the protocol, e.g. `dub.sh/promo`.
#[must_use]
pub fn pretty_shortlink(link: &Link) -> String {
    short_url(link).trim_start_matches("https://").to_string()
}

/// Registrable domain of a destination URL, or an empty string when it cannot be parsed.
#[must_use]
pub fn apex_domain(url: &str) -> String {
    let normalized = match url.split_once("://") {
        Some((scheme, rest))
            if !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            format!("https://{rest}")
        }
        _ => url.to_string(),
    };
    let Ok(parsed) = Url::parse(&normalized) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };

    match host {
        "youtu.be" => return "youtube.com".to_string(),
        "raw.githubusercontent.com" => return "github.com".to_string(),
        _ if host.ends_with(".vercel.app") => return "vercel.app".to_string(),
        _ => {}
    }

    let parts: Vec<&str> = host.split('.').collect();
    let count = parts.len();
    if count > 2 {
        if CC_TLDS.contains(&parts[count - 1]) && SECOND_LEVEL_DOMAINS.contains(&parts[count - 2])
        {
            return parts[count - 3..].join(".");
        }
        return parts[count - 2..].join(".");
    }
    host.to_string()
}

/// Favicon image URL for `apex` using the configured favicon service.
#[must_use]
pub fn favicon_url(service: &str, apex: &str) -> String {
    format!("{service}{apex}")
}
