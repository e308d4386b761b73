#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Linkdeck dashboard API.
//!
//! The dashboard owns none of these resources; it only reads them and flips
//! the `archived` flag through the archive endpoints.
use serde::{Deserialize, Serialize};

/// Key used by a link that resolves the bare domain.
pub const ROOT_LINK_KEY: &str = "_root";

/// Short link as returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Opaque link identifier.
    pub id: String,
    /// Path segment of the short link.
    pub key: String,
    /// Short domain serving the link.
    pub domain: String,
    /// Destination URL.
    pub url: String,
    /// Whether the link is hidden from the main dashboard.
    #[serde(default)]
    pub archived: bool,
    /// Recorded click total.
    #[serde(default)]
    pub clicks: u64,
}

impl Link {
    /// Whether this link resolves the bare domain rather than a key path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.key == ROOT_LINK_KEY
    }
}

/// Query parameters accepted by the listing and count endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinksQuery {
    /// Include archived links in the results.
    #[serde(default)]
    pub show_archived: bool,
}

impl LinksQuery {
    /// Render the query as a URL query string, including the leading `?`.
    #[must_use]
    pub fn to_query_string(self) -> String {
        format!("?showArchived={}", self.show_archived)
    }
}
