//! Archive toggle contract.
//!
//! # Design
//! - The verb encodes the direction; the mapping lives in [`ARCHIVE_ROUTES`] only.
//! - The scope selects the path family. Scoped and unscoped families never mix.
//! - Path segments are percent-encoded once here so API paths and cache keys agree.

use crate::core::http::HttpMethod;
use linkdeck_api_models::LinksQuery;

/// Which way the archived flag is flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveDirection {
    /// Hide the link from the main dashboard.
    Archive,
    /// Show the link on the main dashboard again.
    Unarchive,
}

/// Direction to HTTP verb mapping for the archive endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchiveRoute {
    /// Direction this row handles.
    pub direction: ArchiveDirection,
    /// Verb sent to `{links}/{id}/archive`.
    pub method: HttpMethod,
}

/// The full direction table.
pub static ARCHIVE_ROUTES: [ArchiveRoute; 2] = [
    ArchiveRoute {
        direction: ArchiveDirection::Archive,
        method: HttpMethod::Post,
    },
    ArchiveRoute {
        direction: ArchiveDirection::Unarchive,
        method: HttpMethod::Delete,
    },
];

impl ArchiveDirection {
    /// `true` means the action to perform is archive.
    #[must_use]
    pub const fn from_archived(archived: bool) -> Self {
        if archived {
            Self::Archive
        } else {
            Self::Unarchive
        }
    }

    /// Route table row for this direction.
    #[must_use]
    pub fn route(self) -> Option<&'static ArchiveRoute> {
        route_in(&ARCHIVE_ROUTES, self)
    }

    /// Lower-case verb used in labels.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Unarchive => "unarchive",
        }
    }

    /// Capitalized verb used in the dialog title.
    #[must_use]
    pub const fn title_verb(self) -> &'static str {
        match self {
            Self::Archive => "Archive",
            Self::Unarchive => "Unarchive",
        }
    }

    /// Explanatory copy shown under the title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Archive => {
                "Archived links will still work - they just won't show up on your main dashboard."
            }
            Self::Unarchive => {
                "By unarchiving this link, it will show up on your main dashboard again."
            }
        }
    }

    /// Dialog title for a given short link.
    #[must_use]
    pub fn title(self, shortlink: &str) -> String {
        format!("{} {shortlink}", self.title_verb())
    }

    /// Confirm button label.
    #[must_use]
    pub fn confirm_label(self) -> String {
        format!("Confirm {}", self.verb())
    }

    /// Success toast text.
    #[must_use]
    pub fn success_message(self) -> String {
        format!("Successfully {}d link!", self.verb())
    }
}

fn route_in(table: &[ArchiveRoute], direction: ArchiveDirection) -> Option<&ArchiveRoute> {
    table.iter().find(|row| row.direction == direction)
}

/// Workspace scope that namespaces link API paths and cache keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkScope {
    /// Project-scoped API family, keyed by slug.
    Project(String),
    /// Legacy unscoped API family.
    Unscoped,
}

impl LinkScope {
    /// Scope from an optional route slug; blank slugs are unscoped.
    #[must_use]
    pub fn from_slug(slug: Option<&str>) -> Self {
        match slug.map(str::trim) {
            Some(slug) if !slug.is_empty() => Self::Project(slug.to_string()),
            _ => Self::Unscoped,
        }
    }

    /// Project slug, when scoped.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Project(slug) => Some(slug),
            Self::Unscoped => None,
        }
    }

    /// Prefix shared by every link listing key in this scope.
    #[must_use]
    pub fn links_prefix(&self) -> String {
        match self {
            Self::Project(slug) => format!("/api/projects/{}/links", urlencoding::encode(slug)),
            Self::Unscoped => "/api/links-app".to_string(),
        }
    }

    /// Prefix shared by every link count key in this scope.
    #[must_use]
    pub fn count_prefix(&self) -> String {
        match self {
            Self::Project(slug) => {
                format!("/api/projects/{}/links/count", urlencoding::encode(slug))
            }
            Self::Unscoped => "/api/links/count".to_string(),
        }
    }

    /// Archive endpoint for one link.
    #[must_use]
    pub fn archive_path(&self, link_id: &str) -> String {
        format!(
            "{}/{}/archive",
            self.links_prefix(),
            urlencoding::encode(link_id)
        )
    }

    /// Cache key of the link listing for `query`.
    #[must_use]
    pub fn links_key(&self, query: LinksQuery) -> String {
        format!("{}{}", self.links_prefix(), query.to_query_string())
    }

    /// Cache key of the link count for `query`.
    #[must_use]
    pub fn count_key(&self, query: LinksQuery) -> String {
        format!("{}{}", self.count_prefix(), query.to_query_string())
    }
}
