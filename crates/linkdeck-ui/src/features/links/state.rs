//! Link listing selectors.

use crate::core::cache::QueryCache;
use crate::core::http::ApiError;
use crate::core::notifications::Notifier;
use crate::features::archive::logic::LinkScope;
use linkdeck_api_models::{Link, LinksQuery};

/// Cache keys backing one listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinksKeys {
    /// Listing key.
    pub links: String,
    /// Count key.
    pub count: String,
}

impl LinksKeys {
    /// Keys for `scope` and `query`.
    #[must_use]
    pub fn new(scope: &LinkScope, query: LinksQuery) -> Self {
        Self {
            links: scope.links_key(query),
            count: scope.count_key(query),
        }
    }
}

/// Cached listing, if fetched.
#[must_use]
pub fn select_links(cache: &QueryCache, keys: &LinksKeys) -> Option<Vec<Link>> {
    cache.decode(&keys.links)
}

/// Cached count, if fetched.
#[must_use]
pub fn select_count(cache: &QueryCache, keys: &LinksKeys) -> Option<u64> {
    cache.decode(&keys.count)
}

/// Page keys that must be (re)fetched now: missing, stale, or queued for revalidation.
#[must_use]
pub fn keys_to_fetch(cache: &QueryCache, keys: &LinksKeys) -> Vec<String> {
    let queued: Vec<&str> = cache.pending_revalidations().collect();
    [&keys.links, &keys.count]
        .into_iter()
        .filter(|key| cache.needs_fetch(key) || queued.contains(&key.as_str()))
        .cloned()
        .collect()
}

/// The `archived` prop a row's dialog should use: archive visible links, unarchive archived ones.
#[must_use]
pub const fn archive_action_for(link: &Link) -> bool {
    !link.archived
}

/// Surface a failed listing or count fetch as an error toast.
pub fn report_refresh_failure<N: Notifier + ?Sized>(notifier: &N, err: &ApiError) {
    notifier.error(&format!("Could not refresh links: {err}"));
}
