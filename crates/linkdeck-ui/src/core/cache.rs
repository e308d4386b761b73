//! Client-side query cache keyed by request path.
//!
//! # Design
//! - Keys are request paths including the query string; invalidation matches by prefix.
//! - Stale entries keep their last value so views keep rendering while they refetch.
//! - Immediate invalidation queues keys; views refetch queued keys and `insert` dequeues them.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Whether a cached value still reflects the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    /// Fetched and not invalidated since.
    Fresh,
    /// Invalidated; refetch on next read.
    Stale,
}

/// How invalidated entries are refreshed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Revalidate {
    /// Mark stale only; the next reader refetches.
    Lazy,
    /// Mark stale and queue for an immediate refetch.
    Immediate,
}

/// Cached response body.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheEntry {
    /// Last decoded JSON body.
    pub value: Value,
    /// Freshness of `value`.
    pub freshness: Freshness,
}

/// Path-keyed response cache shared by dashboard views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCache {
    entries: BTreeMap<String, CacheEntry>,
    revalidate: BTreeSet<String>,
}

impl QueryCache {
    /// Store a freshly fetched value, clearing any queued revalidation.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        self.revalidate.remove(&key);
        self.entries.insert(
            key,
            CacheEntry {
                value,
                freshness: Freshness::Fresh,
            },
        );
    }

    /// Cached entry for `key`, fresh or stale.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Decode the cached value for `key`, if present and well-formed.
    #[must_use]
    pub fn decode<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|entry| serde_json::from_value(entry.value.clone()).ok())
    }

    /// Whether `key` is missing or stale.
    #[must_use]
    pub fn needs_fetch(&self, key: &str) -> bool {
        self.get(key)
            .is_none_or(|entry| entry.freshness == Freshness::Stale)
    }

    /// Invalidate every key starting with `prefix` and return the matched keys.
    pub fn invalidate(&mut self, prefix: &str, mode: Revalidate) -> Vec<String> {
        let matched: Vec<String> = self
            .entries
            .range_mut(prefix.to_owned()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, entry)| {
                entry.freshness = Freshness::Stale;
                key.clone()
            })
            .collect();
        if mode == Revalidate::Immediate {
            self.revalidate.extend(matched.iter().cloned());
        }
        matched
    }

    /// Keys queued for immediate revalidation.
    pub fn pending_revalidations(&self) -> impl Iterator<Item = &str> {
        self.revalidate.iter().map(String::as_str)
    }
}

/// Invalidates cached queries by key prefix.
#[async_trait(?Send)]
pub trait CacheInvalidator {
    /// Invalidate keys starting with `prefix`; returns the matched keys.
    async fn invalidate(&self, prefix: &str, mode: Revalidate) -> Vec<String>;
}

#[async_trait(?Send)]
impl CacheInvalidator for RefCell<QueryCache> {
    async fn invalidate(&self, prefix: &str, mode: Revalidate) -> Vec<String> {
        self.borrow_mut().invalidate(prefix, mode)
    }
}
