//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The store doubles as the cache and notification service for controllers.

use crate::core::cache::{CacheInvalidator, QueryCache, Revalidate};
use crate::core::notifications::{NotificationsSlice, Notifier, ToastKind};
use async_trait::async_trait;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Cached API responses keyed by request path.
    pub cache: QueryCache,
    /// Visible toasts.
    pub notifications: NotificationsSlice,
}

#[async_trait(?Send)]
impl CacheInvalidator for Dispatch<AppStore> {
    async fn invalidate(&self, prefix: &str, mode: Revalidate) -> Vec<String> {
        let mut matched = Vec::new();
        self.reduce_mut(|store| matched = store.cache.invalidate(prefix, mode));
        matched
    }
}

impl Notifier for Dispatch<AppStore> {
    fn success(&self, message: &str) {
        self.reduce_mut(|store| {
            store.notifications.push(ToastKind::Success, message);
        });
    }

    fn error(&self, message: &str) {
        self.reduce_mut(|store| {
            store.notifications.push(ToastKind::Error, message);
        });
    }
}
