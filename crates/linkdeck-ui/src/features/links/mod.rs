//! Link listing feature.
//!
//! # Design
//! - Listing and count responses live in the shared query cache, keyed by request path.
//! - Views refetch keys that are missing, stale or queued for revalidation.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
