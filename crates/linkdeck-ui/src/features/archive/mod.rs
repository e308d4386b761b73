//! Archive/unarchive link feature.
//!
//! # Design
//! - The confirmation dialog renders state and delegates to the toggle controller.
//! - The controller talks to ports (transport, cache, notifier) so it runs natively in tests.
//! - Restrict API calls to this feature layer to honor UI boundaries.

pub mod controller;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
