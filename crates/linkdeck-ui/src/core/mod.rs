//! Core, DOM-free primitives and helpers for the Web UI.
pub mod cache;
pub mod config;
pub mod display;
pub mod http;
pub mod notifications;
pub mod store;
