//! Persistence and environment helpers for the app shell.

use crate::core::config::UiConfig;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const API_BASE_URL_KEY: &str = "linkdeck.api_base_url";

pub(crate) fn load_config() -> UiConfig {
    let override_url = LocalStorage::get::<String>(API_BASE_URL_KEY).ok();
    let href = match window().location().href() {
        Ok(href) => Some(href),
        Err(err) => {
            console::error!("page location unavailable", err);
            None
        }
    };
    UiConfig::resolve(override_url.as_deref(), href.as_deref())
}
