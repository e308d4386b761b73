//! API helpers for link listings.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Responses are written straight into the query cache under their request path.

use crate::core::http::ApiError;
use crate::core::store::AppStore;
use crate::services::api::ApiClient;
use yewdux::prelude::Dispatch;

/// Fetch `key` and store the body in the query cache.
pub(crate) async fn refresh_key(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    key: &str,
) -> Result<(), ApiError> {
    let value = client.get_value(key).await?;
    dispatch.reduce_mut(|store| store.cache.insert(key, value));
    Ok(())
}
