//! Browser HTTP client backed by `gloo-net`.

use crate::core::config::UiConfig;
use crate::core::http::{
    ApiError, ApiRequest, ApiResponse, HttpMethod, HttpTransport, TransportError,
};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: UiConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: UiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Fetch a JSON body for a cache key (the key is the request path).
    pub(crate) async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl HttpTransport for ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        let mut req = match request.method {
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        let response = req
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(ApiResponse {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}
