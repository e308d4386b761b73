//! Transport seam for dashboard API calls.
//!
//! # Design
//! - Request/response shapes stay DOM-free so controllers are testable natively.
//! - The browser client implements [`HttpTransport`] on top of `gloo-net`.
//! - Only status and status text are surfaced; success bodies are unused.

use async_trait::async_trait;
use thiserror::Error;

/// Header sent with every state-changing request.
pub const JSON_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// Verbs sent through [`HttpTransport`]; reads go through the browser client directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Create or set state.
    Post,
    /// Remove or clear state.
    Delete,
}

impl HttpMethod {
    /// Upper-case verb as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Request handed to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    /// Verb to send.
    pub method: HttpMethod,
    /// Path relative to the API base URL, starting with `/`.
    pub path: String,
    /// Extra request headers.
    pub headers: Vec<(&'static str, &'static str)>,
}

impl ApiRequest {
    /// Build a bodiless request carrying the JSON content type.
    #[must_use]
    pub fn json(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: vec![JSON_CONTENT_TYPE],
        }
    }
}

/// Status line of a completed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Reason phrase reported by the server.
    pub status_text: String,
}

impl ApiResponse {
    /// Whether the response is the exact success status the API returns.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// User-facing error text: the status text verbatim, or a generic line
    /// when the server sent none.
    #[must_use]
    pub fn error_text(&self) -> String {
        if self.status_text.trim().is_empty() {
            format!("Request failed with status {}", self.status)
        } else {
            self.status_text.clone()
        }
    }
}

/// Failures that happen before a response is received.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request was sent but no response arrived.
    #[error("network request failed: {0}")]
    Network(String),
}

/// Errors raised by read endpoints (listing, count).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The server answered with a non-success status.
    #[error("{status_text} ({status})")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Reason phrase reported by the server.
        status_text: String,
    },
    /// The body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Sends a single request and reports its status line.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Send `request` exactly once.
    ///
    /// # Errors
    /// Returns [`TransportError`] when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_request_carries_content_type() {
        let request = ApiRequest::json(HttpMethod::Post, "/api/links-app/x/archive");
        assert_eq!(request.headers, vec![("Content-Type", "application/json")]);
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn only_200_counts_as_success() {
        let created = ApiResponse {
            status: 201,
            status_text: "Created".to_string(),
        };
        assert!(!created.is_ok());
        assert_eq!(created.error_text(), "Created");
    }

    #[test]
    fn empty_status_text_falls_back_to_code() {
        let response = ApiResponse {
            status: 502,
            status_text: String::new(),
        };
        assert_eq!(response.error_text(), "Request failed with status 502");
    }

    #[test]
    fn api_error_wraps_transport_failures() {
        let err = ApiError::from(TransportError::Network("offline".to_string()));
        assert_eq!(err.to_string(), "network request failed: offline");
    }
}
