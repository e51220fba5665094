//! HTTP client for the marketplace API.
//!
//! The bearer credential is injected per call, never held in client state,
//! so two sessions can share a client without racing on a global token.

use crate::error::{ApiError, ErrorBody};

/// A client for the marketplace REST API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path (`/adverts`, `/auth/login`, ...).
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GET request builder. Attaches `Authorization: Bearer <token>` when a
    /// token is given.
    pub fn get(&self, endpoint: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        with_bearer(self.http.get(self.url(endpoint)), token)
    }

    /// POST request builder, bearer-authenticated when a token is given.
    pub fn post(&self, endpoint: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        with_bearer(self.http.post(self.url(endpoint)), token)
    }

    /// DELETE request builder, bearer-authenticated when a token is given.
    pub fn delete(&self, endpoint: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        with_bearer(self.http.delete(self.url(endpoint)), token)
    }
}

fn with_bearer(builder: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Decode a non-2xx response into `ApiError::Server`.
///
/// The server's error contract is `{message, statusCode}`; when the body is
/// missing, unparseable, or lacks a message, a generic fallback carrying the
/// HTTP status is substituted.
pub async fn error_from_response(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = match resp.text().await {
        Ok(body) => decode_error_message(&body, status),
        Err(_) => fallback_message(status),
    };
    ApiError::Server { message, status }
}

/// Map a transport-level failure (no response) to `ApiError::Network`.
pub fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode_error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback_message(status))
}

fn fallback_message(status: u16) -> String {
    format!("Something went wrong ({status})")
}
