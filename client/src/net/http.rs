//! Shared JSON-over-HTTP helper for backend calls.
//!
//! Client-side (hydrate): `gloo-net` with `credentials: include` so the
//! session cookie rides along.
//! Native (SSR host, tests): `reqwest` with a cookie store.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalised into [`ApiError`] here. Bodies that are not
//! JSON are kept as raw text; a parse failure never escapes as anything else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods used by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Response body as far as it could be understood.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Empty,
    Json(Value),
    Text(String),
}

/// Typed failure of a backend request.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String, payload: Payload },
    /// No response was received (unreachable host, refused connection, CORS).
    #[error("request failed: {0}")]
    Transport(String),
    /// A 2xx response whose body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Parsed error body, when the backend produced one.
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Status { payload, .. } => Some(payload),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Backend client rooted at the configured API base URL.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    #[cfg(not(feature = "hydrate"))]
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            #[cfg(not(feature = "hydrate"))]
            inner: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .unwrap_or_else(|err| {
                    log::warn!("cookie-aware http client unavailable, falling back to default: {err}");
                    reqwest::Client::new()
                }),
        }
    }

    /// Send a request and decode a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-2xx statuses, and
    /// bodies that do not decode into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let payload = self.request(method, path, body).await?;
        decode_payload(payload)
    }

    /// Send a request whose successful body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and non-2xx statuses.
    pub async fn request_empty(&self, method: Method, path: &str, body: Option<&Value>) -> Result<(), ApiError> {
        self.request(method, path, body).await.map(|_| ())
    }

    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Payload, ApiError> {
        let url = join_url(&self.base_url, path);
        let (status, raw) = self.send(method, &url, body).await?;
        into_payload(status, &raw)
    }

    #[cfg(feature = "hydrate")]
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<(u16, String), ApiError> {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
        }
        .credentials(web_sys::RequestCredentials::Include)
        .header("Accept", JSON_CONTENT_TYPE);

        // `json` also sets the JSON content type.
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let raw = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, raw))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<(u16, String), ApiError> {
        use reqwest::header::{ACCEPT, CONTENT_TYPE};

        let mut builder = match method {
            Method::Get => self.inner.get(url),
            Method::Post => self.inner.post(url),
        }
        .header(ACCEPT, JSON_CONTENT_TYPE);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body.to_string());
        }

        let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let raw = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok((status, raw))
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Parse a raw body: empty, JSON, or the raw text as a fallback.
pub(crate) fn parse_payload(raw: &str) -> Payload {
    if raw.is_empty() {
        return Payload::Empty;
    }
    serde_json::from_str(raw).map_or_else(|_| Payload::Text(raw.to_owned()), Payload::Json)
}

/// User-facing message for a failed response.
///
/// Prefers `error.message`, then `message`, then a generic status line.
pub(crate) fn error_message(status: u16, payload: &Payload) -> String {
    if let Payload::Json(value) = payload {
        let nested = value.pointer("/error/message").and_then(Value::as_str);
        let top = value.get("message").and_then(Value::as_str);
        if let Some(message) = nested.filter(|m| !m.is_empty()).or(top.filter(|m| !m.is_empty())) {
            return message.to_owned();
        }
    }
    format!("Request failed with status {status}")
}

pub(crate) fn into_payload(status: u16, raw: &str) -> Result<Payload, ApiError> {
    let payload = parse_payload(raw);
    if (200..300).contains(&status) {
        return Ok(payload);
    }
    Err(ApiError::Status { status, message: error_message(status, &payload), payload })
}

pub(crate) fn decode_payload<T: DeserializeOwned>(payload: Payload) -> Result<T, ApiError> {
    match payload {
        Payload::Json(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
        Payload::Empty => Err(ApiError::Decode("empty body".to_owned())),
        Payload::Text(_) => Err(ApiError::Decode("body is not JSON".to_owned())),
    }
}
