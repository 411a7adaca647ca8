//! HTTP client layer: request descriptors, the shared `send` entry point,
//! and error normalization.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` with a timeout race.
//! Native: stubs returning [`ApiError::Unsupported`] so the descriptor and
//! envelope logic stays testable without a browser.
//!
//! AUTH CONTRACT
//! =============
//! Every request except `/account/login` and `/account/register` carries
//! `Authorization: Bearer <token>` when a session token is stored. A 401
//! response clears the stored session and forces a full navigation to the
//! login route; all other failures surface to the caller unchanged.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::Envelope;

/// Backend API root. All descriptor paths are relative to this.
pub const API_BASE: &str = "/api";

/// Per-request deadline. No retries; each call is at-most-once.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Fallback error message when the backend provides no error payload.
const GENERIC_FAILURE: &str = "request failed";

/// HTTP method of a [`RequestDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// One outgoing request: method, backend-relative path, query parameters,
/// and an optional JSON body. Immutable once handed to [`send`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Append a query parameter. Values are percent-encoded at send time.
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl std::fmt::Display) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Normalized failure surfaced by every wrapper function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request did not complete within [`REQUEST_TIMEOUT_MS`].
    #[error("request timed out")]
    Timeout,
    /// The request never reached the backend or the transport failed.
    #[error("network error: {0}")]
    Network(String),
    /// The backend rejected the request; `message` is its error payload
    /// when present, or a generic failure marker.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// HTTP 401 — the session has been cleared and a redirect to the login
    /// route has been forced.
    #[error("session expired")]
    Unauthorized,
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Requests are only possible in a browser build.
    #[error("not available outside the browser")]
    Unsupported,
}

/// Whether `path` is exempt from bearer-token injection.
///
/// Login and registration are the only endpoints callable without a session;
/// their requests must not be touched even when a stale token is stored.
pub(crate) fn is_auth_exempt(path: &str) -> bool {
    path == "/account/login" || path == "/account/register"
}

/// The `Authorization` header value for a request to `path`, if any.
pub(crate) fn authorization(path: &str, token: Option<&str>) -> Option<String> {
    if is_auth_exempt(path) {
        return None;
    }
    token.map(|t| format!("Bearer {t}"))
}

/// Join base, path, and percent-encoded query parameters into a URL.
pub(crate) fn build_url(base: &str, path: &str, query: &[(&'static str, String)]) -> String {
    let mut url = format!("{base}{path}");
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

/// Normalize a response into the unwrapped `data` payload or an [`ApiError`].
///
/// The backend wraps payloads as `{code, message, data}` with `code`
/// mirroring the HTTP status; a handful of endpoints reply with a bare JSON
/// object instead, which is passed through as the payload.
pub(crate) fn unwrap_envelope(status: u16, body: Option<Value>) -> Result<Value, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }

    let envelope = body
        .clone()
        .and_then(|value| serde_json::from_value::<Envelope>(value).ok());

    if !(200..300).contains(&status) {
        let message = envelope
            .map(|e| e.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_owned());
        return Err(ApiError::Backend { status, message });
    }

    match envelope {
        Some(e) if e.code == 200 => Ok(e.data),
        Some(e) => Err(ApiError::Backend {
            status: e.code,
            message: if e.message.is_empty() { GENERIC_FAILURE.to_owned() } else { e.message },
        }),
        // Bare payload without an envelope.
        None => body.ok_or_else(|| ApiError::Decode("empty response body".to_owned())),
    }
}

/// Send a request and deserialize the unwrapped payload.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, timeout, backend rejection,
/// or when the payload does not deserialize to `T`.
pub async fn send<T: DeserializeOwned>(descriptor: RequestDescriptor) -> Result<T, ApiError> {
    let data = dispatch(descriptor).await?;
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request whose payload is only an acknowledgement.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, timeout, or backend
/// rejection.
pub async fn send_unit(descriptor: RequestDescriptor) -> Result<(), ApiError> {
    dispatch(descriptor).await.map(|_| ())
}

#[allow(clippy::unused_async)]
async fn dispatch(descriptor: RequestDescriptor) -> Result<Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = build_url(API_BASE, &descriptor.path, &descriptor.query);

        let builder = match descriptor.method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Put => gloo_net::http::Request::put(&url),
        };
        let builder = match authorization(&descriptor.path, crate::state::session::token().as_deref())
        {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        };

        let request = match &descriptor.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = race_timeout(request.send()).await?;
        finish(response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = descriptor;
        Err(ApiError::Unsupported)
    }
}

/// Send a multipart form (uploads). Same auth and response handling as
/// [`send`], but the browser sets the content type for the form boundary.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, timeout, or backend
/// rejection.
#[cfg(feature = "csr")]
pub async fn send_multipart(
    method: Method,
    path: &str,
    form: web_sys::FormData,
) -> Result<Value, ApiError> {
    let url = build_url(API_BASE, path, &[]);

    let builder = match method {
        Method::Get => gloo_net::http::Request::get(&url),
        Method::Post => gloo_net::http::Request::post(&url),
        Method::Put => gloo_net::http::Request::put(&url),
    };
    let builder = match authorization(path, crate::state::session::token().as_deref()) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    };

    let request = builder.body(form).map_err(|e| ApiError::Network(e.to_string()))?;
    let response = race_timeout(request.send()).await?;
    finish(response).await
}

#[cfg(feature = "csr")]
async fn race_timeout(
    request: impl Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::Either;

    let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS));
    match futures::future::select(Box::pin(request), Box::pin(timeout)).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "csr")]
async fn finish(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response.json::<Value>().await.ok();

    let result = unwrap_envelope(status, body);
    if matches!(result, Err(ApiError::Unauthorized)) {
        log::warn!("session rejected by backend, forcing logout");
        force_logout();
    }
    result
}

/// Drop the stored session and hard-navigate to the login route. Other
/// in-flight requests are abandoned by the page load.
#[cfg(feature = "csr")]
fn force_logout() {
    crate::state::session::clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(crate::routes::LOGIN_PATH);
    }
}
