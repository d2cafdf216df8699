//! HTTP client for the registration and login endpoints.
//!
//! Both endpoints take a form-encoded `{login, password}` body and
//! answer with the service's JSON envelope
//! `{"errorcode": int, "reason": str, ...}`, on HTTP errors included.
//! A zero errorcode means success, and the response carries the
//! session cookie the chat endpoint authenticates by.

use reqwest::header::{HeaderMap, SET_COOKIE};
use serde::Deserialize;

use crate::error::AuthError;

/// Name of the session cookie issued by the auth endpoints.
pub const SESSION_COOKIE_NAME: &str = "chat_cookie";

/// Response envelope shared by all auth endpoints.
///
/// The envelope also carries `data` and `version` fields; the client
/// has no use for either.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub errorcode: i64,
    #[serde(default)]
    pub reason: String,
}

/// An authenticated session: the cookie to present on the chat handshake.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub cookie: String,
}

/// Client for the auth/registration HTTP API.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for the service at `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Register a new account and open a session for it.
    pub async fn register(&self, login: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.post_credentials("/registration", login, password)
            .await
    }

    /// Authenticate an existing account.
    pub async fn login(&self, login: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.post_credentials("/auth", login, password).await
    }

    async fn post_credentials(
        &self,
        path: &str,
        login: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .form(&[("login", login), ("password", password)])
            .send()
            .await?;

        let cookie = session_cookie_from_headers(response.headers());
        let body = response.text().await?;

        // Success and HTTP-error bodies share the envelope; parse both
        // the same way and branch on the errorcode alone.
        let envelope: ApiResponse = serde_json::from_str(&body)?;
        if envelope.errorcode != 0 {
            return Err(AuthError::Rejected {
                errorcode: envelope.errorcode,
                reason: envelope.reason,
            });
        }

        let cookie = cookie.ok_or(AuthError::MissingSessionCookie)?;
        Ok(AuthSession { cookie })
    }
}

/// Pick the session cookie's value out of the response headers.
fn session_cookie_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(session_cookie_value)
}

/// Parse one `Set-Cookie` header value, returning the session cookie's
/// value if that is the cookie it sets.
fn session_cookie_value(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    (name.trim() == SESSION_COOKIE_NAME).then(|| value.trim().to_string())
}
