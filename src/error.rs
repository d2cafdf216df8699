//! Error types for the chat client.

use thiserror::Error;

/// Errors from the HTTP auth/registration API.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server answered with a nonzero errorcode.
    #[error("{reason} (errorcode {errorcode})")]
    Rejected { errorcode: i64, reason: String },

    /// The request itself failed (connection refused, timeout, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not parse as the expected JSON envelope.
    #[error("malformed server response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The server accepted the credentials but set no session cookie.
    #[error("server response did not set a session cookie")]
    MissingSessionCookie,
}

/// Chat-session errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The chat endpoint URL could not be turned into a handshake request
    #[error("Invalid chat endpoint: {0}")]
    InvalidEndpoint(String),
}
