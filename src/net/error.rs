//! Normalized error type for all API failures.
//!
//! Every failure mode of the HTTP layer (no response, timeout, non-success
//! status, unparseable body) collapses into [`ApiError`] so call sites handle
//! a single shape. The numeric status and a coarse kind are carried
//! explicitly; control flow never depends on message text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Coarse classification of an API failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No usable response: network failure, timeout, or malformed body.
    Transport,
    /// The server rejected the request (4xx).
    Client,
    /// The server failed to handle the request (5xx).
    Server,
}

/// The single error shape every failed API call is converted into.
///
/// The message is best-effort human-readable and never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// Error for a request that produced no usable response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            status: None,
            message: non_empty(message.into(), "Network request failed"),
        }
    }

    /// Error for a response with a non-success HTTP status.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        let kind = if status >= 500 {
            ErrorKind::Server
        } else {
            ErrorKind::Client
        };
        Self {
            kind,
            status: Some(status),
            message: non_empty(message.into(), "An error occurred"),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_owned()
    } else {
        message
    }
}
