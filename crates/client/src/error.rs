use std::collections::BTreeMap;

/// Errors from [`crate::MovieClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The movie does not exist (HTTP 404).
    #[error("Movie not found")]
    NotFound,

    /// The server rejected the input (HTTP 400 with per-field messages).
    #[error("Validation failed for: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    Validation(BTreeMap<String, Vec<String>>),

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },
}
