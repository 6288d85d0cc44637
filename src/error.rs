use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the Spotify Web API client.
///
/// A render cycle treats every failure the same way; the variants carry
/// just enough detail for diagnostic logging.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a non-success status. Covers expired or
    /// invalid credentials (401/403) and every other non-2xx response;
    /// no retry is attempted.
    #[error("Spotify API returned {status}")]
    Status { status: StatusCode },

    /// Transport-level or body-decoding failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
