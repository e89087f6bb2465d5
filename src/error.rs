use thiserror::Error;

/// Errors surfaced by the DocChat HTTP client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with its uniform `{"error": ...}` body.
    #[error("backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// Non-success status without a decodable error body.
    #[error("backend returned status {status}")]
    Status { status: u16 },

    /// Connection, timeout or body-read failure before a response could be
    /// interpreted.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
