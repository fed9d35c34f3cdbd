use thiserror::Error;

/// Failures talking to the counter server.
///
/// The view does not distinguish these; any of them triggers the offline
/// fallback.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, timeout, or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("Server error {status} ({error_type}): {message}")]
    Server {
        status: u16,
        error_type: String,
        message: String,
    },

    /// A success response whose body is not a valid record.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
