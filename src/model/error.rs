use thiserror::Error;

/// Everything that can go wrong while talking to the player directory.
///
/// Views only ever show the `Display` text; the variants exist so callers
/// and logs can tell the failures apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Unexpected API response")]
    UnexpectedShape,
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
