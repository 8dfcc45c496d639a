//! Client errors

/// Errors from a guild API call
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of a `Status` error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
