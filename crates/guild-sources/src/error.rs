//! Errors raised while talking to external game APIs

/// External source errors
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{service} request failed: {source}")]
    Http {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned {status} for {url}")]
    Status {
        service: &'static str,
        status: u16,
        url: String,
    },

    #[error("{service} has no record of {what}")]
    NotFound { service: &'static str, what: String },

    #[error("{service} authentication failed: {message}")]
    Auth {
        service: &'static str,
        message: String,
    },
}

impl SourceError {
    pub(crate) fn http(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Http { service, source }
    }

    /// Check if the upstream reported the guild or resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Name of the upstream service that failed
    pub fn service(&self) -> &'static str {
        match self {
            Self::Http { service, .. }
            | Self::Status { service, .. }
            | Self::NotFound { service, .. }
            | Self::Auth { service, .. } => service,
        }
    }
}
