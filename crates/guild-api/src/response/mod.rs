//! Response types and error handling for API endpoints
//!
//! Every failure leaves the server as `{ "error": { code, message, details? } }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use guild_common::AppError;
use guild_core::DomainError;
use guild_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// No sync token is configured, so the admin endpoint does not exist
    #[error("Not found")]
    SyncDisabled,

    #[error("Missing x-sync-token header")]
    MissingSyncToken,

    #[error("Invalid sync token")]
    InvalidSyncToken,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_validation() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Validation(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::SyncDisabled => StatusCode::NOT_FOUND,
            Self::MissingSyncToken => StatusCode::UNAUTHORIZED,
            Self::InvalidSyncToken => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::SyncDisabled => "NOT_FOUND",
            Self::MissingSyncToken => "MISSING_SYNC_TOKEN",
            Self::InvalidSyncToken => "INVALID_SYNC_TOKEN",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().to_string();
        let message = self.to_string();

        if status.is_server_error() {
            error!(error = ?self, "Server error occurred");
        }

        let details = if let Self::Validation(errors) = &self {
            Some(serde_json::to_value(errors).unwrap_or_default())
        } else {
            None
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use guild_core::{GuildKey, Region};
    use validator::Validate;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingSyncToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidSyncToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::SyncDisabled.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::invalid_query("test").status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_domain_errors_map_to_status() {
        let missing = DomainError::GuildNotFound(GuildKey::new("Nope", "Draenor", Region::Eu));
        assert_eq!(ApiError::from(missing).status_code(), StatusCode::NOT_FOUND);

        let invalid = DomainError::ValidationError("bad".to_string());
        assert_eq!(ApiError::from(invalid).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_service_errors_keep_their_status() {
        let err = ApiError::from(ServiceError::conflict("Sync already running"));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "CONFLICT");
    }

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[tokio::test]
    async fn test_validation_body_has_details() {
        let errors = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["details"]["name"].is_array());
    }
}
