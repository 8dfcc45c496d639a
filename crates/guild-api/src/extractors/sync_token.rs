//! Shared-secret guard for the admin endpoints

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the sync secret
pub const SYNC_TOKEN_HEADER: &str = "x-sync-token";

/// Proof that the request carried the configured `SYNC_TOKEN`
///
/// Without a configured token the admin routes answer 404.
#[derive(Debug, Clone, Copy)]
pub struct SyncToken;

#[async_trait]
impl FromRequestParts<AppState> for SyncToken {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let expected = state
            .config()
            .sync
            .token
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::SyncDisabled)?;

        let provided = parts
            .headers
            .get(SYNC_TOKEN_HEADER)
            .ok_or(ApiError::MissingSyncToken)?
            .to_str()
            .map_err(|_| ApiError::InvalidSyncToken)?;

        if tokens_match(provided.as_bytes(), expected.as_bytes()) {
            Ok(SyncToken)
        } else {
            Err(ApiError::InvalidSyncToken)
        }
    }
}

/// Constant-time comparison; slices of different length never match
fn tokens_match(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match(b"secret", b"secret"));
        assert!(!tokens_match(b"secret", b"secreT"));
        assert!(!tokens_match(b"secret", b"secret2"));
        assert!(!tokens_match(b"", b"x"));
        assert!(!tokens_match(b"x", b""));
        assert!(tokens_match(b"", b""));
    }
}
