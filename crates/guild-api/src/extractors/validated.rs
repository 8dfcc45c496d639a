//! Validated query extractor
//!
//! Deserializes the query string and validates it using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated query extractor
///
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| match e {
                QueryRejection::FailedToDeserializeQueryString(e) => {
                    ApiError::invalid_query(e.body_text())
                }
                _ => ApiError::invalid_query("Invalid query string"),
            })?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}
