//! Axum extractors for request handling

mod sync_token;
mod validated;

pub use sync_token::{SyncToken, SYNC_TOKEN_HEADER};
pub use validated::ValidatedQuery;
