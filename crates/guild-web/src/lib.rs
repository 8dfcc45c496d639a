//! # guild-web
//!
//! Server-rendered public pages of the guild site.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /` | Home page for the configured guild |
//! | `POST /consent` | Store cookie consent, back to home |
//! | `GET /lang/:code` | Store language choice, back to home |

pub mod components;
pub mod consent;
pub mod i18n;
mod pages;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use guild_common::Environment;
use guild_service::ServiceContext;

pub use i18n::{I18n, Lang, Translator};

/// Shared state for page handlers
#[derive(Clone)]
pub struct WebState {
    pub ctx: Arc<ServiceContext>,
    pub i18n: Arc<I18n>,
    pub env: Environment,
    /// Raid slug whose progress headlines the home page
    pub featured_raid: Option<String>,
}

impl std::fmt::Debug for WebState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebState")
            .field("env", &self.env)
            .field("featured_raid", &self.featured_raid)
            .finish_non_exhaustive()
    }
}

/// Build the page router
pub fn web_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/consent", post(pages::accept_consent))
        .route("/lang/:code", get(pages::set_language))
        .with_state(state)
}
