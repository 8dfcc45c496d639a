//! # guild-api
//!
//! HTTP server for the guild site: the JSON API under `/api`, health probes,
//! and the server-rendered pages from `guild-web`.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run};
pub use state::AppState;
