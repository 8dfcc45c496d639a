//! Route definitions
//!
//! JSON endpoints live under `/api`; probes under `/health`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{guild, health, raids, roster, sync};
use crate::state::AppState;

/// Create the API router (health is kept separate so it bypasses rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(guild_routes())
        .merge(admin_routes())
}

/// Public read endpoints
fn guild_routes() -> Router<AppState> {
    Router::new()
        .route("/guild", get(guild::get_guild))
        .route("/roster", get(roster::get_roster))
        .route("/raid-progress", get(raids::get_raid_progress))
        .route("/raid-bosses", get(raids::get_raid_bosses))
}

/// Token-guarded endpoints
fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/sync", post(sync::sync_guild))
}
