//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use guild_common::{AppConfig, AppError};
use guild_db::{Database, PoolSettings};
use guild_service::{RefreshScheduler, ServiceContextBuilder};
use guild_sources::GameDataSource;
use guild_web::{web_router, I18n, WebState};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete application: API, pages, health checks and middleware
///
/// # Errors
/// Fails when the translation bundles or the rate limit settings are invalid
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let web_state = create_web_state(&state)?;

    let limited = create_router()
        .with_state(state.clone())
        .merge(web_router(web_state));
    let limited = apply_rate_limit(limited, &config.rate_limit)?;

    let app = limited.merge(health_routes().with_state(state.clone()));
    Ok(apply_middleware(app, &config.cors, config.app.env))
}

/// Page state sharing the API's service context
pub fn create_web_state(state: &AppState) -> Result<WebState, AppError> {
    let i18n = I18n::new().map_err(|e| AppError::Config(e.to_string()))?;

    Ok(WebState {
        ctx: state.shared_context(),
        i18n: Arc::new(i18n),
        env: state.config().app.env,
        featured_raid: state.config().sync.raids.first().cloned(),
    })
}

/// Connect the database and wire up services
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(backend = config.database.backend_name(), "Connecting to database...");
    let database = Database::connect(&config.database, &PoolSettings::from(&config.pool))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database connection established");

    if config.pool.run_migrations {
        database
            .run_migrations(&config.pool.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let mut builder = ServiceContextBuilder::new()
        .database(database)
        .defaults(config.guild.clone());

    match GameDataSource::from_config(&config.sync, config.battle_net.as_ref()) {
        Ok(source) => builder = builder.snapshot_source(Arc::new(source)),
        Err(e) => warn!(error = %e, "Game data clients unavailable, sync disabled"),
    }

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;

    let scheduler = RefreshScheduler::from_config(state.service_context(), &state.config().sync)
        .map(RefreshScheduler::spawn);

    let result = match create_app(state.clone()) {
        Ok(app) => run_server(app, &addr).await,
        Err(e) => Err(e),
    };

    if let Some(handle) = scheduler {
        RefreshScheduler::stop(handle).await;
    }

    if let Some(database) = state.service_context().database() {
        database.close().await;
    }

    result
}
