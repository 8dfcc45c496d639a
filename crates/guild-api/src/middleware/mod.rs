//! Middleware stack for the server
//!
//! Request ids, tracing, timeout, CORS, compression and global rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use guild_common::{AppError, CorsConfig, Environment, RateLimitConfig};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::extractors::SYNC_TOKEN_HEADER;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wrap `router` in a global token-bucket limiter
///
/// # Errors
/// Returns `AppError::Config` when the rate or burst is zero
pub fn apply_rate_limit(router: Router, config: &RateLimitConfig) -> Result<Router, AppError> {
    // one bucket for all clients
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.requests_per_second.into())
            .burst_size(config.burst)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .ok_or_else(|| {
                AppError::Config(format!(
                    "invalid rate limit: {} req/s, burst {}",
                    config.requests_per_second, config.burst
                ))
            })?,
    );

    Ok(router.layer(GovernorLayer {
        config: governor_conf,
    }))
}

/// Apply the shared middleware stack
///
/// Layers run outside-in: request id, trace, timeout, compression, CORS.
pub fn apply_middleware(router: Router, cors_config: &CorsConfig, env: Environment) -> Router {
    router
        .layer(create_cors_layer(cors_config, env))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Configured origins; any origin in development when none are listed
fn create_cors_layer(config: &CorsConfig, env: Environment) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static(SYNC_TOKEN_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    tracing::warn!("Invalid CORS origin: {}", origin);
                    None
                })
            })
            .collect();

        tracing::info!("CORS: Allowing {} configured origins", origins.len());
        base_layer.allow_origin(AllowOrigin::list(origins))
    } else if env.is_development() {
        tracing::warn!("CORS: Allowing any origin (development mode)");
        base_layer.allow_origin(Any)
    } else {
        tracing::warn!(
            "CORS: No allowed origins configured. Cross-origin browser requests will be blocked."
        );
        base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_limit_rejected() {
        let config = RateLimitConfig {
            requests_per_second: 0,
            burst: 0,
        };
        assert!(apply_rate_limit(Router::new(), &config).is_err());
    }
}
