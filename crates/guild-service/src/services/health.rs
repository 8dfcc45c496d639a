//! Health service

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    /// Create a new HealthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Liveness; never touches dependencies
    pub fn health(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Readiness; pings the database. A context without one is never ready.
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let Some(database) = self.ctx.database() else {
            return ReadinessResponse::ready(false, None);
        };

        let healthy = database
            .ping()
            .await
            .inspect_err(|e| warn!(error = %e, backend = database.backend(), "Database ping failed"))
            .is_ok();

        ReadinessResponse::ready(healthy, Some(database.backend()))
    }
}
