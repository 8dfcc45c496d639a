//! On-demand sync handler

use axum::{extract::State, Json};
use guild_service::{dto::GuildQuery, dto::SyncReportResponse, SyncService};
use tracing::info;

use crate::extractors::{SyncToken, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Pull a fresh snapshot of the guild and store it
///
/// POST /api/admin/sync?name&realm&region
pub async fn sync_guild(
    State(state): State<AppState>,
    _token: SyncToken,
    ValidatedQuery(query): ValidatedQuery<GuildQuery>,
) -> ApiResult<Json<SyncReportResponse>> {
    let key = query.resolve(state.service_context().defaults())?;
    info!(guild = %key, "On-demand sync requested");

    let service = SyncService::new(state.service_context());
    let report = service.sync_guild(&key).await?;
    Ok(Json(SyncReportResponse::from(&report)))
}
