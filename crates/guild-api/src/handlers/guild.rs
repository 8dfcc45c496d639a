//! Guild profile handler

use axum::{extract::State, Json};
use guild_service::{dto::GuildQuery, dto::GuildResponse, GuildService};

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the guild profile
///
/// GET /api/guild?name&realm&region
pub async fn get_guild(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<GuildQuery>,
) -> ApiResult<Json<GuildResponse>> {
    let key = query.resolve(state.service_context().defaults())?;
    let service = GuildService::new(state.service_context());
    let response = service.get_guild(&key).await?;
    Ok(Json(response))
}
