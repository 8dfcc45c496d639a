//! Roster handler

use axum::{extract::State, Json};
use guild_service::{dto::GuildQuery, dto::RosterResponse, RosterService};

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the guild roster, ordered by rank then name
///
/// GET /api/roster?name&realm&region
pub async fn get_roster(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<GuildQuery>,
) -> ApiResult<Json<RosterResponse>> {
    let key = query.resolve(state.service_context().defaults())?;
    let service = RosterService::new(state.service_context());
    let response = service.get_roster(&key).await?;
    Ok(Json(response))
}
