//! Raid progress and boss handlers

use axum::{extract::State, Json};
use guild_service::{
    dto::{GuildQuery, RaidBossesQuery, RaidBossesResponse, RaidProgressListResponse},
    RaidService,
};

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get progress for every tracked raid and difficulty
///
/// GET /api/raid-progress?name&realm&region
pub async fn get_raid_progress(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<GuildQuery>,
) -> ApiResult<Json<RaidProgressListResponse>> {
    let key = query.resolve(state.service_context().defaults())?;
    let service = RaidService::new(state.service_context());
    let response = service.get_progress(&key).await?;
    Ok(Json(response))
}

/// Get the bosses of one raid at one difficulty
///
/// GET /api/raid-bosses?raid&name&realm&region&difficulty
pub async fn get_raid_bosses(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<RaidBossesQuery>,
) -> ApiResult<Json<RaidBossesResponse>> {
    let key = query.guild(state.service_context().defaults())?;
    let difficulty = query.difficulty()?;

    let service = RaidService::new(state.service_context());
    let response = service.get_bosses(&key, &query.raid, difficulty).await?;
    Ok(Json(response))
}
