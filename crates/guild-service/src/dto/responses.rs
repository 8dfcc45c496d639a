//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` and use camelCase field names,
//! which is what the site's frontend reads.

use chrono::{DateTime, Utc};
use guild_core::{BossStatus, ClassColor, Difficulty, Faction, RaiderIoBossData, Region, WarcraftLogsBossData};
use serde::Serialize;

// ============================================================================
// Guild Responses
// ============================================================================

/// Guild profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildResponse {
    pub id: i64,
    pub name: String,
    pub realm: String,
    pub server_region: Region,
    pub faction: Option<Faction>,
    pub description: Option<String>,
    pub member_count: i32,
    pub emblem_url: Option<String>,
    pub last_updated: DateTime<Utc>,
}

// ============================================================================
// Roster Responses
// ============================================================================

/// Roster member with resolved rank and class display data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: i64,
    pub blizzard_id: Option<i64>,
    pub guild_id: i64,
    pub name: String,
    pub realm: String,
    pub class_name: String,
    pub spec_name: Option<String>,
    pub rank: i32,
    pub rank_name: &'static str,
    pub level: Option<i32>,
    pub item_level: Option<f64>,
    pub mythic_score: Option<f64>,
    pub avatar_url: Option<String>,
    pub class_color: ClassColor,
    pub class_icon_url: String,
    pub last_updated: DateTime<Utc>,
}

/// `GET /api/roster`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub characters: Vec<CharacterResponse>,
    pub api_status: ApiStatus,
    pub last_updated: Option<DateTime<Utc>>,
}

// ============================================================================
// Raid Responses
// ============================================================================

/// Progress in one raid at one difficulty
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidProgressResponse {
    pub id: i64,
    pub guild_id: i64,
    pub raid_name: String,
    pub raid_slug: String,
    pub difficulty: Difficulty,
    pub bosses: i32,
    pub bosses_defeated: i32,
    /// e.g. "3/8 Mythic"
    pub summary: String,
    pub world_rank: Option<i32>,
    pub region_rank: Option<i32>,
    pub realm_rank: Option<i32>,
    pub last_updated: DateTime<Utc>,
}

/// `GET /api/raid-progress`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidProgressListResponse {
    pub progresses: Vec<RaidProgressResponse>,
    pub api_status: ApiStatus,
    pub last_updated: Option<DateTime<Utc>>,
}

/// One encounter with its kill status and source payloads
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidBossResponse {
    pub id: i64,
    pub guild_id: i64,
    pub raid_name: String,
    pub raid_slug: String,
    pub slug: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub position: i32,
    pub defeated: bool,
    pub in_progress: bool,
    pub status: BossStatus,
    pub dps_ranking: Option<i32>,
    pub healing_ranking: Option<i32>,
    pub tank_ranking: Option<i32>,
    pub fastest_kill_ms: Option<i64>,
    pub kill_count: Option<i32>,
    pub pull_count: Option<i32>,
    pub first_kill_at: Option<DateTime<Utc>>,
    pub raider_io_data: Option<RaiderIoBossData>,
    pub warcraft_logs_data: Option<WarcraftLogsBossData>,
    pub last_updated: DateTime<Utc>,
}

/// `GET /api/raid-bosses`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidBossesResponse {
    pub bosses: Vec<RaidBossResponse>,
    pub api_status: ApiStatus,
    pub last_updated: Option<DateTime<Utc>>,
}

// ============================================================================
// Envelope status
// ============================================================================

/// Whether a list endpoint found any rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Empty,
}

impl ApiStatus {
    pub fn for_len(len: usize) -> Self {
        if len == 0 {
            Self::Empty
        } else {
            Self::Success
        }
    }
}

/// Newest of a set of row timestamps
pub(crate) fn newest(timestamps: impl IntoIterator<Item = DateTime<Utc>>) -> Option<DateTime<Utc>> {
    timestamps.into_iter().max()
}

impl RosterResponse {
    pub fn new(characters: Vec<CharacterResponse>) -> Self {
        Self {
            api_status: ApiStatus::for_len(characters.len()),
            last_updated: newest(characters.iter().map(|c| c.last_updated)),
            characters,
        }
    }
}

impl RaidProgressListResponse {
    pub fn new(progresses: Vec<RaidProgressResponse>) -> Self {
        Self {
            api_status: ApiStatus::for_len(progresses.len()),
            last_updated: newest(progresses.iter().map(|p| p.last_updated)),
            progresses,
        }
    }
}

impl RaidBossesResponse {
    pub fn new(bosses: Vec<RaidBossResponse>) -> Self {
        Self {
            api_status: ApiStatus::for_len(bosses.len()),
            last_updated: newest(bosses.iter().map(|b| b.last_updated)),
            bosses,
        }
    }
}

// ============================================================================
// Sync Responses
// ============================================================================

/// Result of an on-demand sync
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReportResponse {
    pub guild_id: i64,
    pub guild: String,
    pub characters: usize,
    pub removed_characters: u64,
    pub progresses: usize,
    pub bosses: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub backend: Option<&'static str>,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, backend: Option<&'static str>) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                backend,
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_api_status_serialization() {
        assert_eq!(serde_json::to_value(ApiStatus::Success).unwrap(), "success");
        assert_eq!(serde_json::to_value(ApiStatus::Empty).unwrap(), "empty");
    }

    #[test]
    fn test_empty_envelope() {
        let response = RosterResponse::new(Vec::new());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["apiStatus"], "empty");
        assert!(value["lastUpdated"].is_null());
        assert_eq!(value["characters"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_newest_timestamp() {
        let older = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap();
        assert_eq!(newest([older, newer, older]), Some(newer));
        assert_eq!(newest(Vec::<DateTime<Utc>>::new()), None);
    }

    #[test]
    fn test_readiness() {
        let ready = ReadinessResponse::ready(true, Some("mysql"));
        assert!(ready.is_ready());
        assert_eq!(ready.checks.backend, Some("mysql"));

        let down = ReadinessResponse::ready(false, None);
        assert_eq!(down.status, "not_ready");
        assert_eq!(down.checks.database, "unhealthy");
    }
}
