//! Raid boss entity <-> model mapper

use guild_core::entities::{RaidBoss, SourcePayload};
use guild_core::error::DomainError;
use sqlx::types::Json;

use crate::models::RaidBossModel;

impl TryFrom<RaidBossModel> for RaidBoss {
    type Error = DomainError;

    fn try_from(model: RaidBossModel) -> Result<Self, Self::Error> {
        Ok(RaidBoss {
            id: model.id,
            guild_id: model.guild_id,
            raid_name: model.raid_name,
            raid_slug: model.raid_slug,
            slug: model.slug,
            name: model.name,
            difficulty: model.difficulty.parse()?,
            position: model.position,
            defeated: model.defeated,
            in_progress: model.in_progress,
            dps_ranking: model.dps_ranking,
            healing_ranking: model.healing_ranking,
            tank_ranking: model.tank_ranking,
            fastest_kill_ms: model.fastest_kill_ms,
            kill_count: model.kill_count,
            pull_count: model.pull_count,
            first_kill_at: model.first_kill_at,
            payloads: model.payloads.0,
            last_updated: model.last_updated,
        })
    }
}

/// Raid boss values bound by an upsert
pub struct RaidBossUpsert<'a> {
    pub guild_id: i64,
    pub raid_name: &'a str,
    pub raid_slug: &'a str,
    pub slug: &'a str,
    pub name: &'a str,
    pub difficulty: &'static str,
    pub position: i32,
    pub defeated: bool,
    pub in_progress: bool,
    pub dps_ranking: Option<i32>,
    pub healing_ranking: Option<i32>,
    pub tank_ranking: Option<i32>,
    pub fastest_kill_ms: Option<i64>,
    pub kill_count: Option<i32>,
    pub pull_count: Option<i32>,
    pub first_kill_at: Option<chrono::DateTime<chrono::Utc>>,
    pub payloads: Json<&'a Vec<SourcePayload>>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl<'a> RaidBossUpsert<'a> {
    pub fn new(boss: &'a RaidBoss) -> Self {
        Self {
            guild_id: boss.guild_id,
            raid_name: &boss.raid_name,
            raid_slug: &boss.raid_slug,
            slug: &boss.slug,
            name: &boss.name,
            difficulty: boss.difficulty.as_str(),
            position: boss.position,
            defeated: boss.defeated,
            in_progress: boss.in_progress,
            dps_ranking: boss.dps_ranking,
            healing_ranking: boss.healing_ranking,
            tank_ranking: boss.tank_ranking,
            fastest_kill_ms: boss.fastest_kill_ms,
            kill_count: boss.kill_count,
            pull_count: boss.pull_count,
            first_kill_at: boss.first_kill_at,
            payloads: Json(&boss.payloads),
            last_updated: boss.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use guild_core::{BossStatus, Difficulty, RaiderIoBossData};

    #[test]
    fn test_model_to_entity_keeps_payloads() {
        let model = RaidBossModel {
            id: 3,
            guild_id: 1,
            raid_name: "Nerub-ar Palace".to_string(),
            raid_slug: "nerubar-palace".to_string(),
            slug: "queen-ansurek".to_string(),
            name: "Queen Ansurek".to_string(),
            difficulty: "mythic".to_string(),
            position: 8,
            defeated: true,
            in_progress: true,
            dps_ranking: Some(120),
            healing_ranking: None,
            tank_ranking: None,
            fastest_kill_ms: None,
            kill_count: Some(4),
            pull_count: None,
            first_kill_at: None,
            payloads: Json(vec![SourcePayload::RaiderIo(RaiderIoBossData {
                slug: "queen-ansurek".to_string(),
                encounter_id: Some(2922),
                defeated_at: None,
            })]),
            last_updated: Utc::now(),
        };

        let boss = RaidBoss::try_from(model).unwrap();
        assert_eq!(boss.difficulty, Difficulty::Mythic);
        assert_eq!(boss.status(), BossStatus::Defeated);
        assert_eq!(boss.raider_io().and_then(|d| d.encounter_id), Some(2922));
    }
}
