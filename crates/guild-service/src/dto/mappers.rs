//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use guild_core::entities::{Character, Guild, RaidBoss, RaidProgress};

use crate::services::SyncReport;

use super::responses::{
    CharacterResponse, GuildResponse, RaidBossResponse, RaidProgressResponse, SyncReportResponse,
};

// ============================================================================
// Guild Mappers
// ============================================================================

impl From<&Guild> for GuildResponse {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.id,
            name: guild.name.clone(),
            realm: guild.realm.clone(),
            server_region: guild.region,
            faction: guild.faction,
            description: guild.description.clone(),
            member_count: guild.member_count,
            emblem_url: guild.emblem_url.clone(),
            last_updated: guild.last_updated,
        }
    }
}

impl From<Guild> for GuildResponse {
    fn from(guild: Guild) -> Self {
        Self::from(&guild)
    }
}

// ============================================================================
// Character Mappers
// ============================================================================

impl From<&Character> for CharacterResponse {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            blizzard_id: character.blizzard_id,
            guild_id: character.guild_id,
            name: character.name.clone(),
            realm: character.realm.clone(),
            class_name: character.class_name.clone(),
            spec_name: character.spec_name.clone(),
            rank: character.rank,
            rank_name: character.rank_name(),
            level: character.level,
            item_level: character.item_level,
            mythic_score: character.mythic_score,
            avatar_url: character.avatar_url.clone(),
            class_color: character.class_color(),
            class_icon_url: character.class_icon_url(),
            last_updated: character.last_updated,
        }
    }
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self::from(&character)
    }
}

// ============================================================================
// Raid Mappers
// ============================================================================

impl From<&RaidProgress> for RaidProgressResponse {
    fn from(progress: &RaidProgress) -> Self {
        Self {
            id: progress.id,
            guild_id: progress.guild_id,
            raid_name: progress.raid_name.clone(),
            raid_slug: progress.raid_slug.clone(),
            difficulty: progress.difficulty,
            bosses: progress.bosses,
            bosses_defeated: progress.bosses_defeated,
            summary: progress.summary(),
            world_rank: progress.world_rank,
            region_rank: progress.region_rank,
            realm_rank: progress.realm_rank,
            last_updated: progress.last_updated,
        }
    }
}

impl From<RaidProgress> for RaidProgressResponse {
    fn from(progress: RaidProgress) -> Self {
        Self::from(&progress)
    }
}

impl From<&RaidBoss> for RaidBossResponse {
    fn from(boss: &RaidBoss) -> Self {
        Self {
            id: boss.id,
            guild_id: boss.guild_id,
            raid_name: boss.raid_name.clone(),
            raid_slug: boss.raid_slug.clone(),
            slug: boss.slug.clone(),
            name: boss.name.clone(),
            difficulty: boss.difficulty,
            position: boss.position,
            defeated: boss.defeated,
            in_progress: boss.in_progress,
            status: boss.status(),
            dps_ranking: boss.dps_ranking,
            healing_ranking: boss.healing_ranking,
            tank_ranking: boss.tank_ranking,
            fastest_kill_ms: boss.fastest_kill_ms,
            kill_count: boss.kill_count,
            pull_count: boss.pull_count,
            first_kill_at: boss.first_kill_at,
            raider_io_data: boss.raider_io().cloned(),
            warcraft_logs_data: boss.warcraft_logs().cloned(),
            last_updated: boss.last_updated,
        }
    }
}

impl From<RaidBoss> for RaidBossResponse {
    fn from(boss: RaidBoss) -> Self {
        Self::from(&boss)
    }
}

// ============================================================================
// Sync Mappers
// ============================================================================

impl From<&SyncReport> for SyncReportResponse {
    fn from(report: &SyncReport) -> Self {
        Self {
            guild_id: report.guild_id,
            guild: report.guild.to_string(),
            characters: report.characters,
            removed_characters: report.removed_characters,
            progresses: report.progresses,
            bosses: report.bosses,
            started_at: report.started_at,
            finished_at: report.finished_at,
        }
    }
}
