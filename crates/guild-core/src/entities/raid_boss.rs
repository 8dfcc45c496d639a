//! Raid boss entity - per-encounter kill and ranking data

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::Difficulty;

use super::payload::{RaiderIoBossData, SourcePayload, WarcraftLogsBossData};

/// Derived encounter status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BossStatus {
    Defeated,
    InProgress,
    NotStarted,
}

/// Raid boss entity
#[derive(Debug, Clone, PartialEq)]
pub struct RaidBoss {
    /// Database id, 0 until persisted
    pub id: i64,
    pub guild_id: i64,
    pub raid_name: String,
    pub raid_slug: String,
    pub slug: String,
    pub name: String,
    pub difficulty: Difficulty,
    /// Encounter order within the raid
    pub position: i32,
    pub defeated: bool,
    pub in_progress: bool,
    pub dps_ranking: Option<i32>,
    pub healing_ranking: Option<i32>,
    pub tank_ranking: Option<i32>,
    pub fastest_kill_ms: Option<i64>,
    pub kill_count: Option<i32>,
    pub pull_count: Option<i32>,
    pub first_kill_at: Option<DateTime<Utc>>,
    pub payloads: Vec<SourcePayload>,
    pub last_updated: DateTime<Utc>,
}

impl RaidBoss {
    /// Create an unsaved, undefeated boss record
    pub fn new(
        guild_id: i64,
        raid_name: impl Into<String>,
        raid_slug: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        difficulty: Difficulty,
        position: i32,
    ) -> Self {
        Self {
            id: 0,
            guild_id,
            raid_name: raid_name.into(),
            raid_slug: raid_slug.into(),
            slug: slug.into(),
            name: name.into(),
            difficulty,
            position,
            defeated: false,
            in_progress: false,
            dps_ranking: None,
            healing_ranking: None,
            tank_ranking: None,
            fastest_kill_ms: None,
            kill_count: None,
            pull_count: None,
            first_kill_at: None,
            payloads: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Encounter status. The flags are not exclusive in stored data;
    /// `defeated` wins when both are set.
    pub fn status(&self) -> BossStatus {
        if self.defeated {
            BossStatus::Defeated
        } else if self.in_progress {
            BossStatus::InProgress
        } else {
            BossStatus::NotStarted
        }
    }

    /// The Raider.io payload, if one is attached
    pub fn raider_io(&self) -> Option<&RaiderIoBossData> {
        self.payloads.iter().find_map(|payload| match payload {
            SourcePayload::RaiderIo(data) => Some(data),
            SourcePayload::WarcraftLogs(_) => None,
        })
    }

    /// The WarcraftLogs payload, if one is attached
    pub fn warcraft_logs(&self) -> Option<&WarcraftLogsBossData> {
        self.payloads.iter().find_map(|payload| match payload {
            SourcePayload::WarcraftLogs(data) => Some(data),
            SourcePayload::RaiderIo(_) => None,
        })
    }

    /// Attach a payload, replacing any earlier payload from the same source
    pub fn attach(&mut self, payload: SourcePayload) {
        self.payloads
            .retain(|existing| std::mem::discriminant(existing) != std::mem::discriminant(&payload));
        self.payloads.push(payload);
    }
}
