//! External payloads attached to boss records
//!
//! Raw data from Raider.io and WarcraftLogs is kept as a tagged variant so
//! consumers branch on the source instead of poking at untyped JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source-tagged payload stored alongside a boss record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "data", rename_all = "snake_case")]
pub enum SourcePayload {
    RaiderIo(RaiderIoBossData),
    WarcraftLogs(WarcraftLogsBossData),
}

/// Encounter data as reported by Raider.io
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaiderIoBossData {
    pub slug: String,
    #[serde(default)]
    pub encounter_id: Option<i64>,
    #[serde(default)]
    pub defeated_at: Option<DateTime<Utc>>,
}

/// Encounter ranking data as reported by WarcraftLogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarcraftLogsBossData {
    #[serde(default)]
    pub encounter_id: Option<i64>,
    #[serde(default)]
    pub report_code: Option<String>,
    #[serde(default)]
    pub best_percent: Option<f64>,
    #[serde(default)]
    pub kills: Option<i32>,
    #[serde(default)]
    pub fastest_kill_ms: Option<i64>,
}
