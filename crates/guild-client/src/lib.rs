//! # guild-client
//!
//! Typed fetch functions for the guild site's REST endpoints:
//! `/api/guild`, `/api/roster`, `/api/raid-progress` and `/api/raid-bosses`.
//!
//! ```rust,ignore
//! use guild_client::{GuildApiClient, GuildParams, RaidBossesParams};
//!
//! let client = GuildApiClient::new("http://localhost:3000")?;
//! let roster = client.fetch_roster(&GuildParams::default()).await?;
//! let bosses = client.fetch_raid_bosses(&RaidBossesParams::new("Nerub-ar Palace")).await?;
//! ```

mod client;
mod error;
pub mod models;
mod params;

pub use client::GuildApiClient;
pub use error::ClientError;
pub use models::{
    Character, ClassColorInfo, GuildInfo, RaidBoss, RaidBossesEnvelope, RaidProgress,
    RaidProgressEnvelope, RosterEnvelope,
};
pub use params::{GuildParams, RaidBossesParams};
