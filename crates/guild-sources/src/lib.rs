//! # guild-sources
//!
//! Fetches guild data from third-party game APIs and normalises it into a
//! [`GuildSnapshot`] of domain entities ready to be persisted.
//!
//! - [`RaiderIoClient`]: raid static data, guild roster, progression, rankings
//!   and per-difficulty encounter kills
//! - [`BattleNetClient`]: OAuth client-credentials token plus guild profile and
//!   roster (optional; enriches characters with Blizzard ids and levels)
//! - [`SnapshotAssembler`]: pure merge of the fetched documents
//! - [`GameDataSource`]: the HTTP-backed [`GuildSnapshotSource`]

pub mod battle_net;
mod endpoint;
mod error;
pub mod raider_io;
mod snapshot;

pub use battle_net::BattleNetClient;
pub use error::SourceError;
pub use raider_io::RaiderIoClient;
pub use snapshot::{
    EncounterSet, GameDataSource, GuildSnapshot, GuildSnapshotSource, SnapshotAssembler,
    SnapshotInputs,
};
