//! Business logic services
//!
//! Read services back the REST endpoints; the sync service and scheduler
//! keep the database populated from external game APIs.

pub mod context;
pub mod error;
pub mod guild;
pub mod health;
pub mod raid;
pub mod roster;
pub mod scheduler;
pub mod sync;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use guild::GuildService;
pub use health::HealthService;
pub use raid::RaidService;
pub use roster::RosterService;
pub use scheduler::RefreshScheduler;
pub use sync::{SyncReport, SyncService};
