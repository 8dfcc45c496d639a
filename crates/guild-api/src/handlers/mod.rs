//! Route handlers

pub mod guild;
pub mod health;
pub mod raids;
pub mod roster;
pub mod sync;
