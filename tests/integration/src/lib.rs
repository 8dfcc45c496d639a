//! Integration test utilities for the guild site
//!
//! Helpers for running end-to-end tests against a live server backed by a
//! real database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
