//! Error handling utilities for repositories

use guild_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "character not found" error
pub fn character_not_found(id: i64) -> DomainError {
    DomainError::CharacterNotFound(id)
}
