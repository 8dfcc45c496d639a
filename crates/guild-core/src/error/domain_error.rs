//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{GuildKey, ParseError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guild not found: {0}")]
    GuildNotFound(GuildKey),

    #[error("Character not found: {0}")]
    CharacterNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidValue(#[from] ParseError),

    #[error("Invalid raid progress: {defeated} of {total} bosses defeated")]
    InvalidProgress { defeated: i32, total: i32 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::GuildNotFound(_) => "UNKNOWN_GUILD",
            Self::CharacterNotFound(_) => "UNKNOWN_CHARACTER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidValue(_) => "INVALID_VALUE",
            Self::InvalidProgress { .. } => "INVALID_PROGRESS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GuildNotFound(_) | Self::CharacterNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidValue(_) | Self::InvalidProgress { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Region;

    #[test]
    fn test_error_codes() {
        let err = DomainError::GuildNotFound(GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu));
        assert_eq!(err.code(), "UNKNOWN_GUILD");
        assert!(err.is_not_found());

        let err = DomainError::InvalidProgress { defeated: 9, total: 8 };
        assert_eq!(err.code(), "INVALID_PROGRESS");
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_error_is_validation() {
        let err = DomainError::from(ParseError::Region("mars".to_string()));
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "unknown region: mars");
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::GuildNotFound(GuildKey::new("Guttakrutt", "Tarren Mill", Region::Eu));
        assert_eq!(err.to_string(), "Guild not found: Guttakrutt-Tarren Mill@eu");

        let err = DomainError::InvalidProgress { defeated: 9, total: 8 };
        assert_eq!(err.to_string(), "Invalid raid progress: 9 of 8 bosses defeated");
    }
}
