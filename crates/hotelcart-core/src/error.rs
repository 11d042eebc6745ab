//! # Error Types
//!
//! Domain-specific error types for hotelcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hotelcart-core errors (this file)                                     │
//! │  ├── CoreError        - Card lookup and wrapped validation failures    │
//! │  └── ValidationError  - Parse boundaries (dates, theme values)         │
//! │                                                                         │
//! │  hotelcart-session errors (separate crate)                             │
//! │  ├── PreferenceError  - Theme preference file I/O                      │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Does NOT Error
//! Store mutations against unknown identifiers and nights computed from
//! malformed dates degrade silently (no-op / zero). Errors only exist at the
//! parse boundaries and for card addressing in the session shell.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core cart model errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No live card exists for the given record id.
    ///
    /// ## When This Occurs
    /// - The frontend addresses a card whose record was just deleted
    /// - A stale id arrives after the registry re-synced with the store
    #[error("Card not found: {0}")]
    CardNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a date that is not `YYYY-MM-DD`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Check-out falls before check-in.
    #[error("check-out {check_out} is before check-in {check_in}")]
    InvertedRange { check_in: String, check_out: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CardNotFound("7".to_string());
        assert_eq!(err.to_string(), "Card not found: 7");

        let err = ValidationError::InvertedRange {
            check_in: "2026-03-14".to_string(),
            check_out: "2026-03-10".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "check-out 2026-03-10 is before check-in 2026-03-14"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "checkIn".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
