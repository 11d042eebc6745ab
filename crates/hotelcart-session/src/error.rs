//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Hotel Cart                             │
//! │                                                                         │
//! │  toggle_edit("42")                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::CardNotFound("42") ───────────► ApiError { NOT_FOUND }      │
//! │                                                                         │
//! │  update_room / delete_room with unknown id  ──► no error, no change    │
//! │  set_date("1", checkIn, "soon")                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::Validation(..) ───────► ApiError { VALIDATION_ERROR }       │
//! │                                                                         │
//! │  theme file unwritable                      ──► logged, theme kept     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store commands never fail. Only an unknown card or an unparseable date
//! is reported back.

use hotelcart_core::CoreError;
use serde::Serialize;

/// API error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Card not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Card or record not found
    NotFound,

    /// Input validation failed
    ValidationError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CardNotFound(id) => ApiError::not_found("Card", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}
