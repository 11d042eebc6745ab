//! # Validation Module
//!
//! Optional strict checks on a room record.
//!
//! The store and the card accept whatever they are given: an inverted date
//! range or a zero adult count set directly on a record is stored as is.
//! These checks exist for callers that want to flag such records (the session
//! logs a warning when an updated record fails them) without changing what gets
//! stored.
//!
//! ## Usage
//! ```rust
//! use hotelcart_core::seed::seed_rooms;
//! use hotelcart_core::validation::validate_room;
//!
//! let room = seed_rooms().remove(0);
//! assert!(validate_room(&room).is_ok());
//! assert!(validate_room(&room.with_adults(0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::RoomRecord;
use crate::MIN_ADULTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks every rule the editing flow normally upholds.
///
/// ## Rules
/// - `id` and `hotel_name` are not blank
/// - `adults >= 1`
/// - `price` is not negative
/// - `check_in <= check_out`
pub fn validate_room(room: &RoomRecord) -> ValidationResult<()> {
    if room.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if room.hotel_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "hotelName".to_string(),
        });
    }

    if room.adults < MIN_ADULTS {
        return Err(ValidationError::BelowMinimum {
            field: "adults".to_string(),
            min: i64::from(MIN_ADULTS),
        });
    }

    if room.price.is_negative() {
        return Err(ValidationError::BelowMinimum {
            field: "price".to_string(),
            min: 0,
        });
    }

    validate_range(room)
}

/// Checks only that check-out is not before check-in.
pub fn validate_range(room: &RoomRecord) -> ValidationResult<()> {
    if room.check_out < room.check_in {
        return Err(ValidationError::InvertedRange {
            check_in: room.check_in.to_string(),
            check_out: room.check_out.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::money::Money;
    use crate::seed::seed_rooms;

    #[test]
    fn test_seed_rooms_are_valid() {
        assert!(seed_rooms().iter().all(|r| validate_room(r).is_ok()));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let room = seed_rooms()
            .remove(0)
            .with_check_out(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(
            validate_room(&room),
            Err(ValidationError::InvertedRange {
                check_in: "2026-03-10".to_string(),
                check_out: "2026-03-01".to_string(),
            })
        );
    }

    #[test]
    fn test_same_day_range_allowed() {
        let room = seed_rooms().remove(0);
        let same_day = room.with_check_out(room.check_in);
        assert!(validate_range(&same_day).is_ok());
    }

    #[test]
    fn test_blank_fields_and_negative_price() {
        let mut room = seed_rooms().remove(0);
        room.hotel_name = "  ".to_string();
        assert!(matches!(
            validate_room(&room),
            Err(ValidationError::Required { .. })
        ));

        let room = seed_rooms().remove(0).with_price(Money::from_cents(-1));
        assert!(matches!(
            validate_room(&room),
            Err(ValidationError::BelowMinimum { min: 0, .. })
        ));
    }
}
