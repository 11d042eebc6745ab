//! # Domain Types
//!
//! Core domain types used throughout the hotel cart.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │     RoomRecord      │   │    DateField    │   │      Money      │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (unique)        │   │  CheckIn        │   │  cents (i64)    │   │
//! │  │  hotel_name (group) │   │  CheckOut       │   │  42000 = $420   │   │
//! │  │  room_type          │   └─────────────────┘   └─────────────────┘   │
//! │  │  adults (≥ 1)       │                                               │
//! │  │  check_in/out       │                                               │
//! │  │  price (per night)  │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Semantics
//! A `RoomRecord` is never edited in place once it is in the store. Every
//! change goes through a `with_*` constructor that returns a new value, so a
//! snapshot held by a card or a view stays exactly as it was read.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dates;
use crate::money::Money;

// =============================================================================
// Room Record
// =============================================================================

/// One reservation entry in the cart.
///
/// ## Invariants
/// - `id` is unique among the records of a [`RoomStore`](crate::store::RoomStore)
/// - `adults >= 1` only when changed through [`RoomRecord::with_adults_delta`]
/// - `check_in <= check_out` is expected but not enforced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    /// Unique identifier within the cart.
    pub id: String,

    /// Hotel display name. Also the grouping key.
    pub hotel_name: String,

    /// Room type label ("Royal Suite", "Garden Room", ...).
    pub room_type: String,

    /// Image reference shown on the card and the group header.
    pub image_url: String,

    /// Number of adult occupants.
    pub adults: u32,

    /// Arrival date.
    #[ts(as = "String")]
    pub check_in: NaiveDate,

    /// Departure date.
    #[ts(as = "String")]
    pub check_out: NaiveDate,

    /// Price per night in cents: `42000` on the wire is $420. Format with
    /// [`Money::format_with`] rather than printing the raw number.
    pub price: Money,
}

impl RoomRecord {
    /// Number of nights between check-in and check-out (zero if inverted).
    pub fn nights(&self) -> u32 {
        dates::nights(self.check_in, self.check_out)
    }

    /// Returns the date stored in `field`.
    pub fn date(&self, field: DateField) -> NaiveDate {
        match field {
            DateField::CheckIn => self.check_in,
            DateField::CheckOut => self.check_out,
        }
    }

    /// Returns a copy with `field` set to `date`.
    pub fn with_date(&self, field: DateField, date: NaiveDate) -> Self {
        match field {
            DateField::CheckIn => self.with_check_in(date),
            DateField::CheckOut => self.with_check_out(date),
        }
    }

    /// Returns a copy with a new check-in date. No range coupling is applied.
    pub fn with_check_in(&self, check_in: NaiveDate) -> Self {
        RoomRecord {
            check_in,
            ..self.clone()
        }
    }

    /// Returns a copy with a new check-out date.
    pub fn with_check_out(&self, check_out: NaiveDate) -> Self {
        RoomRecord {
            check_out,
            ..self.clone()
        }
    }

    /// Returns a copy with the adult count set verbatim.
    pub fn with_adults(&self, adults: u32) -> Self {
        RoomRecord {
            adults,
            ..self.clone()
        }
    }

    /// Returns a copy with the adult count moved by `delta`, floored at
    /// [`MIN_ADULTS`](crate::MIN_ADULTS). There is no upper limit.
    ///
    /// ## Example
    /// ```rust
    /// use hotelcart_core::seed::seed_rooms;
    ///
    /// let room = seed_rooms().remove(3).with_adults(1);
    /// assert_eq!(room.with_adults_delta(-1).adults, 1);
    /// assert_eq!(room.with_adults_delta(5).adults, 6);
    /// ```
    pub fn with_adults_delta(&self, delta: i32) -> Self {
        let next = (i64::from(self.adults) + i64::from(delta)).max(i64::from(crate::MIN_ADULTS));
        self.with_adults(u32::try_from(next).unwrap_or(u32::MAX))
    }

    /// Returns a copy with a new nightly price.
    pub fn with_price(&self, price: Money) -> Self {
        RoomRecord {
            price,
            ..self.clone()
        }
    }
}

// =============================================================================
// Date Field
// =============================================================================

/// Which end of the stay a date edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    CheckIn,
    CheckOut,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_rooms;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_with_field_leaves_source_untouched() {
        let source = seed_rooms().remove(0);
        let moved = source.with_check_in(date("2026-03-12"));

        assert_eq!(source.check_in, date("2026-03-10"));
        assert_eq!(moved.check_in, date("2026-03-12"));
        assert_eq!(moved.check_out, source.check_out);
        assert_eq!(moved.id, source.id);
    }

    #[test]
    fn test_with_date_dispatches_on_field() {
        let room = seed_rooms().remove(0);
        let out = room.with_date(DateField::CheckOut, date("2026-03-20"));
        assert_eq!(out.date(DateField::CheckOut), date("2026-03-20"));
        assert_eq!(out.date(DateField::CheckIn), room.check_in);
    }

    #[test]
    fn test_adults_delta_floor_and_no_ceiling() {
        let room = seed_rooms().remove(0).with_adults(1);
        assert_eq!(room.with_adults_delta(-1).adults, 1);
        assert_eq!(room.with_adults_delta(-10).adults, 1);
        assert_eq!(room.with_adults_delta(40).adults, 41);
    }

    #[test]
    fn test_nights_for_seed_record() {
        assert_eq!(seed_rooms()[0].nights(), 4);
        assert_eq!(seed_rooms()[3].nights(), 3);
    }

    #[test]
    fn test_serialization_uses_camel_case_and_iso_dates() {
        let room = seed_rooms().remove(0);
        let json = serde_json::to_value(&room).unwrap();

        assert_eq!(json["hotelName"], "Grand Palace Hotel");
        assert_eq!(json["roomType"], "Royal Suite");
        assert_eq!(json["checkIn"], "2026-03-10");
        assert_eq!(json["checkOut"], "2026-03-14");
        assert_eq!(json["price"], 42000);

        let decoded: RoomRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, room);
    }

    #[test]
    fn test_price_goes_over_the_wire_in_cents() {
        let room = seed_rooms().remove(0);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["price"], 42000);
        assert_eq!(room.price.format_with("$"), "$420");
    }
}
