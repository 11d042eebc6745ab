//! # Date Arithmetic
//!
//! Nights between two dates, the `YYYY-MM-DD` parse boundary and the display
//! format shared by the card, the group and the drawer.
//!
//! ## Permissive By Default
//! ```text
//! nights_between("2026-03-10", "2026-03-14")  → 4
//! nights_between("2026-03-10", "2026-03-10")  → 0
//! nights_between("2026-03-14", "2026-03-10")  → 0   (inverted, clamped)
//! nights_between("",           "2026-03-10")  → 0   (empty, no error)
//! nights_between("tomorrow",   "2026-03-10")  → 0   (malformed, no error)
//! ```

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use crate::error::ValidationError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Nights between two calendar dates, clamped at zero.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use hotelcart_core::dates::nights;
///
/// let a = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let b = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// assert_eq!(nights(a, b), 4);
/// assert_eq!(nights(b, a), 0);
/// ```
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    let days = (check_out - check_in).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Nights between two date strings: `max(0, ceil(days))`.
///
/// Accepts `YYYY-MM-DD` dates and RFC 3339 timestamps. Partial days round up.
/// Empty or malformed input yields zero instead of an error.
pub fn nights_between(check_in: &str, check_out: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_instant(check_in), parse_instant(check_out)) else {
        return 0;
    };

    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Parses a `YYYY-MM-DD` date.
///
/// ## Errors
/// - `Required` when the input is empty or whitespace
/// - `InvalidFormat` when it is not a valid calendar date
///
/// ## Example
/// ```rust
/// use hotelcart_core::dates::parse_iso_date;
///
/// assert!(parse_iso_date("checkIn", "2026-03-10").is_ok());
/// assert!(parse_iso_date("checkIn", "2026-02-30").is_err());
/// assert!(parse_iso_date("checkIn", "").is_err());
/// ```
pub fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

/// Renders a date as day and full month name: "10 March".
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use hotelcart_core::dates::format_display_date;
///
/// let d = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// assert_eq!(format_display_date(d), "10 March");
/// ```
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-d %B").to_string()
}

/// Renders a stay as "10 March – 14 March".
pub fn format_display_range(check_in: NaiveDate, check_out: NaiveDate) -> String {
    format!(
        "{} – {}",
        format_display_date(check_in),
        format_display_date(check_out)
    )
}

/// The day after `date`. Saturates at the last representable date.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_utc())
}
