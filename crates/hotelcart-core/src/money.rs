//! # Money Module
//!
//! Provides the `Money` type for nightly prices and subtotals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing nightly prices as floats drifts:                               │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every price is an i64 count of the smallest currency unit.          │
//! │    Group subtotals always add up to the cart subtotal exactly.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hotelcart_core::money::Money;
//!
//! let suite = Money::from_whole(420);
//! let deluxe = Money::from_whole(260);
//!
//! assert_eq!((suite + deluxe).whole(), 680);
//! assert_eq!((suite + deluxe).to_string(), "$680");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// RoomRecord.price ──┬──► group subtotal ──┐
///                    │                     ├──► drawer subtotal / total
///                    └─────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use hotelcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_whole(420).cents(), 42000);
    /// ```
    #[inline]
    pub const fn from_whole(units: i64) -> Self {
        Money(units.saturating_mul(100))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion, truncated toward zero.
    #[inline]
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats with the given currency symbol.
    ///
    /// Whole amounts render without decimals, the way the cart shows prices
    /// ("$420"); anything with cents renders two decimals ("$12.50").
    ///
    /// ## Example
    /// ```rust
    /// use hotelcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_whole(1940).format_with("€"), "€1940");
    /// assert_eq!(Money::from_cents(1250).format_with("$"), "$12.50");
    /// assert_eq!(Money::from_cents(-550).format_with("$"), "-$5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let whole = self.whole().abs();
        if self.cents_part() == 0 {
            format!("{sign}{symbol}{whole}")
        } else {
            format!("{sign}{symbol}{whole}.{:02}", self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturates at the `i64` bounds instead of overflowing.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Summing an empty iterator yields zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
