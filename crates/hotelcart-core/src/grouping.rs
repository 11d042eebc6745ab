//! # Grouping & Aggregation
//!
//! Derives per-hotel groups and subtotals from the store on every read.
//! Nothing here is stored: groups borrow from the sequence they were built
//! from and vanish with it.
//!
//! ## Grouping Rules
//! ```text
//! rooms:   [A1, A2, B1, C1, A3, D1]        (letter = hotel)
//!
//! groups:  A → [A1, A2, A3]                 first seen at index 0
//!          B → [B1]                         first seen at index 2
//!          C → [C1]
//!          D → [D1]
//! ```
//! - Hotel names match by exact string equality (case and whitespace count)
//! - Group order follows each hotel's first appearance
//! - Rooms inside a group keep their relative order

use crate::money::Money;
use crate::types::RoomRecord;

/// Records sharing one hotel name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelGroup<'a> {
    pub hotel_name: &'a str,
    pub rooms: Vec<&'a RoomRecord>,
}

impl<'a> HotelGroup<'a> {
    /// Sum of nightly prices in this group.
    pub fn subtotal(&self) -> Money {
        subtotal(self.rooms.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The record whose image and name head the group.
    pub fn first(&self) -> Option<&'a RoomRecord> {
        self.rooms.first().copied()
    }
}

/// Partitions `records` by hotel name.
///
/// ## Example
/// ```rust
/// use hotelcart_core::grouping::group_by_hotel;
/// use hotelcart_core::seed::seed_rooms;
///
/// let rooms = seed_rooms();
/// let groups = group_by_hotel(&rooms);
///
/// let names: Vec<&str> = groups.iter().map(|g| g.hotel_name).collect();
/// assert_eq!(
///     names,
///     ["Grand Palace Hotel", "Ocean Breeze Resort", "City Central Inn", "Forest Valley Lodge"]
/// );
/// ```
pub fn group_by_hotel(records: &[RoomRecord]) -> Vec<HotelGroup<'_>> {
    let mut groups: Vec<HotelGroup<'_>> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|g| g.hotel_name == record.hotel_name)
        {
            Some(group) => group.rooms.push(record),
            None => groups.push(HotelGroup {
                hotel_name: &record.hotel_name,
                rooms: vec![record],
            }),
        }
    }

    groups
}

/// Sum of `price` over `records`. Empty input yields zero.
pub fn subtotal<'a, I>(records: I) -> Money
where
    I: IntoIterator<Item = &'a RoomRecord>,
{
    records.into_iter().map(|r| r.price).sum()
}
