//! # Room Store
//!
//! The ordered collection of reservations backing every cart view.
//!
//! ## Copy-On-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Mutation Model                                 │
//! │                                                                         │
//! │   snapshot() ──► Arc<[RoomRecord]>  (v1) ◄── held by a view            │
//! │                                                                         │
//! │   update_room(r) ──► builds a new sequence (v2), swaps it in           │
//! │                                                                         │
//! │   The view still sees v1, unchanged. The next read sees v2.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations never fail. An identifier that matches nothing leaves the store
//! as it was; the returned `bool` only says whether something matched.

use std::collections::HashSet;
use std::sync::Arc;

use crate::grouping::{self, HotelGroup};
use crate::money::Money;
use crate::seed::seed_rooms;
use crate::types::RoomRecord;

/// Owned store of room records.
///
/// ## Invariants
/// - Record identifiers are unique
/// - Order only changes by removal; updates replace in place
#[derive(Debug, Clone)]
pub struct RoomStore {
    rooms: Arc<[RoomRecord]>,
}

impl RoomStore {
    /// Creates a store from `rooms`, keeping the first record for any
    /// repeated identifier.
    pub fn new(rooms: Vec<RoomRecord>) -> Self {
        let mut seen = HashSet::new();
        let rooms: Vec<RoomRecord> = rooms
            .into_iter()
            .filter(|room| seen.insert(room.id.clone()))
            .collect();
        RoomStore {
            rooms: rooms.into(),
        }
    }

    /// Creates a store holding the six seed reservations.
    pub fn seeded() -> Self {
        RoomStore::new(seed_rooms())
    }

    /// Current records, in order.
    pub fn rooms(&self) -> &[RoomRecord] {
        &self.rooms
    }

    /// Shared handle to the current sequence. Later mutations do not touch it.
    pub fn snapshot(&self) -> Arc<[RoomRecord]> {
        Arc::clone(&self.rooms)
    }

    pub fn get(&self, id: &str) -> Option<&RoomRecord> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Sum of nightly prices across the whole cart.
    pub fn subtotal(&self) -> Money {
        grouping::subtotal(self.rooms.iter())
    }

    /// Records grouped by hotel, in first-seen order.
    pub fn groups(&self) -> Vec<HotelGroup<'_>> {
        grouping::group_by_hotel(&self.rooms)
    }

    /// Replaces the record whose id equals `updated.id`.
    ///
    /// ## Behavior
    /// - Match: the new sequence carries `updated` at the same position
    /// - No match: nothing changes, returns `false`
    ///
    /// ## Example
    /// ```rust
    /// use hotelcart_core::store::RoomStore;
    ///
    /// let mut store = RoomStore::seeded();
    /// let edited = store.rooms()[0].with_adults(3);
    ///
    /// assert!(store.update_room(edited));
    /// assert_eq!(store.rooms()[0].adults, 3);
    /// ```
    pub fn update_room(&mut self, updated: RoomRecord) -> bool {
        let Some(index) = self.position(&updated.id) else {
            return false;
        };

        let mut next = self.rooms.to_vec();
        next[index] = updated;
        self.rooms = next.into();
        true
    }

    /// Removes the record with `id`. Removing an absent id is a no-op.
    pub fn delete_room(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            return false;
        }

        let next: Vec<RoomRecord> = self
            .rooms
            .iter()
            .filter(|room| room.id != id)
            .cloned()
            .collect();
        self.rooms = next.into();
        true
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.rooms.iter().position(|room| room.id == id)
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        RoomStore::seeded()
    }
}
