//! # Card Registry
//!
//! Owns every live [`CartCard`] and coordinates the delete overlays between
//! them.
//!
//! ## At Most One Overlay
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request_delete("5")                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for every card except "5": close_overlay()    ◄── "1" was open: closed │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  card "5": toggle_overlay()                    ◄── now the only one open│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is the only place that can open an overlay, so the
//! at-most-one rule cannot be bypassed by talking to a card directly.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::card::{CardTask, CartCard, PickerFactory};
use crate::error::{CoreError, CoreResult};
use crate::schedule::{DeferredQueue, TaskHandle};
use crate::types::RoomRecord;

/// Live cards keyed by record id.
#[derive(Debug, Default)]
pub struct CardRegistry {
    cards: HashMap<String, CartCard>,
}

impl CardRegistry {
    pub fn new() -> Self {
        CardRegistry::default()
    }

    /// Aligns the registry with `records`: new ids get a fresh card, cards
    /// whose record is gone are torn down. Existing cards keep their state.
    pub fn sync(&mut self, records: &[RoomRecord], queue: &mut DeferredQueue<CardTask>) {
        let removed: Vec<String> = self
            .cards
            .keys()
            .filter(|id| !records.iter().any(|r| &r.id == *id))
            .cloned()
            .collect();
        for id in removed {
            self.remove(&id, queue);
        }

        for record in records {
            self.cards
                .entry(record.id.clone())
                .or_insert_with(|| CartCard::new(record.id.clone()));
        }
    }

    pub fn get(&self, id: &str) -> Option<&CartCard> {
        self.cards.get(id)
    }

    /// Looks up a card for a frontend action.
    ///
    /// ## Errors
    /// `CoreError::CardNotFound` when no card is registered for `id`.
    pub fn card_mut(&mut self, id: &str) -> CoreResult<&mut CartCard> {
        self.cards
            .get_mut(id)
            .ok_or_else(|| CoreError::CardNotFound(id.to_string()))
    }

    /// Tears down and drops the card for `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str, queue: &mut DeferredQueue<CardTask>) -> bool {
        match self.cards.remove(id) {
            Some(mut card) => {
                card.teardown(queue);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Toggles the delete overlay on `id` after closing every other card's.
    /// Returns whether the target's overlay is now open.
    ///
    /// ## Errors
    /// `CoreError::CardNotFound` when no card is registered for `id`.
    pub fn request_delete(&mut self, id: &str) -> CoreResult<bool> {
        if !self.cards.contains_key(id) {
            return Err(CoreError::CardNotFound(id.to_string()));
        }

        for (card_id, card) in self.cards.iter_mut() {
            if card_id != id {
                card.close_overlay();
            }
        }
        self.card_mut(id).map(CartCard::toggle_overlay)
    }

    /// Closes every open overlay. Returns how many were open.
    pub fn close_all_overlays(&mut self) -> usize {
        self.cards
            .values_mut()
            .map(CartCard::close_overlay)
            .filter(|was_open| *was_open)
            .count()
    }

    /// Ids of cards currently showing the delete overlay.
    pub fn open_overlays(&self) -> Vec<&str> {
        self.cards
            .values()
            .filter(|c| c.is_confirming_delete())
            .map(CartCard::id)
            .collect()
    }

    /// Runs a fired deferred task. A task for a card that no longer exists is
    /// a no-op.
    pub fn run_task(
        &mut self,
        handle: TaskHandle,
        task: CardTask,
        factory: &mut dyn PickerFactory,
        today: NaiveDate,
    ) -> bool {
        match task {
            CardTask::InitPickers { card_id } => match self.cards.get_mut(&card_id) {
                Some(card) => card.init_pickers(handle, factory, today),
                None => false,
            },
        }
    }
}
