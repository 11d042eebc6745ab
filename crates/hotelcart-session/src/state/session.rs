//! # Cart Session
//!
//! Everything one open cart page holds, behind one lock.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command reads or mutates more than one piece of state
//! 2. A command must run to completion before the next one starts
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Frontend Action          Command               State Change            │
//! │  ───────────────          ───────               ────────────            │
//! │                                                                         │
//! │  Click Edit ─────────────► toggle_edit() ─────► card draft + task      │
//! │                                                                         │
//! │  Pick a date ────────────► set_date() ────────► draft (coupled dates)  │
//! │                                                                         │
//! │  Click Save ─────────────► save_edit() ───────► store.update_room      │
//! │                                                                         │
//! │  Confirm Delete ─────────► confirm_delete() ──► store.delete_room      │
//! │                                                  + registry.sync        │
//! │                                                                         │
//! │  Timer tick ─────────────► advance_time() ────► pickers attached       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::NaiveDate;
use hotelcart_core::validation::validate_room;
use hotelcart_core::{
    CardEvent, CardRegistry, CardTask, CartView, CoreError, CoreResult, DateField, DeferredQueue,
    DrawerState, DrawerView, RoomRecord, RoomStore, Theme, ThemeController,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::bridge::{DocumentTheme, PickerOutbox};
use crate::config::SessionConfig;
use crate::prefs::SessionPreferences;

/// Theme state as the toggle button and the document see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeView {
    pub theme: Theme,
    /// `data-theme` attribute; absent while the default light theme was never
    /// applied.
    pub data_theme: Option<Theme>,
    pub toggle_label: &'static str,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// One cart page.
#[derive(Debug)]
pub struct CartSession {
    config: SessionConfig,
    store: RoomStore,
    registry: CardRegistry,
    queue: DeferredQueue<CardTask>,
    drawer: DrawerState,
    theme: ThemeController,
    document: DocumentTheme,
    prefs: SessionPreferences,
    pickers: PickerOutbox,
    today: fn() -> NaiveDate,
}

impl CartSession {
    /// Creates a session over `store`, one card per record, with the theme
    /// resolved from `prefs`.
    pub fn new(config: SessionConfig, store: RoomStore, prefs: SessionPreferences) -> Self {
        let mut registry = CardRegistry::new();
        let mut queue = DeferredQueue::new();
        registry.sync(store.rooms(), &mut queue);

        let mut document = DocumentTheme::default();
        let theme = ThemeController::load(&prefs, config.prefers_dark, &mut document)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Could not read theme preference, using ambient theme");
                ThemeController::from_ambient(config.prefers_dark, &mut document)
            });
        info!(
            rooms = store.len(),
            theme = %theme.theme(),
            source = ?theme.source(),
            "Cart session ready"
        );

        CartSession {
            config,
            store,
            registry,
            queue,
            drawer: DrawerState::new(),
            theme,
            document,
            prefs,
            pickers: PickerOutbox::new(),
            today: local_today,
        }
    }

    /// Replaces the clock used for the pickers' minimum date.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &RoomStore {
        &self.store
    }

    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    pub fn pickers(&self) -> &PickerOutbox {
        &self.pickers
    }

    pub fn pickers_mut(&mut self) -> &mut PickerOutbox {
        &mut self.pickers
    }

    /// Time elapsed on the deferred queue's clock.
    pub fn now(&self) -> Duration {
        self.queue.now()
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn cart_view(&self) -> CartView {
        CartView::build(&self.store, &self.registry, &self.config.currency_symbol)
    }

    pub fn drawer_view(&self) -> DrawerView {
        DrawerView::build(&self.drawer, &self.store, &self.config.currency_symbol)
    }

    pub fn theme_view(&self) -> ThemeView {
        let theme = self.theme.theme();
        ThemeView {
            theme,
            data_theme: self.document.data_theme,
            toggle_label: theme.toggle_label(),
        }
    }

    // -------------------------------------------------------------------------
    // Store
    // -------------------------------------------------------------------------

    /// Replaces the record with the same id. Unknown ids change nothing.
    ///
    /// Records failing [`validate_room`] (inverted range, zero adults,
    /// negative price) are stored anyway and logged.
    pub fn update_room(&mut self, record: RoomRecord) -> bool {
        let id = record.id.clone();
        if let Err(e) = validate_room(&record) {
            warn!(id = %id, error = %e, "Storing a room that fails validation");
        }
        let changed = self.store.update_room(record);
        if changed {
            self.registry.sync(self.store.rooms(), &mut self.queue);
        }
        debug!(id = %id, changed, "Room updated");
        changed
    }

    /// Removes the record and its card. Unknown ids change nothing.
    pub fn delete_room(&mut self, id: &str) -> bool {
        let changed = self.store.delete_room(id);
        if changed {
            self.registry.sync(self.store.rooms(), &mut self.queue);
        }
        debug!(id = %id, changed, "Room deleted");
        changed
    }

    /// Applies an event a card emitted.
    pub fn apply_event(&mut self, event: CardEvent) -> bool {
        match event {
            CardEvent::ItemUpdated(record) => self.update_room(record),
            CardEvent::ItemDeleted(id) => self.delete_room(&id),
        }
    }

    // -------------------------------------------------------------------------
    // Cards
    // -------------------------------------------------------------------------

    /// Enters or leaves edit mode. Returns whether the card is now editing.
    pub fn toggle_edit(&mut self, id: &str) -> CoreResult<bool> {
        let item = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::CardNotFound(id.to_string()))?;
        let delay = self.config.picker_delay();

        let card = self.registry.card_mut(id)?;
        card.toggle_edit(&item, &mut self.queue, delay);
        Ok(card.is_editing())
    }

    /// Commits the card's draft to the store. Returns `false` when the card
    /// was not editing.
    pub fn save_edit(&mut self, id: &str) -> CoreResult<bool> {
        let event = self.registry.card_mut(id)?.save_edit(&mut self.queue);
        let Some(event) = event else {
            return Ok(false);
        };
        self.apply_event(event);
        Ok(true)
    }

    pub fn cancel_edit(&mut self, id: &str) -> CoreResult<bool> {
        Ok(self.registry.card_mut(id)?.cancel_edit(&mut self.queue))
    }

    pub fn set_date(&mut self, id: &str, field: DateField, date: NaiveDate) -> CoreResult<bool> {
        Ok(self.registry.card_mut(id)?.set_date(field, date))
    }

    pub fn change_adults(&mut self, id: &str, delta: i32) -> CoreResult<bool> {
        Ok(self.registry.card_mut(id)?.change_adults(delta))
    }

    /// Toggles the card's delete overlay, closing every other one first.
    pub fn request_delete(&mut self, id: &str) -> CoreResult<bool> {
        self.registry.request_delete(id)
    }

    /// Closes the card's overlay. Returns whether it was open.
    pub fn cancel_delete(&mut self, id: &str) -> CoreResult<bool> {
        Ok(self.registry.card_mut(id)?.close_overlay())
    }

    /// Outside click: closes whichever overlay is open.
    pub fn dismiss_overlay(&mut self) -> usize {
        self.registry.close_all_overlays()
    }

    /// Deletes the record from its open overlay. Returns `false` when the
    /// overlay was not open.
    pub fn confirm_delete(&mut self, id: &str) -> CoreResult<bool> {
        match self.registry.card_mut(id)?.confirm_delete() {
            Some(event) => Ok(self.apply_event(event)),
            None => Ok(false),
        }
    }

    // -------------------------------------------------------------------------
    // Deferred work
    // -------------------------------------------------------------------------

    /// Moves the virtual clock forward and runs what came due. Returns how
    /// many tasks did something.
    pub fn advance_time(&mut self, by: Duration) -> usize {
        let today = (self.today)();
        let mut ran = 0;
        for (handle, task) in self.queue.advance(by) {
            if self.registry.run_task(handle, task, &mut self.pickers, today) {
                ran += 1;
            }
        }
        ran
    }

    // -------------------------------------------------------------------------
    // Drawer & Theme
    // -------------------------------------------------------------------------

    pub fn open_drawer(&mut self) {
        self.drawer.open();
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer.toggle();
    }

    /// Flips the theme. A failed write is logged and the new theme kept.
    pub fn toggle_theme(&mut self) -> Theme {
        match self.theme.toggle(&mut self.prefs, &mut self.document) {
            Ok(theme) => theme,
            Err(e) => {
                warn!(error = %e, "Could not persist theme preference");
                self.theme.theme()
            }
        }
    }
}

// =============================================================================
// Shared State
// =============================================================================

/// Thread-safe wrapper around the session.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<CartSession>>,
}

impl SessionState {
    pub fn new(session: CartSession) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartSession) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartSession) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}
