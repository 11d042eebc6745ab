//! # Cart Card State Machine
//!
//! Per-card edit and delete-confirmation lifecycle.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Card Lifecycle                                       │
//! │                                                                         │
//! │   ┌──────────┐   toggle_edit    ┌───────────────────┐                  │
//! │   │ Viewing  │ ───────────────► │ Editing { draft } │                  │
//! │   │          │ ◄─────────────── │                   │                  │
//! │   └──────────┘   toggle_edit /  └───────────────────┘                  │
//! │                  cancel_edit      │  set_date                          │
//! │        ▲         (discard)        │  change_adults                     │
//! │        │                          │  (new draft value each time)       │
//! │        └────── save_edit ─────────┘                                    │
//! │                (emits ItemUpdated)                                      │
//! │                                                                         │
//! │   Orthogonal: confirming_delete (overlay)                               │
//! │     request_delete ──► open (every other card closed first)            │
//! │     cancel / outside click ──► closed                                   │
//! │     confirm ──► emits ItemDeleted, closed                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Picker Timing
//! Entering edit mode schedules [`CardTask::InitPickers`] on the deferred
//! queue instead of attaching pickers immediately: the inputs they bind to
//! are only rendered once edit mode is visible. Leaving edit mode or tearing
//! the card down cancels the task; a task that fires anyway (stale handle,
//! card no longer editing) does nothing.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dates::next_day;
use crate::schedule::{DeferredQueue, TaskHandle};
use crate::types::{DateField, RoomRecord};

// =============================================================================
// External collaborators
// =============================================================================

/// A date-range picker widget bound to one input of a card.
pub trait DatePicker: fmt::Debug + Send {
    /// Moves the widget's selection without emitting a change back.
    fn set_date(&mut self, date: NaiveDate);

    /// Detaches the widget from its input.
    fn destroy(&mut self);
}

/// What a picker is attached with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    pub card_id: String,
    pub field: DateField,
    pub initial: NaiveDate,
    /// Earliest selectable date ("today" when the picker attaches).
    pub min_date: NaiveDate,
}

/// Creates pickers. Returns `None` when the input element is not present.
pub trait PickerFactory: Send {
    fn attach(&mut self, request: &PickerRequest) -> Option<Box<dyn DatePicker>>;
}

// =============================================================================
// Events & Tasks
// =============================================================================

/// Emitted upward from a card to whoever owns the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CardEvent {
    /// Saved draft, to replace the store record with the same id.
    ItemUpdated(RoomRecord),
    /// Identifier of the record to remove.
    ItemDeleted(String),
}

/// Deferred work a card schedules for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTask {
    InitPickers { card_id: String },
}

/// Edit mode of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    Viewing,
    Editing { draft: RoomRecord },
}

// =============================================================================
// Cart Card
// =============================================================================

/// One card's state. Holds no reference to the store: operations receive the
/// record they act on, and changes leave only as [`CardEvent`]s.
#[derive(Debug)]
pub struct CartCard {
    id: String,
    mode: CardMode,
    confirming_delete: bool,
    pending_init: Option<TaskHandle>,
    check_in_picker: Option<Box<dyn DatePicker>>,
    check_out_picker: Option<Box<dyn DatePicker>>,
}

impl CartCard {
    pub fn new(id: impl Into<String>) -> Self {
        CartCard {
            id: id.into(),
            mode: CardMode::Viewing,
            confirming_delete: false,
            pending_init: None,
            check_in_picker: None,
            check_out_picker: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing { .. })
    }

    pub fn draft(&self) -> Option<&RoomRecord> {
        match &self.mode {
            CardMode::Editing { draft } => Some(draft),
            CardMode::Viewing => None,
        }
    }

    /// The record to render: the draft while editing, `item` otherwise.
    pub fn displayed<'a>(&'a self, item: &'a RoomRecord) -> &'a RoomRecord {
        self.draft().unwrap_or(item)
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Handle of the picker initialization still waiting to fire, if any.
    pub fn pending_init(&self) -> Option<TaskHandle> {
        self.pending_init
    }

    /// Number of pickers currently attached (0..=2).
    pub fn attached_pickers(&self) -> usize {
        usize::from(self.check_in_picker.is_some()) + usize::from(self.check_out_picker.is_some())
    }

    // -------------------------------------------------------------------------
    // Edit lifecycle
    // -------------------------------------------------------------------------

    /// Enters edit mode with a fresh draft of `item`, or leaves it discarding
    /// the draft.
    pub fn toggle_edit(
        &mut self,
        item: &RoomRecord,
        queue: &mut DeferredQueue<CardTask>,
        picker_delay: Duration,
    ) {
        if self.is_editing() {
            self.leave_edit(queue);
            return;
        }

        self.mode = CardMode::Editing {
            draft: item.clone(),
        };
        let handle = queue.schedule(
            picker_delay,
            CardTask::InitPickers {
                card_id: self.id.clone(),
            },
        );
        self.pending_init = Some(handle);
    }

    /// Commits the draft. Returns the update to apply, or `None` when the
    /// card was not editing.
    pub fn save_edit(&mut self, queue: &mut DeferredQueue<CardTask>) -> Option<CardEvent> {
        let draft = self.draft().cloned()?;
        self.leave_edit(queue);
        Some(CardEvent::ItemUpdated(draft))
    }

    /// Discards the draft without emitting anything.
    pub fn cancel_edit(&mut self, queue: &mut DeferredQueue<CardTask>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.leave_edit(queue);
        true
    }

    /// Attaches the date pickers when the scheduled task fires.
    ///
    /// Does nothing unless `handle` is the card's pending task and the card is
    /// still editing. Pickers already attached are left alone; a factory that
    /// finds no input element leaves that picker unattached.
    pub fn init_pickers(
        &mut self,
        handle: TaskHandle,
        factory: &mut dyn PickerFactory,
        today: NaiveDate,
    ) -> bool {
        if self.pending_init != Some(handle) {
            return false;
        }
        self.pending_init = None;

        let Some(draft) = self.draft() else {
            return false;
        };
        let check_in = PickerRequest {
            card_id: self.id.clone(),
            field: DateField::CheckIn,
            initial: draft.check_in,
            min_date: today,
        };
        let check_out = PickerRequest {
            field: DateField::CheckOut,
            initial: draft.check_out,
            ..check_in.clone()
        };

        if self.check_in_picker.is_none() {
            self.check_in_picker = factory.attach(&check_in);
        }
        if self.check_out_picker.is_none() {
            self.check_out_picker = factory.attach(&check_out);
        }
        true
    }

    /// Sets one date on the draft.
    ///
    /// Moving check-in onto or past check-out pushes check-out to the day
    /// after the new check-in, on both the draft and the check-out picker.
    /// Check-out edits are taken as given, even if they invert the range.
    ///
    /// Returns `false` when the card is not editing.
    pub fn set_date(&mut self, field: DateField, date: NaiveDate) -> bool {
        let CardMode::Editing { draft } = &self.mode else {
            return false;
        };

        let mut next = draft.with_date(field, date);
        if field == DateField::CheckIn && next.check_out <= date {
            let forced = next_day(date);
            next = next.with_check_out(forced);
            if let Some(picker) = self.check_out_picker.as_mut() {
                picker.set_date(forced);
            }
        }

        self.mode = CardMode::Editing { draft: next };
        true
    }

    /// Moves the draft's adult count by `delta`, never below one.
    pub fn change_adults(&mut self, delta: i32) -> bool {
        let CardMode::Editing { draft } = &self.mode else {
            return false;
        };
        let next = draft.with_adults_delta(delta);
        self.mode = CardMode::Editing { draft: next };
        true
    }

    // -------------------------------------------------------------------------
    // Delete overlay
    // -------------------------------------------------------------------------

    /// Flips the overlay. Coordination across cards lives in
    /// [`CardRegistry::request_delete`](crate::registry::CardRegistry::request_delete).
    pub(crate) fn toggle_overlay(&mut self) -> bool {
        self.confirming_delete = !self.confirming_delete;
        self.confirming_delete
    }

    /// Closes the overlay (Cancel button, outside click, another card opening).
    pub fn close_overlay(&mut self) -> bool {
        std::mem::replace(&mut self.confirming_delete, false)
    }

    /// Confirms deletion from the open overlay.
    pub fn confirm_delete(&mut self) -> Option<CardEvent> {
        if !self.close_overlay() {
            return None;
        }
        Some(CardEvent::ItemDeleted(self.id.clone()))
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Releases everything the card holds: pending task, pickers, draft,
    /// overlay.
    pub fn teardown(&mut self, queue: &mut DeferredQueue<CardTask>) {
        self.leave_edit(queue);
        self.confirming_delete = false;
    }

    fn leave_edit(&mut self, queue: &mut DeferredQueue<CardTask>) {
        self.mode = CardMode::Viewing;
        if let Some(handle) = self.pending_init.take() {
            queue.cancel(handle);
        }
        self.destroy_pickers();
    }

    fn destroy_pickers(&mut self) {
        for mut picker in [self.check_in_picker.take(), self.check_out_picker.take()]
            .into_iter()
            .flatten()
        {
            picker.destroy();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Log of what the fake pickers were asked to do.
    #[derive(Debug, Default, Clone)]
    pub struct PickerLog(pub Arc<Mutex<Vec<String>>>);

    impl PickerLog {
        pub fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }

        fn push(&self, entry: String) {
            self.0.lock().unwrap().push(entry);
        }
    }

    #[derive(Debug)]
    pub struct FakePicker {
        label: String,
        log: PickerLog,
    }

    impl DatePicker for FakePicker {
        fn set_date(&mut self, date: NaiveDate) {
            self.log.push(format!("set {} {}", self.label, date));
        }

        fn destroy(&mut self) {
            self.log.push(format!("destroy {}", self.label));
        }
    }

    /// Factory whose inputs exist only when `mounted` is true.
    #[derive(Debug, Default)]
    pub struct FakeFactory {
        pub mounted: bool,
        pub log: PickerLog,
    }

    impl FakeFactory {
        pub fn mounted() -> Self {
            FakeFactory {
                mounted: true,
                log: PickerLog::default(),
            }
        }
    }

    impl PickerFactory for FakeFactory {
        fn attach(&mut self, request: &PickerRequest) -> Option<Box<dyn DatePicker>> {
            if !self.mounted {
                return None;
            }
            let label = format!("{}:{:?}", request.card_id, request.field);
            self.log.push(format!("attach {} {}", label, request.initial));
            Some(Box::new(FakePicker {
                label,
                log: self.log.clone(),
            }))
        }
    }
}
