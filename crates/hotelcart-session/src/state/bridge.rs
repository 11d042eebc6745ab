//! # Host Bridges
//!
//! Stand-ins for the two things the session cannot touch itself: the date
//! picker widgets and the document the theme is applied to.
//!
//! ## Picker Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartCard ──attach/set_date/destroy──► BridgedPicker                    │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                                   PickerOutbox (shared queue)           │
//! │                                             │                           │
//! │                   drain_picker_commands() ◄─┘                           │
//! │                             │                                           │
//! │                             ▼                                           │
//! │  [{ "op": "attach", "cardId": "1", "field": "checkIn", ... }, ...]      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use hotelcart_core::{DateField, DatePicker, PickerFactory, PickerRequest, PresentationContext, Theme};
use serde::Serialize;

/// One instruction for the host's picker widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PickerCommand {
    #[serde(rename_all = "camelCase")]
    Attach {
        card_id: String,
        field: DateField,
        date: NaiveDate,
        min_date: NaiveDate,
    },
    #[serde(rename_all = "camelCase")]
    SetDate {
        card_id: String,
        field: DateField,
        date: NaiveDate,
    },
    #[serde(rename_all = "camelCase")]
    Destroy {
        card_id: String,
        field: DateField,
    },
}

/// Queue of picker commands waiting for the host.
#[derive(Debug, Clone)]
pub struct PickerOutbox {
    commands: Arc<Mutex<Vec<PickerCommand>>>,
    mounted: bool,
}

impl Default for PickerOutbox {
    fn default() -> Self {
        PickerOutbox {
            commands: Arc::default(),
            mounted: true,
        }
    }
}

impl PickerOutbox {
    pub fn new() -> Self {
        PickerOutbox::default()
    }

    /// Whether the card inputs are rendered. While `false`, attach requests
    /// find no input and no picker is created.
    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    pub fn drain(&self) -> Vec<PickerCommand> {
        std::mem::take(&mut *self.lock())
    }

    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn push(&self, command: PickerCommand) {
        self.lock().push(command);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PickerCommand>> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PickerFactory for PickerOutbox {
    fn attach(&mut self, request: &PickerRequest) -> Option<Box<dyn DatePicker>> {
        if !self.mounted {
            tracing::debug!(card_id = %request.card_id, field = ?request.field, "Picker input not rendered");
            return None;
        }

        self.push(PickerCommand::Attach {
            card_id: request.card_id.clone(),
            field: request.field,
            date: request.initial,
            min_date: request.min_date,
        });
        Some(Box::new(BridgedPicker {
            card_id: request.card_id.clone(),
            field: request.field,
            outbox: self.clone(),
        }))
    }
}

/// Picker handle that forwards to the outbox.
#[derive(Debug)]
pub struct BridgedPicker {
    card_id: String,
    field: DateField,
    outbox: PickerOutbox,
}

impl DatePicker for BridgedPicker {
    fn set_date(&mut self, date: NaiveDate) {
        self.outbox.push(PickerCommand::SetDate {
            card_id: self.card_id.clone(),
            field: self.field,
            date,
        });
    }

    fn destroy(&mut self) {
        self.outbox.push(PickerCommand::Destroy {
            card_id: self.card_id.clone(),
            field: self.field,
        });
    }
}

/// The document's `data-theme` attribute. `None` until a theme is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentTheme {
    pub data_theme: Option<Theme>,
}

impl PresentationContext for DocumentTheme {
    fn apply_theme(&mut self, theme: Theme) {
        self.data_theme = Some(theme);
    }
}
