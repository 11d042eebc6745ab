//! # Card Commands
//!
//! Edit and delete actions on a single card.
//!
//! ## Card Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [Edit] ──► toggle_edit ──► draft shown, pickers attach after delay     │
//! │                │                                                        │
//! │                ├── set_date(checkIn | checkOut, "2026-03-12")           │
//! │                ├── change_adults(+1 | -1)                               │
//! │                │                                                        │
//! │                ├── [Save]   save_edit   ──► store updated               │
//! │                └── [Edit]   toggle_edit ──► draft discarded             │
//! │                                                                         │
//! │  [Delete] ──► request_delete ──► overlay (every other one closed)       │
//! │                  ├── [Cancel]       cancel_delete                       │
//! │                  ├── outside click  dismiss_overlay                     │
//! │                  └── [Delete]       confirm_delete ──► record removed   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command here returns the whole cart view so the component tree can
//! re-render from one response. Addressing an unknown card is `NOT_FOUND`.

use hotelcart_core::dates::parse_iso_date;
use hotelcart_core::{CartView, CoreError, DateField};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Enters edit mode, or leaves it discarding the draft.
pub fn toggle_edit(state: &SessionState, id: &str) -> Result<CartView, ApiError> {
    debug!(id = %id, "toggle_edit command");
    state
        .with_session_mut(|s| s.toggle_edit(id).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

/// Commits the draft to the store and leaves edit mode.
pub fn save_edit(state: &SessionState, id: &str) -> Result<CartView, ApiError> {
    debug!(id = %id, "save_edit command");
    state
        .with_session_mut(|s| s.save_edit(id).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

/// Leaves edit mode without saving.
pub fn cancel_edit(state: &SessionState, id: &str) -> Result<CartView, ApiError> {
    debug!(id = %id, "cancel_edit command");
    state
        .with_session_mut(|s| s.cancel_edit(id).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

/// Sets one date of the draft from a `YYYY-MM-DD` string.
///
/// ## Errors
/// - `VALIDATION_ERROR` when `date` is empty or not a calendar date
/// - `NOT_FOUND` when the card does not exist
pub fn set_date(
    state: &SessionState,
    id: &str,
    field: DateField,
    date: &str,
) -> Result<CartView, ApiError> {
    debug!(id = %id, field = ?field, date = %date, "set_date command");
    let field_name = match field {
        DateField::CheckIn => "checkIn",
        DateField::CheckOut => "checkOut",
    };
    let date = parse_iso_date(field_name, date).map_err(CoreError::from)?;

    state
        .with_session_mut(|s| s.set_date(id, field, date).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

/// Moves the draft's adult count by `delta` (the − and + buttons send -1 and 1).
pub fn change_adults(state: &SessionState, id: &str, delta: i32) -> Result<CartView, ApiError> {
    debug!(id = %id, delta = delta, "change_adults command");
    state
        .with_session_mut(|s| s.change_adults(id, delta).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

/// Toggles the card's delete overlay.
pub fn request_delete(state: &SessionState, id: &str) -> Result<CartView, ApiError> {
    debug!(id = %id, "request_delete command");
    state
        .with_session_mut(|s| s.request_delete(id).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

pub fn cancel_delete(state: &SessionState, id: &str) -> Result<CartView, ApiError> {
    debug!(id = %id, "cancel_delete command");
    state
        .with_session_mut(|s| s.cancel_delete(id).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

/// Removes the record whose overlay is open. A closed overlay makes this a
/// no-op.
pub fn confirm_delete(state: &SessionState, id: &str) -> Result<CartView, ApiError> {
    debug!(id = %id, "confirm_delete command");
    state
        .with_session_mut(|s| s.confirm_delete(id).map(|_| s.cart_view()))
        .map_err(ApiError::from)
}

/// Click anywhere outside an open overlay.
pub fn dismiss_overlay(state: &SessionState) -> CartView {
    debug!("dismiss_overlay command");
    state.with_session_mut(|s| {
        s.dismiss_overlay();
        s.cart_view()
    })
}

#[cfg(test)]
mod tests {
    use hotelcart_core::theme::MemoryPreferences;
    use hotelcart_core::RoomStore;

    use super::*;
    use crate::config::SessionConfig;
    use crate::error::ErrorCode;
    use crate::prefs::SessionPreferences;
    use crate::state::CartSession;

    fn state() -> SessionState {
        SessionState::new(CartSession::new(
            SessionConfig::default(),
            RoomStore::seeded(),
            SessionPreferences::Memory(MemoryPreferences::new()),
        ))
    }

    fn card<'a>(view: &'a CartView, id: &str) -> &'a hotelcart_core::CardView {
        view.groups
            .iter()
            .flat_map(|g| g.cards.iter())
            .find(|c| c.id == id)
            .unwrap()
    }

    #[test]
    fn test_editing_shows_draft_until_saved() {
        let state = state();
        toggle_edit(&state, "1").unwrap();
        let view = set_date(&state, "1", DateField::CheckIn, "2026-03-20").unwrap();

        let shown = card(&view, "1");
        assert!(shown.is_editing);
        assert_eq!(shown.check_in_label, "20 March");
        assert_eq!(shown.check_out_label, "21 March");
        // the group subtotal reads the store, which still has the old record
        assert_eq!(view.subtotal_label, "$1940");

        let saved = save_edit(&state, "1").unwrap();
        assert!(!card(&saved, "1").is_editing);
        assert_eq!(card(&saved, "1").nights, 1);
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let state = state();
        toggle_edit(&state, "2").unwrap();
        change_adults(&state, "2", 1).unwrap();

        let view = cancel_edit(&state, "2").unwrap();
        assert_eq!(card(&view, "2").adults, 2);
    }

    #[test]
    fn test_bad_date_is_validation_error() {
        let state = state();
        toggle_edit(&state, "1").unwrap();

        let err = set_date(&state, "1", DateField::CheckOut, "14/03/2026").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.starts_with("checkOut"));

        let err = set_date(&state, "1", DateField::CheckIn, " ").unwrap_err();
        assert_eq!(err.message, "checkIn is required");
    }

    #[test]
    fn test_unknown_card_is_not_found() {
        let state = state();
        let err = toggle_edit(&state, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Card not found: nope");
    }

    #[test]
    fn test_only_one_overlay_open() {
        let state = state();
        request_delete(&state, "1").unwrap();
        let view = request_delete(&state, "5").unwrap();

        assert!(!card(&view, "1").is_confirming_delete);
        assert!(card(&view, "5").is_confirming_delete);

        let view = cancel_delete(&state, "5").unwrap();
        assert!(!card(&view, "5").is_confirming_delete);
    }

    #[test]
    fn test_confirm_delete_then_overlay_dismissed() {
        let state = state();
        request_delete(&state, "6").unwrap();
        let view = confirm_delete(&state, "6").unwrap();
        assert_eq!(view.item_count, 5);

        request_delete(&state, "2").unwrap();
        let view = dismiss_overlay(&state);
        assert!(!card(&view, "2").is_confirming_delete);
    }
}
