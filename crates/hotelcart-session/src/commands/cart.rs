//! # Cart Commands
//!
//! Reading the cart and mutating the room store directly.
//!
//! Store mutations addressing an id that is not in the cart change nothing
//! and report no error; the returned view is simply unchanged.

use hotelcart_core::{CartView, RoomRecord};
use tracing::debug;

use crate::state::SessionState;

/// Gets every group and card as currently displayed.
///
/// ## Returns
/// ```text
/// {
///   groups: [{ hotelName, reservationLabel, cards: [...], subtotalLabel, showFooter }],
///   itemCount: 6,
///   subtotalLabel: "$1940"
/// }
/// ```
pub fn get_cart(state: &SessionState) -> CartView {
    debug!("get_cart command");
    state.with_session(|s| s.cart_view())
}

/// Replaces the record with the same id.
pub fn update_room(state: &SessionState, record: RoomRecord) -> CartView {
    debug!(id = %record.id, "update_room command");
    state.with_session_mut(|s| {
        s.update_room(record);
        s.cart_view()
    })
}

/// Removes a record. Deleting twice is the same as deleting once.
pub fn delete_room(state: &SessionState, id: &str) -> CartView {
    debug!(id = %id, "delete_room command");
    state.with_session_mut(|s| {
        s.delete_room(id);
        s.cart_view()
    })
}
