//! # Drawer Commands
//!
//! The cart drawer slides in from the right. The summary in its footer is
//! recomputed from the store on every call.

use hotelcart_core::DrawerView;
use tracing::debug;

use crate::state::SessionState;

pub fn get_drawer(state: &SessionState) -> DrawerView {
    debug!("get_drawer command");
    state.with_session(|s| s.drawer_view())
}

pub fn open_drawer(state: &SessionState) -> DrawerView {
    debug!("open_drawer command");
    state.with_session_mut(|s| {
        s.open_drawer();
        s.drawer_view()
    })
}

/// Close button or backdrop click.
pub fn close_drawer(state: &SessionState) -> DrawerView {
    debug!("close_drawer command");
    state.with_session_mut(|s| {
        s.close_drawer();
        s.drawer_view()
    })
}

pub fn toggle_drawer(state: &SessionState) -> DrawerView {
    debug!("toggle_drawer command");
    state.with_session_mut(|s| {
        s.toggle_drawer();
        s.drawer_view()
    })
}

#[cfg(test)]
mod tests {
    use hotelcart_core::theme::MemoryPreferences;
    use hotelcart_core::RoomStore;

    use super::*;
    use crate::config::SessionConfig;
    use crate::prefs::SessionPreferences;
    use crate::state::CartSession;

    fn state(store: RoomStore) -> SessionState {
        SessionState::new(CartSession::new(
            SessionConfig::default(),
            store,
            SessionPreferences::Memory(MemoryPreferences::new()),
        ))
    }

    #[test]
    fn test_open_close_toggle() {
        let state = state(RoomStore::seeded());
        assert!(open_drawer(&state).is_open);
        assert!(open_drawer(&state).is_open);
        assert!(!close_drawer(&state).is_open);
        assert!(toggle_drawer(&state).is_open);
        assert!(!toggle_drawer(&state).is_open);
    }

    #[test]
    fn test_summary_for_seed() {
        let view = get_drawer(&state(RoomStore::seeded()));
        assert_eq!(view.item_count, 6);
        assert_eq!(view.subtotal_row_label, "Subtotal (6 items)");
        assert_eq!(view.total_label, "$1940");
        assert!(view.show_footer);
    }

    #[test]
    fn test_empty_cart_hides_footer() {
        let view = get_drawer(&state(RoomStore::new(Vec::new())));
        assert_eq!(view.item_count, 0);
        assert!(!view.show_footer);
    }
}
