//! # Theme Commands
//!
//! Light/dark toggle in the header. The choice is persisted under the
//! `"theme"` preference key and restored by the next session.

use tracing::debug;

use crate::state::{SessionState, ThemeView};

pub fn get_theme(state: &SessionState) -> ThemeView {
    debug!("get_theme command");
    state.with_session(|s| s.theme_view())
}

/// Flips the theme, applies it to the document and persists it. A write
/// failure is logged; the flipped theme stays in effect.
pub fn toggle_theme(state: &SessionState) -> ThemeView {
    state.with_session_mut(|s| {
        let theme = s.toggle_theme();
        debug!(theme = %theme, "toggle_theme command");
        s.theme_view()
    })
}

#[cfg(test)]
mod tests {
    use hotelcart_core::theme::{MemoryPreferences, THEME_STORAGE_KEY};
    use hotelcart_core::{RoomStore, Theme};

    use super::*;
    use crate::config::SessionConfig;
    use crate::prefs::SessionPreferences;
    use crate::state::CartSession;

    fn state(prefs: MemoryPreferences) -> SessionState {
        SessionState::new(CartSession::new(
            SessionConfig::default(),
            RoomStore::seeded(),
            SessionPreferences::Memory(prefs),
        ))
    }

    #[test]
    fn test_persisted_dark_restored() {
        let view = get_theme(&state(MemoryPreferences::with_value(THEME_STORAGE_KEY, "dark")));
        assert_eq!(view.theme, Theme::Dark);
        assert_eq!(view.data_theme, Some(Theme::Dark));
        assert_eq!(view.toggle_label, "Light");
    }

    #[test]
    fn test_unrecognized_value_falls_back_to_light() {
        let view = get_theme(&state(MemoryPreferences::with_value(THEME_STORAGE_KEY, "sepia")));
        assert_eq!(view.theme, Theme::Light);
        assert_eq!(view.data_theme, None);
    }

    #[test]
    fn test_toggle_twice_returns_to_light() {
        let state = state(MemoryPreferences::new());
        assert_eq!(toggle_theme(&state).theme, Theme::Dark);

        let view = toggle_theme(&state);
        assert_eq!(view.theme, Theme::Light);
        assert_eq!(view.data_theme, Some(Theme::Light));
    }
}
