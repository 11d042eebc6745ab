//! # Picker Commands
//!
//! The host drives the session's virtual clock and collects what the date
//! pickers should do.
//!
//! ```text
//! toggle_edit("1")          ──► InitPickers scheduled at now + 50 ms
//! advance_time(50)          ──► task fires, two Attach commands queued
//! drain_picker_commands()   ──► [Attach checkIn, Attach checkOut]
//! ```

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::state::{PickerCommand, SessionState};

/// Result of moving the clock forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceResponse {
    /// Virtual time after the advance, in milliseconds.
    pub now_ms: u64,
    /// Tasks that came due and did something.
    pub tasks_run: usize,
}

/// Moves the virtual clock forward by `ms` and runs due tasks.
pub fn advance_time(state: &SessionState, ms: u64) -> AdvanceResponse {
    debug!(ms = ms, "advance_time command");
    state.with_session_mut(|s| {
        let tasks_run = s.advance_time(Duration::from_millis(ms));
        AdvanceResponse {
            now_ms: u64::try_from(s.now().as_millis()).unwrap_or(u64::MAX),
            tasks_run,
        }
    })
}

/// Takes every queued picker instruction, oldest first.
pub fn drain_picker_commands(state: &SessionState) -> Vec<PickerCommand> {
    let commands = state.with_session(|s| s.pickers().drain());
    debug!(count = commands.len(), "drain_picker_commands command");
    commands
}

/// Tells the session whether the card date inputs are currently rendered.
pub fn set_inputs_mounted(state: &SessionState, mounted: bool) {
    debug!(mounted = mounted, "set_inputs_mounted command");
    state.with_session_mut(|s| s.pickers_mut().set_mounted(mounted));
}

#[cfg(test)]
mod tests {
    use hotelcart_core::theme::MemoryPreferences;
    use hotelcart_core::RoomStore;

    use super::*;
    use crate::commands::card::{save_edit, toggle_edit};
    use crate::config::SessionConfig;
    use crate::prefs::SessionPreferences;
    use crate::state::CartSession;

    fn state() -> SessionState {
        SessionState::new(CartSession::new(
            SessionConfig::default(),
            RoomStore::seeded(),
            SessionPreferences::Memory(MemoryPreferences::new()),
        ))
    }

    #[test]
    fn test_pickers_attach_then_destroy_on_save() {
        let state = state();
        toggle_edit(&state, "1").unwrap();

        let response = advance_time(&state, 50);
        assert_eq!(response, AdvanceResponse { now_ms: 50, tasks_run: 1 });
        assert_eq!(drain_picker_commands(&state).len(), 2);

        save_edit(&state, "1").unwrap();
        let commands = drain_picker_commands(&state);
        assert_eq!(commands.len(), 2);
        assert!(commands
            .iter()
            .all(|c| matches!(c, PickerCommand::Destroy { .. })));
    }

    #[test]
    fn test_unmounted_inputs_leave_card_editing_without_pickers() {
        let state = state();
        set_inputs_mounted(&state, false);
        toggle_edit(&state, "2").unwrap();

        assert_eq!(advance_time(&state, 100).tasks_run, 1);
        assert!(drain_picker_commands(&state).is_empty());
        assert!(state.with_session(|s| s.registry().get("2").unwrap().is_editing()));
    }
}
