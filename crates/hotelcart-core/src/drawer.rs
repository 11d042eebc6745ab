//! # Drawer Visibility
//!
//! The slide-out cart drawer is a single flag. The summary it shows is not
//! stored here; it is derived from the store each time the drawer renders
//! (see [`DrawerView`](crate::views::DrawerView)).

use serde::{Deserialize, Serialize};

/// Open/closed state of the cart drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerState {
    is_open: bool,
}

impl DrawerState {
    pub fn new() -> Self {
        DrawerState::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Also bound to the backdrop and the close button.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}
