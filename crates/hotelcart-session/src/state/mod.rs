//! # State Module
//!
//! The session state every command runs against.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  SessionState ── Arc<Mutex<CartSession>> ── cloned into every caller   │
//! │                              │                                          │
//! │       ┌──────────┬───────────┼────────────┬──────────────┐              │
//! │       ▼          ▼           ▼            ▼              ▼              │
//! │  RoomStore  CardRegistry  DeferredQueue  DrawerState  ThemeController   │
//! │                              │                           │              │
//! │                              ▼                           ▼              │
//! │                        PickerOutbox               DocumentTheme         │
//! │                        (host bridge)              (host bridge)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod bridge;
mod session;

pub use bridge::{BridgedPicker, DocumentTheme, PickerCommand, PickerOutbox};
pub use session::{CartSession, SessionState, ThemeView};
