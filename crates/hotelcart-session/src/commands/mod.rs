//! # Commands Module
//!
//! Every action the cart components can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart contents, store mutations
//! ├── card.rs     ◄─── Per-card edit and delete actions
//! ├── picker.rs   ◄─── Virtual clock, picker instructions
//! ├── drawer.rs   ◄─── Drawer open/close
//! └── theme.rs    ◄─── Light/dark toggle
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Component                                                              │
//! │  ─────────                                                              │
//! │  invoke('toggle_edit', { id: '1' })                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  pub fn toggle_edit(                                                    │
//! │      state: &SessionState,    ◄── Shared session                        │
//! │      id: &str,                ◄── From invoke params                    │
//! │  ) -> Result<CartView, ApiError>                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Component re-renders from the returned view                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes the session lock once and runs to completion under it.

pub mod card;
pub mod cart;
pub mod drawer;
pub mod picker;
pub mod theme;
