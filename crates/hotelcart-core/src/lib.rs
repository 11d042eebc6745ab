//! # hotelcart-core: Pure Cart Model for Hotel Cart
//!
//! This crate holds the state behind the hotel cart web components: the room
//! store, grouping and totals, the per-card edit/delete state machine, the
//! drawer flag and the theme preference. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Components                               │   │
//! │  │   cart-drawer ──► cart-list ──► cart-group ──► cart-card        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / views (JSON)                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hotelcart-session                            │   │
//! │  │    CartSession, SessionState, commands, config, logging         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ hotelcart-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌──────────┐ ┌───────┐  │   │
//! │  │   │  store  │ │ grouping │ │  card   │ │ registry │ │ theme │  │   │
//! │  │   └─────────┘ └──────────┘ └─────────┘ └──────────┘ └───────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO THREADS                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `RoomRecord`, `DateField`
//! - [`money`] - Integer money for prices and subtotals
//! - [`dates`] - Nights arithmetic, date parsing and display format
//! - [`store`] - Copy-on-write room store
//! - [`grouping`] - Group by hotel, subtotals
//! - [`card`] - Per-card edit/delete state machine
//! - [`registry`] - Owns the cards, enforces one open delete overlay
//! - [`schedule`] - Virtual-time deferred task queue
//! - [`drawer`] - Drawer open/closed flag
//! - [`theme`] - Light/dark preference
//! - [`views`] - Serializable view models
//! - [`validation`] - Optional strict record checks
//! - [`seed`] - Initial cart contents
//!
//! ## Example Usage
//!
//! ```rust
//! use hotelcart_core::{group_by_hotel, Money, RoomStore};
//!
//! let mut store = RoomStore::seeded();
//! assert_eq!(group_by_hotel(store.rooms()).len(), 4);
//! assert_eq!(store.subtotal(), Money::from_whole(1940));
//!
//! store.delete_room("3");
//! store.delete_room("3");
//! assert_eq!(group_by_hotel(store.rooms()).len(), 3);
//! ```

use std::time::Duration;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod card;
pub mod dates;
pub mod drawer;
pub mod error;
pub mod grouping;
pub mod money;
pub mod registry;
pub mod schedule;
pub mod seed;
pub mod store;
pub mod theme;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use card::{CardEvent, CardMode, CardTask, CartCard, DatePicker, PickerFactory, PickerRequest};
pub use dates::{format_display_date, nights_between};
pub use drawer::DrawerState;
pub use error::{CoreError, CoreResult, ValidationError};
pub use grouping::{group_by_hotel, subtotal, HotelGroup};
pub use money::Money;
pub use registry::CardRegistry;
pub use schedule::{DeferredQueue, TaskHandle};
pub use store::RoomStore;
pub use theme::{PreferenceStore, PresentationContext, Theme, ThemeController};
pub use types::{DateField, RoomRecord};
pub use views::{CardView, CartView, DrawerView, GroupView};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest adult count reachable through the guest counter.
pub const MIN_ADULTS: u32 = 1;

/// Wait between entering edit mode and attaching the date pickers, so the
/// inputs exist by the time the pickers look for them.
pub const PICKER_INIT_DELAY: Duration = Duration::from_millis(50);
