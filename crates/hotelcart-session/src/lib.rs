//! # Hotel Cart Session Library
//!
//! Application layer for the hotel cart: one session per cart page, the
//! commands the components invoke, and the ambient stack (logging,
//! configuration, preference storage).
//!
//! ## Module Organization
//! ```text
//! hotelcart_session/
//! ├── lib.rs          ◄─── You are here (bootstrap & logging)
//! ├── config.rs       ◄─── SessionConfig from environment
//! ├── prefs.rs        ◄─── JSON preference file
//! ├── error.rs        ◄─── API error type for commands
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── CartSession, SessionState
//! │   └── bridge.rs   ◄─── Picker outbox, document theme
//! └── commands/
//!     ├── cart.rs     ◄─── get_cart, update_room, delete_room
//!     ├── card.rs     ◄─── edit / delete actions per card
//!     ├── picker.rs   ◄─── advance_time, drain_picker_commands
//!     ├── drawer.rs   ◄─── open / close / toggle
//!     └── theme.rs    ◄─── get_theme, toggle_theme
//! ```
//!
//! ## Startup
//! ```rust,no_run
//! use hotelcart_session::commands::cart::get_cart;
//! use hotelcart_session::{bootstrap, config::SessionConfig, init_tracing};
//!
//! let config = SessionConfig::from_env();
//! init_tracing(&config.log_filter);
//!
//! let state = bootstrap(config);
//! assert_eq!(get_cart(&state).item_count, 6);
//! ```

use hotelcart_core::RoomStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;
pub mod error;
pub mod prefs;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::{CartSession, SessionState};

use config::SessionConfig;
use prefs::SessionPreferences;

/// Builds the shared session over the seed cart, with preferences at the
/// configured location.
pub fn bootstrap(config: SessionConfig) -> SessionState {
    info!(
        currency = %config.currency_symbol,
        picker_delay_ms = config.picker_delay_ms,
        "Starting hotel cart session"
    );
    let prefs = SessionPreferences::from_config(&config);
    SessionState::new(CartSession::new(config, RoomStore::seeded(), prefs))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hotelcart_session=trace` - Trace for the session only
/// - Default: `default_filter` (see `HOTELCART_LOG`)
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
