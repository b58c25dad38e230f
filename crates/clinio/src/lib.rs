//! Clinio is the session and navigation core of a clinic-management
//! browser front-end.
//!
//! # Features
//!
//! - Authentication lifecycle
//!     - login with "remember me" credential custody
//!     - silent session restore from persisted credentials
//!     - global expiry handling, exactly once per session
//! - Role-gated navigation
//!     - fine-grained route grants with coarse module-flag fallback
//!     - per-navigation guard with forced-password-change lock
//! - Tab sessions
//!     - ordered, capacity-bounded open-page tabs per user
//!     - pinned tabs persisted across sessions
//! - Keep-alive route views
//!     - visited authorized views stay mounted while hidden
//!
//! The embedding UI shell supplies the HTTP client, the two storage
//! scopes, the notifier and the navigator through the adapter traits in
//! [`clinio_types`], and drives everything through [`app::AppState`].

pub mod app;

mod prelude;

pub use app::{App, AppBuilder, AppState, VERSION};

// Re-export shared types and adapter traits from clinio-types
pub use clinio_types::api_adapter;
pub use clinio_types::error;
pub use clinio_types::nav;
pub use clinio_types::paths;
pub use clinio_types::session;
pub use clinio_types::store_adapter;
pub use clinio_types::tab;
pub use clinio_types::ui_adapter;
pub use clinio_types::user;

// Re-export the navigation, tab and session subsystems
pub use clinio_nav::{guard, policy, route_table, view_cache};
pub use clinio_session::{SessionStore, INVALID_CREDENTIALS};
pub use clinio_tabs::{CloseOutcome, ObserveOutcome, TabManager, MAX_TABS};

// vim: ts=4
