//! Ordered, capacity-bounded, persisted set of open page tabs.
//!
//! One tab set exists per authenticated user. Tabs open by observing
//! authorized navigations, never beyond [`MAX_TABS`]; pinned tabs survive
//! across sessions through the session-scope store, keyed by username.
//! All operations are synchronous and I/O-free — the backing store models
//! browser storage, which is in-process.

pub mod manager;
mod persist;

mod prelude;

pub use manager::{CloseOutcome, ObserveOutcome, TabManager, MAX_TABS};

// vim: ts=4
