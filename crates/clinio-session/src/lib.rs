//! Session store: the authentication lifecycle of the Clinio front-end.
//!
//! One store owns the process-wide authentication state — current user,
//! bearer credential custody across the two storage scopes, and the
//! `Unauthenticated → Restoring → Authenticated / Expired` machine. Page
//! code never mutates any of this directly; everything goes through the
//! operations on [`SessionStore`].

pub mod store;

mod prelude;

pub use store::{SessionStore, INVALID_CREDENTIALS};

// vim: ts=4
