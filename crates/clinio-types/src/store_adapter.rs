//! Key/value storage scopes backing credentials and pinned tabs.
//!
//! Two scopes exist: a durable one that survives a browser restart (used
//! when "remember me" is chosen) and a session-only one cleared when the
//! tab closes. Both hold plain strings; payload encoding is the caller's
//! concern.

use std::fmt::Debug;

/// Storage key holding the bearer credential in either scope.
pub const CREDENTIAL_KEY: &str = "clinio.credential";

/// Session-scope key holding the pinned tabs of one user.
///
/// Keyed by username so a different user on the same machine never sees
/// another's tabs.
pub fn tab_key(username: &str) -> String {
	format!("clinio.tabs.{}", username)
}

/// A single string-keyed storage scope.
///
/// Models the browser's local/session storage: in-process, synchronous
/// and infallible. Persisted UI convenience data must never block
/// usability, so there is no error channel here.
pub trait StoreScope: Debug + Send + Sync {
	fn get(&self, key: &str) -> Option<Box<str>>;
	fn set(&self, key: &str, value: &str);
	fn remove(&self, key: &str);
}

// vim: ts=4
