//! Adapter boundary for the clinic API HTTP client.
//!
//! The HTTP client is an external collaborator: it attaches the bearer
//! credential to every request, exposes the three logical endpoints the
//! core consumes, and runs a global unauthorized-response observer as a
//! first-class response transform. The observer contract guarantees it
//! fires before any per-call error handler sees the same failed response.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Weak;

use crate::prelude::*;
use crate::user::User;

/// One route pushed to the server-side privilege registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteGrant {
	pub path: Box<str>,
	pub label: Box<str>,
}

/// Observer invoked once per authorization-failure response.
pub trait UnauthorizedObserver: Send + Sync {
	fn on_unauthorized(&self);
}

/// A Clinio API adapter.
///
/// Implementations wrap the HTTP client used against the clinic backend.
/// All sensitive credential handling stays behind this trait.
#[async_trait]
pub trait ApiAdapter: Debug + Send + Sync {
	/// Attaches (or clears, with `None`) the bearer credential sent with
	/// every subsequent request.
	fn set_bearer(&self, token: Option<&str>);

	/// Installs the global unauthorized-response observer.
	///
	/// Registration replaces any previous observer, so re-initialization
	/// of the session store cannot leave a duplicate registration behind.
	/// The adapter holds the observer weakly and drops it silently once
	/// the owner is gone.
	fn set_unauthorized_observer(&self, observer: Weak<dyn UnauthorizedObserver>);

	/// Removes the unauthorized-response observer.
	fn clear_unauthorized_observer(&self);

	/// Exchanges credentials for a bearer token.
	///
	/// A rejection carries the server payload's user-facing message as
	/// [`Error::Auth`].
	async fn login(&self, username: &str, password: &str) -> ClResult<Box<str>>;

	/// Fetches the profile of the user owning the current bearer.
	async fn fetch_current_user(&self) -> ClResult<User>;

	/// Pushes the flattened route catalog to the server privilege
	/// registry. Callers treat this as best-effort and ignore failures.
	async fn sync_privilege_catalog(&self, grants: &[RouteGrant]) -> ClResult<()>;
}

// vim: ts=4
