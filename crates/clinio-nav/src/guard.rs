//! Per-navigation authorization gate.
//!
//! Evaluated on every route render, in strict order, first match wins.
//! The guard itself never navigates; it returns a decision the embedding
//! router applies (redirects use "replace" semantics).

use parking_lot::Mutex;
use std::sync::Arc;

use clinio_types::paths;
use clinio_types::session::SessionPhase;
use clinio_types::ui_adapter::Notifier;
use clinio_types::user::User;

use crate::policy;
use crate::prelude::*;

/// Advisory shown when an authenticated user hits a route outside their
/// grants.
pub const ACCESS_DENIED_NOTICE: &str = "Você não tem permissão para acessar esta página.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
	/// Credential restoration is pending; render a loading indicator.
	Loading,
	/// Not authenticated. Return to the public entry, carrying the
	/// originally requested location for the post-login redirect.
	RedirectToLogin { from: Box<str> },
	/// Replace-navigate to `to`.
	Redirect { to: Box<str> },
	/// Render the requested content unchanged.
	Render,
}

pub struct RouteGuard {
	notifier: Arc<dyn Notifier>,
	/// Last denied path, for deduplicating the advisory. Tracking one
	/// path (not a set) means the same denied path twice in a row warns
	/// once, while a different denied path warns again.
	last_denied: Mutex<Option<Box<str>>>,
}

impl RouteGuard {
	pub fn new(notifier: Arc<dyn Notifier>) -> Self {
		Self { notifier, last_denied: Mutex::new(None) }
	}

	pub fn evaluate(
		&self,
		phase: SessionPhase,
		user: Option<&User>,
		requested: &str,
	) -> GuardDecision {
		if phase == SessionPhase::Restoring {
			return GuardDecision::Loading;
		}
		let Some(user) = user.filter(|_| phase == SessionPhase::Authenticated) else {
			return GuardDecision::RedirectToLogin { from: Box::from(requested) };
		};

		let path = paths::normalize(requested);

		// Absolute lock: a forced password change makes its page the only
		// reachable route; once cleared, a stale link to it bounces back.
		if user.force_password_change && path.as_ref() != paths::PASSWORD_CHANGE {
			return GuardDecision::Redirect { to: Box::from(paths::PASSWORD_CHANGE) };
		}
		if !user.force_password_change && path.as_ref() == paths::PASSWORD_CHANGE {
			return GuardDecision::Redirect { to: Box::from(paths::DASHBOARD) };
		}

		let denied = !user.is_superuser && !policy::can_access_route(user, &path);
		if denied {
			let mut last = self.last_denied.lock();
			if last.as_deref() != Some(path.as_ref()) {
				debug!("access denied: user={} path={}", user.username, path);
				self.notifier.warn(ACCESS_DENIED_NOTICE);
			}
			*last = Some(path);
			return GuardDecision::Redirect { to: Box::from(paths::DASHBOARD) };
		}

		*self.last_denied.lock() = None;
		GuardDecision::Render
	}
}


// vim: ts=4
