//! Presentation-boundary collaborators.

/// Advisory, user-visible notification channel.
///
/// This is the only path on which the core surfaces a failure to the
/// user (access denied, tab capacity reached). Nothing here escalates
/// into a hard error.
pub trait Notifier: Send + Sync {
	fn warn(&self, message: &str);
}

/// Hard navigation performed outside the route library.
///
/// Used for the logout and session-expiry redirects, which bypass the
/// in-app history ("replace" semantics).
pub trait Navigator: Send + Sync {
	fn replace(&self, to: &str);
}

// vim: ts=4
