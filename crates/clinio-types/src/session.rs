//! Authentication lifecycle states.

/// Lifecycle of the process-wide session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
	/// No credential. The public entry route is the only destination.
	Unauthenticated,
	/// A persisted credential is being validated against the profile
	/// endpoint; the interface shows a loading state meanwhile.
	Restoring,
	Authenticated,
	/// The credential was rejected mid-session; logout and a hard
	/// redirect have already been triggered, exactly once.
	Expired,
}

// vim: ts=4
