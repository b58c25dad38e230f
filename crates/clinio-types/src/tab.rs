//! Open-page tabs.

/// A user-visible shortcut to a previously visited, access-granted route.
///
/// Identity is the canonical route path: the open set holds at most one
/// tab per path. `icon` is a stable identifier (never serialized; it is
/// re-derived from the route catalog on hydration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
	pub path: Box<str>,
	pub title: Box<str>,
	pub icon: Box<str>,
	/// Pinned tabs survive across sessions via persisted storage.
	pub pinned: bool,
}
