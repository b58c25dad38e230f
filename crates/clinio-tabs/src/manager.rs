//! The tab manager.

use parking_lot::Mutex;
use std::sync::Arc;

use clinio_nav::route_table::RouteTable;
use clinio_types::paths;
use clinio_types::store_adapter::StoreScope;
use clinio_types::tab::Tab;
use clinio_types::ui_adapter::Notifier;

use crate::persist;
use crate::prelude::*;

/// Maximum number of simultaneously open tabs.
pub const MAX_TABS: usize = 5;

/// Advisory shown when an open is rejected at capacity.
pub const CAPACITY_NOTICE: &str =
	"Limite de abas abertas atingido. Feche uma aba para abrir outra página.";

/// Outcome of observing a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserveOutcome {
	/// Always-open path or no matching route definition; nothing changed.
	Ignored,
	/// A tab for the resolved route already exists; no duplicate, no
	/// reorder.
	AlreadyOpen,
	Opened,
	/// The open set is at capacity; the observation was rejected, not
	/// evicted into.
	Rejected,
}

/// Outcome of closing a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
	/// No tab with that path was open.
	NotOpen,
	/// Removed; the closed tab was not the active one.
	Closed,
	/// Removed the active tab; the caller should move focus to `focus`
	/// (left neighbor, else right neighbor, else the dashboard).
	ClosedActive { focus: Box<str> },
}

#[derive(Debug, Default)]
struct TabState {
	username: Option<Box<str>>,
	tabs: Vec<Tab>,
}

/// Ordered set of open tabs for the current user.
///
/// Mutation happens only through the operations below; every mutation
/// rewrites the persisted pinned subset for the session's username.
pub struct TabManager {
	table: Arc<RouteTable>,
	store: Arc<dyn StoreScope>,
	notifier: Arc<dyn Notifier>,
	state: Mutex<TabState>,
}

impl TabManager {
	pub fn new(
		table: Arc<RouteTable>,
		store: Arc<dyn StoreScope>,
		notifier: Arc<dyn Notifier>,
	) -> Self {
		Self { table, store, notifier, state: Mutex::new(TabState::default()) }
	}

	/// Starts a tab session for `username`, hydrating persisted pinned
	/// tabs. Replaces whatever set the previous user left in memory.
	pub fn start_session(&self, username: &str) {
		let mut tabs = persist::load_pinned(self.store.as_ref(), username, &self.table);
		if tabs.len() > MAX_TABS {
			tabs.truncate(MAX_TABS);
		}
		debug!("tab session for {}: {} pinned tab(s) restored", username, tabs.len());
		let mut state = self.state.lock();
		state.username = Some(Box::from(username));
		state.tabs = tabs;
	}

	/// Clears the in-memory set. Persisted pinned tabs are left alone so
	/// they survive to the user's next session.
	pub fn clear(&self) {
		let mut state = self.state.lock();
		state.username = None;
		state.tabs.clear();
	}

	/// Observes an authorized navigation, possibly opening a tab.
	pub fn observe(&self, requested: &str) -> ObserveOutcome {
		let path = paths::normalize(requested);
		if matches!(path.as_ref(), paths::LOGIN | paths::PASSWORD_CHANGE | paths::DASHBOARD) {
			return ObserveOutcome::Ignored;
		}
		let Some(def) = self.table.resolve(&path) else {
			return ObserveOutcome::Ignored;
		};

		let mut state = self.state.lock();
		if state.tabs.iter().any(|tab| tab.path == def.path) {
			return ObserveOutcome::AlreadyOpen;
		}
		if state.tabs.len() >= MAX_TABS {
			drop(state);
			self.notifier.warn(CAPACITY_NOTICE);
			return ObserveOutcome::Rejected;
		}
		state.tabs.push(Tab {
			path: def.path.clone(),
			title: def.label.clone(),
			icon: def.icon.clone(),
			pinned: false,
		});
		self.store_pinned(&state);
		ObserveOutcome::Opened
	}

	/// Closes the tab with exactly `path`, pinned or not.
	///
	/// `active_path` is the currently rendered location; when it falls
	/// under the closed tab the result names the tab that should take
	/// focus.
	pub fn close_tab(&self, path: &str, active_path: &str) -> CloseOutcome {
		let mut state = self.state.lock();
		let Some(index) = state.tabs.iter().position(|tab| tab.path.as_ref() == path) else {
			return CloseOutcome::NotOpen;
		};
		let closed = state.tabs.remove(index);
		self.store_pinned(&state);

		let active = paths::normalize(active_path);
		if !paths::is_under(&active, &closed.path) {
			return CloseOutcome::Closed;
		}
		let focus = if index > 0 {
			state.tabs[index - 1].path.clone()
		} else if let Some(right) = state.tabs.first() {
			right.path.clone()
		} else {
			Box::from(paths::DASHBOARD)
		};
		CloseOutcome::ClosedActive { focus }
	}

	/// Flips the pinned flag of the tab with exactly `path`. Order is
	/// unchanged.
	pub fn toggle_pin(&self, path: &str) {
		let mut state = self.state.lock();
		if let Some(tab) = state.tabs.iter_mut().find(|tab| tab.path.as_ref() == path) {
			tab.pinned = !tab.pinned;
			self.store_pinned(&state);
		}
	}

	/// Relocates one tab within the order. Equal or out-of-range indices
	/// leave the set unchanged (the drag-and-drop source is trusted to
	/// pass live indices).
	pub fn move_tab(&self, from: usize, to: usize) {
		let mut state = self.state.lock();
		if from == to || from >= state.tabs.len() || to >= state.tabs.len() {
			return;
		}
		let tab = state.tabs.remove(from);
		state.tabs.insert(to, tab);
		self.store_pinned(&state);
	}

	/// Snapshot of the open set, in tab-bar order.
	pub fn tabs(&self) -> Vec<Tab> {
		self.state.lock().tabs.clone()
	}

	pub fn len(&self) -> usize {
		self.state.lock().tabs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.state.lock().tabs.is_empty()
	}

	fn store_pinned(&self, state: &TabState) {
		if let Some(username) = &state.username {
			persist::store_pinned(self.store.as_ref(), username, &state.tabs);
		}
	}
}

impl std::fmt::Debug for TabManager {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("TabManager").field("state", &self.state).finish_non_exhaustive()
	}
}


// vim: ts=4
