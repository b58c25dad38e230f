//! Keep-alive cache of authorized route views.
//!
//! Switching between open tabs must not discard component state (half
//! filled forms, scroll position), so every authorized path visited since
//! the session view mounted stays mounted: only the view matching the
//! current path is shown, the rest are hidden. Memory is traded for state
//! continuity, bounded naturally by the open-tab limit plus one.

use parking_lot::Mutex;
use std::collections::HashMap;

/// One mounted route view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSlot {
	pub path: Box<str>,
	/// Only the active view is visible; inactive slots stay mounted but
	/// hidden, preserving their internal state.
	pub active: bool,
}

#[derive(Debug, Default)]
struct CacheState {
	current: Option<Box<str>>,
	/// Last-visited sub-path per open tab, keyed by the tab's canonical
	/// path. One slot per tab: a deeper visit under the same tab replaces
	/// the tab's previous sub-path.
	by_tab: HashMap<Box<str>, Box<str>>,
}

#[derive(Debug, Default)]
pub struct RouteViewCache {
	state: Mutex<CacheState>,
}

impl RouteViewCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an authorized visit. `tab_path` is the canonical path of
	/// the open tab owning this location, if any.
	pub fn visit(&self, path: &str, tab_path: Option<&str>) {
		let mut state = self.state.lock();
		state.current = Some(Box::from(path));
		if let Some(tab) = tab_path {
			state.by_tab.insert(Box::from(tab), Box::from(path));
		}
	}

	/// Collapses the cache to exactly one public path. Used while the
	/// user is unauthenticated or confined to the password-change route.
	pub fn collapse(&self, only: &str) {
		let mut state = self.state.lock();
		state.by_tab.clear();
		state.current = Some(Box::from(only));
	}

	/// Drops the slot owned by a closed tab.
	pub fn evict_tab(&self, tab_path: &str) {
		self.state.lock().by_tab.remove(tab_path);
	}

	pub fn clear(&self) {
		let mut state = self.state.lock();
		state.by_tab.clear();
		state.current = None;
	}

	/// Every cached path; the slot matching the current path is active.
	/// Hidden slots come first in stable (sorted) order, the active one
	/// last.
	pub fn views(&self) -> Vec<ViewSlot> {
		let state = self.state.lock();
		let mut slots: Vec<ViewSlot> = state
			.by_tab
			.values()
			.filter(|path| Some(path.as_ref()) != state.current.as_deref())
			.map(|path| ViewSlot { path: path.clone(), active: false })
			.collect();
		slots.sort_by(|a, b| a.path.cmp(&b.path));
		if let Some(current) = &state.current {
			slots.push(ViewSlot { path: current.clone(), active: true });
		}
		slots
	}

	pub fn len(&self) -> usize {
		self.views().len()
	}

	pub fn is_empty(&self) -> bool {
		self.state.lock().current.is_none()
	}
}


// vim: ts=4
