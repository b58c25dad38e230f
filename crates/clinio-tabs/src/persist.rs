//! Persisted form of pinned tabs.
//!
//! Only `path` and `title` are stored: the icon is a presentation
//! identifier re-derived from the route catalog on hydration, and
//! `pinned` is implied (unpinned tabs are never written).

use serde::{Deserialize, Serialize};

use clinio_nav::route_table::RouteTable;
use clinio_types::paths;
use clinio_types::store_adapter::{tab_key, StoreScope};
use clinio_types::tab::Tab;

use crate::prelude::*;

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct PersistedTab {
	pub path: Box<str>,
	pub title: Box<str>,
}

/// Writes the pinned subset of `tabs` for `username`.
pub(crate) fn store_pinned(store: &dyn StoreScope, username: &str, tabs: &[Tab]) {
	let pinned: Vec<PersistedTab> = tabs
		.iter()
		.filter(|tab| tab.pinned)
		.map(|tab| PersistedTab { path: tab.path.clone(), title: tab.title.clone() })
		.collect();
	match serde_json::to_string(&pinned) {
		Ok(payload) => store.set(&tab_key(username), &payload),
		Err(err) => debug!("skipping pinned-tab write for {}: {}", username, err),
	}
}

/// Reads the pinned tabs persisted for `username`.
///
/// Corrupt payloads reset to an empty set — persisted UI convenience data
/// must never block a session start. Entries whose path no longer matches
/// a route definition, or that point at the dashboard, are dropped
/// silently so catalog changes cannot crash the restore.
pub(crate) fn load_pinned(store: &dyn StoreScope, username: &str, table: &RouteTable) -> Vec<Tab> {
	let Some(payload) = store.get(&tab_key(username)) else {
		return Vec::new();
	};
	let persisted: Vec<PersistedTab> = match serde_json::from_str(&payload) {
		Ok(persisted) => persisted,
		Err(err) => {
			debug!("resetting unparsable pinned tabs for {}: {}", username, err);
			return Vec::new();
		}
	};

	let mut tabs: Vec<Tab> = Vec::new();
	for entry in persisted {
		let path = paths::normalize(&entry.path);
		if path.as_ref() == paths::DASHBOARD {
			continue;
		}
		let Some(def) = table.resolve(&path).filter(|def| def.path == path) else {
			debug!("dropping persisted tab with unknown route: {}", path);
			continue;
		};
		if tabs.iter().any(|tab: &Tab| tab.path == path) {
			continue;
		}
		tabs.push(Tab { path, title: entry.title, icon: def.icon.clone(), pinned: true });
	}
	tabs
}

// vim: ts=4
