//! Declarative navigation catalog.
//!
//! The catalog is external configuration consumed, not produced, by the
//! core: a list of modules, each grouping route items behind one coarse
//! access flag. The route table and the access policy both derive their
//! working tables from this single catalog — it is the sole source of
//! truth for which routes exist.

use serde::{Deserialize, Serialize};

/// One navigable route inside a module.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavItem {
	pub to: Box<str>,
	pub label: Box<str>,
	/// Stable icon identifier, resolved to a glyph at the presentation
	/// boundary. The core never interprets it.
	pub icon: Box<str>,
}

/// A named group of related routes sharing one coarse access flag.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavModule {
	pub key: Box<str>,
	pub label: Box<str>,
	pub icon: Box<str>,
	pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavCatalog {
	pub modules: Vec<NavModule>,
}

impl NavCatalog {
	/// Iterates every route item across all modules, in catalog order.
	pub fn iter_items(&self) -> impl Iterator<Item = &NavItem> {
		self.modules.iter().flat_map(|module| module.items.iter())
	}
}

// vim: ts=4
