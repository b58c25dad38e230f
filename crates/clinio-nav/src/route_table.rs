//! Immutable route lookup derived from the navigation catalog.

use clinio_types::api_adapter::RouteGrant;
use clinio_types::nav::NavCatalog;
use clinio_types::paths;

use crate::prelude::*;

/// A static route: path, human label and icon identifier.
///
/// The match predicate is positional: a path matches the definition when
/// it equals the definition's path or is a `/`-delimited descendant of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
	pub path: Box<str>,
	pub label: Box<str>,
	pub icon: Box<str>,
}

/// Flattened route lookup, built once at startup.
///
/// Definitions are kept sorted by path length descending so that
/// longest-prefix resolution (a tab owning `/agenda` vs `/agenda/marcar`)
/// is deterministic.
#[derive(Debug)]
pub struct RouteTable {
	defs: Vec<RouteDefinition>,
}

impl RouteTable {
	/// Flattens the catalog. Route paths must be unique.
	pub fn from_catalog(catalog: &NavCatalog) -> ClResult<Self> {
		let mut defs: Vec<RouteDefinition> = Vec::new();
		for item in catalog.iter_items() {
			let path = paths::normalize(&item.to);
			if defs.iter().any(|def| def.path == path) {
				return Err(Error::Config(format!("duplicate route path: {}", path)));
			}
			defs.push(RouteDefinition {
				path,
				label: item.label.clone(),
				icon: item.icon.clone(),
			});
		}
		defs.sort_by(|a, b| b.path.len().cmp(&a.path.len()).then_with(|| a.path.cmp(&b.path)));
		Ok(Self { defs })
	}

	/// Resolves a normalized path to the longest matching definition.
	pub fn resolve(&self, path: &str) -> Option<&RouteDefinition> {
		self.defs.iter().find(|def| paths::is_under(path, &def.path))
	}

	/// True when a definition exists with exactly this path.
	pub fn contains(&self, path: &str) -> bool {
		self.defs.iter().any(|def| def.path.as_ref() == path)
	}

	pub fn definitions(&self) -> &[RouteDefinition] {
		&self.defs
	}

	/// The grants pushed to the server privilege registry.
	pub fn privilege_grants(&self) -> Vec<RouteGrant> {
		self.defs
			.iter()
			.map(|def| RouteGrant { path: def.path.clone(), label: def.label.clone() })
			.collect()
	}
}


// vim: ts=4
