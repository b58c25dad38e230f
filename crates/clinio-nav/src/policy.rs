//! Pure access decisions over the user profile.
//!
//! No state, no I/O: safe to call on every render. All path arguments
//! must already be normalized (see [`clinio_types::paths::normalize`]).

use clinio_types::nav::{NavCatalog, NavModule};
use clinio_types::paths;
use clinio_types::user::User;

/// Route-level access decision.
///
/// Superusers pass unconditionally, as does the dashboard (universal
/// landing page). With a fine-grained grant list the path must equal or
/// sit under some granted prefix. Under the coarse regime only the
/// `/configuracoes` subtree is decidable by a flag; every other
/// non-dashboard path is denied by default.
pub fn can_access_route(user: &User, path: &str) -> bool {
	if user.is_superuser {
		return true;
	}
	if path == paths::DASHBOARD {
		return true;
	}
	if user.has_fine_grained_routes() {
		return user
			.allowed_routes
			.iter()
			.any(|granted| paths::is_under(path, &paths::normalize(granted)));
	}
	if paths::is_under(path, "/configuracoes") {
		return user.acesso_configuracoes;
	}
	false
}

/// Module visibility for the navigation menu.
///
/// With a fine-grained grant list a module is visible when at least one
/// of its routes is reachable; otherwise one coarse flag decides per
/// module key, and unknown keys stay hidden.
pub fn can_access_module(user: &User, module: &NavModule) -> bool {
	if user.is_superuser {
		return true;
	}
	if user.has_fine_grained_routes() {
		return module
			.items
			.iter()
			.any(|item| can_access_route(user, &paths::normalize(&item.to)));
	}
	match module.key.as_ref() {
		"agenda" => user.acesso_agendamento,
		"atendimento" => user.acesso_atendimento,
		"sistema" => user.acesso_cadastros,
		_ => false,
	}
}

/// The modules the user may see, in catalog order.
pub fn visible_modules<'a>(user: &User, catalog: &'a NavCatalog) -> Vec<&'a NavModule> {
	catalog.modules.iter().filter(|module| can_access_module(user, module)).collect()
}


// vim: ts=4
