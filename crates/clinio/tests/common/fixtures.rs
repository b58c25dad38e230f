//! Reusable test fixtures and test data
//!
//! Shared catalog and account data used across the integration tests so
//! scenarios stay consistent between files.

use clinio::nav::{NavCatalog, NavItem, NavModule};
use clinio::user::User;

fn item(to: &str, label: &str, icon: &str) -> NavItem {
	NavItem { to: to.into(), label: label.into(), icon: icon.into() }
}

/// The clinic menu catalog used by every scenario.
pub fn clinic_catalog() -> NavCatalog {
	NavCatalog {
		modules: vec![
			NavModule {
				key: "atendimento".into(),
				label: "Atendimento".into(),
				icon: "stethoscope".into(),
				items: vec![
					item("/atendimento", "Atendimento", "stethoscope"),
					item("/pacientes", "Pacientes", "users"),
				],
			},
			NavModule {
				key: "agenda".into(),
				label: "Agenda".into(),
				icon: "calendar".into(),
				items: vec![
					item("/agenda", "Agenda", "calendar"),
					item("/agenda/marcar", "Marcar consulta", "calendar-plus"),
				],
			},
			NavModule {
				key: "sistema".into(),
				label: "Sistema".into(),
				icon: "gear".into(),
				items: vec![
					item("/operadores", "Operadores", "id-badge"),
					item("/profissionais", "Profissionais", "user-doctor"),
					item("/especialidades", "Especialidades", "tags"),
					item("/convenios", "Convênios", "handshake"),
					item("/clinica", "Clínica", "hospital"),
				],
			},
			NavModule {
				key: "configuracoes".into(),
				label: "Configurações".into(),
				icon: "sliders".into(),
				items: vec![item("/configuracoes", "Configurações", "sliders")],
			},
		],
	}
}

pub fn user(json: serde_json::Value) -> User {
	serde_json::from_value(json).unwrap()
}

/// Superuser account.
pub fn admin() -> User {
	user(serde_json::json!({ "id": 1, "username": "admin", "is_superuser": true }))
}

/// Broad fine-grained grants; enough open routes for the capacity
/// scenarios.
pub fn maria() -> User {
	user(serde_json::json!({
		"id": 2,
		"username": "maria",
		"allowed_routes": [
			"/pacientes", "/operadores", "/profissionais",
			"/especialidades", "/convenios", "/clinica", "/agenda"
		]
	}))
}

/// Single fine-grained grant; used for the access-denial scenarios.
pub fn carlos() -> User {
	user(serde_json::json!({
		"id": 3,
		"username": "carlos",
		"allowed_routes": ["/pacientes"]
	}))
}

/// Flagged for a forced password change.
pub fn rita() -> User {
	user(serde_json::json!({
		"id": 4,
		"username": "rita",
		"is_superuser": false,
		"force_password_change": true,
		"allowed_routes": ["/pacientes"]
	}))
}

// vim: ts=4
