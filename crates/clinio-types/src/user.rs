//! The authenticated user profile, as served by the clinic API.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Profile of the authenticated operator.
///
/// Read-only to the core: it is deserialized from the current-user endpoint
/// and never mutated locally. Access semantics: `is_superuser` bypasses all
/// checks; a non-empty `allowed_routes` list is authoritative for
/// route-level decisions; the coarse `acesso_*` flags apply only when the
/// fine-grained list is empty.
#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
	pub id: i64,
	pub username: Box<str>,
	pub name: Option<Box<str>>,
	#[serde(default)]
	pub is_superuser: bool,
	/// Set by the server after an administrative password reset. While set,
	/// the password-change page is the only reachable route.
	#[serde(default)]
	pub force_password_change: bool,
	#[serde(default)]
	pub acesso_atendimento: bool,
	#[serde(default)]
	pub acesso_agendamento: bool,
	#[serde(default)]
	pub acesso_cadastros: bool,
	#[serde(default)]
	pub acesso_configuracoes: bool,
	/// Fine-grained route grants: exact path prefixes assigned to this user.
	#[serde(default)]
	pub allowed_routes: Vec<Box<str>>,
}

impl User {
	pub fn has_fine_grained_routes(&self) -> bool {
		!self.allowed_routes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_minimal_profile() {
		let user: User = serde_json::from_str(
			r#"{ "id": 7, "username": "maria" }"#,
		)
		.unwrap();

		assert_eq!(user.username.as_ref(), "maria");
		assert!(!user.is_superuser);
		assert!(!user.force_password_change);
		assert!(user.allowed_routes.is_empty());
	}

	#[test]
	fn deserializes_fine_grained_routes() {
		let user: User = serde_json::from_str(
			r#"{
				"id": 3,
				"username": "carlos",
				"acesso_agendamento": true,
				"allowed_routes": ["/pacientes", "/agenda"]
			}"#,
		)
		.unwrap();

		assert!(user.has_fine_grained_routes());
		assert_eq!(user.allowed_routes.len(), 2);
		assert!(user.acesso_agendamento);
	}
}

// vim: ts=4
