//! The session store.

use parking_lot::RwLock;
use std::sync::Arc;

use clinio_types::api_adapter::{ApiAdapter, RouteGrant};
use clinio_types::paths;
use clinio_types::session::SessionPhase;
use clinio_types::store_adapter::{StoreScope, CREDENTIAL_KEY};
use clinio_types::ui_adapter::Navigator;
use clinio_types::user::User;

use crate::prelude::*;

/// Fallback shown when the server rejects a login without a usable
/// message.
pub const INVALID_CREDENTIALS: &str = "Usuário ou senha inválidos.";

struct SessionState {
	phase: SessionPhase,
	user: Option<Arc<User>>,
}

impl Default for SessionState {
	fn default() -> Self {
		Self { phase: SessionPhase::Unauthenticated, user: None }
	}
}

/// Process-wide authentication state.
///
/// Credential custody: the bearer token lives in the durable scope when
/// the user chose "remember me", otherwise in the session scope; last
/// write wins for concurrent logins. The expiry transition runs exactly
/// once per session — the state machine itself is the guard.
pub struct SessionStore {
	api: Arc<dyn ApiAdapter>,
	durable_scope: Arc<dyn StoreScope>,
	session_scope: Arc<dyn StoreScope>,
	navigator: Arc<dyn Navigator>,
	/// Flattened route catalog, pushed to the server privilege registry
	/// after a superuser authenticates.
	grants: Arc<[RouteGrant]>,
	state: RwLock<SessionState>,
}

impl SessionStore {
	pub fn new(
		api: Arc<dyn ApiAdapter>,
		durable_scope: Arc<dyn StoreScope>,
		session_scope: Arc<dyn StoreScope>,
		navigator: Arc<dyn Navigator>,
		grants: Vec<RouteGrant>,
	) -> Self {
		Self {
			api,
			durable_scope,
			session_scope,
			navigator,
			grants: grants.into(),
			state: RwLock::new(SessionState::default()),
		}
	}

	pub fn phase(&self) -> SessionPhase {
		self.state.read().phase
	}

	pub fn user(&self) -> Option<Arc<User>> {
		self.state.read().user.clone()
	}

	/// Attempts a silent session restore from a persisted credential.
	///
	/// Checks the durable scope first, then the session scope. Without a
	/// credential the store stays `Unauthenticated` and no network call
	/// is made. A rejected credential is discarded from both scopes and
	/// the failure is silent — restore never surfaces an error.
	pub async fn restore(&self) -> Option<Arc<User>> {
		let token = self
			.durable_scope
			.get(CREDENTIAL_KEY)
			.or_else(|| self.session_scope.get(CREDENTIAL_KEY));
		let Some(token) = token else {
			return None;
		};

		self.state.write().phase = SessionPhase::Restoring;
		self.api.set_bearer(Some(&token));

		match self.api.fetch_current_user().await {
			Ok(user) => {
				let user = Arc::new(user);
				{
					let mut state = self.state.write();
					state.phase = SessionPhase::Authenticated;
					state.user = Some(user.clone());
				}
				info!("session restored for {}", user.username);
				self.after_authenticated(&user);
				Some(user)
			}
			Err(err) => {
				debug!("credential restore failed: {}", err);
				self.discard_credential();
				let mut state = self.state.write();
				if state.phase == SessionPhase::Restoring {
					state.phase = SessionPhase::Unauthenticated;
					state.user = None;
				}
				None
			}
		}
	}

	/// Exchanges credentials for a bearer token and loads the profile.
	///
	/// `remember` selects the durable scope over the session-only one.
	/// Failure carries the server payload's user-facing message and never
	/// panics across the boundary.
	pub async fn login(
		&self,
		username: &str,
		password: &str,
		remember: bool,
	) -> Result<Arc<User>, Box<str>> {
		let token = match self.api.login(username, password).await {
			Ok(token) => token,
			Err(err) => {
				debug!("login rejected for {}: {}", username, err);
				return Err(login_message(&err));
			}
		};

		if remember {
			self.durable_scope.set(CREDENTIAL_KEY, &token);
			self.session_scope.remove(CREDENTIAL_KEY);
		} else {
			self.session_scope.set(CREDENTIAL_KEY, &token);
			self.durable_scope.remove(CREDENTIAL_KEY);
		}
		self.api.set_bearer(Some(&token));

		match self.api.fetch_current_user().await {
			Ok(user) => {
				let user = Arc::new(user);
				{
					let mut state = self.state.write();
					state.phase = SessionPhase::Authenticated;
					state.user = Some(user.clone());
				}
				info!("login succeeded for {}", user.username);
				self.after_authenticated(&user);
				Ok(user)
			}
			Err(err) => {
				debug!("profile fetch after login failed: {}", err);
				self.discard_credential();
				let mut state = self.state.write();
				state.phase = SessionPhase::Unauthenticated;
				state.user = None;
				drop(state);
				Err(login_message(&err))
			}
		}
	}

	/// Explicit logout: credential gone from both scopes, headers
	/// cleared, hard redirect to the public entry.
	pub fn logout(&self) {
		self.discard_credential();
		{
			let mut state = self.state.write();
			state.phase = SessionPhase::Unauthenticated;
			state.user = None;
		}
		info!("logged out");
		self.navigator.replace(paths::LOGIN);
	}

	/// Global expiry transition, driven by the unauthorized-response
	/// observer. Returns whether this call performed the transition;
	/// repeated authorization failures after the first are no-ops.
	pub fn expire(&self) -> bool {
		{
			let mut state = self.state.write();
			if state.phase != SessionPhase::Authenticated {
				return false;
			}
			state.phase = SessionPhase::Expired;
			state.user = None;
		}
		self.discard_credential();
		info!("session expired, redirecting to login");
		self.navigator
			.replace(&format!("{}?{}", paths::LOGIN, paths::EXPIRED_MARKER));
		true
	}

	fn discard_credential(&self) {
		self.durable_scope.remove(CREDENTIAL_KEY);
		self.session_scope.remove(CREDENTIAL_KEY);
		self.api.set_bearer(None);
	}

	/// Post-authentication hook: superusers push the declarative route
	/// catalog to the server privilege registry, best-effort and without
	/// blocking the interface. A stale or failed sync is simply ignored;
	/// the next successful authentication re-derives the same state.
	fn after_authenticated(&self, user: &Arc<User>) {
		if !user.is_superuser {
			return;
		}
		let api = self.api.clone();
		let grants = self.grants.clone();
		tokio::spawn(async move {
			if let Err(err) = api.sync_privilege_catalog(&grants).await {
				debug!("privilege catalog sync skipped: {}", err);
			}
		});
	}
}

fn login_message(err: &Error) -> Box<str> {
	Box::from(err.user_message().unwrap_or(INVALID_CREDENTIALS))
}

impl std::fmt::Debug for SessionStore {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("SessionStore").field("phase", &self.phase()).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clinio_api_adapter_memory::MemoryApiAdapter;
	use clinio_store_adapter_memory::MemoryStore;
	use parking_lot::Mutex as PlMutex;
	use std::time::Duration;

	#[derive(Default)]
	struct RecordingNavigator {
		replaced: PlMutex<Vec<String>>,
	}

	impl Navigator for RecordingNavigator {
		fn replace(&self, to: &str) {
			self.replaced.lock().push(to.to_string());
		}
	}

	fn user(json: serde_json::Value) -> User {
		serde_json::from_value(json).unwrap()
	}

	struct Fixture {
		api: Arc<MemoryApiAdapter>,
		durable: Arc<MemoryStore>,
		session: Arc<MemoryStore>,
		navigator: Arc<RecordingNavigator>,
		store: SessionStore,
	}

	fn fixture() -> Fixture {
		let api = Arc::new(MemoryApiAdapter::new());
		api.add_account(
			"segredo",
			user(serde_json::json!({ "id": 1, "username": "maria" })),
		);
		api.add_account(
			"root",
			user(serde_json::json!({ "id": 2, "username": "admin", "is_superuser": true })),
		);

		let durable = Arc::new(MemoryStore::new());
		let session = Arc::new(MemoryStore::new());
		let navigator = Arc::new(RecordingNavigator::default());
		let store = SessionStore::new(
			api.clone(),
			durable.clone(),
			session.clone(),
			navigator.clone(),
			vec![RouteGrant { path: "/pacientes".into(), label: "Pacientes".into() }],
		);
		Fixture { api, durable, session, navigator, store }
	}

	#[tokio::test]
	async fn login_with_remember_uses_the_durable_scope() {
		let fx = fixture();

		let user = fx.store.login("maria", "segredo", true).await.unwrap();
		assert_eq!(user.username.as_ref(), "maria");
		assert_eq!(fx.store.phase(), SessionPhase::Authenticated);
		assert!(fx.durable.get(CREDENTIAL_KEY).is_some());
		assert!(fx.session.get(CREDENTIAL_KEY).is_none());
		assert!(fx.api.bearer().is_some());
	}

	#[tokio::test]
	async fn login_without_remember_uses_the_session_scope() {
		let fx = fixture();

		fx.store.login("maria", "segredo", false).await.unwrap();
		assert!(fx.durable.get(CREDENTIAL_KEY).is_none());
		assert!(fx.session.get(CREDENTIAL_KEY).is_some());
	}

	#[tokio::test]
	async fn rejected_login_reports_the_server_message() {
		let fx = fixture();

		let err = fx.store.login("maria", "errada", false).await.unwrap_err();
		assert_eq!(err.as_ref(), INVALID_CREDENTIALS);
		assert_eq!(fx.store.phase(), SessionPhase::Unauthenticated);
		assert!(fx.store.user().is_none());
	}

	#[tokio::test]
	async fn restore_without_credential_makes_no_network_call() {
		let fx = fixture();

		assert!(fx.store.restore().await.is_none());
		assert_eq!(fx.store.phase(), SessionPhase::Unauthenticated);
		assert_eq!(fx.api.profile_fetches(), 0);
	}

	#[tokio::test]
	async fn restore_validates_the_durable_credential() {
		let fx = fixture();
		fx.store.login("maria", "segredo", true).await.unwrap();

		// New store over the same scopes, as after a browser restart.
		let store = SessionStore::new(
			fx.api.clone(),
			fx.durable.clone(),
			fx.session.clone(),
			fx.navigator.clone(),
			Vec::new(),
		);
		let user = store.restore().await.unwrap();
		assert_eq!(user.username.as_ref(), "maria");
		assert_eq!(store.phase(), SessionPhase::Authenticated);
	}

	#[tokio::test]
	async fn restore_discards_a_stale_credential_silently() {
		let fx = fixture();
		fx.durable.set(CREDENTIAL_KEY, "token-antigo");

		assert!(fx.store.restore().await.is_none());
		assert_eq!(fx.store.phase(), SessionPhase::Unauthenticated);
		assert!(fx.durable.get(CREDENTIAL_KEY).is_none());
		assert!(fx.api.bearer().is_none());
	}

	#[tokio::test]
	async fn superuser_authentication_fires_the_privilege_sync() {
		let fx = fixture();

		fx.store.login("admin", "root", false).await.unwrap();
		tokio::time::sleep(Duration::from_millis(20)).await;

		let synced = fx.api.synced_catalogs();
		assert_eq!(synced.len(), 1);
		assert_eq!(synced[0][0].path.as_ref(), "/pacientes");
	}

	#[tokio::test]
	async fn regular_user_authentication_skips_the_privilege_sync() {
		let fx = fixture();

		fx.store.login("maria", "segredo", false).await.unwrap();
		tokio::time::sleep(Duration::from_millis(20)).await;

		assert!(fx.api.synced_catalogs().is_empty());
	}

	#[tokio::test]
	async fn logout_clears_both_scopes_and_redirects() {
		let fx = fixture();
		fx.store.login("maria", "segredo", true).await.unwrap();

		fx.store.logout();

		assert_eq!(fx.store.phase(), SessionPhase::Unauthenticated);
		assert!(fx.durable.get(CREDENTIAL_KEY).is_none());
		assert!(fx.session.get(CREDENTIAL_KEY).is_none());
		assert!(fx.api.bearer().is_none());
		assert_eq!(fx.navigator.replaced.lock().last().map(String::as_str), Some("/login"));
	}

	#[tokio::test]
	async fn expiry_transitions_exactly_once() {
		let fx = fixture();
		fx.store.login("maria", "segredo", true).await.unwrap();

		assert!(fx.store.expire());
		assert!(!fx.store.expire());

		assert_eq!(fx.store.phase(), SessionPhase::Expired);
		assert!(fx.store.user().is_none());
		let replaced = fx.navigator.replaced.lock();
		assert_eq!(replaced.as_slice(), ["/login?expired=1"]);
	}

	#[tokio::test]
	async fn expiry_is_ignored_while_unauthenticated() {
		let fx = fixture();
		assert!(!fx.store.expire());
		assert!(fx.navigator.replaced.lock().is_empty());
	}
}

// vim: ts=4
