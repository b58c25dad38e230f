//! In-memory API adapter.
//!
//! Backs the integration tests and network-free embeddings: it keeps an
//! account table in process, issues opaque bearer tokens, validates the
//! attached bearer on every profile fetch, and lets a test simulate a
//! credential expiring mid-session. The unauthorized observer fires
//! before the failing call returns, matching the response-interceptor
//! ordering of a real HTTP client.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::RngExt;
use std::collections::HashMap;
use std::sync::Weak;

use clinio_types::api_adapter::{ApiAdapter, RouteGrant, UnauthorizedObserver};
use clinio_types::prelude::*;
use clinio_types::user::User;

const TOKEN_LENGTH: usize = 24;
const SAFE: [char; 62] = [
	'0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
	'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
	'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
	'V', 'W', 'X', 'Y', 'Z',
];

fn random_token() -> Box<str> {
	let mut rng = rand::rng();
	let mut token = String::with_capacity(TOKEN_LENGTH);
	for _ in 0..TOKEN_LENGTH {
		token.push(SAFE[rng.random_range(0..SAFE.len())]);
	}
	token.into()
}

struct Account {
	password: Box<str>,
	user: User,
}

#[derive(Default)]
struct AdapterState {
	accounts: HashMap<Box<str>, Account>,
	/// Issued tokens, token -> username.
	tokens: HashMap<Box<str>, Box<str>>,
	bearer: Option<Box<str>>,
	observer: Option<Weak<dyn UnauthorizedObserver>>,
	synced: Vec<Vec<RouteGrant>>,
	profile_fetches: usize,
}

#[derive(Default)]
pub struct MemoryApiAdapter {
	state: Mutex<AdapterState>,
}

impl MemoryApiAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an account reachable through `login`.
	pub fn add_account(&self, password: &str, user: User) {
		let mut state = self.state.lock();
		state
			.accounts
			.insert(user.username.clone(), Account { password: Box::from(password), user });
	}

	/// Forgets every issued token and fires the unauthorized observer,
	/// as a real client would on a 401 response to an in-flight call.
	pub fn expire_session(&self) {
		self.state.lock().tokens.clear();
		self.notify_unauthorized();
	}

	/// Forgets a single token; the next call carrying it fails.
	pub fn revoke_token(&self, token: &str) {
		self.state.lock().tokens.remove(token);
	}

	pub fn bearer(&self) -> Option<Box<str>> {
		self.state.lock().bearer.clone()
	}

	/// Every privilege catalog pushed so far, oldest first.
	pub fn synced_catalogs(&self) -> Vec<Vec<RouteGrant>> {
		self.state.lock().synced.clone()
	}

	/// Number of profile fetches attempted, successful or not.
	pub fn profile_fetches(&self) -> usize {
		self.state.lock().profile_fetches
	}

	fn notify_unauthorized(&self) {
		let observer = self.state.lock().observer.clone();
		if let Some(observer) = observer.and_then(|weak| weak.upgrade()) {
			observer.on_unauthorized();
		}
	}
}

#[async_trait]
impl ApiAdapter for MemoryApiAdapter {
	fn set_bearer(&self, token: Option<&str>) {
		self.state.lock().bearer = token.map(Box::from);
	}

	fn set_unauthorized_observer(&self, observer: Weak<dyn UnauthorizedObserver>) {
		self.state.lock().observer = Some(observer);
	}

	fn clear_unauthorized_observer(&self) {
		self.state.lock().observer = None;
	}

	async fn login(&self, username: &str, password: &str) -> ClResult<Box<str>> {
		let mut state = self.state.lock();
		let valid = state
			.accounts
			.get(username)
			.is_some_and(|account| account.password.as_ref() == password);
		if !valid {
			return Err(Error::Auth(Box::from("Usuário ou senha inválidos.")));
		}
		let token = random_token();
		state.tokens.insert(token.clone(), Box::from(username));
		Ok(token)
	}

	async fn fetch_current_user(&self) -> ClResult<User> {
		let user = {
			let mut state = self.state.lock();
			state.profile_fetches += 1;
			state
				.bearer
				.clone()
				.and_then(|token| state.tokens.get(&token).cloned())
				.and_then(|username| state.accounts.get(&username).map(|a| a.user.clone()))
		};
		match user {
			Some(user) => Ok(user),
			None => {
				// Interceptor ordering: the observer sees the failure
				// before the caller does.
				self.notify_unauthorized();
				Err(Error::Unauthorized)
			}
		}
	}

	async fn sync_privilege_catalog(&self, grants: &[RouteGrant]) -> ClResult<()> {
		self.state.lock().synced.push(grants.to_vec());
		Ok(())
	}
}

impl std::fmt::Debug for MemoryApiAdapter {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let state = self.state.lock();
		f.debug_struct("MemoryApiAdapter")
			.field("accounts", &state.accounts.len())
			.field("tokens", &state.tokens.len())
			.field("bearer", &state.bearer)
			.finish_non_exhaustive()
	}
}


// vim: ts=4
