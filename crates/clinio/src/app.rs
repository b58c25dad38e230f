//! App state and builder — wires the session and navigation core.

use std::sync::{Arc, Weak};

use clinio_nav::guard::{GuardDecision, RouteGuard};
use clinio_nav::policy;
use clinio_nav::route_table::RouteTable;
use clinio_nav::view_cache::RouteViewCache;
use clinio_session::SessionStore;
use clinio_tabs::{CloseOutcome, TabManager};
use clinio_types::api_adapter::{ApiAdapter, UnauthorizedObserver};
use clinio_types::nav::{NavCatalog, NavModule};
use clinio_types::paths;
use clinio_types::session::SessionPhase;
use clinio_types::store_adapter::StoreScope;
use clinio_types::ui_adapter::{Navigator, Notifier};
use clinio_types::user::User;

use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub api: Arc<dyn ApiAdapter>,
	pub durable_scope: Arc<dyn StoreScope>,
	pub session_scope: Arc<dyn StoreScope>,
	pub notifier: Arc<dyn Notifier>,
	pub navigator: Arc<dyn Navigator>,

	/// Declarative menu catalog — the sole source of truth for which
	/// routes exist.
	pub catalog: NavCatalog,
	pub routes: Arc<RouteTable>,

	pub session: SessionStore,
	pub tabs: TabManager,
	pub guard: RouteGuard,
	pub views: RouteViewCache,
}

pub type App = Arc<AppState>;

impl AppState {
	/// Routes one navigation through the guard. On a render the tab set
	/// and the view cache observe the authorized path; on any other
	/// decision the embedding router applies the redirect.
	pub fn navigate(&self, requested: &str) -> GuardDecision {
		let path = paths::normalize(requested);

		// The public entry sits outside the guard: it renders while
		// signed out and bounces to the dashboard while signed in.
		if path.as_ref() == paths::LOGIN {
			return match self.session.phase() {
				SessionPhase::Authenticated => {
					GuardDecision::Redirect { to: Box::from(paths::DASHBOARD) }
				}
				_ => {
					self.views.collapse(paths::LOGIN);
					GuardDecision::Render
				}
			};
		}

		let user = self.session.user();
		let decision = self.guard.evaluate(self.session.phase(), user.as_deref(), &path);
		if decision == GuardDecision::Render {
			if path.as_ref() == paths::PASSWORD_CHANGE {
				// Confined to the password change: one view, no tabs.
				self.views.collapse(&path);
			} else {
				self.tabs.observe(&path);
				let owner = self
					.routes
					.resolve(&path)
					.map(|def| def.path.clone())
					.filter(|tab_path| {
						self.tabs.tabs().iter().any(|tab| &tab.path == tab_path)
					});
				self.views.visit(&path, owner.as_deref());
			}
		}
		decision
	}

	/// Closes a tab and evicts its cached view. The caller applies the
	/// returned focus redirect, if any.
	pub fn close_tab(&self, path: &str, active_path: &str) -> CloseOutcome {
		let outcome = self.tabs.close_tab(path, active_path);
		if outcome != CloseOutcome::NotOpen {
			self.views.evict_tab(path);
		}
		outcome
	}

	/// Silent session restore; hydrates the user's pinned tabs on
	/// success.
	pub async fn restore(&self) -> Option<Arc<User>> {
		let user = self.session.restore().await?;
		self.tabs.start_session(&user.username);
		Some(user)
	}

	/// Login; hydrates the user's pinned tabs on success. Failure
	/// carries the user-facing message.
	pub async fn login(
		&self,
		username: &str,
		password: &str,
		remember: bool,
	) -> Result<Arc<User>, Box<str>> {
		let user = self.session.login(username, password, remember).await?;
		self.tabs.start_session(&user.username);
		Ok(user)
	}

	/// Explicit logout: tab set and view cache reset before the session
	/// store redirects to the public entry.
	pub fn logout(&self) {
		self.tabs.clear();
		self.views.collapse(paths::LOGIN);
		self.session.logout();
	}

	/// The navigation modules visible to the current user, in catalog
	/// order. Empty while unauthenticated.
	pub fn visible_modules(&self) -> Vec<&NavModule> {
		match self.session.user() {
			Some(user) => policy::visible_modules(&user, &self.catalog),
			None => Vec::new(),
		}
	}
}

// Expiry hook //
//*************//
// The unauthorized-response observer is the app itself, held weakly by
// the API adapter: a dropped app silently detaches instead of leaking a
// registration across re-initializations.
impl UnauthorizedObserver for AppState {
	fn on_unauthorized(&self) {
		if self.session.expire() {
			self.tabs.clear();
			self.views.collapse(paths::LOGIN);
		}
	}
}

pub struct AppBuilder {
	catalog: NavCatalog,
	api: Option<Arc<dyn ApiAdapter>>,
	durable_scope: Option<Arc<dyn StoreScope>>,
	session_scope: Option<Arc<dyn StoreScope>>,
	notifier: Option<Arc<dyn Notifier>>,
	navigator: Option<Arc<dyn Navigator>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			catalog: NavCatalog::default(),
			api: None,
			durable_scope: None,
			session_scope: None,
			notifier: None,
			navigator: None,
		}
	}

	pub fn catalog(mut self, catalog: NavCatalog) -> Self {
		self.catalog = catalog;
		self
	}
	pub fn api_adapter(mut self, api: Arc<dyn ApiAdapter>) -> Self {
		self.api = Some(api);
		self
	}
	pub fn durable_scope(mut self, scope: Arc<dyn StoreScope>) -> Self {
		self.durable_scope = Some(scope);
		self
	}
	pub fn session_scope(mut self, scope: Arc<dyn StoreScope>) -> Self {
		self.session_scope = Some(scope);
		self
	}
	pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
		self.notifier = Some(notifier);
		self
	}
	pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
		self.navigator = Some(navigator);
		self
	}

	pub fn build(self) -> ClResult<App> {
		let api = require(self.api, "api adapter")?;
		let durable_scope = require(self.durable_scope, "durable storage scope")?;
		let session_scope = require(self.session_scope, "session storage scope")?;
		let notifier = require(self.notifier, "notifier")?;
		let navigator = require(self.navigator, "navigator")?;

		let routes = Arc::new(RouteTable::from_catalog(&self.catalog)?);
		let session = SessionStore::new(
			api.clone(),
			durable_scope.clone(),
			session_scope.clone(),
			navigator.clone(),
			routes.privilege_grants(),
		);
		let tabs = TabManager::new(routes.clone(), session_scope.clone(), notifier.clone());
		let guard = RouteGuard::new(notifier.clone());

		let app = Arc::new(AppState {
			api,
			durable_scope,
			session_scope,
			notifier,
			navigator,
			catalog: self.catalog,
			routes,
			session,
			tabs,
			guard,
			views: RouteViewCache::new(),
		});

		// Installed once per app; registration replaces any previous
		// observer, so a re-built app cannot double-fire expiry.
		let observer: Weak<dyn UnauthorizedObserver> =
			Arc::downgrade(&(app.clone() as Arc<dyn UnauthorizedObserver>));
		app.api.set_unauthorized_observer(observer);

		info!("clinio {} initialized with {} routes", VERSION, app.routes.definitions().len());
		Ok(app)
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn require<T>(value: Option<T>, what: &str) -> ClResult<T> {
	value.ok_or_else(|| Error::Config(format!("{} is required", what)))
}

// vim: ts=4
