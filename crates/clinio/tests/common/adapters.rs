//! Test adapter builders and helpers
//!
//! Builds a full app over the in-memory adapters, keeping handles to
//! every collaborator so tests can inspect storage, warnings and hard
//! redirects.

use parking_lot::Mutex;
use std::sync::Arc;

use clinio::ui_adapter::{Navigator, Notifier};
use clinio::{App, AppBuilder};
use clinio_api_adapter_memory::MemoryApiAdapter;
use clinio_store_adapter_memory::MemoryStore;

use super::fixtures;

/// Optional: initialize tracing output for test debugging.
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

#[derive(Default)]
pub struct RecordingNotifier {
	pub warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
	pub fn count(&self) -> usize {
		self.warnings.lock().len()
	}
}

impl Notifier for RecordingNotifier {
	fn warn(&self, message: &str) {
		self.warnings.lock().push(message.to_string());
	}
}

#[derive(Default)]
pub struct RecordingNavigator {
	pub replaced: Mutex<Vec<String>>,
}

impl RecordingNavigator {
	pub fn last(&self) -> Option<String> {
		self.replaced.lock().last().cloned()
	}
}

impl Navigator for RecordingNavigator {
	fn replace(&self, to: &str) {
		self.replaced.lock().push(to.to_string());
	}
}

/// The app plus handles to every collaborator behind it.
pub struct TestShell {
	pub app: App,
	pub api: Arc<MemoryApiAdapter>,
	pub durable: Arc<MemoryStore>,
	pub session: Arc<MemoryStore>,
	pub notifier: Arc<RecordingNotifier>,
	pub navigator: Arc<RecordingNavigator>,
}

/// Builds a shell with the standard catalog and accounts.
pub fn build_shell() -> TestShell {
	setup_test_logging();

	let api = Arc::new(MemoryApiAdapter::new());
	api.add_account("root", fixtures::admin());
	api.add_account("segredo", fixtures::maria());
	api.add_account("cf123", fixtures::carlos());
	api.add_account("nova", fixtures::rita());

	let durable = Arc::new(MemoryStore::new());
	let session = Arc::new(MemoryStore::new());
	with_stores(api, durable, session)
}

/// Rebuilds an app over the same adapters, as after a page reload. The
/// session store scope survives (same browser tab), as does the durable
/// one.
pub fn rebuild_shell(prev: &TestShell) -> TestShell {
	with_stores(prev.api.clone(), prev.durable.clone(), prev.session.clone())
}

fn with_stores(
	api: Arc<MemoryApiAdapter>,
	durable: Arc<MemoryStore>,
	session: Arc<MemoryStore>,
) -> TestShell {
	let notifier = Arc::new(RecordingNotifier::default());
	let navigator = Arc::new(RecordingNavigator::default());

	let app = AppBuilder::new()
		.catalog(fixtures::clinic_catalog())
		.api_adapter(api.clone())
		.durable_scope(durable.clone())
		.session_scope(session.clone())
		.notifier(notifier.clone())
		.navigator(navigator.clone())
		.build()
		.unwrap();

	TestShell { app, api, durable, session, notifier, navigator }
}

// vim: ts=4
