//! In-memory storage scope.
//!
//! Stands in for the browser's local/session storage in tests and in
//! embeddings without a persistent shell. Each instance is one scope:
//! construct two (durable + session-only) to mirror the browser layout.

use parking_lot::Mutex;
use std::collections::HashMap;

use clinio_types::store_adapter::StoreScope;

#[derive(Debug, Default)]
pub struct MemoryStore {
	map: Mutex<HashMap<Box<str>, Box<str>>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.map.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.lock().is_empty()
	}
}

impl StoreScope for MemoryStore {
	fn get(&self, key: &str) -> Option<Box<str>> {
		self.map.lock().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.map.lock().insert(Box::from(key), Box::from(value));
	}

	fn remove(&self, key: &str) {
		self.map.lock().remove(key);
	}
}
