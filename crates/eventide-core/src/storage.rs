//! Durable key-value storage seam.
//!
//! The browser's durable store is a string-to-string map; this trait is the
//! native abstraction over it so session persistence can be exercised with an
//! in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

/// String key-value storage with last-write-wins semantics.
pub trait KeyValueStorage: Send + Sync {
	/// Returns the value stored under `key`, if any.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str);

	/// Removes the value stored under `key`.
	fn remove(&self, key: &str);
}

/// In-memory [`KeyValueStorage`] backed by a `RwLock<HashMap>`.
///
/// # Examples
///
/// ```
/// use eventide_core::storage::{KeyValueStorage, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// storage.set("theme", "dark");
/// assert_eq!(storage.get("theme"), Some("dark".to_string()));
///
/// storage.remove("theme");
/// assert_eq!(storage.get("theme"), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
	entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
	/// Creates an empty storage.
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStorage for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.entries
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.get(key)
			.cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.entries
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(key.to_string(), value.to_string());
	}

	fn remove(&self, key: &str) {
		self.entries
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.remove(key);
	}
}
