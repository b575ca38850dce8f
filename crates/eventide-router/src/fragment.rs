//! Address-fragment seam.
//!
//! The browser exposes the fragment through `location.hash`, leading `#`
//! included. [`FragmentSource`] mirrors that raw form; stripping the marker
//! is the [`Navigator`](crate::Navigator)'s job.

use std::sync::RwLock;

/// Raw access to the document's address fragment.
pub trait FragmentSource: Send + Sync {
	/// The raw fragment, with its leading `#` when non-empty.
	fn get(&self) -> String;

	/// Sets the fragment to `key` (without the marker).
	fn set(&self, key: &str);
}

/// In-memory [`FragmentSource`] mirroring `location.hash` semantics: setting
/// a non-empty key reads back with a leading `#`.
#[derive(Debug, Default)]
pub struct MemoryFragment {
	raw: RwLock<String>,
}

impl MemoryFragment {
	/// Creates a source with an empty fragment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a source already positioned at `key`.
	pub fn at(key: &str) -> Self {
		let source = Self::new();
		source.set(key);
		source
	}
}

impl FragmentSource for MemoryFragment {
	fn get(&self) -> String {
		self.raw.read().unwrap_or_else(|e| e.into_inner()).clone()
	}

	fn set(&self, key: &str) {
		let raw = if key.is_empty() {
			String::new()
		} else {
			format!("#{}", key)
		};
		*self.raw.write().unwrap_or_else(|e| e.into_inner()) = raw;
	}
}
