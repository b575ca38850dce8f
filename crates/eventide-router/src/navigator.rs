//! Navigator: the current route over the address fragment.
//!
//! All navigation passes through the change-notification path exactly once,
//! whether it originates from [`Navigator::navigate_to`], an intercepted
//! same-document anchor, or external back/forward navigation reported by the
//! host through [`Navigator::external_change`].

use crate::fragment::FragmentSource;
use std::sync::{Arc, RwLock};

type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Reads and writes the current route key through a [`FragmentSource`] and
/// notifies registered handlers on change.
pub struct Navigator {
	source: Arc<dyn FragmentSource>,
	handlers: RwLock<Vec<ChangeHandler>>,
}

impl std::fmt::Debug for Navigator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Navigator")
			.field("current", &self.current())
			.field(
				"handlers",
				&self.handlers.read().unwrap_or_else(|e| e.into_inner()).len(),
			)
			.finish()
	}
}

impl Navigator {
	/// Creates a navigator over the given fragment source.
	pub fn new(source: Arc<dyn FragmentSource>) -> Self {
		Self {
			source,
			handlers: RwLock::new(Vec::new()),
		}
	}

	/// The current route key: the fragment with its leading marker stripped,
	/// empty string when absent.
	pub fn current(&self) -> String {
		let raw = self.source.get();
		raw.strip_prefix('#').unwrap_or(&raw).to_string()
	}

	/// Sets the fragment to `key` and fires change handlers once.
	pub fn navigate_to(&self, key: &str) {
		self.source.set(key);
		self.fire(key);
	}

	/// Sets the fragment to `key` without firing handlers.
	///
	/// Used by the component loader to make the address reflect an
	/// access-check redirect without re-dispatching a load.
	pub fn navigate_quiet(&self, key: &str) {
		self.source.set(key);
	}

	/// Registers a handler invoked with the new route key on every change.
	/// Handlers run in registration order.
	pub fn on_change<F>(&self, handler: F)
	where
		F: Fn(&str) + Send + Sync + 'static,
	{
		self.handlers
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.push(Arc::new(handler));
	}

	/// Reports an external fragment change (browser back/forward): re-reads
	/// the source and fires handlers with the new key.
	pub fn external_change(&self) {
		let key = self.current();
		self.fire(&key);
	}

	/// Intercepts a same-document anchor activation.
	///
	/// An `href` beginning with the fragment marker is routed through
	/// [`Self::navigate_to`] and `true` is returned so the host suppresses
	/// the default anchor behavior; any other href returns `false` untouched.
	pub fn intercept_anchor(&self, href: &str) -> bool {
		match href.strip_prefix('#') {
			Some(key) => {
				self.navigate_to(key);
				true
			}
			None => false,
		}
	}

	fn fire(&self, key: &str) {
		// Clone handlers out of the lock so one may register more without
		// deadlocking.
		let handlers: Vec<ChangeHandler> = self
			.handlers
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.clone();
		for handler in handlers {
			handler(key);
		}
	}
}
