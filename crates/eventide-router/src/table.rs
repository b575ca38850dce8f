//! Static route table.
//!
//! Maps route keys to view descriptors. Resolution is total: an absent key
//! resolves to the mandatory fallback descriptor, never an error.

use std::collections::HashMap;
use thiserror::Error;

/// Error building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
	/// No fallback entry was provided.
	#[error("route table requires a fallback entry")]
	MissingFallback,
	/// Two entries share the same key.
	#[error("duplicate route key: {0}")]
	DuplicateKey(String),
}

/// The static record describing how to render a given route key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
	key: String,
	component_ref: String,
	behavior_script_ref: Option<String>,
	title: String,
}

impl RouteDescriptor {
	/// Creates a descriptor with no behavior script.
	pub fn new(
		key: impl Into<String>,
		component_ref: impl Into<String>,
		title: impl Into<String>,
	) -> Self {
		Self {
			key: key.into(),
			component_ref: component_ref.into(),
			behavior_script_ref: None,
			title: title.into(),
		}
	}

	/// Attaches a behavior script locator.
	pub fn with_behavior_script(mut self, script_ref: impl Into<String>) -> Self {
		self.behavior_script_ref = Some(script_ref.into());
		self
	}

	/// The route key this descriptor answers to.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Locator of the component markup.
	pub fn component_ref(&self) -> &str {
		&self.component_ref
	}

	/// Locator of the behavior script, if any.
	pub fn behavior_script_ref(&self) -> Option<&str> {
		self.behavior_script_ref.as_deref()
	}

	/// Page title for this route.
	pub fn title(&self) -> &str {
		&self.title
	}
}

/// Mapping from route key to descriptor with a mandatory fallback entry.
#[derive(Debug)]
pub struct RouteTable {
	routes: HashMap<String, RouteDescriptor>,
	fallback_key: String,
}

impl RouteTable {
	/// Starts building a table.
	pub fn builder() -> RouteTableBuilder {
		RouteTableBuilder::default()
	}

	/// Resolves `key` to its descriptor, or the fallback descriptor when the
	/// key is absent. Total over all string inputs.
	pub fn resolve(&self, key: &str) -> &RouteDescriptor {
		self.routes.get(key).unwrap_or_else(|| {
			// The builder guarantees the fallback entry exists.
			&self.routes[&self.fallback_key]
		})
	}

	/// Key of the fallback ("not found") entry.
	pub fn fallback_key(&self) -> &str {
		&self.fallback_key
	}

	/// Whether `key` has an exact entry.
	pub fn contains(&self, key: &str) -> bool {
		self.routes.contains_key(key)
	}
}

/// Builder for [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
	routes: Vec<RouteDescriptor>,
	fallback: Option<RouteDescriptor>,
}

impl RouteTableBuilder {
	/// Adds a route entry.
	pub fn route(mut self, descriptor: RouteDescriptor) -> Self {
		self.routes.push(descriptor);
		self
	}

	/// Sets the fallback entry, resolved for every unknown key.
	pub fn fallback(mut self, descriptor: RouteDescriptor) -> Self {
		self.fallback = Some(descriptor);
		self
	}

	/// Builds the table.
	///
	/// # Errors
	///
	/// [`RouteTableError::MissingFallback`] when no fallback entry was set,
	/// [`RouteTableError::DuplicateKey`] when two entries share a key.
	pub fn build(self) -> Result<RouteTable, RouteTableError> {
		let fallback = self.fallback.ok_or(RouteTableError::MissingFallback)?;
		let fallback_key = fallback.key().to_string();

		let mut routes = HashMap::with_capacity(self.routes.len() + 1);
		for descriptor in self.routes.into_iter().chain(Some(fallback)) {
			let key = descriptor.key().to_string();
			if routes.insert(key.clone(), descriptor).is_some() {
				return Err(RouteTableError::DuplicateKey(key));
			}
		}

		Ok(RouteTable {
			routes,
			fallback_key,
		})
	}
}
