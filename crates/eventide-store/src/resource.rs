//! The value-level resource store seam.

use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;

/// Collection name for events.
pub const EVENTS: &str = "events";
/// Collection name for event registrations.
pub const REGISTRATIONS: &str = "registrations";
/// Collection name for user accounts.
pub const USERS: &str = "users";

/// Generic CRUD access to a JSON resource store.
///
/// Collections are addressed by name and items by numeric identifier.
/// `filters` are field-equality pairs applied server-side as query
/// parameters; an empty slice lists the whole collection.
#[async_trait]
pub trait ResourceStore: Send + Sync {
	/// Lists items of `resource` matching all `filters`.
	async fn list(
		&self,
		resource: &str,
		filters: &[(&str, &str)],
	) -> Result<Vec<Value>, StoreError>;

	/// Fetches the item of `resource` with the given `id`.
	async fn get(&self, resource: &str, id: u64) -> Result<Value, StoreError>;

	/// Creates an item in `resource`; the store assigns the identifier.
	/// Returns the stored item including its `id`.
	async fn create(&self, resource: &str, body: Value) -> Result<Value, StoreError>;

	/// Replaces the item with `id` entirely with `body`.
	async fn replace(&self, resource: &str, id: u64, body: Value) -> Result<Value, StoreError>;

	/// Merges `body` into the item with `id`, leaving other fields intact.
	async fn patch(&self, resource: &str, id: u64, body: Value) -> Result<Value, StoreError>;

	/// Deletes the item with `id`.
	async fn delete(&self, resource: &str, id: u64) -> Result<(), StoreError>;
}
