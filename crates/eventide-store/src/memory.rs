//! In-memory [`ResourceStore`] for native tests and demos.

use crate::error::StoreError;
use crate::resource::ResourceStore;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Resource store holding collections in memory.
///
/// Identifiers are assigned sequentially per collection. Equality filters
/// compare the string form of the stored field against the filter value, the
/// way the external store treats query parameters.
#[derive(Debug, Default)]
pub struct MemoryStore {
	collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds a collection with items, assigning ids to items without one.
	pub fn seed(&self, resource: &str, items: Vec<Value>) {
		let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
		let collection = collections.entry(resource.to_string()).or_default();
		for mut item in items {
			if item.get("id").is_none() {
				let id = next_id(collection);
				item["id"] = Value::from(id);
			}
			collection.push(item);
		}
	}

	fn with_collection<T>(
		&self,
		resource: &str,
		f: impl FnOnce(&mut Vec<Value>) -> Result<T, StoreError>,
	) -> Result<T, StoreError> {
		let mut collections = self.collections.write().unwrap_or_else(|e| e.into_inner());
		f(collections.entry(resource.to_string()).or_default())
	}
}

fn next_id(collection: &[Value]) -> u64 {
	collection
		.iter()
		.filter_map(|item| item.get("id").and_then(Value::as_u64))
		.max()
		.map_or(1, |max| max + 1)
}

fn field_matches(item: &Value, field: &str, expected: &str) -> bool {
	match item.get(field) {
		Some(Value::String(s)) => s == expected,
		Some(other) => other.to_string() == expected,
		None => false,
	}
}

fn position_of(collection: &[Value], id: u64) -> Option<usize> {
	collection
		.iter()
		.position(|item| item.get("id").and_then(Value::as_u64) == Some(id))
}

#[async_trait]
impl ResourceStore for MemoryStore {
	async fn list(
		&self,
		resource: &str,
		filters: &[(&str, &str)],
	) -> Result<Vec<Value>, StoreError> {
		self.with_collection(resource, |collection| {
			Ok(collection
				.iter()
				.filter(|item| {
					filters
						.iter()
						.all(|(field, expected)| field_matches(item, field, expected))
				})
				.cloned()
				.collect())
		})
	}

	async fn get(&self, resource: &str, id: u64) -> Result<Value, StoreError> {
		self.with_collection(resource, |collection| {
			position_of(collection, id)
				.map(|pos| collection[pos].clone())
				.ok_or_else(|| StoreError::NotFound {
					resource: resource.to_string(),
					id,
				})
		})
	}

	async fn create(&self, resource: &str, mut body: Value) -> Result<Value, StoreError> {
		self.with_collection(resource, |collection| {
			let id = next_id(collection);
			body["id"] = Value::from(id);
			collection.push(body.clone());
			Ok(body)
		})
	}

	async fn replace(&self, resource: &str, id: u64, mut body: Value) -> Result<Value, StoreError> {
		self.with_collection(resource, |collection| {
			let pos = position_of(collection, id).ok_or_else(|| StoreError::NotFound {
				resource: resource.to_string(),
				id,
			})?;
			body["id"] = Value::from(id);
			collection[pos] = body.clone();
			Ok(body)
		})
	}

	async fn patch(&self, resource: &str, id: u64, body: Value) -> Result<Value, StoreError> {
		self.with_collection(resource, |collection| {
			let pos = position_of(collection, id).ok_or_else(|| StoreError::NotFound {
				resource: resource.to_string(),
				id,
			})?;
			if let (Value::Object(target), Value::Object(updates)) =
				(&mut collection[pos], body)
			{
				for (key, value) in updates {
					target.insert(key, value);
				}
			}
			Ok(collection[pos].clone())
		})
	}

	async fn delete(&self, resource: &str, id: u64) -> Result<(), StoreError> {
		self.with_collection(resource, |collection| {
			let pos = position_of(collection, id).ok_or_else(|| StoreError::NotFound {
				resource: resource.to_string(),
				id,
			})?;
			collection.remove(pos);
			Ok(())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_create_assigns_sequential_ids() {
		let store = MemoryStore::new();
		let first = store.create("events", json!({"title": "a"})).await.unwrap();
		let second = store.create("events", json!({"title": "b"})).await.unwrap();
		assert_eq!(first["id"], 1);
		assert_eq!(second["id"], 2);
	}

	#[tokio::test]
	async fn test_list_with_equality_filters() {
		let store = MemoryStore::new();
		store.seed(
			"registrations",
			vec![
				json!({"userId": 1, "eventId": 10}),
				json!({"userId": 1, "eventId": 20}),
				json!({"userId": 2, "eventId": 10}),
			],
		);

		let mine = store
			.list("registrations", &[("userId", "1")])
			.await
			.unwrap();
		assert_eq!(mine.len(), 2);

		let exact = store
			.list("registrations", &[("userId", "1"), ("eventId", "20")])
			.await
			.unwrap();
		assert_eq!(exact.len(), 1);
		assert_eq!(exact[0]["eventId"], 20);
	}

	#[tokio::test]
	async fn test_string_filter_matches_string_field() {
		let store = MemoryStore::new();
		store.seed("users", vec![json!({"email": "ada@example.com"})]);
		let found = store
			.list("users", &[("email", "ada@example.com")])
			.await
			.unwrap();
		assert_eq!(found.len(), 1);
	}

	#[tokio::test]
	async fn test_get_missing_is_not_found() {
		let store = MemoryStore::new();
		let err = store.get("events", 9).await.unwrap_err();
		assert!(err.is_not_found());
	}

	#[tokio::test]
	async fn test_replace_keeps_id() {
		let store = MemoryStore::new();
		store.seed("events", vec![json!({"title": "old"})]);
		let replaced = store
			.replace("events", 1, json!({"title": "new"}))
			.await
			.unwrap();
		assert_eq!(replaced["id"], 1);
		assert_eq!(replaced["title"], "new");
	}

	#[tokio::test]
	async fn test_patch_merges_fields() {
		let store = MemoryStore::new();
		store.seed("events", vec![json!({"title": "t", "availableSeats": 5})]);
		let patched = store
			.patch("events", 1, json!({"availableSeats": 4}))
			.await
			.unwrap();
		assert_eq!(patched["availableSeats"], 4);
		assert_eq!(patched["title"], "t");
	}

	#[tokio::test]
	async fn test_delete_removes_item() {
		let store = MemoryStore::new();
		store.seed("events", vec![json!({"title": "t"})]);
		store.delete("events", 1).await.unwrap();
		assert!(store.list("events", &[]).await.unwrap().is_empty());
	}
}
