//! Typed facade over a [`ResourceStore`].
//!
//! Wraps the value-level CRUD operations with the typed accessors the view
//! controllers need. Generic over the store implementation so controllers run
//! against [`RestStore`](crate::RestStore) in production and
//! [`MemoryStore`](crate::MemoryStore) in tests.

use crate::error::StoreError;
use crate::models::{Event, EventDraft, Registration, RegistrationDraft, User, UserDraft};
use crate::resource::{EVENTS, REGISTRATIONS, ResourceStore, USERS};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Typed API over the three collections.
#[derive(Debug)]
pub struct Api<S> {
	store: S,
}

fn decode_list<T: DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, StoreError> {
	Ok(serde_json::from_value(Value::Array(values))?)
}

impl<S: ResourceStore> Api<S> {
	/// Wraps a resource store.
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// The underlying store.
	pub fn store(&self) -> &S {
		&self.store
	}

	/// Lists all events.
	pub async fn events(&self) -> Result<Vec<Event>, StoreError> {
		decode_list(self.store.list(EVENTS, &[]).await?)
	}

	/// Fetches one event.
	pub async fn event(&self, id: u64) -> Result<Event, StoreError> {
		Ok(serde_json::from_value(self.store.get(EVENTS, id).await?)?)
	}

	/// Creates an event.
	pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, StoreError> {
		let body = serde_json::to_value(draft)?;
		Ok(serde_json::from_value(
			self.store.create(EVENTS, body).await?,
		)?)
	}

	/// Replaces an event's fields entirely.
	pub async fn replace_event(&self, id: u64, draft: &EventDraft) -> Result<Event, StoreError> {
		let body = serde_json::to_value(draft)?;
		Ok(serde_json::from_value(
			self.store.replace(EVENTS, id, body).await?,
		)?)
	}

	/// Deletes an event.
	pub async fn delete_event(&self, id: u64) -> Result<(), StoreError> {
		self.store.delete(EVENTS, id).await
	}

	/// Patches only the seat count of an event.
	///
	/// Read-modify-write with no locking: a concurrent writer can still
	/// oversell a seat, matching the external store's semantics.
	pub async fn set_available_seats(&self, id: u64, seats: u32) -> Result<Event, StoreError> {
		let body = serde_json::json!({ "availableSeats": seats });
		Ok(serde_json::from_value(
			self.store.patch(EVENTS, id, body).await?,
		)?)
	}

	/// Users whose email equals `email`.
	pub async fn users_with_email(&self, email: &str) -> Result<Vec<User>, StoreError> {
		decode_list(self.store.list(USERS, &[("email", email)]).await?)
	}

	/// Users whose username equals `username`.
	pub async fn users_with_username(&self, username: &str) -> Result<Vec<User>, StoreError> {
		decode_list(self.store.list(USERS, &[("username", username)]).await?)
	}

	/// First user matching `email`, if any.
	pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
		Ok(self.users_with_email(email).await?.into_iter().next())
	}

	/// Creates a user account.
	pub async fn create_user(&self, draft: &UserDraft) -> Result<User, StoreError> {
		let body = serde_json::to_value(draft)?;
		Ok(serde_json::from_value(
			self.store.create(USERS, body).await?,
		)?)
	}

	/// Lists all registrations.
	pub async fn registrations(&self) -> Result<Vec<Registration>, StoreError> {
		decode_list(self.store.list(REGISTRATIONS, &[]).await?)
	}

	/// Registrations belonging to one user.
	pub async fn registrations_for(&self, user_id: u64) -> Result<Vec<Registration>, StoreError> {
		let user_id = user_id.to_string();
		decode_list(
			self.store
				.list(REGISTRATIONS, &[("userId", &user_id)])
				.await?,
		)
	}

	/// Whether `user_id` is already registered for `event_id`.
	pub async fn registration_exists(
		&self,
		user_id: u64,
		event_id: u64,
	) -> Result<bool, StoreError> {
		let user_id = user_id.to_string();
		let event_id = event_id.to_string();
		let matches = self
			.store
			.list(
				REGISTRATIONS,
				&[("userId", &user_id), ("eventId", &event_id)],
			)
			.await?;
		Ok(!matches.is_empty())
	}

	/// Creates a registration.
	pub async fn create_registration(
		&self,
		draft: RegistrationDraft,
	) -> Result<Registration, StoreError> {
		let body = serde_json::to_value(draft)?;
		Ok(serde_json::from_value(
			self.store.create(REGISTRATIONS, body).await?,
		)?)
	}
}
