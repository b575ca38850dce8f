//! Typed models for the store's collections.
//!
//! Wire field names are camelCase to match the external JSON store
//! (`availableSeats`, `userId`, `eventId`). Draft types are the create
//! payloads; the store assigns identifiers.

use chrono::NaiveDate;
use eventide_core::session::{Role, Session};
use serde::{Deserialize, Serialize};

/// An event users can register for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
	pub id: u64,
	pub title: String,
	pub description: String,
	pub available_seats: u32,
	pub date: NaiveDate,
	pub location: String,
}

impl Event {
	/// Returns whether the event still has open seats.
	pub fn has_seats(&self) -> bool {
		self.available_seats > 0
	}
}

/// Create payload for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
	pub title: String,
	pub description: String,
	pub available_seats: u32,
	pub date: NaiveDate,
	pub location: String,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: u64,
	pub name: String,
	pub email: String,
	pub username: String,
	pub password: String,
	pub role: Role,
}

impl User {
	/// Builds the session record persisted at login.
	pub fn to_session(&self) -> Session {
		Session::new(self.id, self.name.clone(), self.role)
	}
}

/// Create payload for a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
	pub name: String,
	pub email: String,
	pub username: String,
	pub password: String,
	pub role: Role,
}

/// A user's registration for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
	pub id: u64,
	pub user_id: u64,
	pub event_id: u64,
}

/// Create payload for a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
	pub user_id: u64,
	pub event_id: u64,
}
