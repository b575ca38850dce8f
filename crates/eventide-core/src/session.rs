//! Authenticated-session model and provider seam.
//!
//! The session is written at login, cleared at logout, and read by the
//! component loader's access check and by the view controllers. Providers are
//! injected capabilities rather than ambient globals so fixture sessions can
//! be used in tests without touching real storage.

use crate::storage::KeyValueStorage;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Storage key the persisted session lives under.
pub const SESSION_KEY: &str = "loggedUser";

/// Role of the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	User,
	Admin,
}

/// The persisted record identifying the currently authenticated user.
///
/// # Examples
///
/// ```
/// use eventide_core::session::{Role, Session};
///
/// let session = Session::new(1, "Ada", Role::Admin);
/// assert!(session.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	/// Identifier of the user in the resource store.
	pub user_id: u64,
	/// Name shown in the navbar.
	pub display_name: String,
	/// Role driving access checks.
	pub role: Role,
}

impl Session {
	/// Creates a session for the given user.
	pub fn new(user_id: u64, display_name: impl Into<String>, role: Role) -> Self {
		Self {
			user_id,
			display_name: display_name.into(),
			role,
		}
	}

	/// Returns whether this session carries the admin role.
	pub fn is_admin(&self) -> bool {
		self.role == Role::Admin
	}
}

/// Read/write access to the current session.
pub trait SessionProvider: Send + Sync {
	/// Returns the active session, if any.
	fn current(&self) -> Option<Session>;

	/// Stores `session` as the active session.
	fn store(&self, session: Session);

	/// Clears the active session.
	fn clear(&self);
}

/// In-memory [`SessionProvider`] for tests and fixtures.
#[derive(Debug, Default)]
pub struct MemorySessionProvider {
	session: RwLock<Option<Session>>,
}

impl MemorySessionProvider {
	/// Creates a provider with no active session.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a provider with `session` already active.
	pub fn with_session(session: Session) -> Self {
		Self {
			session: RwLock::new(Some(session)),
		}
	}
}

impl SessionProvider for MemorySessionProvider {
	fn current(&self) -> Option<Session> {
		self.session
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	fn store(&self, session: Session) {
		*self.session.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
	}

	fn clear(&self) {
		*self.session.write().unwrap_or_else(|e| e.into_inner()) = None;
	}
}

/// [`SessionProvider`] persisting the session as JSON in durable storage
/// under [`SESSION_KEY`].
///
/// A stored value that fails to deserialize is treated as no session; the
/// corrupt value is left in place and a warning is logged.
pub struct StorageSessionProvider {
	storage: Arc<dyn KeyValueStorage>,
}

impl StorageSessionProvider {
	/// Creates a provider over the given storage.
	pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
		Self { storage }
	}
}

impl SessionProvider for StorageSessionProvider {
	fn current(&self) -> Option<Session> {
		let raw = self.storage.get(SESSION_KEY)?;
		match serde_json::from_str(&raw) {
			Ok(session) => Some(session),
			Err(err) => {
				tracing::warn!(error = %err, "stored session is not valid JSON, ignoring");
				None
			}
		}
	}

	fn store(&self, session: Session) {
		match serde_json::to_string(&session) {
			Ok(raw) => self.storage.set(SESSION_KEY, &raw),
			Err(err) => {
				tracing::warn!(error = %err, "failed to serialize session");
			}
		}
	}

	fn clear(&self) {
		self.storage.remove(SESSION_KEY);
	}
}
