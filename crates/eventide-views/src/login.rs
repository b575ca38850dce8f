//! Login view controller.
//!
//! Looks the user up by email, compares the password, persists the session,
//! and routes admins to the dashboard and everyone else to the events list.

use eventide_core::session::SessionProvider;
use eventide_store::{Api, ResourceStore, StoreError};
use std::sync::Arc;

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
	/// Credentials accepted; session stored.
	Success {
		/// Route key to navigate to next.
		redirect_to: String,
		/// Greeting shown to the user.
		welcome: String,
	},
	/// Email or password left empty.
	MissingFields,
	/// No account with that email.
	UserNotFound,
	/// Password does not match.
	WrongPassword,
}

impl LoginOutcome {
	/// User-facing message for this outcome.
	pub fn message(&self) -> String {
		match self {
			Self::Success { welcome, .. } => welcome.clone(),
			Self::MissingFields => "Please enter both email and password.".to_string(),
			Self::UserNotFound => "User not found.".to_string(),
			Self::WrongPassword => "Incorrect password.".to_string(),
		}
	}
}

/// Controller for the login form.
pub struct LoginController<S> {
	api: Arc<Api<S>>,
	sessions: Arc<dyn SessionProvider>,
}

impl<S: ResourceStore> LoginController<S> {
	/// Creates the controller.
	pub fn new(api: Arc<Api<S>>, sessions: Arc<dyn SessionProvider>) -> Self {
		Self { api, sessions }
	}

	/// Handles a login form submission.
	///
	/// On success the session is persisted; the outcome names the post-login
	/// route (`dashboard` for admins, `events` otherwise).
	pub async fn submit(&self, email: &str, password: &str) -> Result<LoginOutcome, StoreError> {
		let email = email.trim();
		let password = password.trim();
		if email.is_empty() || password.is_empty() {
			return Ok(LoginOutcome::MissingFields);
		}

		let Some(user) = self.api.find_user_by_email(email).await? else {
			return Ok(LoginOutcome::UserNotFound);
		};

		// Plaintext comparison, matching the external store's contents.
		if user.password != password {
			return Ok(LoginOutcome::WrongPassword);
		}

		let session = user.to_session();
		let redirect_to = if session.is_admin() { "dashboard" } else { "events" };
		tracing::debug!(user = user.username, role = ?user.role, "login accepted");
		self.sessions.store(session);

		Ok(LoginOutcome::Success {
			redirect_to: redirect_to.to_string(),
			welcome: format!("Welcome, {}!", user.name),
		})
	}
}
