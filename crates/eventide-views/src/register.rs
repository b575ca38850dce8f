//! Registration view controller.
//!
//! Validates the sign-up form, checks username and email uniqueness against
//! the store, and creates the account with the `user` role.

use eventide_core::session::Role;
use eventide_store::{Api, ResourceStore, StoreError, UserDraft};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
	// Same shape check the login form applies client-side.
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email regex: {}", e))
});

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// The sign-up form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
	pub name: String,
	pub email: String,
	pub username: String,
	pub password: String,
	pub confirm_password: String,
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
	/// Account created; navigate back to login.
	Created {
		/// Route key to navigate to next (the login route).
		redirect_to: String,
	},
	/// One or more fields left empty.
	MissingFields,
	/// Email does not look like an address.
	InvalidEmail,
	/// Password shorter than the minimum.
	PasswordTooShort,
	/// Password and confirmation differ.
	PasswordMismatch,
	/// Username already taken.
	UsernameTaken,
	/// Email already registered.
	EmailTaken,
}

impl RegisterOutcome {
	/// User-facing message for this outcome.
	pub fn message(&self) -> &'static str {
		match self {
			Self::Created { .. } => "User registered successfully!",
			Self::MissingFields => "All fields must be filled",
			Self::InvalidEmail => "Please enter a valid email address",
			Self::PasswordTooShort => "Password must be at least 6 characters long",
			Self::PasswordMismatch => "Passwords do not match",
			Self::UsernameTaken => "Username already exists",
			Self::EmailTaken => "Email already exists",
		}
	}
}

/// Controller for the registration form.
pub struct RegisterController<S> {
	api: Arc<Api<S>>,
}

impl<S: ResourceStore> RegisterController<S> {
	/// Creates the controller.
	pub fn new(api: Arc<Api<S>>) -> Self {
		Self { api }
	}

	/// Handles a registration form submission.
	pub async fn submit(&self, form: &RegisterForm) -> Result<RegisterOutcome, StoreError> {
		let name = form.name.trim();
		let email = form.email.trim();
		let username = form.username.trim();
		let password = form.password.trim();
		let confirm = form.confirm_password.trim();

		if name.is_empty()
			|| email.is_empty()
			|| username.is_empty()
			|| password.is_empty()
			|| confirm.is_empty()
		{
			return Ok(RegisterOutcome::MissingFields);
		}
		if !EMAIL_SHAPE.is_match(email) {
			return Ok(RegisterOutcome::InvalidEmail);
		}
		if password.len() < MIN_PASSWORD_LEN {
			return Ok(RegisterOutcome::PasswordTooShort);
		}
		if password != confirm {
			return Ok(RegisterOutcome::PasswordMismatch);
		}

		if !self.api.users_with_username(username).await?.is_empty() {
			return Ok(RegisterOutcome::UsernameTaken);
		}
		if !self.api.users_with_email(email).await?.is_empty() {
			return Ok(RegisterOutcome::EmailTaken);
		}

		let user = self
			.api
			.create_user(&UserDraft {
				name: name.to_string(),
				email: email.to_string(),
				username: username.to_string(),
				password: password.to_string(),
				role: Role::User,
			})
			.await?;
		tracing::debug!(user = user.username, "account created");

		Ok(RegisterOutcome::Created {
			redirect_to: String::new(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use eventide_store::{MemoryStore, USERS};
	use rstest::rstest;
	use serde_json::json;

	fn controller() -> RegisterController<MemoryStore> {
		let api = Arc::new(Api::new(MemoryStore::new()));
		api.store().seed(
			USERS,
			vec![json!({
				"name": "Ada", "email": "ada@example.com",
				"username": "ada", "password": "hunter2", "role": "admin"
			})],
		);
		RegisterController::new(api)
	}

	fn valid_form() -> RegisterForm {
		RegisterForm {
			name: "Bob".to_string(),
			email: "bob@example.com".to_string(),
			username: "bob".to_string(),
			password: "secret99".to_string(),
			confirm_password: "secret99".to_string(),
		}
	}

	#[tokio::test]
	async fn test_valid_form_creates_user_with_user_role() {
		let controller = controller();
		let outcome = controller.submit(&valid_form()).await.unwrap();
		assert_eq!(
			outcome,
			RegisterOutcome::Created {
				redirect_to: String::new()
			}
		);

		let created = controller
			.api
			.find_user_by_email("bob@example.com")
			.await
			.unwrap()
			.unwrap();
		assert_eq!(created.role, Role::User);
	}

	#[tokio::test]
	async fn test_missing_fields() {
		let controller = controller();
		let form = RegisterForm {
			name: String::new(),
			..valid_form()
		};
		assert_eq!(
			controller.submit(&form).await.unwrap(),
			RegisterOutcome::MissingFields
		);
	}

	#[rstest]
	#[case("not-an-email")]
	#[case("missing@tld")]
	#[case("spaces in@mail.com")]
	#[tokio::test]
	async fn test_invalid_email_shapes(#[case] email: &str) {
		let controller = controller();
		let form = RegisterForm {
			email: email.to_string(),
			..valid_form()
		};
		assert_eq!(
			controller.submit(&form).await.unwrap(),
			RegisterOutcome::InvalidEmail
		);
	}

	#[tokio::test]
	async fn test_short_password() {
		let controller = controller();
		let form = RegisterForm {
			password: "abc".to_string(),
			confirm_password: "abc".to_string(),
			..valid_form()
		};
		assert_eq!(
			controller.submit(&form).await.unwrap(),
			RegisterOutcome::PasswordTooShort
		);
	}

	#[tokio::test]
	async fn test_password_mismatch() {
		let controller = controller();
		let form = RegisterForm {
			confirm_password: "different99".to_string(),
			..valid_form()
		};
		assert_eq!(
			controller.submit(&form).await.unwrap(),
			RegisterOutcome::PasswordMismatch
		);
	}

	#[tokio::test]
	async fn test_duplicate_username_rejected() {
		let controller = controller();
		let form = RegisterForm {
			username: "ada".to_string(),
			..valid_form()
		};
		assert_eq!(
			controller.submit(&form).await.unwrap(),
			RegisterOutcome::UsernameTaken
		);
	}

	#[tokio::test]
	async fn test_duplicate_email_rejected() {
		let controller = controller();
		let form = RegisterForm {
			email: "ada@example.com".to_string(),
			..valid_form()
		};
		assert_eq!(
			controller.submit(&form).await.unwrap(),
			RegisterOutcome::EmailTaken
		);
	}
}
