//! Navbar view controller.
//!
//! Picks the navbar variant for the current session (logged out, regular
//! user, admin) and handles logout. The host re-renders the navbar after
//! every navigation and session change.

use eventide_core::html::escape;
use eventide_core::session::{Role, SessionProvider};
use std::sync::Arc;

/// Which navbar fragment to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarVariant {
	LoggedOut,
	User,
	Admin,
}

impl NavbarVariant {
	/// Locator of the fragment this variant mounts.
	pub fn component_ref(&self) -> &'static str {
		match self {
			Self::LoggedOut => "components/Navbar/NavbarLoggedOut.html",
			Self::User => "components/Navbar/NavbarLoggedIn.html",
			Self::Admin => "components/Navbar/NavbarAdmin.html",
		}
	}
}

/// Controller for the shared navbar.
pub struct NavbarController {
	sessions: Arc<dyn SessionProvider>,
}

impl NavbarController {
	/// Creates the controller.
	pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
		Self { sessions }
	}

	/// Variant for the current session.
	pub fn variant(&self) -> NavbarVariant {
		match self.sessions.current() {
			None => NavbarVariant::LoggedOut,
			Some(session) if session.role == Role::Admin => NavbarVariant::Admin,
			Some(_) => NavbarVariant::User,
		}
	}

	/// Greeting markup for the logged-in variants, empty when logged out.
	pub fn render_greeting(&self) -> String {
		match self.sessions.current() {
			Some(session) => format!(
				"<span id=\"navbarUserName\">{}</span> \
				 <span id=\"navbarRole\" class=\"badge bg-light text-dark\">{:?}</span>",
				escape(&session.display_name),
				session.role,
			),
			None => String::new(),
		}
	}

	/// Clears the session and names the route to land on.
	pub fn logout(&self) -> &'static str {
		self.sessions.clear();
		tracing::debug!("session cleared");
		""
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use eventide_core::session::{MemorySessionProvider, Session};

	fn with(session: Option<Session>) -> (NavbarController, Arc<MemorySessionProvider>) {
		let sessions = match session {
			Some(session) => Arc::new(MemorySessionProvider::with_session(session)),
			None => Arc::new(MemorySessionProvider::new()),
		};
		(NavbarController::new(sessions.clone()), sessions)
	}

	#[test]
	fn test_variant_logged_out() {
		let (navbar, _) = with(None);
		assert_eq!(navbar.variant(), NavbarVariant::LoggedOut);
		assert!(navbar.render_greeting().is_empty());
	}

	#[test]
	fn test_variant_per_role() {
		let (navbar, _) = with(Some(Session::new(1, "Bob", Role::User)));
		assert_eq!(navbar.variant(), NavbarVariant::User);

		let (navbar, _) = with(Some(Session::new(2, "Ada", Role::Admin)));
		assert_eq!(navbar.variant(), NavbarVariant::Admin);
	}

	#[test]
	fn test_greeting_escapes_display_name() {
		let (navbar, _) = with(Some(Session::new(1, "<Bob>", Role::User)));
		assert!(navbar.render_greeting().contains("&lt;Bob&gt;"));
	}

	#[test]
	fn test_logout_clears_session_and_routes_home() {
		let (navbar, sessions) = with(Some(Session::new(1, "Bob", Role::User)));
		assert_eq!(navbar.logout(), "");
		assert!(sessions.current().is_none());
		assert_eq!(navbar.variant(), NavbarVariant::LoggedOut);
	}

	#[test]
	fn test_component_refs_are_distinct() {
		assert_ne!(
			NavbarVariant::LoggedOut.component_ref(),
			NavbarVariant::User.component_ref()
		);
		assert_ne!(
			NavbarVariant::User.component_ref(),
			NavbarVariant::Admin.component_ref()
		);
	}
}
