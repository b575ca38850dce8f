//! # Eventide
//!
//! Single-page application core for event management: hash-based routing,
//! component loading with script re-execution, and CRUD view controllers over
//! a REST resource store.
//!
//! The crate is split along its seams:
//!
//! - [`core`]: sessions, key-value storage, HTML escaping
//! - [`router`]: route table, navigator, component loader, bootstrap
//! - [`store`]: typed resource store (REST and in-memory backends)
//! - [`views`]: login, registration, events, dashboard, and navbar controllers
//!
//! Host concerns (the address fragment, markup fetching, the mount point) are
//! trait seams with in-memory implementations, so the whole application runs
//! natively and under test without a browser.
//!
//! ## Quick Example
//!
//! ```rust
//! use eventide::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let navigator = Arc::new(Navigator::new(Arc::new(MemoryFragment::new())));
//! let loader = Arc::new(ComponentLoader::new(
//!     Arc::new(eventide::routes::default_routes()),
//!     navigator.clone(),
//!     Arc::new(MemorySessionProvider::new()),
//!     Arc::new(StaticFetcher::new().with("components/login/Login.html", "<form></form>")),
//!     Arc::new(RecordingSurface::new()),
//! ));
//!
//! let app = App::new(navigator, loader);
//! app.start().await;
//! # }
//! ```

pub mod core {
	pub use eventide_core::*;
}

pub mod router {
	pub use eventide_router::*;
}

pub mod store {
	pub use eventide_store::*;
}

pub mod views {
	pub use eventide_views::*;
}

pub mod routes {
	//! The application's canonical route table.

	use eventide_router::{RouteDescriptor, RouteTable};

	/// Builds the route table for the event-management application.
	///
	/// Six entries: login at the empty key, register, events, the guarded
	/// dashboard, access-denied, and the not-found fallback.
	pub fn default_routes() -> RouteTable {
		let result = RouteTable::builder()
			.route(
				RouteDescriptor::new(
					"",
					"components/login/Login.html",
					"Events Management - Login",
				)
				.with_behavior_script("scripts/login.js"),
			)
			.route(
				RouteDescriptor::new(
					"register",
					"components/register/Register.html",
					"Events Management - Register",
				)
				.with_behavior_script("scripts/register.js"),
			)
			.route(
				RouteDescriptor::new(
					"events",
					"components/Events/Events.html",
					"Events Management - Events",
				)
				.with_behavior_script("scripts/events.js"),
			)
			.route(
				RouteDescriptor::new(
					"dashboard",
					"components/dashboard/Dashboard.html",
					"Events Management - Dashboard",
				)
				.with_behavior_script("scripts/dashboard.js"),
			)
			.route(RouteDescriptor::new(
				"access-denied",
				"components/AccessDenied/AccessDenied.html",
				"Events Management - Access Denied",
			))
			.fallback(RouteDescriptor::new(
				"404",
				"components/NotFound/NotFound.html",
				"Events Management - Page Not Found",
			))
			.build();
		match result {
			Ok(table) => table,
			// All keys above are distinct literals and the fallback is set.
			Err(err) => unreachable!("static route table: {err}"),
		}
	}

}

/// Commonly used types, importable in one line.
pub mod prelude {
	pub use eventide_core::{
		KeyValueStorage, MemorySessionProvider, MemoryStorage, Role, Session, SessionProvider,
		StorageSessionProvider,
	};
	pub use eventide_router::{
		App, ComponentFetcher, ComponentLoader, FragmentSource, HttpFetcher, MemoryFragment,
		Navigator, RecordingSurface, RenderPlan, RouteDescriptor, RouteTable, StaticFetcher,
		Surface,
	};
	pub use eventide_store::{
		Api, Event, EventDraft, MemoryStore, Registration, RegistrationDraft, ResourceStore,
		RestStore, StoreError, User, UserDraft,
	};
	pub use eventide_views::{
		DashboardController, EventForm, EventFormOutcome, EventsController, LoginController,
		LoginOutcome, NavbarController, NavbarVariant, RegisterController, RegisterForm,
		RegisterOutcome, RegistrationOutcome,
	};

	pub use crate::routes::default_routes;
}
