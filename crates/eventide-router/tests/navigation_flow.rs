//! End-to-end navigation flow over the routing core: bootstrap, explicit
//! navigation, anchor interception, back/forward, and the guarded route.

use eventide_core::SessionProvider;
use eventide_core::session::{MemorySessionProvider, Role, Session};
use eventide_router::{
	App, ComponentLoader, FragmentSource, MemoryFragment, Navigator, RecordingSurface,
	RouteDescriptor, RouteTable, StaticFetcher,
};
use std::sync::Arc;

struct World {
	app: App,
	fragment: Arc<MemoryFragment>,
	sessions: Arc<MemorySessionProvider>,
	surface: Arc<RecordingSurface>,
	fetcher: Arc<StaticFetcher>,
}

fn world_at(initial: &str) -> World {
	let table = RouteTable::builder()
		.route(RouteDescriptor::new("", "login.html", "Events Management - Login"))
		.route(RouteDescriptor::new(
			"register",
			"register.html",
			"Events Management - Register",
		))
		.route(
			RouteDescriptor::new("events", "events.html", "Events Management - Events")
				.with_behavior_script("events.js"),
		)
		.route(
			RouteDescriptor::new(
				"dashboard",
				"dashboard.html",
				"Events Management - Dashboard",
			)
			.with_behavior_script("dashboard.js"),
		)
		.route(RouteDescriptor::new(
			"access-denied",
			"access-denied.html",
			"Events Management - Access Denied",
		))
		.fallback(RouteDescriptor::new(
			"404",
			"not-found.html",
			"Events Management - Page Not Found",
		))
		.build()
		.unwrap();

	let fetcher = Arc::new(
		StaticFetcher::new()
			.with("login.html", "<form id=\"loginForm\"></form>")
			.with("register.html", "<form id=\"registerForm\"></form>")
			.with("events.html", "<table id=\"userEventsTable\"></table>")
			.with("dashboard.html", "<table id=\"eventsTable\"></table>")
			.with("access-denied.html", "<h1>Access denied</h1>")
			.with("not-found.html", "<h1>Page not found</h1>"),
	);

	let fragment = Arc::new(MemoryFragment::at(initial));
	let navigator = Arc::new(Navigator::new(fragment.clone()));
	let sessions = Arc::new(MemorySessionProvider::new());
	let surface = Arc::new(RecordingSurface::new());
	let loader = Arc::new(ComponentLoader::new(
		Arc::new(table),
		navigator.clone(),
		sessions.clone(),
		fetcher.clone(),
		surface.clone(),
	));

	World {
		app: App::new(navigator, loader),
		fragment,
		sessions,
		surface,
		fetcher,
	}
}

#[tokio::test]
async fn initial_load_mounts_login_for_empty_fragment() {
	let world = world_at("");
	world.app.start().await;

	assert_eq!(
		world.surface.last_title().as_deref(),
		Some("Events Management - Login")
	);
	assert_eq!(
		world.surface.last_mount().as_deref(),
		Some("<form id=\"loginForm\"></form>")
	);
}

#[tokio::test]
async fn explicit_navigation_loads_target_view() {
	let mut world = world_at("");
	world.app.start().await;

	world.app.navigator().navigate_to("events");
	world.app.dispatch_pending().await;

	assert_eq!(world.app.navigator().current(), "events");
	assert_eq!(
		world.surface.last_mount().as_deref(),
		Some("<table id=\"userEventsTable\"></table>")
	);
}

#[tokio::test]
async fn anchor_interception_routes_through_navigation() {
	let mut world = world_at("");
	world.app.start().await;

	assert!(world.app.navigator().intercept_anchor("#register"));
	world.app.dispatch_pending().await;

	assert_eq!(
		world.surface.last_mount().as_deref(),
		Some("<form id=\"registerForm\"></form>")
	);

	// Non-fragment anchors stay with the browser.
	assert!(!world.app.navigator().intercept_anchor("/events.csv"));
}

#[tokio::test]
async fn back_navigation_reloads_previous_view() {
	let mut world = world_at("");
	world.app.start().await;

	world.app.navigator().navigate_to("events");
	world.app.dispatch_pending().await;

	// The host moves the fragment back, then reports the change.
	world.fragment.set("");
	world.app.navigator().external_change();
	world.app.dispatch_pending().await;

	assert_eq!(
		world.surface.last_mount().as_deref(),
		Some("<form id=\"loginForm\"></form>")
	);
}

#[tokio::test]
async fn guarded_route_redirects_anonymous_visitor() {
	let mut world = world_at("");
	world.app.start().await;

	world.app.navigator().navigate_to("dashboard");
	world.app.dispatch_pending().await;

	assert_eq!(world.app.navigator().current(), "access-denied");
	assert_eq!(
		world.surface.last_mount().as_deref(),
		Some("<h1>Access denied</h1>")
	);
}

#[tokio::test]
async fn guarded_route_admits_admin_session() {
	let mut world = world_at("");
	world
		.sessions
		.store(Session::new(1, "Ada", Role::Admin));
	world.app.start().await;

	world.app.navigator().navigate_to("dashboard");
	world.app.dispatch_pending().await;

	assert_eq!(world.app.navigator().current(), "dashboard");
	assert_eq!(
		world.surface.last_mount().as_deref(),
		Some("<table id=\"eventsTable\"></table>")
	);
}

#[tokio::test]
async fn unknown_fragment_mounts_not_found() {
	let mut world = world_at("");
	world.app.start().await;

	world.app.navigator().navigate_to("bogus");
	world.app.dispatch_pending().await;

	assert_eq!(
		world.surface.last_title().as_deref(),
		Some("Events Management - Page Not Found")
	);
	// Unknown keys resolve to the fallback descriptor without a retry hop.
	assert_eq!(
		world.fetcher.requests(),
		["login.html", "not-found.html"]
	);
}
