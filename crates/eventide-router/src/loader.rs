//! Component loader.
//!
//! Turns a route key into a mounted view: access check, descriptor
//! resolution, markup fetch, mount, and script re-execution. Decision logic
//! lives in the pure [`ComponentLoader::plan`] step; [`ComponentLoader::load`]
//! applies the resulting plan to the injected [`Surface`].
//!
//! All failure is absorbed internally: a failed component fetch falls back to
//! the not-found route exactly once, and a failed fallback mounts a terminal
//! inline error fragment. Nothing is surfaced to the caller.

use crate::fetch::ComponentFetcher;
use crate::navigator::Navigator;
use crate::plan::{RenderPlan, extract_scripts};
use crate::surface::Surface;
use crate::table::RouteTable;
use eventide_core::session::{Session, SessionProvider};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The one route key with a guarded contract.
pub const GUARDED_KEY: &str = "dashboard";

/// Route key the guard redirects to.
pub const ACCESS_DENIED_KEY: &str = "access-denied";

/// Mounted when the fallback route itself fails to load.
const LOAD_ERROR_FRAGMENT: &str = "<div class=\"load-error\">\
	<h1>Something went wrong</h1>\
	<p>The page could not be loaded. Try again later.</p>\
	</div>";

/// Loads route components into a [`Surface`].
///
/// Concurrent loads are resolved by a generation counter: a load whose fetch
/// completes after a newer load has started discards its result, so the
/// mounted content always belongs to the latest navigation.
pub struct ComponentLoader {
	table: Arc<RouteTable>,
	navigator: Arc<Navigator>,
	sessions: Arc<dyn SessionProvider>,
	fetcher: Arc<dyn ComponentFetcher>,
	surface: Arc<dyn Surface>,
	generation: AtomicU64,
}

impl ComponentLoader {
	/// Wires a loader from its capabilities.
	pub fn new(
		table: Arc<RouteTable>,
		navigator: Arc<Navigator>,
		sessions: Arc<dyn SessionProvider>,
		fetcher: Arc<dyn ComponentFetcher>,
		surface: Arc<dyn Surface>,
	) -> Self {
		Self {
			table,
			navigator,
			sessions,
			fetcher,
			surface,
			generation: AtomicU64::new(0),
		}
	}

	/// Pure planning step: access check plus descriptor resolution.
	///
	/// `dashboard` with no session, or a session without the admin role,
	/// plans the access-denied route and records the redirect so the caller
	/// can sync the address. Unknown keys resolve to the fallback
	/// descriptor.
	pub fn plan(&self, key: &str, session: Option<&Session>) -> RenderPlan {
		let (key, redirect) = if key == GUARDED_KEY && !session.is_some_and(Session::is_admin) {
			(ACCESS_DENIED_KEY, Some(ACCESS_DENIED_KEY.to_string()))
		} else {
			(key, None)
		};

		let descriptor = self.table.resolve(key);
		RenderPlan {
			title: descriptor.title().to_string(),
			component_ref: descriptor.component_ref().to_string(),
			behavior_script: descriptor.behavior_script_ref().map(str::to_string),
			redirect,
		}
	}

	/// Loads the view for `key`.
	///
	/// Side effects only; every failure path is handled internally.
	pub async fn load(&self, key: &str) {
		let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

		let session = self.sessions.current();
		let plan = self.plan(key, session.as_ref());

		if let Some(target) = plan.redirect.as_deref() {
			tracing::debug!(from = key, to = target, "access check redirected");
			self.navigator.navigate_quiet(target);
		}

		self.surface.set_title(&plan.title);

		match self.fetcher.fetch(&plan.component_ref).await {
			Ok(markup) if self.is_current(generation) => self.apply(&plan, &markup),
			Ok(_) => tracing::debug!(route = key, "stale load discarded"),
			Err(err) => {
				tracing::warn!(
					route = key,
					component = plan.component_ref,
					error = %err,
					"component fetch failed, loading fallback route"
				);
				self.load_fallback(generation).await;
			}
		}
	}

	/// Single bounded fallback hop: load the not-found route, and on a second
	/// failure mount the terminal error fragment instead of recursing.
	async fn load_fallback(&self, generation: u64) {
		if !self.is_current(generation) {
			return;
		}

		let descriptor = self.table.resolve(self.table.fallback_key());
		let plan = RenderPlan {
			title: descriptor.title().to_string(),
			component_ref: descriptor.component_ref().to_string(),
			behavior_script: descriptor.behavior_script_ref().map(str::to_string),
			redirect: None,
		};

		self.surface.set_title(&plan.title);

		match self.fetcher.fetch(&plan.component_ref).await {
			Ok(markup) if self.is_current(generation) => self.apply(&plan, &markup),
			Ok(_) => {}
			Err(err) => {
				if self.is_current(generation) {
					tracing::error!(
						component = plan.component_ref,
						error = %err,
						"fallback route failed to load, mounting inline error"
					);
					self.surface.mount(LOAD_ERROR_FRAGMENT);
				}
			}
		}
	}

	/// Applies a fetched plan to the surface: mount, script re-execution in
	/// document order, and the behavior-script append with its dedup rule.
	fn apply(&self, plan: &RenderPlan, markup: &str) {
		self.surface.mount(markup);

		for directive in extract_scripts(markup) {
			self.surface.run_script(&directive);
		}

		if let Some(src) = plan.behavior_script.as_deref()
			&& !self.surface.has_script(src)
		{
			self.surface.append_script(src);
		}
	}

	fn is_current(&self, generation: u64) -> bool {
		self.generation.load(Ordering::SeqCst) == generation
	}
}
