//! Application bootstrap.
//!
//! Wires the navigator's change notifications to the component loader: on
//! startup the current route is loaded once, then every navigation — explicit
//! calls, intercepted anchors, back/forward — flows through a channel into
//! [`App::run`]'s dispatch loop.

use crate::loader::ComponentLoader;
use crate::navigator::Navigator;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Wiring of navigator and loader with a navigation dispatch queue.
pub struct App {
	navigator: Arc<Navigator>,
	loader: Arc<ComponentLoader>,
	pending: mpsc::UnboundedReceiver<String>,
}

impl App {
	/// Registers the navigator change handler and builds the app.
	pub fn new(navigator: Arc<Navigator>, loader: Arc<ComponentLoader>) -> Self {
		let (tx, pending) = mpsc::unbounded_channel();
		navigator.on_change(move |key| {
			// Receiver dropped means the app shut down; nothing to dispatch.
			let _ = tx.send(key.to_string());
		});

		Self {
			navigator,
			loader,
			pending,
		}
	}

	/// The wired navigator.
	pub fn navigator(&self) -> &Arc<Navigator> {
		&self.navigator
	}

	/// Performs the initial load of the current route.
	pub async fn start(&self) {
		let key = self.navigator.current();
		self.loader.load(&key).await;
	}

	/// Initial load, then dispatch navigations until the navigator is gone.
	pub async fn run(mut self) {
		self.start().await;
		while let Some(key) = self.pending.recv().await {
			self.loader.load(&key).await;
		}
	}

	/// Dispatches all queued navigations, returning how many were loaded.
	///
	/// Deterministic alternative to [`Self::run`] for tests and
	/// turn-by-turn hosts.
	pub async fn dispatch_pending(&mut self) -> usize {
		let mut dispatched = 0;
		while let Ok(key) = self.pending.try_recv() {
			self.loader.load(&key).await;
			dispatched += 1;
		}
		dispatched
	}
}
