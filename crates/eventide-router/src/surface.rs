//! Display surface seam.
//!
//! The loader's decision logic is pure; this trait is the thin adapter that
//! applies a plan to the actual display: the page title, the single mount
//! point, and the document's live script set.

use crate::plan::ScriptDirective;
use std::collections::HashSet;
use std::sync::RwLock;

/// The side-effecting half of component loading.
pub trait Surface: Send + Sync {
	/// Sets the page title.
	fn set_title(&self, title: &str);

	/// Replaces the mount point's content with `markup`.
	fn mount(&self, markup: &str);

	/// Executes one extracted script, in document order.
	fn run_script(&self, directive: &ScriptDirective);

	/// Whether a script tag referencing exactly `src` is already present.
	fn has_script(&self, src: &str) -> bool;

	/// Appends a script tag referencing `src`, configured to execute in
	/// document order.
	fn append_script(&self, src: &str);
}

/// One recorded surface mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
	/// Title set.
	Title(String),
	/// Mount point replaced.
	Mount(String),
	/// Inline script executed.
	InlineScript(String),
	/// External script executed.
	ExternalScript(String),
	/// Behavior script appended.
	AppendScript(String),
}

/// [`Surface`] test double recording every mutation in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
	events: RwLock<Vec<SurfaceEvent>>,
	installed: RwLock<HashSet<String>>,
}

impl RecordingSurface {
	/// Creates an empty surface.
	pub fn new() -> Self {
		Self::default()
	}

	/// All recorded events, in order.
	pub fn events(&self) -> Vec<SurfaceEvent> {
		self.events
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	/// The most recently mounted markup, if any.
	pub fn last_mount(&self) -> Option<String> {
		self.events()
			.into_iter()
			.rev()
			.find_map(|event| match event {
				SurfaceEvent::Mount(markup) => Some(markup),
				_ => None,
			})
	}

	/// The most recently set title, if any.
	pub fn last_title(&self) -> Option<String> {
		self.events()
			.into_iter()
			.rev()
			.find_map(|event| match event {
				SurfaceEvent::Title(title) => Some(title),
				_ => None,
			})
	}

	/// Number of mounts performed.
	pub fn mount_count(&self) -> usize {
		self.events()
			.iter()
			.filter(|event| matches!(event, SurfaceEvent::Mount(_)))
			.count()
	}

	fn record(&self, event: SurfaceEvent) {
		self.events
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.push(event);
	}
}

impl Surface for RecordingSurface {
	fn set_title(&self, title: &str) {
		self.record(SurfaceEvent::Title(title.to_string()));
	}

	fn mount(&self, markup: &str) {
		self.record(SurfaceEvent::Mount(markup.to_string()));
	}

	fn run_script(&self, directive: &ScriptDirective) {
		match directive {
			ScriptDirective::Inline(body) => {
				self.record(SurfaceEvent::InlineScript(body.clone()));
			}
			ScriptDirective::External(src) => {
				self.record(SurfaceEvent::ExternalScript(src.clone()));
			}
		}
	}

	fn has_script(&self, src: &str) -> bool {
		self.installed
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.contains(src)
	}

	fn append_script(&self, src: &str) {
		self.installed
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.insert(src.to_string());
		self.record(SurfaceEvent::AppendScript(src.to_string()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_records_in_order() {
		let surface = RecordingSurface::new();
		surface.set_title("Events");
		surface.mount("<div></div>");
		surface.run_script(&ScriptDirective::Inline("init();".to_string()));

		assert_eq!(
			surface.events(),
			vec![
				SurfaceEvent::Title("Events".to_string()),
				SurfaceEvent::Mount("<div></div>".to_string()),
				SurfaceEvent::InlineScript("init();".to_string()),
			]
		);
	}

	#[test]
	fn test_append_script_tracks_installation() {
		let surface = RecordingSurface::new();
		assert!(!surface.has_script("events.js"));

		surface.append_script("events.js");
		assert!(surface.has_script("events.js"));
		assert!(!surface.has_script("other.js"));
	}

	#[test]
	fn test_last_mount_and_title() {
		let surface = RecordingSurface::new();
		assert!(surface.last_mount().is_none());

		surface.set_title("A");
		surface.mount("one");
		surface.set_title("B");
		surface.mount("two");

		assert_eq!(surface.last_title().as_deref(), Some("B"));
		assert_eq!(surface.last_mount().as_deref(), Some("two"));
		assert_eq!(surface.mount_count(), 2);
	}
}
