//! Hash-routing core for the Eventide single-page application.
//!
//! The reusable pieces of the SPA: a static [`RouteTable`] mapping route keys
//! to view descriptors, a [`Navigator`] abstracting the current route over the
//! address fragment, and a [`ComponentLoader`] that turns a route key into a
//! mounted view. Host concerns (the fragment itself, markup fetching, the
//! mount point) are trait seams with in-memory implementations, so the whole
//! core runs natively and under test without a browser.
//!
//! Loading is split into a pure planning step ([`ComponentLoader::plan`]) and
//! a side-effecting apply step against a [`Surface`], with a generation
//! counter giving concurrent navigations deterministic last-wins semantics.

pub mod bootstrap;
pub mod fetch;
pub mod fragment;
pub mod loader;
pub mod navigator;
pub mod plan;
pub mod surface;
pub mod table;

pub use bootstrap::App;
pub use fetch::{ComponentFetcher, FetchError, HttpFetcher, StaticFetcher};
pub use fragment::{FragmentSource, MemoryFragment};
pub use loader::{ACCESS_DENIED_KEY, ComponentLoader, GUARDED_KEY};
pub use navigator::Navigator;
pub use plan::{RenderPlan, ScriptDirective, extract_scripts};
pub use surface::{RecordingSurface, Surface, SurfaceEvent};
pub use table::{RouteDescriptor, RouteTable, RouteTableBuilder, RouteTableError};
