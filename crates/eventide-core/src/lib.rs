//! Core types shared across the Eventide workspace.
//!
//! Provides the authenticated-session model, the key-value storage seam the
//! session persists through, and small HTML utilities used by the view
//! controllers.

pub mod html;
pub mod session;
pub mod storage;

pub use session::{
	MemorySessionProvider, Role, SESSION_KEY, Session, SessionProvider, StorageSessionProvider,
};
pub use storage::{KeyValueStorage, MemoryStorage};
