//! REST resource store client.
//!
//! The external collaborator is a generic JSON REST store with collections
//! addressed by name (`events`, `registrations`, `users`), numeric item
//! identifiers, and simple equality filters via query parameters. This crate
//! provides the value-level [`ResourceStore`] seam, a reqwest-backed
//! implementation, an in-memory implementation for native tests, and the
//! typed [`Api`] facade the view controllers consume.

pub mod api;
pub mod error;
pub mod memory;
pub mod models;
pub mod resource;
pub mod rest;

pub use api::Api;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::{Event, EventDraft, Registration, RegistrationDraft, User, UserDraft};
pub use resource::{EVENTS, REGISTRATIONS, ResourceStore, USERS};
pub use rest::RestStore;
