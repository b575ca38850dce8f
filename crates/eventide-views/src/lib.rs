//! View controllers for the Eventide SPA.
//!
//! Each controller owns one mounted fragment's logic: it binds user intents
//! (form submissions, button clicks) to calls against the resource store and
//! produces markup plus typed outcomes for the host to present. Controllers
//! are generic over the [`ResourceStore`](eventide_store::ResourceStore)
//! implementation, so every flow runs against the in-memory store in tests.

pub mod dashboard;
pub mod events;
pub mod login;
pub mod navbar;
pub mod register;

pub use dashboard::{DashboardController, EventForm, EventFormOutcome};
pub use events::{EventAction, EventRow, EventsController, RegistrationOutcome};
pub use login::{LoginController, LoginOutcome};
pub use navbar::{NavbarController, NavbarVariant};
pub use register::{RegisterController, RegisterForm, RegisterOutcome};
