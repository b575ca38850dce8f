//! Events list view controller.
//!
//! Renders the event table for regular users and handles seat registration.
//! Events and the user's registrations are fetched with two parallel
//! requests, then joined client-side.

use eventide_core::html::escape;
use eventide_core::session::SessionProvider;
use eventide_store::{Api, Event, RegistrationDraft, ResourceStore, StoreError};
use std::sync::Arc;

/// Per-event action state shown in the table's last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
	/// Visitor is not logged in.
	LoginPrompt,
	/// User already holds a registration.
	Registered,
	/// Seats available; registration offered.
	Register,
	/// No seats left.
	SoldOut,
}

/// One row of the events table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
	pub event: Event,
	pub action: EventAction,
}

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
	/// Seat reserved and seat count decremented.
	Registered,
	/// No active session.
	NotLoggedIn,
	/// The user already holds a registration for this event.
	AlreadyRegistered,
	/// The event has no seats left.
	NoSeats,
}

impl RegistrationOutcome {
	/// User-facing message for this outcome.
	pub fn message(&self) -> &'static str {
		match self {
			Self::Registered => "Successful registration!",
			Self::NotLoggedIn => "You need to be logged in.",
			Self::AlreadyRegistered => "You are already registered.",
			Self::NoSeats => "There are no available seats for this event.",
		}
	}
}

/// Controller for the user-facing events table.
pub struct EventsController<S> {
	api: Arc<Api<S>>,
	sessions: Arc<dyn SessionProvider>,
}

impl<S: ResourceStore> EventsController<S> {
	/// Creates the controller.
	pub fn new(api: Arc<Api<S>>, sessions: Arc<dyn SessionProvider>) -> Self {
		Self { api, sessions }
	}

	/// Builds the table rows: all events joined with the current user's
	/// registrations.
	pub async fn rows(&self) -> Result<Vec<EventRow>, StoreError> {
		let session = self.sessions.current();

		let (events, registrations) = match &session {
			Some(session) => {
				tokio::try_join!(self.api.events(), self.api.registrations_for(session.user_id))?
			}
			None => (self.api.events().await?, Vec::new()),
		};

		Ok(events
			.into_iter()
			.map(|event| {
				let registered = registrations.iter().any(|r| r.event_id == event.id);
				let action = if session.is_none() {
					EventAction::LoginPrompt
				} else if registered {
					EventAction::Registered
				} else if event.has_seats() {
					EventAction::Register
				} else {
					EventAction::SoldOut
				};
				EventRow { event, action }
			})
			.collect())
	}

	/// Renders the table body markup for the rows.
	pub fn render_rows(rows: &[EventRow]) -> String {
		rows.iter()
			.map(|row| {
				let action = match row.action {
					EventAction::LoginPrompt => {
						"<span class=\"text-muted\">Please log in</span>".to_string()
					}
					EventAction::Registered => {
						"<span class=\"badge bg-success\">Registered</span>".to_string()
					}
					EventAction::Register => format!(
						"<button class=\"btn btn-primary btn-sm register-event-btn\" \
						 data-id=\"{}\">Register</button>",
						row.event.id
					),
					EventAction::SoldOut => {
						"<span class=\"badge bg-secondary\">No seats</span>".to_string()
					}
				};
				format!(
					"<tr data-id=\"{id}\">\
					 <td>{title}</td>\
					 <td>{description}</td>\
					 <td>{seats}</td>\
					 <td>{date}</td>\
					 <td>{location}</td>\
					 <td>{action}</td>\
					 </tr>",
					id = row.event.id,
					title = escape(&row.event.title),
					description = escape(&row.event.description),
					seats = row.event.available_seats,
					date = row.event.date,
					location = escape(&row.event.location),
					action = action,
				)
			})
			.collect()
	}

	/// Registers the current user for `event_id` and decrements the seat
	/// count.
	///
	/// The decrement is a read-modify-write against the store with no
	/// transaction; a concurrent writer can still oversell, per the store's
	/// semantics.
	pub async fn register(&self, event_id: u64) -> Result<RegistrationOutcome, StoreError> {
		let Some(session) = self.sessions.current() else {
			return Ok(RegistrationOutcome::NotLoggedIn);
		};

		if self
			.api
			.registration_exists(session.user_id, event_id)
			.await?
		{
			return Ok(RegistrationOutcome::AlreadyRegistered);
		}

		let event = self.api.event(event_id).await?;
		if !event.has_seats() {
			return Ok(RegistrationOutcome::NoSeats);
		}

		self.api
			.create_registration(RegistrationDraft {
				user_id: session.user_id,
				event_id,
			})
			.await?;
		self.api
			.set_available_seats(event_id, event.available_seats - 1)
			.await?;
		tracing::debug!(user = session.user_id, event = event_id, "seat registered");

		Ok(RegistrationOutcome::Registered)
	}
}
