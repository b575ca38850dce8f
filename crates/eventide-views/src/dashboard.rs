//! Admin dashboard view controller.
//!
//! Full event CRUD for administrators: list, create, edit (a full replace of
//! the record), and delete. The form carries raw input strings and is
//! validated against a caller-supplied "today" so the date floor stays
//! deterministic under test.

use chrono::NaiveDate;
use eventide_core::html::escape;
use eventide_store::{Api, Event, EventDraft, ResourceStore, StoreError};
use std::sync::Arc;

/// Raw form input for creating or editing an event.
///
/// Fields hold the input values as typed, before parsing; seat count and
/// date are validated by [`DashboardController::save`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
	pub title: String,
	pub description: String,
	/// ISO date, `YYYY-MM-DD`.
	pub date: String,
	pub location: String,
	pub available_seats: String,
}

impl EventForm {
	/// Pre-fills the form from an existing event, for editing.
	pub fn from_event(event: &Event) -> Self {
		Self {
			title: event.title.clone(),
			description: event.description.clone(),
			date: event.date.to_string(),
			location: event.location.clone(),
			available_seats: event.available_seats.to_string(),
		}
	}
}

/// Result of submitting the event form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFormOutcome {
	/// Event created or replaced.
	Saved(Event),
	/// One or more fields left empty.
	MissingFields,
	/// The date field does not parse as `YYYY-MM-DD`.
	InvalidDate,
	/// The date is earlier than today.
	DateInPast,
	/// The seat count is not a non-negative integer.
	InvalidSeats,
}

impl EventFormOutcome {
	/// User-facing message for this outcome.
	pub fn message(&self) -> &'static str {
		match self {
			Self::Saved(_) => "Event saved.",
			Self::MissingFields => "All fields must be filled",
			Self::InvalidDate => "Please enter a valid date",
			Self::DateInPast => "The event date cannot be in the past",
			Self::InvalidSeats => "Available seats must be a whole number",
		}
	}
}

/// Controller for the admin event table and form.
pub struct DashboardController<S> {
	api: Arc<Api<S>>,
}

impl<S: ResourceStore> DashboardController<S> {
	/// Creates the controller.
	pub fn new(api: Arc<Api<S>>) -> Self {
		Self { api }
	}

	/// Lists all events for the admin table.
	pub async fn events(&self) -> Result<Vec<Event>, StoreError> {
		self.api.events().await
	}

	/// Fetches one event to pre-fill the edit form.
	pub async fn form_for(&self, id: u64) -> Result<EventForm, StoreError> {
		Ok(EventForm::from_event(&self.api.event(id).await?))
	}

	/// Creates a new event, or replaces `editing` entirely when set.
	///
	/// Replacement uses a full write of every field rather than a partial
	/// patch, so stale fields never survive an edit.
	pub async fn save(
		&self,
		form: &EventForm,
		editing: Option<u64>,
		today: NaiveDate,
	) -> Result<EventFormOutcome, StoreError> {
		let draft = match validate(form, today) {
			Ok(draft) => draft,
			Err(outcome) => return Ok(outcome),
		};

		let event = match editing {
			Some(id) => self.api.replace_event(id, &draft).await?,
			None => self.api.create_event(&draft).await?,
		};
		tracing::debug!(event = event.id, editing = editing.is_some(), "event saved");

		Ok(EventFormOutcome::Saved(event))
	}

	/// Deletes an event.
	pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
		self.api.delete_event(id).await?;
		tracing::debug!(event = id, "event deleted");
		Ok(())
	}

	/// Renders the admin table body markup.
	pub fn render_rows(events: &[Event]) -> String {
		if events.is_empty() {
			return "<tr><td colspan=\"6\">No events</td></tr>".to_string();
		}
		events
			.iter()
			.map(|event| {
				format!(
					"<tr data-id=\"{id}\">\
					 <td>{title}</td>\
					 <td>{description}</td>\
					 <td>{seats}</td>\
					 <td>{date}</td>\
					 <td>{location}</td>\
					 <td>\
					 <button class=\"btn btn-sm btn-warning me-2 edit-event-btn\">Edit</button>\
					 <button class=\"btn btn-sm btn-danger delete-event-btn\">Delete</button>\
					 </td>\
					 </tr>",
					id = event.id,
					title = escape(&event.title),
					description = escape(&event.description),
					seats = event.available_seats,
					date = event.date,
					location = escape(&event.location),
				)
			})
			.collect()
	}
}

fn validate(form: &EventForm, today: NaiveDate) -> Result<EventDraft, EventFormOutcome> {
	let title = form.title.trim();
	let description = form.description.trim();
	let date = form.date.trim();
	let location = form.location.trim();
	let seats = form.available_seats.trim();

	if title.is_empty()
		|| description.is_empty()
		|| date.is_empty()
		|| location.is_empty()
		|| seats.is_empty()
	{
		return Err(EventFormOutcome::MissingFields);
	}

	let date: NaiveDate = date.parse().map_err(|_| EventFormOutcome::InvalidDate)?;
	if date < today {
		return Err(EventFormOutcome::DateInPast);
	}

	let available_seats: u32 = seats.parse().map_err(|_| EventFormOutcome::InvalidSeats)?;

	Ok(EventDraft {
		title: title.to_string(),
		description: description.to_string(),
		available_seats,
		date,
		location: location.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use eventide_store::MemoryStore;
	use rstest::rstest;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
	}

	fn controller() -> DashboardController<MemoryStore> {
		DashboardController::new(Arc::new(Api::new(MemoryStore::new())))
	}

	fn valid_form() -> EventForm {
		EventForm {
			title: "RustConf".to_string(),
			description: "Annual conference".to_string(),
			date: "2026-09-12".to_string(),
			location: "Montreal".to_string(),
			available_seats: "30".to_string(),
		}
	}

	#[tokio::test]
	async fn test_create_event() {
		let controller = controller();
		let outcome = controller.save(&valid_form(), None, today()).await.unwrap();

		let EventFormOutcome::Saved(event) = outcome else {
			panic!("expected Saved, got {:?}", outcome);
		};
		assert_eq!(event.title, "RustConf");
		assert_eq!(event.available_seats, 30);
		assert_eq!(controller.events().await.unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_edit_replaces_every_field() {
		let controller = controller();
		let outcome = controller.save(&valid_form(), None, today()).await.unwrap();
		let EventFormOutcome::Saved(created) = outcome else {
			panic!("expected Saved");
		};

		let edited = EventForm {
			title: "RustConf 2026".to_string(),
			available_seats: "12".to_string(),
			..valid_form()
		};
		let outcome = controller
			.save(&edited, Some(created.id), today())
			.await
			.unwrap();

		let EventFormOutcome::Saved(replaced) = outcome else {
			panic!("expected Saved");
		};
		assert_eq!(replaced.id, created.id);
		assert_eq!(replaced.title, "RustConf 2026");
		assert_eq!(replaced.available_seats, 12);
		assert_eq!(controller.events().await.unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_delete_event() {
		let controller = controller();
		let outcome = controller.save(&valid_form(), None, today()).await.unwrap();
		let EventFormOutcome::Saved(event) = outcome else {
			panic!("expected Saved");
		};

		controller.delete(event.id).await.unwrap();
		assert!(controller.events().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_form_for_prefills_from_event() {
		let controller = controller();
		let outcome = controller.save(&valid_form(), None, today()).await.unwrap();
		let EventFormOutcome::Saved(event) = outcome else {
			panic!("expected Saved");
		};

		let form = controller.form_for(event.id).await.unwrap();
		assert_eq!(form, valid_form());
	}

	#[tokio::test]
	async fn test_missing_fields() {
		let controller = controller();
		let form = EventForm {
			location: "  ".to_string(),
			..valid_form()
		};
		assert_eq!(
			controller.save(&form, None, today()).await.unwrap(),
			EventFormOutcome::MissingFields
		);
	}

	#[rstest]
	#[case("12/09/2026", EventFormOutcome::InvalidDate)]
	#[case("2026-13-40", EventFormOutcome::InvalidDate)]
	#[case("2026-08-28", EventFormOutcome::DateInPast)]
	#[tokio::test]
	async fn test_date_validation(#[case] date: &str, #[case] expected: EventFormOutcome) {
		let controller = controller();
		let form = EventForm {
			date: date.to_string(),
			..valid_form()
		};
		assert_eq!(controller.save(&form, None, today()).await.unwrap(), expected);
	}

	#[tokio::test]
	async fn test_today_is_accepted() {
		let controller = controller();
		let form = EventForm {
			date: today().to_string(),
			..valid_form()
		};
		assert!(matches!(
			controller.save(&form, None, today()).await.unwrap(),
			EventFormOutcome::Saved(_)
		));
	}

	#[rstest]
	#[case("-3")]
	#[case("ten")]
	#[case("1.5")]
	#[tokio::test]
	async fn test_seats_must_be_whole_number(#[case] seats: &str) {
		let controller = controller();
		let form = EventForm {
			available_seats: seats.to_string(),
			..valid_form()
		};
		assert_eq!(
			controller.save(&form, None, today()).await.unwrap(),
			EventFormOutcome::InvalidSeats
		);
	}

	#[test]
	fn test_render_rows_empty_placeholder() {
		let markup = DashboardController::<MemoryStore>::render_rows(&[]);
		assert!(markup.contains("No events"));
	}

	#[test]
	fn test_render_rows_escapes_and_carries_actions() {
		let events = vec![Event {
			id: 3,
			title: "Q&A night".to_string(),
			description: "Ask <anything>".to_string(),
			available_seats: 8,
			date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
			location: "Hall".to_string(),
		}];
		let markup = DashboardController::<MemoryStore>::render_rows(&events);

		assert!(markup.contains("Q&amp;A night"));
		assert!(markup.contains("Ask &lt;anything&gt;"));
		assert!(markup.contains("edit-event-btn"));
		assert!(markup.contains("delete-event-btn"));
		assert!(markup.contains("data-id=\"3\""));
	}
}
