//! Error type for resource store operations.

use thiserror::Error;

/// Error returned by [`ResourceStore`](crate::ResourceStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The store answered with a non-success status.
	#[error("store returned status {status} for {resource}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Collection the request targeted.
		resource: String,
	},

	/// The requested item does not exist.
	#[error("no item {id} in {resource}")]
	NotFound {
		/// Collection the request targeted.
		resource: String,
		/// Item identifier.
		id: u64,
	},

	/// Transport-level failure talking to the store.
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),

	/// The response body was not the expected JSON shape.
	#[error("failed to decode response: {0}")]
	Decode(#[from] serde_json::Error),

	/// The base URL and resource name do not form a valid endpoint.
	#[error("invalid endpoint: {0}")]
	Endpoint(#[from] url::ParseError),
}

impl StoreError {
	/// Returns whether this error is a missing-item condition.
	pub fn is_not_found(&self) -> bool {
		matches!(
			self,
			Self::NotFound { .. } | Self::Status { status: 404, .. }
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_not_found_predicate() {
		let err = StoreError::NotFound {
			resource: "events".to_string(),
			id: 9,
		};
		assert!(err.is_not_found());

		let err = StoreError::Status {
			status: 404,
			resource: "events".to_string(),
		};
		assert!(err.is_not_found());

		let err = StoreError::Status {
			status: 500,
			resource: "events".to_string(),
		};
		assert!(!err.is_not_found());
	}

	#[test]
	fn test_display_messages() {
		let err = StoreError::Status {
			status: 503,
			resource: "users".to_string(),
		};
		assert_eq!(err.to_string(), "store returned status 503 for users");

		let err = StoreError::NotFound {
			resource: "events".to_string(),
			id: 3,
		};
		assert_eq!(err.to_string(), "no item 3 in events");
	}
}
