//! reqwest-backed [`ResourceStore`] implementation.

use crate::error::StoreError;
use crate::resource::ResourceStore;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Resource store client speaking JSON over HTTP.
///
/// Non-success statuses map to [`StoreError::Status`], except 404 on
/// item-addressed operations which maps to [`StoreError::NotFound`].
#[derive(Debug, Clone)]
pub struct RestStore {
	base: Url,
	client: reqwest::Client,
}

impl RestStore {
	/// Creates a client against `base`, e.g. `http://localhost:3000`.
	pub fn new(base: Url) -> Self {
		Self {
			base,
			client: reqwest::Client::new(),
		}
	}

	/// URL of a collection, with equality filters as query parameters.
	fn collection_url(
		&self,
		resource: &str,
		filters: &[(&str, &str)],
	) -> Result<Url, StoreError> {
		let mut url = self.base.join(resource)?;
		if !filters.is_empty() {
			url.query_pairs_mut().extend_pairs(filters.iter().copied());
		}
		Ok(url)
	}

	/// URL of a single item.
	fn item_url(&self, resource: &str, id: u64) -> Result<Url, StoreError> {
		Ok(self.base.join(&format!("{}/{}", resource, id))?)
	}

	async fn decode<T: serde::de::DeserializeOwned>(
		response: reqwest::Response,
	) -> Result<T, StoreError> {
		let bytes = response.bytes().await?;
		Ok(serde_json::from_slice(&bytes)?)
	}

	fn check_status(
		response: reqwest::Response,
		resource: &str,
		id: Option<u64>,
	) -> Result<reqwest::Response, StoreError> {
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}
		if status.as_u16() == 404
			&& let Some(id) = id
		{
			return Err(StoreError::NotFound {
				resource: resource.to_string(),
				id,
			});
		}
		Err(StoreError::Status {
			status: status.as_u16(),
			resource: resource.to_string(),
		})
	}
}

#[async_trait]
impl ResourceStore for RestStore {
	async fn list(
		&self,
		resource: &str,
		filters: &[(&str, &str)],
	) -> Result<Vec<Value>, StoreError> {
		let url = self.collection_url(resource, filters)?;
		let response = self.client.get(url).send().await?;
		let response = Self::check_status(response, resource, None)?;
		Self::decode(response).await
	}

	async fn get(&self, resource: &str, id: u64) -> Result<Value, StoreError> {
		let url = self.item_url(resource, id)?;
		let response = self.client.get(url).send().await?;
		let response = Self::check_status(response, resource, Some(id))?;
		Self::decode(response).await
	}

	async fn create(&self, resource: &str, body: Value) -> Result<Value, StoreError> {
		let url = self.collection_url(resource, &[])?;
		let response = self.client.post(url).json(&body).send().await?;
		let response = Self::check_status(response, resource, None)?;
		Self::decode(response).await
	}

	async fn replace(&self, resource: &str, id: u64, body: Value) -> Result<Value, StoreError> {
		let url = self.item_url(resource, id)?;
		let response = self.client.put(url).json(&body).send().await?;
		let response = Self::check_status(response, resource, Some(id))?;
		Self::decode(response).await
	}

	async fn patch(&self, resource: &str, id: u64, body: Value) -> Result<Value, StoreError> {
		let url = self.item_url(resource, id)?;
		let response = self.client.patch(url).json(&body).send().await?;
		let response = Self::check_status(response, resource, Some(id))?;
		Self::decode(response).await
	}

	async fn delete(&self, resource: &str, id: u64) -> Result<(), StoreError> {
		let url = self.item_url(resource, id)?;
		let response = self.client.delete(url).send().await?;
		Self::check_status(response, resource, Some(id))?;
		Ok(())
	}
}
