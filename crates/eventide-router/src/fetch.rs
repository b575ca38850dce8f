//! Component markup fetching.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;
use url::Url;

/// Error fetching component markup.
///
/// The single recoverable error condition of the loader: any non-success
/// status or transport failure.
#[derive(Debug, Error)]
pub enum FetchError {
	/// Non-success response status.
	#[error("component fetch returned status {0}")]
	Status(u16),
	/// Transport-level failure.
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),
	/// The component locator does not resolve to a valid URL.
	#[error("invalid component locator: {0}")]
	Locator(#[from] url::ParseError),
	/// No markup registered for the locator (static fetcher only).
	#[error("no component registered for {0}")]
	Unregistered(String),
}

/// Fetches component markup by its opaque locator.
#[async_trait]
pub trait ComponentFetcher: Send + Sync {
	/// Resolves `component_ref` to its markup payload.
	async fn fetch(&self, component_ref: &str) -> Result<String, FetchError>;
}

/// [`ComponentFetcher`] issuing HTTP GETs, resolving locators against a base
/// URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
	base: Url,
	client: reqwest::Client,
}

impl HttpFetcher {
	/// Creates a fetcher resolving component refs against `base`.
	pub fn new(base: Url) -> Self {
		Self {
			base,
			client: reqwest::Client::new(),
		}
	}
}

#[async_trait]
impl ComponentFetcher for HttpFetcher {
	async fn fetch(&self, component_ref: &str) -> Result<String, FetchError> {
		let url = self.base.join(component_ref)?;
		let response = self.client.get(url).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}
		Ok(response.text().await?)
	}
}

/// [`ComponentFetcher`] serving markup from memory.
///
/// Used in tests and native demos; records every requested locator so load
/// behavior (single fallback hop, stale generations) can be asserted.
#[derive(Debug, Default)]
pub struct StaticFetcher {
	components: HashMap<String, String>,
	requests: RwLock<Vec<String>>,
}

impl StaticFetcher {
	/// Creates an empty fetcher; every fetch fails as unregistered.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers markup for a component locator.
	pub fn with(mut self, component_ref: impl Into<String>, markup: impl Into<String>) -> Self {
		self.components.insert(component_ref.into(), markup.into());
		self
	}

	/// Locators requested so far, in order.
	pub fn requests(&self) -> Vec<String> {
		self.requests
			.read()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}
}

#[async_trait]
impl ComponentFetcher for StaticFetcher {
	async fn fetch(&self, component_ref: &str) -> Result<String, FetchError> {
		self.requests
			.write()
			.unwrap_or_else(|e| e.into_inner())
			.push(component_ref.to_string());
		self.components
			.get(component_ref)
			.cloned()
			.ok_or_else(|| FetchError::Unregistered(component_ref.to_string()))
	}
}
