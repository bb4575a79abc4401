use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shopfront_types::{Category, Product, ProductId};
use std::time::Duration;
use url::Url;

use crate::traits::{CatalogSource, Operation};
use crate::{Error, Result};

/// Public FakeStore deployment
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Upper bound for a single catalog request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `CatalogSource` backed by a FakeStore-compatible REST service
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Build a client against `base_url` with the default timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Some(DEFAULT_TIMEOUT))
    }

    /// Build a client; `None` disables the per-request timeout
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| Error::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        // Local development catalogs never sit behind the system proxy
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor: the base URL can carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Issue a GET and return the status plus raw body.
    ///
    /// Transport failures are reported as `Error::Fetch` with the
    /// operation's message; the cause is only logged.
    async fn get(&self, op: Operation, url: Url) -> Result<(StatusCode, String)> {
        tracing::debug!(op = op.name(), %url, "catalog request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::debug!(op = op.name(), %url, error = %e, "catalog request failed");
            Error::fetch(op.failure_message())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::debug!(op = op.name(), %url, error = %e, "reading catalog response failed");
            Error::fetch(op.failure_message())
        })?;

        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, op: Operation, url: Url) -> Result<T> {
        let (status, body) = self.get(op, url.clone()).await?;
        if !status.is_success() {
            tracing::debug!(op = op.name(), %url, %status, "catalog returned error status");
            return Err(Error::fetch(op.failure_message()));
        }
        decode(op, &body)
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain == "localhost",
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

fn decode<T: DeserializeOwned>(op: Operation, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!(op = op.name(), error = %e, "catalog response did not decode");
        Error::fetch(op.failure_message())
    })
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_all(&self) -> Result<Vec<Product>> {
        let url = self.endpoint(&["products"]);
        self.get_json(Operation::ListAll, url).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product> {
        let op = Operation::GetById;
        let url = self.endpoint(&["products", &id.to_string()]);
        let (status, body) = self.get(op, url).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id));
        }
        if !status.is_success() {
            tracing::debug!(op = op.name(), %status, %id, "catalog returned error status");
            return Err(Error::fetch(op.failure_message()));
        }

        // FakeStore answers unknown ids with 200 and an empty body
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(Error::NotFound(id));
        }

        decode(op, trimmed)
    }

    async fn list_by_category(&self, category: &Category) -> Result<Vec<Product>> {
        let url = self.endpoint(&["products", "category", category.as_str()]);
        self.get_json(Operation::ListByCategory, url).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = self.endpoint(&["products", "categories"]);
        self.get_json(Operation::ListCategories, url).await
    }
}
