//! HTTP-based catalog loader

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::catalog::{TemplateCatalog, TemplateRecord};
use crate::error::{Error, Result};

/// Fetches a catalog snapshot from somewhere
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Fetch every template the source currently serves
    async fn fetch(&self) -> Result<TemplateCatalog>;
}

/// Loads the template catalog from a read-only HTTP endpoint
pub struct HttpCatalogLoader {
    client: Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl HttpCatalogLoader {
    /// Builds the loader. Requests wait indefinitely unless `timeout` is set.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(Error::config(format!(
                "HttpCatalogLoader only handles HTTP(S) URLs, got: {}",
                endpoint
            )));
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl CatalogLoader for HttpCatalogLoader {
    async fn fetch(&self) -> Result<TemplateCatalog> {
        debug!(endpoint = %self.endpoint, "Fetching template catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Catalog request failed");
                Error::fetch(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "Catalog returned non-success status");
            return Err(Error::fetch(format!(
                "HTTP {} when fetching {}",
                status, self.endpoint
            )));
        }

        let templates: Vec<TemplateRecord> = response
            .json()
            .await
            .map_err(|e| Error::fetch(format!("invalid catalog body: {}", e)))?;

        info!(count = templates.len(), "Loaded template catalog");
        Ok(TemplateCatalog::new(templates))
    }
}
