use crate::core::CatalogSource;
use crate::utils::error::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Fetches resources relative to a page served over http(s).
#[derive(Debug, Clone)]
pub struct HttpSource {
    page_url: Url,
    client: Client,
    headers: HeaderMap,
}

impl HttpSource {
    pub fn new(page_url: &str) -> Result<Self> {
        Ok(Self {
            page_url: Url::parse(page_url)?,
            client: Client::new(),
            headers: HeaderMap::new(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Adds request headers. Invalid names or values are skipped with a warning.
    pub fn with_headers(mut self, headers: &HashMap<String, String>) -> Self {
        for (name, value) in headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    self.headers.insert(name, value);
                }
                _ => tracing::warn!("Skipping invalid header: {}", name),
            }
        }
        self
    }

    pub fn resolve(&self, relative: &str) -> Result<Url> {
        Ok(self.page_url.join(relative)?)
    }
}

impl CatalogSource for HttpSource {
    fn page_path(&self) -> &str {
        self.page_url.path()
    }

    async fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        let url = self.resolve(relative)?;
        tracing::debug!("Making request to: {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;
        tracing::debug!("Response status: {}", response.status());

        let body = response.error_for_status()?.bytes().await?;
        Ok(body.to_vec())
    }
}
