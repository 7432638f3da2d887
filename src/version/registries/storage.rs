//! ChromeDriver storage bucket implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registry::DriverCatalog;

/// Bucket listing returned by `GET {base_url}/`
#[derive(Debug, Deserialize)]
struct ListBucketResult {
    #[serde(rename = "Contents", default)]
    contents: Vec<Contents>,
}

/// One object in the bucket listing
#[derive(Debug, Deserialize)]
struct Contents {
    #[serde(rename = "Key")]
    key: String,
}

/// Catalog implementation backed by the ChromeDriver storage bucket
pub struct ChromeDriverStorage {
    client: reqwest::Client,
    base_url: String,
}

impl ChromeDriverStorage {
    /// Creates a new ChromeDriverStorage for the given bucket URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent("chromedriver-resolve")
                .timeout(timeout)
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_text(&self, url: &str, what: &str) -> Result<String, RegistryError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(what.to_string()));
        }

        if !status.is_success() {
            warn!("Catalog returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(response.text().await?)
    }
}

/// Decode the entry names from a bucket listing document
fn parse_listing(body: &str) -> Result<Vec<String>, RegistryError> {
    let listing: ListBucketResult = quick_xml::de::from_str(body).map_err(|e| {
        warn!("Failed to parse catalog listing: {}", e);
        RegistryError::Parse(e.to_string())
    })?;

    Ok(listing.contents.into_iter().map(|c| c.key).collect())
}

#[async_trait::async_trait]
impl DriverCatalog for ChromeDriverStorage {
    async fn fetch_catalog_listing(&self) -> Result<Vec<String>, RegistryError> {
        let url = format!("{}/", self.base_url);
        let body = self.get_text(&url, "catalog listing").await?;

        let entries = parse_listing(&body)?;
        debug!("Catalog listing contains {} entries", entries.len());

        Ok(entries)
    }

    async fn fetch_release_notes(&self, version: &str) -> Result<String, RegistryError> {
        let url = format!("{}/{}/notes.txt", self.base_url, version);
        self.get_text(&url, version).await
    }
}
