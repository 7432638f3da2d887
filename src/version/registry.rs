//! Catalog trait for fetching ChromeDriver release metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for reading the remote ChromeDriver release catalog
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DriverCatalog: Send + Sync {
    /// Fetches the names of every object in the catalog listing
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Entry names in listing order (e.g., "2.41/notes.txt")
    /// * `Err(RegistryError)` - If the fetch or XML decode fails
    async fn fetch_catalog_listing(&self) -> Result<Vec<String>, RegistryError>;

    /// Fetches the raw release notes text for a release version (e.g., "2.41")
    async fn fetch_release_notes(&self, version: &str) -> Result<String, RegistryError>;
}
