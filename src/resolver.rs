//! Driver version resolution coordinator
//!
//! Combines local browser detection with the driver catalog to find the
//! ChromeDriver release that supports the installed Chrome.

use std::sync::Arc;

use futures::future::try_join;
use serde::Serialize;
use tracing::info;

use crate::browser::{InstalledChrome, LocalBrowser};
use crate::config::ResolverConfig;
use crate::version::catalog::select_latest;
use crate::version::error::ResolveError;
use crate::version::notes::{NotesMarkers, find_driver_version};
use crate::version::registries::ChromeDriverStorage;
use crate::version::registry::DriverCatalog;

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// Installed browser version, e.g. "79.0.3945.88"
    pub browser_version: String,
    /// Matching driver release, or None when no release supports the browser
    pub driver_version: Option<String>,
}

/// Groups the collaborators needed to resolve a driver version.
///
/// Browser detection and catalog selection run concurrently; the release
/// notes fetch waits for the selected catalog entry.
pub struct DriverResolver {
    browser: Arc<dyn LocalBrowser>,
    catalog: Arc<dyn DriverCatalog>,
    markers: NotesMarkers,
}

impl DriverResolver {
    /// Create a new DriverResolver with the given components
    pub fn new(browser: Arc<dyn LocalBrowser>, catalog: Arc<dyn DriverCatalog>) -> Self {
        Self {
            browser,
            catalog,
            markers: NotesMarkers::default(),
        }
    }

    /// Create a resolver backed by the installed Chrome and the storage bucket
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ResolveError> {
        let browser = InstalledChrome::new(config.browser_path.clone(), config.detect_timeout());
        let catalog = ChromeDriverStorage::new(&config.catalog_url, config.request_timeout())?;

        Ok(Self::new(Arc::new(browser), Arc::new(catalog)))
    }

    /// Override the release notes line markers
    pub fn with_markers(mut self, markers: NotesMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Resolve the driver release for the installed browser.
    ///
    /// Fails if detection, the catalog listing, or the notes fetch fails.
    /// A notes document with no matching range resolves with no driver version.
    pub async fn resolve(&self) -> Result<ResolutionResult, ResolveError> {
        let local = async { Ok::<_, ResolveError>(self.browser.detect_local_version().await?) };
        let latest = async {
            let entries = self.catalog.fetch_catalog_listing().await?;
            select_latest(&entries)
        };

        let (local, latest) = try_join(local, latest).await?;

        let notes = self.catalog.fetch_release_notes(&latest).await?;
        let driver_version = find_driver_version(&notes, local.major, &self.markers);

        match &driver_version {
            Some(driver) => info!(
                "Chrome {} is supported by ChromeDriver {}",
                local.full_version, driver
            ),
            None => info!(
                "No release in ChromeDriver {} notes supports Chrome {}",
                latest, local.major
            ),
        }

        Ok(ResolutionResult {
            browser_version: local.full_version,
            driver_version,
        })
    }
}

/// Resolve the driver version using the installed Chrome and the given config
pub async fn resolve_driver_version(
    config: &ResolverConfig,
) -> Result<ResolutionResult, ResolveError> {
    DriverResolver::from_config(config)?.resolve().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{LocalBrowserVersion, MockLocalBrowser};
    use crate::version::error::{BrowserError, RegistryError};
    use crate::version::registry::MockDriverCatalog;

    const NOTES: &str = "\
----------ChromeDriver v2.43 (2018-10-16)----------
Supports Chrome v69-71
----------ChromeDriver v2.42 (2018-09-13)----------
Supports Chrome v68-70
";

    fn browser_reporting(version: &'static str) -> MockLocalBrowser {
        let mut browser = MockLocalBrowser::new();
        browser
            .expect_detect_local_version()
            .times(1)
            .returning(move || LocalBrowserVersion::parse(version));
        browser
    }

    fn catalog_serving(entries: Vec<&'static str>, notes: &'static str) -> MockDriverCatalog {
        let mut catalog = MockDriverCatalog::new();
        catalog
            .expect_fetch_catalog_listing()
            .times(1)
            .returning(move || Ok(entries.iter().map(|e| e.to_string()).collect()));
        catalog
            .expect_fetch_release_notes()
            .withf(|version: &str| version == "2.43")
            .times(1)
            .returning(move |_| Ok(notes.to_string()));
        catalog
    }

    #[tokio::test]
    async fn resolve_returns_matching_driver_version() {
        let resolver = DriverResolver::new(
            Arc::new(browser_reporting("70.0.3538.110")),
            Arc::new(catalog_serving(
                vec!["2.42/notes.txt", "2.43/notes.txt", "2.9/notes.txt", "index.html"],
                NOTES,
            )),
        );

        let result = resolver.resolve().await.unwrap();

        assert_eq!(
            result,
            ResolutionResult {
                browser_version: "70.0.3538.110".to_string(),
                driver_version: Some("2.43".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn resolve_succeeds_without_driver_when_no_range_matches() {
        let resolver = DriverResolver::new(
            Arc::new(browser_reporting("999.0.0.1")),
            Arc::new(catalog_serving(vec!["2.43/notes.txt"], NOTES)),
        );

        let result = resolver.resolve().await.unwrap();

        assert_eq!(result.browser_version, "999.0.0.1");
        assert_eq!(result.driver_version, None);
    }

    #[tokio::test]
    async fn resolve_fails_without_local_installation_and_skips_catalog() {
        let mut browser = MockLocalBrowser::new();
        browser
            .expect_detect_local_version()
            .returning(|| Err(BrowserError::NoLocalInstallation));
        let mut catalog = MockDriverCatalog::new();
        catalog.expect_fetch_catalog_listing().never();
        catalog.expect_fetch_release_notes().never();

        let resolver = DriverResolver::new(Arc::new(browser), Arc::new(catalog));

        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::Browser(BrowserError::NoLocalInstallation))
        ));
    }

    #[tokio::test]
    async fn resolve_fails_on_empty_catalog_without_fetching_notes() {
        let mut catalog = MockDriverCatalog::new();
        catalog
            .expect_fetch_catalog_listing()
            .returning(|| Ok(vec!["README".to_string()]));
        catalog.expect_fetch_release_notes().never();

        let resolver =
            DriverResolver::new(Arc::new(browser_reporting("70.0.3538.110")), Arc::new(catalog));

        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::EmptyCatalog)
        ));
    }

    #[tokio::test]
    async fn resolve_propagates_notes_fetch_failure() {
        let mut catalog = MockDriverCatalog::new();
        catalog
            .expect_fetch_catalog_listing()
            .returning(|| Ok(vec!["2.43/notes.txt".to_string()]));
        catalog
            .expect_fetch_release_notes()
            .times(1)
            .returning(|version| Err(RegistryError::NotFound(version.to_string())));

        let resolver =
            DriverResolver::new(Arc::new(browser_reporting("70.0.3538.110")), Arc::new(catalog));

        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::Registry(RegistryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn resolve_fails_on_malformed_browser_version() {
        let mut catalog = MockDriverCatalog::new();
        catalog
            .expect_fetch_catalog_listing()
            .returning(|| Ok(vec!["2.43/notes.txt".to_string()]));
        catalog
            .expect_fetch_release_notes()
            .returning(|_| Ok(NOTES.to_string()));
        let mut browser = MockLocalBrowser::new();
        browser.expect_detect_local_version().returning(|| {
            Err(BrowserError::UnexpectedOutput("Google Chrome".to_string()))
        });

        let resolver = DriverResolver::new(Arc::new(browser), Arc::new(catalog));

        assert!(matches!(
            resolver.resolve().await,
            Err(ResolveError::Browser(BrowserError::UnexpectedOutput(_)))
        ));
    }

    #[tokio::test]
    async fn resolve_uses_custom_markers() {
        let mut catalog = MockDriverCatalog::new();
        catalog
            .expect_fetch_catalog_listing()
            .returning(|| Ok(vec!["3.1/notes.txt".to_string()]));
        catalog
            .expect_fetch_release_notes()
            .returning(|_| Ok("== Driver 3.1 stable\nChrome: 80-82\n".to_string()));

        let resolver = DriverResolver::new(Arc::new(browser_reporting("81.0.1")), Arc::new(catalog))
            .with_markers(NotesMarkers {
                header: "== Driver ".to_string(),
                supports: "Chrome: ".to_string(),
            });

        let result = resolver.resolve().await.unwrap();

        assert_eq!(result.driver_version, Some("3.1".to_string()));
    }

    #[test]
    fn resolution_result_serializes_missing_driver_as_null() {
        let result = ResolutionResult {
            browser_version: "79.0.3945.88".to_string(),
            driver_version: None,
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"browserVersion": "79.0.3945.88", "driverVersion": null})
        );
    }
}
