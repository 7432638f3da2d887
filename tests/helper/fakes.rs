//! Collaborator fakes for resolution tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use chromedriver_resolve::browser::{LocalBrowser, LocalBrowserVersion};
use chromedriver_resolve::version::error::{BrowserError, RegistryError};
use chromedriver_resolve::version::registry::DriverCatalog;

/// Browser fake reporting a fixed version, or no installation
pub struct FakeBrowser {
    version: Option<String>,
}

impl FakeBrowser {
    pub fn installed(version: &str) -> Self {
        Self {
            version: Some(version.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { version: None }
    }
}

#[async_trait]
impl LocalBrowser for FakeBrowser {
    async fn detect_local_version(&self) -> Result<LocalBrowserVersion, BrowserError> {
        match &self.version {
            Some(version) => LocalBrowserVersion::parse(version),
            None => Err(BrowserError::NoLocalInstallation),
        }
    }
}

/// Catalog fake serving fixed entries and notes, counting every request
#[derive(Default)]
pub struct FakeCatalog {
    entries: Vec<String>,
    notes: HashMap<String, String>,
    requests: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: &[&str]) -> Self {
        self.entries = entries.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn with_notes(mut self, version: &str, notes: &str) -> Self {
        self.notes.insert(version.to_string(), notes.to_string());
        self
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DriverCatalog for FakeCatalog {
    async fn fetch_catalog_listing(&self) -> Result<Vec<String>, RegistryError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }

    async fn fetch_release_notes(&self, version: &str) -> Result<String, RegistryError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.notes
            .get(version)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(version.to_string()))
    }
}

/// Release notes excerpt in the catalog's format (newest release first)
pub const NOTES_2_46: &str = "\
----------ChromeDriver v2.46 (2019-02-01)----------
Supports Chrome v71-73
Resolved issue 2728: Is Element Displayed not working on template elements [Pri-]
Resolved issue 755: /session/:sessionId/doubleclick only generates one set of mousedown/mouseup/click events [Pri-]

----------ChromeDriver v2.45 (2018-12-10)----------
Supports Chrome v70-72
Resolved issue 1997: New Session is not spec compliant [Pri-1]

----------ChromeDriver v2.44 (2018-11-19)----------
Supports Chrome v69-71
Resolved issue 2522: Test ChromeDriverTest.testWindowMaximize is failing on Mac build bot on Chrome 68 [Pri-2]

----------ChromeDriver v2.43 (2018-10-16)----------
Supports Chrome v69-71
Resolved issue 2537: Parsing of proxy configuration is not standard [Pri-1]
";
