//! Local Chrome installation detection
//!
//! Finds an installed Chrome executable and reads its version by running it
//! with `--version`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use regex::Regex;
use tokio::process::Command;
use tracing::{debug, info};

use crate::version::error::BrowserError;
use crate::version::parse::major_version;

/// Environment variable that points at a specific Chrome executable
pub const CHROME_PATH_ENV: &str = "CHROME_PATH";

/// Executable names searched on PATH (Linux)
const LINUX_EXECUTABLES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium-browser",
    "chromium",
];

/// Application bundle binaries (macOS), relative to an Applications directory
const MACOS_BUNDLES: &[&str] = &[
    "Google Chrome.app/Contents/MacOS/Google Chrome",
    "Google Chrome Canary.app/Contents/MacOS/Google Chrome Canary",
    "Chromium.app/Contents/MacOS/Chromium",
];

/// Install roots (Windows) joined with [`WINDOWS_SUFFIX`]
const WINDOWS_ROOTS: &[&str] = &["LOCALAPPDATA", "PROGRAMFILES", "PROGRAMFILES(X86)"];
const WINDOWS_SUFFIX: &str = "Google\\Chrome\\Application\\chrome.exe";

/// Version reported by a local browser installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBrowserVersion {
    /// Full version as printed, e.g. "79.0.3945.88"
    pub full_version: String,
    /// Leading component of `full_version`
    pub major: u64,
}

impl LocalBrowserVersion {
    pub fn parse(full_version: &str) -> Result<Self, BrowserError> {
        Ok(Self {
            major: major_version(full_version)?,
            full_version: full_version.to_string(),
        })
    }
}

/// Trait for detecting the locally installed browser version
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LocalBrowser: Send + Sync {
    /// Returns the installed browser version, or
    /// `BrowserError::NoLocalInstallation` when no browser is found
    async fn detect_local_version(&self) -> Result<LocalBrowserVersion, BrowserError>;
}

/// Detects Chrome from well-known install locations
pub struct InstalledChrome {
    explicit_path: Option<PathBuf>,
    timeout: Duration,
    /// Regex for the dotted version in `--version` output
    version_re: Regex,
}

impl InstalledChrome {
    pub fn new(explicit_path: Option<PathBuf>, timeout: Duration) -> Self {
        Self {
            explicit_path,
            timeout,
            version_re: Regex::new(r"\d+(?:\.\d+)+").unwrap(),
        }
    }

    /// Returns the first candidate executable that exists
    pub fn locate(&self) -> Option<PathBuf> {
        candidate_paths_with_env(self.explicit_path.clone(), |key| std::env::var_os(key))
            .into_iter()
            .find(|path| path.is_file())
    }

    /// Extract the version from output like `Google Chrome 79.0.3945.88`
    pub fn parse_version_output(&self, output: &str) -> Result<LocalBrowserVersion, BrowserError> {
        let version = self
            .version_re
            .find(output)
            .ok_or_else(|| BrowserError::UnexpectedOutput(output.trim().to_string()))?;

        LocalBrowserVersion::parse(version.as_str())
    }

    async fn run_version(&self, executable: &Path) -> Result<String, BrowserError> {
        let output = tokio::time::timeout(
            self.timeout,
            Command::new(executable)
                .arg("--version")
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| BrowserError::Timeout)??;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait::async_trait]
impl LocalBrowser for InstalledChrome {
    async fn detect_local_version(&self) -> Result<LocalBrowserVersion, BrowserError> {
        let executable = self.locate().ok_or(BrowserError::NoLocalInstallation)?;
        debug!("Running {:?} --version", executable);

        let output = self.run_version(&executable).await?;
        let version = self.parse_version_output(&output)?;

        info!(
            "Detected Chrome {} at {:?}",
            version.full_version, executable
        );
        Ok(version)
    }
}

/// Lists candidate executables in priority order: the explicit path, then
/// `CHROME_PATH`, then platform install locations.
fn candidate_paths_with_env(
    explicit_path: Option<PathBuf>,
    env: impl Fn(&str) -> Option<OsString>,
) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = explicit_path.into_iter().collect();
    candidates.extend(env(CHROME_PATH_ENV).map(PathBuf::from));

    if cfg!(target_os = "macos") {
        let home_apps = dirs::home_dir().map(|home| home.join("Applications"));
        for apps in std::iter::once(PathBuf::from("/Applications")).chain(home_apps) {
            candidates.extend(MACOS_BUNDLES.iter().map(|bundle| apps.join(bundle)));
        }
    } else if cfg!(target_os = "windows") {
        candidates.extend(
            WINDOWS_ROOTS
                .iter()
                .filter_map(|&root| env(root))
                .map(|root| PathBuf::from(root).join(WINDOWS_SUFFIX)),
        );
    } else if let Some(path) = env("PATH") {
        for dir in std::env::split_paths(&path) {
            candidates.extend(LINUX_EXECUTABLES.iter().map(|name| dir.join(name)));
        }
    }

    candidates
}
