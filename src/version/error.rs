use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("Malformed version: {0:?}")]
    MalformedVersion(String),

    #[error("Malformed range line: {0:?}")]
    MalformedRangeLine(String),
}

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("No local installation of Chrome was found")]
    NoLocalInstallation,

    #[error("Failed to run browser executable: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Browser did not report its version in time")]
    Timeout,

    #[error("Unexpected browser version output: {0:?}")]
    UnexpectedOutput(String),

    #[error(transparent)]
    Version(#[from] VersionParseError),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Release not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to parse catalog listing: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Version(#[from] VersionParseError),

    #[error("Catalog contains no release notes")]
    EmptyCatalog,
}
