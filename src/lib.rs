//! Resolve the ChromeDriver release compatible with the locally installed Chrome.
//!
//! # Modules
//!
//! - [`browser`]: Local Chrome detection
//! - [`config`]: Resolver configuration
//! - [`resolver`]: Resolution entry point combining detection and the catalog
//! - [`version`]: Version parsing, catalog selection, and notes scanning

pub mod browser;
pub mod config;
pub mod resolver;
pub mod version;

pub use resolver::{DriverResolver, ResolutionResult, resolve_driver_version};
