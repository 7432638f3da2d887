//! Driver version resolution layer
//!
//! This module provides the pieces that turn a catalog listing and a release
//! notes document into the ChromeDriver release matching a Chrome major version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Catalog   │────▶│    Notes    │
//! │  (fetch)    │     │  (latest)   │     │   (scan)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │ Registries  │                         │    Parse    │
//! │  (storage)  │                         │(version/rng)│
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Latest release selection from catalog entry names
//! - [`notes`]: Release notes scanning for a matching support range
//! - [`parse`]: Version component and support range parsing
//! - [`registry`]: Catalog trait for fetching listings and notes
//! - [`registries`]: Concrete catalog implementations
//! - [`error`]: Error types for every resolution stage

pub mod catalog;
pub mod error;
pub mod notes;
pub mod parse;
pub mod registries;
pub mod registry;
