//! Selection of the latest release from the driver catalog listing

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::version::error::ResolveError;
use crate::version::parse::minor_version;

/// Marker that distinguishes real releases from other objects in the listing
pub const NOTES_MARKER: &str = "/notes.txt";

/// Orders catalog versions newest first by minor version alone.
///
/// The catalog's historical numbering only signals recency through the minor
/// component, so "2.9" sorts after "2.41" and the major component is ignored.
pub fn compare_by_minor_desc(a: &u64, b: &u64) -> Ordering {
    b.cmp(a)
}

/// Pick the latest release version from catalog entry names.
///
/// Only entries containing [`NOTES_MARKER`] are releases; the version is the
/// leading path component. Entries whose minor version does not parse are
/// skipped. Equal minor versions keep listing order.
pub fn select_latest<S: AsRef<str>>(entries: &[S]) -> Result<String, ResolveError> {
    let mut releases: Vec<(u64, &str)> = entries
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| name.contains(NOTES_MARKER))
        .filter_map(|name| {
            let version = name.split('/').next().unwrap_or(name);
            match minor_version(version) {
                Ok(minor) => Some((minor, version)),
                Err(e) => {
                    warn!("Skipping catalog entry {}: {}", name, e);
                    None
                }
            }
        })
        .collect();

    releases.sort_by(|(a, _), (b, _)| compare_by_minor_desc(a, b));

    let (_, latest) = releases.first().ok_or(ResolveError::EmptyCatalog)?;
    debug!("Latest catalog release: {}", latest);
    Ok(latest.to_string())
}
