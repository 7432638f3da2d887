//! Release notes scanning
//!
//! ChromeDriver notes interleave release headers and support lines:
//!
//! ```text
//! ----------ChromeDriver v2.43 (2018-10-16)----------
//! Supports Chrome v69-71
//! Resolved issue 2537: Parsing of proxy configuration is not standard [Pri-1]
//! ```
//!
//! A support line belongs to the header on the line directly above it.

use tracing::debug;

use crate::version::parse::{SUPPORTS_PREFIX, parse_support_range};

/// Prefix of the line that opens a release block
pub const HEADER_PREFIX: &str = "----------ChromeDriver v";

/// Line prefixes identifying release headers and support declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesMarkers {
    pub header: String,
    pub supports: String,
}

impl Default for NotesMarkers {
    fn default() -> Self {
        Self {
            header: HEADER_PREFIX.to_string(),
            supports: SUPPORTS_PREFIX.to_string(),
        }
    }
}

#[derive(Debug)]
enum ScanState<'a> {
    AwaitingHeader,
    HeaderSeen(&'a str),
}

/// Find the release whose support range contains `major`.
///
/// Lines are scanned in document order and the first matching block wins.
/// Support lines without a header directly above them, and support lines that
/// fail to parse, never match. Returns `None` when no block matches.
pub fn find_driver_version(notes: &str, major: u64, markers: &NotesMarkers) -> Option<String> {
    let mut state = ScanState::AwaitingHeader;

    for line in notes.lines() {
        if line.starts_with(&markers.supports) {
            match state {
                ScanState::HeaderSeen(release) => match parse_support_range(line, &markers.supports)
                {
                    Ok(range) if range.contains(major) => return Some(release.to_string()),
                    Ok(_) => {}
                    Err(e) => debug!("Skipping support line: {}", e),
                },
                ScanState::AwaitingHeader => {
                    debug!("Skipping support line without release header: {:?}", line)
                }
            }
        }

        state = match release_from_header(line, &markers.header) {
            Some(release) => ScanState::HeaderSeen(release),
            None => ScanState::AwaitingHeader,
        };
    }

    None
}

/// Extract the release identifier (text after the marker, up to the first space)
fn release_from_header<'a>(line: &'a str, header: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(header)?;
    let release = rest.split(' ').next().unwrap_or(rest);
    (!release.is_empty()).then_some(release)
}
