//! Version string and support range parsing

use crate::version::error::VersionParseError;

/// Prefix of the notes line declaring which Chrome majors a release supports
pub const SUPPORTS_PREFIX: &str = "Supports Chrome v";

/// Inclusive range of Chrome major versions supported by one driver release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportRange {
    pub min: u64,
    pub max: u64,
}

impl SupportRange {
    pub fn contains(&self, major: u64) -> bool {
        self.min <= major && major <= self.max
    }
}

/// Parse the leading component of a dotted version string.
///
/// Examples:
/// - "79.0.3945.88" -> 79
/// - "7" -> 7
pub fn major_version(version: &str) -> Result<u64, VersionParseError> {
    nth_component(version, 0)
}

/// Parse the second component of a dotted version string (e.g. "2.41" -> 41)
pub fn minor_version(version: &str) -> Result<u64, VersionParseError> {
    nth_component(version, 1)
}

fn nth_component(version: &str, index: usize) -> Result<u64, VersionParseError> {
    version
        .split('.')
        .nth(index)
        .and_then(|part| part.trim().parse().ok())
        .ok_or_else(|| VersionParseError::MalformedVersion(version.to_string()))
}

/// Parse a line like `Supports Chrome v69-71` into its bounds.
///
/// The line must start with `prefix`; both sides of the `-` must be integers.
pub fn parse_support_range(line: &str, prefix: &str) -> Result<SupportRange, VersionParseError> {
    let malformed = || VersionParseError::MalformedRangeLine(line.to_string());

    let (min, max) = line
        .strip_prefix(prefix)
        .and_then(|rest| rest.split_once('-'))
        .ok_or_else(malformed)?;

    Ok(SupportRange {
        min: min.trim().parse().map_err(|_| malformed())?,
        max: max.trim().parse().map_err(|_| malformed())?,
    })
}
