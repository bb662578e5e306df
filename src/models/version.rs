//! Version triple model for tagged service artifacts.
//!
//! A version is written into tag strings as `V<major>P<minor>B<build>`,
//! e.g. `V2P0B5`. The three letters are literal; the digit runs are plain
//! decimal with no sign and no separators.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// An immutable (major, minor, build) version.
///
/// Ordering is lexicographic: major, then minor, then build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VersionTriple {
    /// Major version component
    pub major: u32,
    /// Minor version component
    pub minor: u32,
    /// Build number
    pub build: u32,
}

impl VersionTriple {
    /// Create a version triple from its components.
    pub fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Parse a `V<major>P<minor>B<build>` literal.
    ///
    /// Each digit run must be pure ASCII decimal; `u32::from_str` alone
    /// would tolerate a leading `+`.
    pub fn parse(text: &str) -> Result<Self> {
        let malformed = || Error::MalformedVersion(text.to_string());

        let rest = text.strip_prefix('V').ok_or_else(malformed)?;
        let (major, rest) = rest.split_once('P').ok_or_else(malformed)?;
        let (minor, build) = rest.split_once('B').ok_or_else(malformed)?;

        Ok(Self {
            major: parse_component(major).ok_or_else(malformed)?,
            minor: parse_component(minor).ok_or_else(malformed)?,
            build: parse_component(build).ok_or_else(malformed)?,
        })
    }

    /// Render as `V<major>P<minor>B<build>`, no leading zeros.
    pub fn format(&self) -> String {
        format!("V{}P{}B{}", self.major, self.minor, self.build)
    }

    /// The next minor version.
    ///
    /// The build number has no natural successor at this level; callers
    /// supply whichever build policy applies.
    pub fn next_minor(&self, build: u32) -> Self {
        Self {
            major: self.major,
            minor: self.minor + 1,
            build,
        }
    }
}

/// Parse one digit run as a non-negative integer.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
