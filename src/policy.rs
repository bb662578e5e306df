//! Version-selection policy for a checkout dialog session.
//!
//! Exactly one of two sources can be authoritative at a time: a version
//! the user typed, or a pre-existing feature tag the user picked. The
//! last action taken wins; committing to either source clears the other.
//! Malformed typed input is rejected without disturbing the prior
//! decision, so a stray keystroke never leaves the session without a
//! valid version.

use crate::models::{FeatureTag, VersionDecision, VersionSource, VersionTriple};
use crate::{Error, Result};

/// The branch currently backing the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveSource {
    Explicit(VersionTriple),
    Tag(FeatureTag),
}

/// State machine deciding the outgoing version for a checkout.
///
/// One instance lives per dialog session; it is never shared across
/// sessions or threads.
#[derive(Debug, Clone)]
pub struct ServiceVersionPolicy {
    active: ActiveSource,
}

impl ServiceVersionPolicy {
    /// Start a session from the service's current version, proposing the
    /// next minor as the default explicit version. The build number
    /// stays at zero until a tag supplies one.
    pub fn initialize(current_major: u32, current_minor: u32) -> Self {
        let proposed = VersionTriple::new(current_major, current_minor, 0).next_minor(0);
        Self {
            active: ActiveSource::Explicit(proposed),
        }
    }

    /// Adopt a version typed into the major/minor fields.
    ///
    /// Both fields must be plain non-negative decimal integers. On
    /// malformed input the previous decision stays authoritative.
    pub fn set_explicit_version(&mut self, major: &str, minor: &str) -> Result<()> {
        let major = parse_field(major)?;
        let minor = parse_field(minor)?;
        self.active = ActiveSource::Explicit(VersionTriple::new(major, minor, 0));
        Ok(())
    }

    /// Resume the branch identified by `tag`, adopting its version.
    ///
    /// A hard overwrite: any explicit version typed earlier is discarded.
    pub fn select_feature_tag(&mut self, tag: FeatureTag) {
        self.active = ActiveSource::Tag(tag);
    }

    /// The currently authoritative decision.
    pub fn current_decision(&self) -> VersionDecision {
        match &self.active {
            ActiveSource::Explicit(version) => VersionDecision {
                source: VersionSource::ExplicitVersion,
                version: *version,
                tag_ref: None,
            },
            ActiveSource::Tag(tag) => VersionDecision {
                source: VersionSource::FeatureTag,
                version: tag.version,
                tag_ref: Some(tag.clone()),
            },
        }
    }
}

/// Parse one typed version field as a non-negative integer.
fn parse_field(text: &str) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidVersionFormat(text.to_string()));
    }
    text.parse()
        .map_err(|_| Error::InvalidVersionFormat(text.to_string()))
}
