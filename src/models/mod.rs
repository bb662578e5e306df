//! Data models for capstan entities.
//!
//! This module defines the core data structures:
//! - `VersionTriple` - (major, minor, build) with the `V..P..B..` literal form
//! - `FeatureTag` - a decoded feature tag with its ticket and service fields
//! - `FeatureTagGroup` / `GroupMember` - tags grouped by ticket with
//!   per-member selection state
//! - `VersionDecision` / `VersionSource` - the resolved outcome of the
//!   version-selection policy
//! - `ServiceCoordinates` - the grammar fields identifying a service,
//!   minus the version

pub mod version;

pub use version::VersionTriple;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tag following the feature-tag grammar.
///
/// Grammar, bit-exact:
/// `feature/<ticketId>/<businessFunction>.<container>/<serviceName>_V<major>P<minor>B<build>`.
///
/// Constructed only by [`crate::codec::decode`] from a raw repository tag
/// string; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTag {
    /// Work-item identifier, second grammar segment
    pub ticket_id: String,

    /// Business function, third segment before the last `.`
    pub business_function: String,

    /// Container, third segment after the last `.`
    pub container: String,

    /// Service name, fourth segment before the first `_V`
    pub service_name: String,

    /// Version encoded at the end of the fourth segment
    pub version: VersionTriple,

    /// The raw tag string as stored in the repository
    pub raw: String,
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// One entry of a [`FeatureTagGroup`]: a decoded tag plus its selection
/// flag. The flag lives here so the tag itself stays immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    /// The decoded tag
    pub tag: FeatureTag,

    /// Whether this member is checked for the pending bulk operation
    #[serde(default)]
    pub selected: bool,
}

/// Tags sharing one ticket id.
///
/// Groups are never empty: a group exists only because at least one valid
/// tag carried its ticket id. Members keep the order of the original
/// listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTagGroup {
    /// Ticket id shared by every member
    pub ticket_id: String,

    /// Member tags in listing order
    pub members: Vec<GroupMember>,
}

/// Which input the user last committed to as the version source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    /// The user typed a new version
    ExplicitVersion,
    /// The user adopted a pre-existing feature tag
    FeatureTag,
}

/// The resolved outcome of the version-selection policy.
///
/// Invariant: `source == FeatureTag` iff `tag_ref` is present, and then
/// `version` equals the referenced tag's version. Only
/// [`crate::policy::ServiceVersionPolicy`] constructs these, and it
/// upholds the invariant by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDecision {
    /// Where the version came from
    pub source: VersionSource,

    /// The outgoing version
    pub version: VersionTriple,

    /// The adopted tag, present exactly when `source` is `FeatureTag`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ref: Option<FeatureTag>,
}

/// The grammar fields identifying a service, minus the version.
///
/// Supplied by the host when a new feature tag is to be created; the
/// same reserved-character rules as [`crate::codec::encode`] apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCoordinates {
    /// Work-item identifier
    pub ticket_id: String,

    /// Business function of the service
    pub business_function: String,

    /// Container the service lives in
    pub container: String,

    /// Service name
    pub service_name: String,
}
