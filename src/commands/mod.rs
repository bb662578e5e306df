//! Dialog-session operations.
//!
//! Each dialog action in the host tool maps to one function here. The
//! `prepare_*` functions are pure assembly steps that turn validated
//! inputs into typed, timestamped request values; the `execute_*`
//! functions replay a prepared request against a [`TagRepository`]. The
//! split keeps every collaborator round-trip behind an explicit,
//! user-confirmed value.
//!
//! The revert flow only has a `prepare` step: restoring the model state
//! behind the chosen tag is owned by the host tool, so the core's
//! contribution ends at the validated request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::annotation::CommitAnnotation;
use crate::codec;
use crate::index::{FeatureTagIndex, TagSelectionSet};
use crate::models::{FeatureTag, ServiceCoordinates, VersionDecision, VersionSource};
use crate::policy::ServiceVersionPolicy;
use crate::repo::TagRepository;
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Query the repository for feature tags and build the ticket index.
///
/// `prefix` is the bare first grammar segment; the trailing `/` is added
/// here so callers cannot accidentally match `feature-x/...` tags.
pub fn list_feature_tags(repo: &dyn TagRepository, prefix: &str) -> Result<FeatureTagIndex> {
    let listed = repo.list_tags(&format!("{prefix}/"))?;
    Ok(FeatureTagIndex::build(&listed))
}

/// Snapshot of a checkout dialog's outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Id of the dialog session that produced this request
    pub session_id: Uuid,

    /// When the request was assembled
    pub requested_at: DateTime<Utc>,

    /// The authoritative version decision
    pub decision: VersionDecision,
}

impl CommandResult for CheckoutRequest {
    fn to_human(&self) -> String {
        match &self.decision.tag_ref {
            Some(tag) => format!("checkout resuming {}", tag.raw),
            None => format!("checkout at new version {}", self.decision.version),
        }
    }
}

/// Snapshot the policy's current decision as a checkout request.
pub fn prepare_checkout(policy: &ServiceVersionPolicy) -> CheckoutRequest {
    let request = CheckoutRequest {
        session_id: Uuid::new_v4(),
        requested_at: Utc::now(),
        decision: policy.current_decision(),
    };
    tracing::debug!(session = %request.session_id, "prepared checkout request");
    request
}

/// A commit-style action prepared for the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRequest {
    /// Id of the dialog session that produced this request
    pub session_id: Uuid,

    /// When the request was assembled
    pub requested_at: DateTime<Utc>,

    /// Validated annotation plus the release toggle
    pub annotation: CommitAnnotation,

    /// Tag to create alongside the commit; present only when the
    /// decision was an explicit new version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_to_create: Option<String>,

    /// The decision the commit is based on
    pub decision: VersionDecision,
}

impl CommandResult for CommitRequest {
    fn to_human(&self) -> String {
        let action = if self.annotation.release_requested {
            "commit and release"
        } else {
            "commit"
        };
        match &self.tag_to_create {
            Some(tag) => format!("{action} creating {tag}"),
            None => format!("{action} on existing tag"),
        }
    }
}

/// Assemble a commit request from the dialog's current state.
///
/// The annotation is checked against `min_length` (the commit threshold
/// at the existing call site). When the decision is an explicit new
/// version, the feature tag to create is encoded from `coords`; an
/// adopted tag already exists in the repository and nothing new is
/// created.
pub fn prepare_commit(
    coords: &ServiceCoordinates,
    decision: &VersionDecision,
    annotation_text: &str,
    release_requested: bool,
    min_length: usize,
) -> Result<CommitRequest> {
    let annotation = CommitAnnotation::validated(annotation_text, release_requested, min_length)?;

    let tag_to_create = match decision.source {
        VersionSource::ExplicitVersion => Some(codec::encode(
            &coords.ticket_id,
            &coords.business_function,
            &coords.container,
            &coords.service_name,
            &decision.version,
        )?),
        VersionSource::FeatureTag => None,
    };

    Ok(CommitRequest {
        session_id: Uuid::new_v4(),
        requested_at: Utc::now(),
        annotation,
        tag_to_create,
        decision: decision.clone(),
    })
}

/// Issue a prepared commit: create the new tag when present, then commit.
pub fn execute_commit(repo: &mut dyn TagRepository, request: &CommitRequest) -> Result<()> {
    if let Some(tag) = &request.tag_to_create {
        repo.create_tag(tag)?;
    }
    repo.commit(
        &request.annotation.text,
        request.annotation.release_requested,
    )?;
    tracing::debug!(session = %request.session_id, "commit issued");
    Ok(())
}

/// Revert of the working state back to a previously tagged version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevertRequest {
    /// Id of the dialog session that produced this request
    pub session_id: Uuid,

    /// When the request was assembled
    pub requested_at: DateTime<Utc>,

    /// The tag whose state is being restored
    pub target: FeatureTag,

    /// Change annotation recorded with the revert
    pub annotation: CommitAnnotation,
}

impl CommandResult for RevertRequest {
    fn to_human(&self) -> String {
        format!("revert to {}", self.target.raw)
    }
}

/// Assemble a revert request for `target`.
///
/// The annotation is checked against `min_length` (the change threshold
/// at the existing call site). A revert never releases.
pub fn prepare_revert(
    target: &FeatureTag,
    annotation_text: &str,
    min_length: usize,
) -> Result<RevertRequest> {
    let annotation = CommitAnnotation::validated(annotation_text, false, min_length)?;
    Ok(RevertRequest {
        session_id: Uuid::new_v4(),
        requested_at: Utc::now(),
        target: target.clone(),
        annotation,
    })
}

/// Bulk deletion of selected feature tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRemovalRequest {
    /// Id of the dialog session that produced this request
    pub session_id: Uuid,

    /// When the request was assembled
    pub requested_at: DateTime<Utc>,

    /// Raw tag names to delete, in group-then-member order
    pub tags: Vec<String>,
}

impl CommandResult for TagRemovalRequest {
    fn to_human(&self) -> String {
        format!("remove {} tag(s)", self.tags.len())
    }
}

/// Assemble a bulk-deletion request from the checked selection.
///
/// An empty selection is rejected; the dialog's delete action stays
/// blocked until at least one tag is checked.
pub fn prepare_tag_removal(selection: &TagSelectionSet) -> Result<TagRemovalRequest> {
    if selection.is_empty() {
        return Err(Error::InvalidInput(
            "no tags selected for removal".to_string(),
        ));
    }
    Ok(TagRemovalRequest {
        session_id: Uuid::new_v4(),
        requested_at: Utc::now(),
        tags: selection.raw_tags(),
    })
}

/// Issue a prepared bulk deletion as a single repository request.
pub fn execute_tag_removal(
    repo: &mut dyn TagRepository,
    request: &TagRemovalRequest,
) -> Result<()> {
    repo.delete_tags(&request.tags)?;
    tracing::debug!(
        session = %request.session_id,
        count = request.tags.len(),
        "tag removal issued"
    );
    Ok(())
}
