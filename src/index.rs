//! Ticket-grouped indexing of feature tags for display and bulk selection.
//!
//! A repository listing arrives as a flat sequence of raw tag strings.
//! The index decodes each one, drops non-standard tags with a warning,
//! and groups the survivors by ticket id. Group order is first
//! appearance, member order is the original listing order; both are
//! stable across repeated builds from the same input.
//!
//! The two-level shape mirrors the selection tree it feeds: toggling a
//! group propagates to its direct members and no further.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::codec;
use crate::models::{FeatureTag, FeatureTagGroup, GroupMember};

/// Ticket-grouped view of a tag listing, with per-member selection state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureTagIndex {
    groups: Vec<FeatureTagGroup>,
}

impl FeatureTagIndex {
    /// Build the index from a flat tag listing.
    ///
    /// Non-standard tags are logged at WARN and excluded; they never fail
    /// the build.
    pub fn build(tags: &[String]) -> Self {
        let mut groups: Vec<FeatureTagGroup> = Vec::new();
        let mut slot_by_ticket: HashMap<String, usize> = HashMap::new();

        for raw in tags {
            let tag = match codec::decode(raw) {
                Ok(tag) => tag,
                Err(skipped) => {
                    tracing::warn!(tag = %skipped.raw, "skipping non-standard tag");
                    continue;
                }
            };

            let slot = *slot_by_ticket
                .entry(tag.ticket_id.clone())
                .or_insert_with(|| {
                    groups.push(FeatureTagGroup {
                        ticket_id: tag.ticket_id.clone(),
                        members: Vec::new(),
                    });
                    groups.len() - 1
                });
            groups[slot].members.push(GroupMember {
                tag,
                selected: false,
            });
        }

        tracing::debug!(
            groups = groups.len(),
            listed = tags.len(),
            "built feature tag index"
        );
        Self { groups }
    }

    /// The groups in first-seen ticket order.
    pub fn groups(&self) -> &[FeatureTagGroup] {
        &self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the listing produced no valid tags at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Force every direct member of the group at `group_index` to the
    /// group-level checked state. Propagation is one level deep only.
    pub fn toggle_group(&mut self, group_index: usize, checked: bool) {
        if let Some(group) = self.groups.get_mut(group_index) {
            for member in &mut group.members {
                member.selected = checked;
            }
        }
    }

    /// Set one member's selection independently of its group.
    pub fn toggle_member(&mut self, group_index: usize, member_index: usize, checked: bool) {
        if let Some(member) = self
            .groups
            .get_mut(group_index)
            .and_then(|group| group.members.get_mut(member_index))
        {
            member.selected = checked;
        }
    }

    /// Collect every selected member in group-then-member order.
    ///
    /// This is the authoritative input for a bulk-delete request.
    pub fn collect_selected(&self) -> TagSelectionSet {
        let tags = self
            .groups
            .iter()
            .flat_map(|group| group.members.iter())
            .filter(|member| member.selected)
            .map(|member| member.tag.clone())
            .collect();
        TagSelectionSet { tags }
    }
}

/// The set of tags chosen for a bulk operation, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSelectionSet {
    tags: Vec<FeatureTag>,
}

impl TagSelectionSet {
    /// The selected tags.
    pub fn tags(&self) -> &[FeatureTag] {
        &self.tags
    }

    /// Raw tag strings in selection order, as sent to the repository.
    pub fn raw_tags(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.raw.clone()).collect()
    }

    /// Number of selected tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
