//! KDL schema definitions for capstan.kdl.
//!
//! This module provides:
//! - A Rust struct representing the KDL schema
//! - Serialization/deserialization to/from KDL format
//! - Validation and default values

use kdl::{KdlDocument, KdlEntry, KdlNode, KdlValue};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::annotation::{CHANGE_ANNOTATION_MIN, COMMIT_ANNOTATION_MIN};
use crate::codec::FEATURE_TAG_PREFIX;
use crate::{Error, Result};

/// CM scheme settings stored in capstan.kdl.
///
/// All fields are optional; unset values fall back to the grammar and
/// annotation defaults. The host may also skip the file entirely and
/// pass values directly.
///
/// # KDL Schema
///
/// ```kdl
/// tag-prefix "feature"
/// change-annotation-min 4
/// commit-annotation-min 8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapstanConfig {
    /// First segment of every feature tag
    pub tag_prefix: Option<String>,

    /// Minimum length for a generic change annotation
    pub change_annotation_min: Option<usize>,

    /// Minimum length for a repository commit annotation
    pub commit_annotation_min: Option<usize>,
}

impl CapstanConfig {
    /// Create an empty config with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved tag prefix, falling back to the grammar default.
    pub fn tag_prefix(&self) -> &str {
        self.tag_prefix.as_deref().unwrap_or(FEATURE_TAG_PREFIX)
    }

    /// Resolved change-annotation minimum.
    pub fn change_annotation_min(&self) -> usize {
        self.change_annotation_min.unwrap_or(CHANGE_ANNOTATION_MIN)
    }

    /// Resolved commit-annotation minimum.
    pub fn commit_annotation_min(&self) -> usize {
        self.commit_annotation_min.unwrap_or(COMMIT_ANNOTATION_MIN)
    }

    /// Validate the config values.
    pub fn validate(&self) -> Result<()> {
        if self.change_annotation_min == Some(0) {
            return Err(Error::InvalidInput(
                "change-annotation-min must be nonzero".to_string(),
            ));
        }
        if self.commit_annotation_min == Some(0) {
            return Err(Error::InvalidInput(
                "commit-annotation-min must be nonzero".to_string(),
            ));
        }
        if let Some(prefix) = &self.tag_prefix {
            if prefix.is_empty() || prefix.contains('/') {
                return Err(Error::InvalidInput(format!(
                    "tag-prefix must be a single non-empty segment, got {prefix:?}"
                )));
            }
        }
        Ok(())
    }

    /// Parse config from a KDL document.
    pub fn from_kdl(doc: &KdlDocument) -> Self {
        let mut config = Self::new();

        if let Some(node) = doc.get("tag-prefix") {
            if let Some(entry) = node.entries().first() {
                if let Some(s) = entry.value().as_string() {
                    config.tag_prefix = Some(s.to_string());
                }
            }
        }

        if let Some(node) = doc.get("change-annotation-min") {
            if let Some(entry) = node.entries().first() {
                if let Some(i) = entry.value().as_integer() {
                    if i >= 0 {
                        config.change_annotation_min = Some(i as usize);
                    }
                }
            }
        }

        if let Some(node) = doc.get("commit-annotation-min") {
            if let Some(entry) = node.entries().first() {
                if let Some(i) = entry.value().as_integer() {
                    if i >= 0 {
                        config.commit_annotation_min = Some(i as usize);
                    }
                }
            }
        }

        config
    }

    /// Parse and validate config from KDL text.
    pub fn parse_kdl(text: &str) -> Result<Self> {
        let doc: KdlDocument = text.parse()?;
        let config = Self::from_kdl(&doc);
        config.validate()?;
        Ok(config)
    }

    /// Convert config to a KDL document.
    pub fn to_kdl(&self) -> KdlDocument {
        let mut doc = KdlDocument::new();

        if let Some(ref prefix) = self.tag_prefix {
            let mut node = KdlNode::new("tag-prefix");
            node.push(KdlEntry::new(KdlValue::String(prefix.clone())));
            doc.nodes_mut().push(node);
        }

        if let Some(min) = self.change_annotation_min {
            let mut node = KdlNode::new("change-annotation-min");
            node.push(KdlEntry::new(KdlValue::Integer(min as i128)));
            doc.nodes_mut().push(node);
        }

        if let Some(min) = self.commit_annotation_min {
            let mut node = KdlNode::new("commit-annotation-min");
            node.push(KdlEntry::new(KdlValue::Integer(min as i128)));
            doc.nodes_mut().push(node);
        }

        doc
    }

    /// Load config from a file. A missing file yields pure defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::parse_kdl(&text)
    }

    /// Default location: `~/.config/capstan/capstan.kdl`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("capstan").join("capstan.kdl"))
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` if they are Some.
    pub fn merge(&mut self, other: &CapstanConfig) {
        if other.tag_prefix.is_some() {
            self.tag_prefix = other.tag_prefix.clone();
        }
        if other.change_annotation_min.is_some() {
            self.change_annotation_min = other.change_annotation_min;
        }
        if other.commit_annotation_min.is_some() {
            self.commit_annotation_min = other.commit_annotation_min;
        }
    }
}
