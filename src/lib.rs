//! Capstan - a configuration-management core for tagged service artifacts.
//!
//! This library implements the tag-grammar scheme used to encode a
//! service's version and ticket metadata into version-control tag strings,
//! plus the decision logic around it:
//!
//! - [`models`] - version triples, decoded feature tags, ticket groups,
//!   version decisions
//! - [`codec`] - encoding/decoding of the feature-tag grammar
//! - [`index`] - ticket-grouped indexing of tag listings for display and
//!   bulk selection
//! - [`policy`] - the mutually-exclusive version-selection state machine
//!   backing a checkout
//! - [`annotation`] - minimum-length validation gating commit-style actions
//! - [`repo`] - the external CM repository collaborator trait
//! - [`commands`] - dialog-session operations assembling and issuing
//!   checkout/commit/revert/tag-removal requests
//! - [`config`] - KDL configuration for the scheme's tunable values
//!
//! The crate performs no I/O of its own beyond reading an optional config
//! file; the repository transport is supplied by the host through
//! [`repo::TagRepository`].

pub mod annotation;
pub mod codec;
pub mod commands;
pub mod config;
pub mod index;
pub mod models;
pub mod policy;
pub mod repo;

/// Library-level error type for capstan operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("KDL error: {0}")]
    Kdl(#[from] kdl::KdlError),

    #[error("Malformed version literal: {0:?}")]
    MalformedVersion(String),

    #[error("Invalid version field: {0:?}")]
    InvalidVersionFormat(String),

    #[error("Invalid {field}: {value:?} is empty or contains a reserved character")]
    InvalidSegment { field: &'static str, value: String },

    #[error("Annotation too short: {actual} characters, {required} required")]
    AnnotationTooShort { actual: usize, required: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Result type alias for capstan operations.
pub type Result<T> = std::result::Result<T, Error>;
