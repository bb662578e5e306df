//! Annotation validation gating commit-style actions.
//!
//! Two call sites historically disagree on the minimum length: a generic
//! change annotation requires 4 characters, a repository commit
//! annotation 8. Both values are defaults only; every caller passes the
//! threshold explicitly, and [`crate::config`] can override either.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default minimum length for a generic change annotation.
pub const CHANGE_ANNOTATION_MIN: usize = 4;

/// Default minimum length for a repository commit annotation.
pub const COMMIT_ANNOTATION_MIN: usize = 8;

/// Check that `text` meets the given minimum length, in characters.
pub fn validate(text: &str, min_length: usize) -> Result<()> {
    let actual = text.chars().count();
    if actual < min_length {
        return Err(Error::AnnotationTooShort {
            actual,
            required: min_length,
        });
    }
    Ok(())
}

/// Whether the session should offer a release alongside the commit.
///
/// A pure passthrough of the user's toggle; it lives here because the
/// flag travels with the annotation in the same dialog session.
pub fn should_offer_release(auto_release_requested: bool) -> bool {
    auto_release_requested
}

/// Annotation text plus the release toggle for one dialog session.
///
/// Constructed fresh per session and discarded after the action completes
/// or is cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAnnotation {
    /// Free-form annotation text
    pub text: String,

    /// Whether the user asked for a release in the same action
    pub release_requested: bool,
}

impl CommitAnnotation {
    /// Build an annotation after checking `text` against `min_length`.
    pub fn validated(
        text: impl Into<String>,
        release_requested: bool,
        min_length: usize,
    ) -> Result<Self> {
        let text = text.into();
        validate(&text, min_length)?;
        Ok(Self {
            text,
            release_requested,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_annotation_is_rejected() {
        let err = validate("abc", CHANGE_ANNOTATION_MIN).unwrap_err();
        assert!(matches!(
            err,
            Error::AnnotationTooShort {
                actual: 3,
                required: 4
            }
        ));
    }

    #[test]
    fn test_exact_threshold_passes() {
        assert!(validate("abcd", CHANGE_ANNOTATION_MIN).is_ok());
        assert!(validate("abcdefgh", COMMIT_ANNOTATION_MIN).is_ok());
    }

    #[test]
    fn test_commit_threshold_is_stricter() {
        assert!(validate("abcdefg", COMMIT_ANNOTATION_MIN).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Four characters, more than four bytes.
        assert!(validate("äöüß", 4).is_ok());
    }

    #[test]
    fn test_validated_constructor_carries_release_flag() {
        let annotation =
            CommitAnnotation::validated("fixed rounding", true, COMMIT_ANNOTATION_MIN).unwrap();
        assert!(annotation.release_requested);
        assert_eq!(annotation.text, "fixed rounding");

        assert!(CommitAnnotation::validated("nope", false, COMMIT_ANNOTATION_MIN).is_err());
    }

    #[test]
    fn test_release_toggle_is_a_passthrough() {
        assert!(should_offer_release(true));
        assert!(!should_offer_release(false));
    }
}
