//! Feature-tag grammar encoding and decoding.
//!
//! Grammar, bit-exact:
//!
//! ```text
//! feature/<ticketId>/<businessFunction>.<container>/<serviceName>_V<major>P<minor>B<build>
//! ```
//!
//! Exactly four `/`-separated segments. The third segment splits at its
//! last `.`; the fourth splits at its first `_V`, and the remainder must
//! be a version literal. The grammar has no escaping: a service name that
//! itself contains `_V` splits at the wrong place.
//!
//! Decoding is tolerant at the listing level. A tag that does not match
//! the grammar becomes a [`NonStandardTag`] which callers log and skip; a
//! single foreign tag never aborts processing of the rest.

use serde::{Deserialize, Serialize};

use crate::models::{FeatureTag, VersionTriple};
use crate::{Error, Result};

/// First grammar segment, and the listing prefix used against the
/// repository (with a trailing `/`).
pub const FEATURE_TAG_PREFIX: &str = "feature";

/// Marker separating the service name from the version literal in the
/// fourth segment.
const VERSION_MARKER: &str = "_V";

/// A tag that does not follow the feature-tag grammar.
///
/// Deliberately not a [`crate::Error`] variant: foreign tags are an
/// expected part of any repository listing and are skipped, not raised.
/// The raw string is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("non-standard tag: {raw}")]
pub struct NonStandardTag {
    /// The offending raw tag string
    pub raw: String,
}

/// Decode a raw repository tag against the feature-tag grammar.
///
/// Any deviation from the grammar yields [`NonStandardTag`]; this
/// function never panics on foreign input.
pub fn decode(raw: &str) -> std::result::Result<FeatureTag, NonStandardTag> {
    let non_standard = || NonStandardTag {
        raw: raw.to_string(),
    };

    let segments: Vec<&str> = raw.split('/').collect();
    let [prefix, ticket_id, function_path, service_version] = segments[..] else {
        return Err(non_standard());
    };
    if prefix != FEATURE_TAG_PREFIX {
        return Err(non_standard());
    }

    let (business_function, container) =
        function_path.rsplit_once('.').ok_or_else(non_standard)?;

    let marker = service_version
        .find(VERSION_MARKER)
        .ok_or_else(non_standard)?;
    let service_name = &service_version[..marker];
    // Skip the underscore only; the version literal starts at the `V`.
    let version_text = &service_version[marker + 1..];
    let version = VersionTriple::parse(version_text).map_err(|_| non_standard())?;

    Ok(FeatureTag {
        ticket_id: ticket_id.to_string(),
        business_function: business_function.to_string(),
        container: container.to_string(),
        service_name: service_name.to_string(),
        version,
        raw: raw.to_string(),
    })
}

/// Encode a feature tag from its structured fields.
///
/// `/` and `.` are grammar separators and may not appear in any field;
/// empty fields cannot survive a decode round-trip. Offending input is
/// rejected with [`Error::InvalidSegment`] rather than escaped.
pub fn encode(
    ticket_id: &str,
    business_function: &str,
    container: &str,
    service_name: &str,
    version: &VersionTriple,
) -> Result<String> {
    check_segment("ticket id", ticket_id)?;
    check_segment("business function", business_function)?;
    check_segment("container", container)?;
    check_segment("service name", service_name)?;

    Ok(format!(
        "{FEATURE_TAG_PREFIX}/{ticket_id}/{business_function}.{container}/{service_name}_{version}"
    ))
}

fn check_segment(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains('/') || value.contains('.') {
        return Err(Error::InvalidSegment {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_tag() {
        let tag = decode("feature/T9/billing.invoices/RatingSvc_V2P0B5").unwrap();
        assert_eq!(tag.ticket_id, "T9");
        assert_eq!(tag.business_function, "billing");
        assert_eq!(tag.container, "invoices");
        assert_eq!(tag.service_name, "RatingSvc");
        assert_eq!(tag.version, VersionTriple::new(2, 0, 5));
        assert_eq!(tag.raw, "feature/T9/billing.invoices/RatingSvc_V2P0B5");
    }

    #[test]
    fn test_decode_splits_function_path_at_last_dot() {
        let tag = decode("feature/T1/billing.eu.invoices/Svc_V1P0B0").unwrap();
        assert_eq!(tag.business_function, "billing.eu");
        assert_eq!(tag.container, "invoices");
    }

    #[test]
    fn test_decode_rejects_foreign_shapes() {
        for raw in [
            "",
            "not/a/valid",
            "release/T1/fn.cont/Svc_V1P0B0",
            "feature/T1/fncont/Svc_V1P0B0",
            "feature/T1/fn.cont/SvcV1P0B0",
            "feature/T1/fn.cont/Svc_V1P0",
            "feature/T1/fn.cont/Svc_V1P0B0/extra",
            "feature/T1/fn.cont",
            "Svc_V1P0B0",
        ] {
            let err = decode(raw).unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn test_decode_tolerates_empty_inner_fields() {
        // The grammar itself does not forbid empty segments on the way in;
        // only encode does.
        let tag = decode("feature//fn.cont/Svc_V1P0B0").unwrap();
        assert_eq!(tag.ticket_id, "");
    }

    #[test]
    fn test_service_name_containing_version_marker_misparses() {
        // Split happens at the first `_V`; the leftover text fails the
        // digit check, so the whole tag is reported non-standard.
        let err = decode("feature/T1/fn.cont/Net_Vault_V1P2B3").unwrap_err();
        assert_eq!(err.raw, "feature/T1/fn.cont/Net_Vault_V1P2B3");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let version = VersionTriple::new(3, 14, 1);
        let raw = encode("T42", "orders", "fulfillment", "ShipSvc", &version).unwrap();
        assert_eq!(raw, "feature/T42/orders.fulfillment/ShipSvc_V3P14B1");

        let tag = decode(&raw).unwrap();
        assert_eq!(tag.ticket_id, "T42");
        assert_eq!(tag.business_function, "orders");
        assert_eq!(tag.container, "fulfillment");
        assert_eq!(tag.service_name, "ShipSvc");
        assert_eq!(tag.version, version);
    }

    #[test]
    fn test_encode_rejects_reserved_characters() {
        let version = VersionTriple::new(1, 0, 0);
        assert!(matches!(
            encode("T1/T2", "fn", "cont", "Svc", &version),
            Err(Error::InvalidSegment { field: "ticket id", .. })
        ));
        assert!(matches!(
            encode("T1", "fn.sub", "cont", "Svc", &version),
            Err(Error::InvalidSegment { field: "business function", .. })
        ));
        assert!(matches!(
            encode("T1", "fn", "cont.v2", "Svc", &version),
            Err(Error::InvalidSegment { field: "container", .. })
        ));
        assert!(matches!(
            encode("T1", "fn", "cont", "Svc/2", &version),
            Err(Error::InvalidSegment { field: "service name", .. })
        ));
    }

    #[test]
    fn test_encode_rejects_empty_fields() {
        let version = VersionTriple::new(1, 0, 0);
        assert!(encode("", "fn", "cont", "Svc", &version).is_err());
        assert!(encode("T1", "fn", "cont", "", &version).is_err());
    }
}
