use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The closed set of record kinds an identity can refer to.
///
/// Each kind owns a fixed prefix tag. Because the set is closed, an
/// "unknown kind" cannot occur at generation time; it can only show up
/// when parsing identities from user input or persisted data, where it
/// surfaces as [`TypeError::UnknownKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A store item (`ns-`).
    Store,
    /// A connection between two store items (`nc-`).
    Connection,
    /// An event log entry (`ne-`).
    Event,
}

impl RecordKind {
    /// The identity prefix for this kind.
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Store => "ns-",
            Self::Connection => "nc-",
            Self::Event => "ne-",
        }
    }

    /// Resolve a kind from an identity string's prefix.
    pub fn from_prefix(s: &str) -> Result<Self, TypeError> {
        if s.starts_with("ns-") {
            Ok(Self::Store)
        } else if s.starts_with("nc-") {
            Ok(Self::Connection)
        } else if s.starts_with("ne-") {
            Ok(Self::Event)
        } else {
            Err(TypeError::UnknownKind(s.to_string()))
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(f, "Store"),
            Self::Connection => write!(f, "Connection"),
            Self::Event => write!(f, "Event"),
        }
    }
}

/// Globally unique, kind-prefixed record identity.
///
/// The payload after the prefix is a UUID v7 in simple (dashless) form:
/// time-ordered, sortable, and unique under rapid successive generation
/// within one process. Identities are never reused, even after the
/// record they name has been deleted.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identity for the given kind.
    pub fn generate(kind: RecordKind) -> Self {
        Self(format!("{}{}", kind.prefix(), uuid::Uuid::now_v7().simple()))
    }

    /// Parse an identity string, validating its kind prefix.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        RecordKind::from_prefix(s)?;
        Ok(Self(s.to_string()))
    }

    /// The kind encoded in this identity's prefix, if recognizable.
    ///
    /// Returns `None` for identities deserialized from documents written
    /// by a newer version with kinds this build does not know.
    pub fn kind(&self) -> Option<RecordKind> {
        RecordKind::from_prefix(&self.0).ok()
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation: prefix plus the first 8 payload characters.
    ///
    /// Parsed identities may carry arbitrary suffixes, so truncation is
    /// by character, never by byte offset.
    pub fn short_id(&self) -> String {
        self.0.chars().take(11).collect()
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.short_id())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_kind_prefix() {
        assert!(RecordId::generate(RecordKind::Store).as_str().starts_with("ns-"));
        assert!(RecordId::generate(RecordKind::Connection)
            .as_str()
            .starts_with("nc-"));
        assert!(RecordId::generate(RecordKind::Event).as_str().starts_with("ne-"));
    }

    #[test]
    fn generated_ids_are_pairwise_distinct() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(RecordId::generate(RecordKind::Event)));
        }
    }

    #[test]
    fn kind_roundtrips_through_prefix() {
        for kind in [RecordKind::Store, RecordKind::Connection, RecordKind::Event] {
            let id = RecordId::generate(kind);
            assert_eq!(id.kind(), Some(kind));
        }
    }

    #[test]
    fn parse_accepts_known_prefixes() {
        let id = RecordId::parse("ns-0190163d8d7a7b1a8f5e000000000000").unwrap();
        assert_eq!(id.kind(), Some(RecordKind::Store));
    }

    #[test]
    fn parse_rejects_unknown_prefix() {
        let err = RecordId::parse("nx-deadbeef").unwrap_err();
        assert!(matches!(err, TypeError::UnknownKind(_)));
    }

    #[test]
    fn serde_is_a_plain_string() {
        let id = RecordId::generate(RecordKind::Store);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn short_id_keeps_prefix() {
        let id = RecordId::generate(RecordKind::Connection);
        let short = id.short_id();
        assert!(short.starts_with("nc-"));
        assert_eq!(short.len(), 11);
    }

    #[test]
    fn short_id_of_multibyte_identity_does_not_panic() {
        // Byte offset 11 lands inside the fourth 'é'; truncation must
        // happen on character boundaries.
        let id = RecordId::parse("ns-ééééé").unwrap();
        assert_eq!(id.short_id(), "ns-ééééé");

        let long = RecordId::parse("ns-ààààààààytes-beyond").unwrap();
        assert_eq!(long.short_id().chars().count(), 11);
        assert!(long.short_id().starts_with("ns-"));
    }
}
