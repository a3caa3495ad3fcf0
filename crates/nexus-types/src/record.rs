use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::change::Change;
use crate::identity::RecordId;

/// A reference to a file, identified by the checksum of its content.
///
/// The checksum reflects the file's bytes at creation time and is never
/// re-verified afterwards; staleness detection is out of scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreItem {
    pub identity: RecordId,
    #[serde(rename = "creationTime")]
    pub creation_time: DateTime<Utc>,
    #[serde(rename = "lastModifiedTime")]
    pub last_modified_time: DateTime<Utc>,
    #[serde(rename = "latestEventID")]
    pub latest_event_id: RecordId,
    #[serde(rename = "fileLocation")]
    pub file_location: String,
    pub checksum: String,
}

/// A weighted connection between an ordered pair of store items.
///
/// `strength` is constrained to the open interval (0, 1); both endpoints
/// must exist in the live store at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionItem {
    pub identity: RecordId,
    #[serde(rename = "creationTime")]
    pub creation_time: DateTime<Utc>,
    #[serde(rename = "lastModifiedTime")]
    pub last_modified_time: DateTime<Utc>,
    #[serde(rename = "latestEventID")]
    pub latest_event_id: RecordId,
    pub strength: f32,
    pub items: [RecordId; 2],
}

/// Modification kinds producible in v1.
///
/// Serialized as string tags so future kinds (`REVERT`, `APPEND`,
/// `REMOVE`) can be added without breaking persisted documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModKind {
    /// Record creation; the root of a record's event chain.
    #[serde(rename = "INITIAL")]
    Initial,
    /// Record removal from its live collection; history is retained.
    #[serde(rename = "DELETE")]
    Delete,
}

impl fmt::Display for ModKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "INITIAL"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// One entry in the append-only event log.
///
/// Entries form a singly-linked causal history per logical record via
/// `previous_event` (`None` = no predecessor). Once appended, an entry
/// is never mutated or removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventLogItem {
    pub identity: RecordId,
    #[serde(rename = "previousEvent")]
    pub previous_event: Option<RecordId>,
    /// 1-based append position, exposed for efficient querying.
    pub seq: u64,
    pub time: DateTime<Utc>,
    #[serde(rename = "modificationType")]
    pub modification_type: ModKind,
    pub changes: Vec<Change>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::RecordKind;

    fn sample_store_item() -> StoreItem {
        let now = Utc::now();
        StoreItem {
            identity: RecordId::generate(RecordKind::Store),
            creation_time: now,
            last_modified_time: now,
            latest_event_id: RecordId::generate(RecordKind::Event),
            file_location: "./notes/a.txt".into(),
            checksum: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
                .into(),
        }
    }

    #[test]
    fn store_item_wire_names() {
        let json = serde_json::to_value(sample_store_item()).unwrap();
        for key in [
            "identity",
            "creationTime",
            "lastModifiedTime",
            "latestEventID",
            "fileLocation",
            "checksum",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn store_item_serde_roundtrip() {
        let item = sample_store_item();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: StoreItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, parsed);
    }

    #[test]
    fn connection_items_are_an_ordered_pair() {
        let a = RecordId::generate(RecordKind::Store);
        let b = RecordId::generate(RecordKind::Store);
        let now = Utc::now();
        let conn = ConnectionItem {
            identity: RecordId::generate(RecordKind::Connection),
            creation_time: now,
            last_modified_time: now,
            latest_event_id: RecordId::generate(RecordKind::Event),
            strength: 0.5,
            items: [a.clone(), b.clone()],
        };

        let json = serde_json::to_value(&conn).unwrap();
        let items = json["items"].as_array().unwrap();
        assert_eq!(items[0], a.as_str());
        assert_eq!(items[1], b.as_str());
    }

    #[test]
    fn mod_kind_string_tags() {
        assert_eq!(serde_json::to_string(&ModKind::Initial).unwrap(), "\"INITIAL\"");
        assert_eq!(serde_json::to_string(&ModKind::Delete).unwrap(), "\"DELETE\"");
        let parsed: ModKind = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(parsed, ModKind::Delete);
    }

    #[test]
    fn root_event_has_null_predecessor() {
        let event = EventLogItem {
            identity: RecordId::generate(RecordKind::Event),
            previous_event: None,
            seq: 1,
            time: Utc::now(),
            modification_type: ModKind::Initial,
            changes: vec![Change::new("Identity", "ns-x")],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json["previousEvent"].is_null());
        assert_eq!(json["seq"], 1);
    }
}
