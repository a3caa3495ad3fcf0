use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use nexus_types::{Change, EventLogItem, ModKind, RecordId, RecordKind};

/// The append-only event log.
///
/// Append order is the only ordering guarantee; entries additionally
/// carry a 1-based `seq` for efficient querying. No operation reorders,
/// mutates, or removes an entry once appended. Per-record causal history
/// is formed by each entry's `previous_event` link.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: Vec<EventLogItem>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new event and return its freshly allocated identity.
    ///
    /// `previous_event` is `None` for the root of a record's chain;
    /// a `DELETE` event links to the deleted record's last known event.
    pub fn append(
        &mut self,
        kind: ModKind,
        previous_event: Option<RecordId>,
        changes: Vec<Change>,
    ) -> RecordId {
        let identity = RecordId::generate(RecordKind::Event);
        let seq = self.entries.len() as u64 + 1;
        debug!(%identity, %kind, seq, "appending event");
        self.entries.push(EventLogItem {
            identity: identity.clone(),
            previous_event,
            seq,
            time: Utc::now(),
            modification_type: kind,
            changes,
        });
        identity
    }

    /// Full dump of the log, in append order.
    pub fn all(&self) -> &[EventLogItem] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<&EventLogItem> {
        self.entries.last()
    }

    /// Look up an entry by its event identity.
    pub fn find(&self, identity: &RecordId) -> Option<&EventLogItem> {
        self.entries.iter().find(|e| &e.identity == identity)
    }
}
