use serde::{Deserialize, Serialize};

use nexus_types::{ConnectionItem, RecordId, StoreItem};

use crate::error::LedgerError;
use crate::log::EventLog;

/// The aggregate of live collections and their immutable history.
///
/// Insertion order in `store` and `connections` is meaningful: lookups
/// and removals are positional, by identity-equality linear scan. The
/// event log only ever grows. A `State` is loaded once, mutated in
/// memory, and persisted as a whole; it is owned by the caller, never
/// ambient.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub store: Vec<StoreItem>,
    pub connections: Vec<ConnectionItem>,
    #[serde(rename = "eventLog")]
    pub event_log: EventLog,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear identity scan over the store. Position 0 is a valid hit.
    pub fn search_store(&self, identity: &RecordId) -> Option<(usize, &StoreItem)> {
        self.store
            .iter()
            .enumerate()
            .find(|(_, item)| &item.identity == identity)
    }

    /// Linear identity scan over the connections.
    pub fn search_connections(
        &self,
        identity: &RecordId,
    ) -> Option<(usize, &ConnectionItem)> {
        self.connections
            .iter()
            .enumerate()
            .find(|(_, item)| &item.identity == identity)
    }

    /// The whole aggregate as pretty JSON, for inspection.
    pub fn render_state(&self) -> Result<String, LedgerError> {
        render(self)
    }

    pub fn render_store(&self) -> Result<String, LedgerError> {
        render(&self.store)
    }

    pub fn render_connections(&self) -> Result<String, LedgerError> {
        render(&self.connections)
    }

    pub fn render_event_log(&self) -> Result<String, LedgerError> {
        render(self.event_log.all())
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, LedgerError> {
    serde_json::to_string_pretty(value).map_err(|e| LedgerError::Serialization(e.to_string()))
}
