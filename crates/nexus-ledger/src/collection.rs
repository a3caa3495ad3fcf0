//! Mutation operations on [`State`].
//!
//! Every mutation validates first, then allocates identities, appends
//! exactly one event, and updates the relevant live collection. A failed
//! validation leaves the state untouched: no identity or event is
//! allocated before all checks pass.

use chrono::Utc;
use tracing::{debug, warn};

use nexus_types::{Change, ConnectionItem, ModKind, RecordId, RecordKind, StoreItem};

use crate::error::LedgerError;
use crate::state::State;

impl State {
    /// Add a store item for the file at `path`.
    ///
    /// Computes the content checksum (streaming SHA-256), appends an
    /// `INITIAL` event describing the new record's fields, and pushes
    /// the item with `latest_event_id` pointing at that event. A hashing
    /// failure aborts with no partial record.
    pub fn add_item(&mut self, path: &str) -> Result<RecordId, LedgerError> {
        let checksum = nexus_crypto::hash_file(path)?;
        let creation_time = Utc::now();
        let identity = RecordId::generate(RecordKind::Store);

        let changes = vec![
            Change::new("Identity", identity.as_str()),
            Change::new("CreationTime", creation_time.to_rfc3339()),
            Change::new("LastModifiedTime", creation_time.to_rfc3339()),
            Change::new("FileLocation", path),
            Change::new("Checksum", checksum.as_str()),
        ];
        let event_id = self.event_log.append(ModKind::Initial, None, changes);

        debug!(%identity, %event_id, path, "store item added");
        self.store.push(StoreItem {
            identity: identity.clone(),
            creation_time,
            last_modified_time: creation_time,
            latest_event_id: event_id,
            file_location: path.to_string(),
            checksum,
        });
        Ok(identity)
    }

    /// Connect two store items with the given strength.
    ///
    /// `strength` must lie strictly inside (0, 1) and both endpoints
    /// must exist in the live store. Validation happens before any
    /// identity or event allocation, so a rejected call is a true no-op.
    pub fn add_connection(
        &mut self,
        a: &RecordId,
        b: &RecordId,
        strength: f32,
    ) -> Result<RecordId, LedgerError> {
        if !(strength > 0.0 && strength < 1.0) {
            warn!(strength, "connection rejected: strength outside (0, 1)");
            return Err(LedgerError::InvalidStrength(strength));
        }
        for endpoint in [a, b] {
            if self.search_store(endpoint).is_none() {
                warn!(%endpoint, "connection rejected: endpoint not in store");
                return Err(LedgerError::EndpointMissing(endpoint.clone()));
            }
        }

        let creation_time = Utc::now();
        let identity = RecordId::generate(RecordKind::Connection);
        let items = [a.clone(), b.clone()];
        let encoded_items = serde_json::to_string(&items)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;

        let changes = vec![
            Change::new("Identity", identity.as_str()),
            Change::new("CreationTime", creation_time.to_rfc3339()),
            Change::new("LastModifiedTime", creation_time.to_rfc3339()),
            Change::new("Strength", format!("{strength:.6}")),
            Change::new("Items", encoded_items),
        ];
        let event_id = self.event_log.append(ModKind::Initial, None, changes);

        debug!(%identity, %event_id, %a, %b, strength, "connection added");
        self.connections.push(ConnectionItem {
            identity: identity.clone(),
            creation_time,
            last_modified_time: creation_time,
            latest_event_id: event_id,
            strength,
            items,
        });
        Ok(identity)
    }

    /// Remove a store item from the live collection.
    ///
    /// Appends a `DELETE` event linked to the item's latest event, then
    /// removes the item by position. The item's event chain remains in
    /// the log. Any live position is deletable, including the first.
    pub fn delete_item(&mut self, identity: &RecordId) -> Result<(), LedgerError> {
        let (index, item) = self
            .search_store(identity)
            .ok_or_else(|| LedgerError::RecordNotFound(identity.clone()))?;
        let previous_event = item.latest_event_id.clone();

        let event_id = self
            .event_log
            .append(ModKind::Delete, Some(previous_event), Vec::new());
        debug!(%identity, %event_id, index, "store item deleted");
        self.store.remove(index);
        Ok(())
    }

    /// Remove a connection from the live collection.
    ///
    /// Symmetric to [`State::delete_item`] over the connections.
    pub fn delete_connection(&mut self, identity: &RecordId) -> Result<(), LedgerError> {
        let (index, item) = self
            .search_connections(identity)
            .ok_or_else(|| LedgerError::RecordNotFound(identity.clone()))?;
        let previous_event = item.latest_event_id.clone();

        let event_id = self
            .event_log
            .append(ModKind::Delete, Some(previous_event), Vec::new());
        debug!(%identity, %event_id, index, "connection deleted");
        self.connections.remove(index);
        Ok(())
    }
}
