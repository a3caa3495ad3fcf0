use nexus_types::RecordId;

/// Errors produced by collection operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Connection strength must lie strictly inside (0, 1).
    #[error("connection strength {0} is outside the open interval (0, 1)")]
    InvalidStrength(f32),

    /// A connection endpoint is absent from the live store.
    #[error("connection endpoint not found in store: {0}")]
    EndpointMissing(RecordId),

    /// The record to delete is absent from its live collection.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// Content hashing failed; no partial record was created.
    #[error(transparent)]
    Hash(#[from] nexus_crypto::HashError),

    /// Serialization failure in a render query or change encoding.
    #[error("serialization error: {0}")]
    Serialization(String),
}
