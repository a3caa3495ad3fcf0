//! Persistence for nexus.
//!
//! The collection lives in a single JSON document with three top-level
//! arrays (`store`, `connections`, `eventLog`). Load and save are bulk,
//! all-or-nothing operations performed around a run's mutations — never
//! interleaved with them. There is no write-ahead log and no atomic
//! rename: a crash between mutation and save loses only the unsaved
//! mutations. Acceptable for the single-writer, single-process scope;
//! stated here rather than assumed away.

pub mod error;
pub mod file;

pub use error::StoreError;
pub use file::JsonFileStore;
