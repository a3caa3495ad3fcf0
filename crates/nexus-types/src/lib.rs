//! Foundation types for nexus.
//!
//! This crate provides the identity, record, and change types used
//! throughout the nexus system. Every other nexus crate depends on
//! `nexus-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — kind-prefixed, time-ordered identity (UUID v7)
//! - [`RecordKind`] — the closed set of record kinds (`ns-`/`nc-`/`ne-`)
//! - [`StoreItem`] — a file reference with its creation-time checksum
//! - [`ConnectionItem`] — a weighted, ordered pair of store items
//! - [`EventLogItem`] — one entry in the append-only event log
//! - [`ModKind`] — the modification kinds producible in v1
//! - [`Change`] — a display-oriented field/value diff fragment

pub mod change;
pub mod error;
pub mod identity;
pub mod record;

pub use change::Change;
pub use error::TypeError;
pub use identity::{RecordId, RecordKind};
pub use record::{ConnectionItem, EventLogItem, ModKind, StoreItem};
