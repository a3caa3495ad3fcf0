//! Core collection logic for nexus.
//!
//! This crate is the heart of the system. It provides:
//! - [`EventLog`] — the append-only, causally linked mutation history
//! - [`State`] — the aggregate of store items, connections, and the log
//! - Mutation operations that keep the live collections and the
//!   immutable history consistent
//! - Linear identity search and read-only render queries
//!
//! `State` is an explicit value owned by the call site and threaded
//! through every operation; there is no ambient global state. The
//! checksum recorded for a store item reflects its file at creation
//! time and is never re-verified afterwards.

pub mod collection;
pub mod error;
pub mod log;
pub mod state;

pub use error::LedgerError;
pub use log::EventLog;
pub use state::State;
