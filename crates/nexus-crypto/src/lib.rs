//! Content hashing for nexus.
//!
//! Provides streaming SHA-256 digests of file contents, read in fixed
//! 8192-byte chunks so memory use stays bounded regardless of file size.
//! All hashing wraps the `sha2` crate — no custom cryptography.

pub mod hasher;

pub use hasher::{hash_bytes, hash_file, HashError, CHUNK_SIZE};
