use std::io;

/// Errors from collection persistence.
///
/// Both variants are fatal to the driving process: without a known-good
/// base state the in-memory model cannot be trusted.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O failure reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file is not a valid collection document.
    #[error("parse error: {0}")]
    Parse(String),
}
