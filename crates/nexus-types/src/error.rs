use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The identity string does not start with a known kind prefix.
    #[error("unknown record kind in identity: {0:?}")]
    UnknownKind(String),
}
