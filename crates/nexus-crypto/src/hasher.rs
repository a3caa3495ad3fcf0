use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Fixed read size for streaming file digests.
pub const CHUNK_SIZE: usize = 8192;

/// Errors from content hashing.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The file to hash does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Any other I/O failure while reading the file.
    #[error("read error: {0}")]
    Read(#[from] io::Error),
}

/// Compute the hex-encoded SHA-256 digest of a file's contents.
///
/// The file is read in [`CHUNK_SIZE`] blocks and fed into a streaming
/// hasher; the final partial block is handled by the short read. Chunk
/// boundaries are an implementation detail and never affect the digest.
pub fn hash_file(path: impl AsRef<Path>) -> Result<String, HashError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            HashError::FileNotFound(path.display().to_string())
        } else {
            HashError::Read(e)
        }
    })?;

    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the hex-encoded SHA-256 digest of in-memory bytes.
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
