use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the persistence gateway.
///
/// Any of these is fatal to a run: the walker never retries a failed insert.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The SQLite connection or a statement failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    /// The identifier list of a tag could not be encoded.
    #[error("Failed to encode tag identifiers: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors surfaced by a directory visit.
#[derive(Debug, Error)]
pub enum WalkError {
    /// An OS error on a specific path. Recovered by the caller, which skips that directory.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A storage failure. Never recovered.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl WalkError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WalkError::Io { path: path.into(), source }
    }

    /// True for errors the walk can skip past.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WalkError::Io { .. })
    }
}

/// Owner lookups fail soft; the tag is written with no owner.
#[derive(Debug, Error)]
pub enum OwnerError {
    #[error("owner lookup failed: {0}")]
    Lookup(String),
    #[error("owner lookup is not supported on this platform")]
    Unsupported,
}

/// A type alias for `Result<T, WalkError>`, used by the walker.
pub type WalkResult<T> = Result<T, WalkError>;
