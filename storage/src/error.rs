//! Storage errors

/// Errors raised by a store, independent of the tree logic above it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// RocksDB error
    #[cfg(feature = "rocksdb_storage")]
    #[error("rocksDB error: {0}")]
    RocksDBError(#[from] rocksdb::Error),
    /// A lock guarding an in-memory store was poisoned by a panicking writer
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
    /// The store could not serve the request
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
