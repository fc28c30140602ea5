#![deny(missing_docs)]

//! Content-addressed key-value stores for the Merkle tree.
//!
//! The tree only needs two operations, [`ContentAddressedStore::get`] and
//! [`ContentAddressedStore::put`]. [`MemStore`] keeps everything in memory;
//! `RocksDbStore` (feature `rocksdb_storage`) persists to disk.

mod error;
mod mem_store;
#[cfg(feature = "rocksdb_storage")]
pub mod rocksdb_storage;
mod store;

pub use error::Error;
pub use mem_store::MemStore;
#[cfg(feature = "rocksdb_storage")]
pub use rocksdb_storage::RocksDbStore;
pub use store::ContentAddressedStore;
