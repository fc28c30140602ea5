//! Useful utilities for testing.

use std::ops::Deref;

use tempfile::TempDir;

use super::RocksDbStore;

/// RocksDB store living in a temporary directory removed on drop.
pub struct TempRocksDbStore {
    store: RocksDbStore,
    // Declared after `store` so the database closes before the directory goes.
    dir: TempDir,
}

impl TempRocksDbStore {
    /// Create a store in a fresh temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("cannot create tempdir");
        let store = RocksDbStore::open(dir.path()).expect("cannot open RocksDB store");
        TempRocksDbStore { store, dir }
    }

    /// Close the database and reopen it from the same directory.
    pub fn reopen(self) -> Self {
        let TempRocksDbStore { store, dir } = self;
        drop(store);
        let store = RocksDbStore::open(dir.path()).expect("cannot reopen RocksDB store");
        TempRocksDbStore { store, dir }
    }
}

impl Default for TempRocksDbStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TempRocksDbStore {
    type Target = RocksDbStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
