//! Content-addressed store over RocksDB.

pub mod test_utils;

use std::path::Path;

use lazy_static::lazy_static;
use merkle_costs::{CostResult, CostsExt, OperationCost};
use rocksdb::DB;
use tracing::debug;

use crate::{ContentAddressedStore, Error};

lazy_static! {
    static ref DEFAULT_OPTS: rocksdb::Options = {
        let mut opts = rocksdb::Options::default();
        opts.create_if_missing(true);
        opts.increase_parallelism(num_cpus::get() as i32);
        opts
    };
}

/// Store which keeps node entries and tree metadata in a single RocksDB
/// keyspace.
pub struct RocksDbStore {
    db: DB,
}

impl RocksDbStore {
    /// Open (or create) a database at `path` with the default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let db = DB::open(&DEFAULT_OPTS, path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened rocksdb store");
        Ok(RocksDbStore { db })
    }

    /// Flush memtables to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.db.flush().map_err(Error::from)
    }
}

impl ContentAddressedStore for RocksDbStore {
    fn get<K: AsRef<[u8]>>(&self, key: K) -> CostResult<Option<Vec<u8>>, Error> {
        match self.db.get(key.as_ref()) {
            Ok(value) => {
                let loaded = value.as_ref().map_or(0, Vec::len);
                Ok(value).wrap_with_cost(OperationCost::for_read(loaded))
            }
            Err(e) => Err(Error::from(e)).wrap_with_cost(OperationCost::with_seek_count(1)),
        }
    }

    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> CostResult<(), Error> {
        let key = key.as_ref();
        let cost = OperationCost::for_write(key.len() + value.len());
        match self.db.put(key, value) {
            Ok(()) => Ok(()).wrap_with_cost(cost),
            Err(e) => {
                debug!(key = %hex::encode(key), error = %e, "rocksdb put failed");
                Err(Error::from(e)).wrap_with_cost(cost)
            }
        }
    }
}
