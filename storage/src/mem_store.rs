use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use merkle_costs::{CostResult, CostsExt, OperationCost};

use crate::{ContentAddressedStore, Error};

/// In-memory store backed by a `HashMap` behind a `RwLock`.
///
/// Costs are reported the same way as for a disk store so that cost
/// assertions hold regardless of the backend.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored. A poisoned lock is read through:
    /// entries are inserted whole, so the count is still exact.
    pub fn len(&self) -> usize {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove `key`, returning the previous value. Meant for tests that
    /// simulate a damaged store.
    pub fn remove<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<Vec<u8>>, Error> {
        let mut data = self
            .data
            .write()
            .map_err(|e| Error::Poisoned(e.to_string()))?;
        Ok(data.remove(key.as_ref()))
    }
}

impl ContentAddressedStore for MemStore {
    fn get<K: AsRef<[u8]>>(&self, key: K) -> CostResult<Option<Vec<u8>>, Error> {
        match self.data.read() {
            Ok(data) => {
                let value = data.get(key.as_ref()).cloned();
                let loaded = value.as_ref().map_or(0, Vec::len);
                Ok(value).wrap_with_cost(OperationCost::for_read(loaded))
            }
            Err(e) => Err(Error::Poisoned(e.to_string())).wrap_with_cost(Default::default()),
        }
    }

    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> CostResult<(), Error> {
        let key = key.as_ref();
        let cost = OperationCost::for_write(key.len() + value.len());
        match self.data.write() {
            Ok(mut data) => {
                data.insert(key.to_vec(), value.to_vec());
                Ok(()).wrap_with_cost(cost)
            }
            Err(e) => Err(Error::Poisoned(e.to_string())).wrap_with_cost(Default::default()),
        }
    }
}
