use std::sync::Arc;

use merkle_costs::CostResult;

use crate::Error;

/// Minimal key-value contract required by the Merkle tree.
///
/// Keys are either 32-byte node digests or tree names. Writes are expected to
/// be idempotent for an identical key/value pair, which content addressing
/// guarantees for node entries. Methods take `&self`; implementations use
/// interior mutability so readers can share a store with the writer.
pub trait ContentAddressedStore {
    /// Fetch the value stored under `key`, `None` if absent.
    fn get<K: AsRef<[u8]>>(&self, key: K) -> CostResult<Option<Vec<u8>>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> CostResult<(), Error>;
}

impl<S: ContentAddressedStore + ?Sized> ContentAddressedStore for &S {
    fn get<K: AsRef<[u8]>>(&self, key: K) -> CostResult<Option<Vec<u8>>, Error> {
        (**self).get(key)
    }

    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> CostResult<(), Error> {
        (**self).put(key, value)
    }
}

impl<S: ContentAddressedStore + ?Sized> ContentAddressedStore for Arc<S> {
    fn get<K: AsRef<[u8]>>(&self, key: K) -> CostResult<Option<Vec<u8>>, Error> {
        (**self).get(key)
    }

    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> CostResult<(), Error> {
        (**self).put(key, value)
    }
}
