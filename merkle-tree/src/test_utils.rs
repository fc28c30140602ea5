//! Test utilities: a store that fails on demand and path helpers.

use std::cell::RefCell;

use merkle_costs::{CostResult, CostsExt, OperationCost};
use merkle_storage::{ContentAddressedStore, Error, MemStore};

/// In-memory store which can be told to fail reads or writes of one key.
///
/// Uses `RefCell` for the fail conditions so they can be set after the store
/// is handed to a tree by reference.
pub(crate) struct FailingStore {
    pub inner: MemStore,
    pub fail_on_get_key: RefCell<Option<Vec<u8>>>,
    pub fail_on_put_key: RefCell<Option<Vec<u8>>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            inner: MemStore::new(),
            fail_on_get_key: RefCell::new(None),
            fail_on_put_key: RefCell::new(None),
        }
    }

    pub fn fail_get(&self, key: impl AsRef<[u8]>) {
        *self.fail_on_get_key.borrow_mut() = Some(key.as_ref().to_vec());
    }

    pub fn fail_put(&self, key: impl AsRef<[u8]>) {
        *self.fail_on_put_key.borrow_mut() = Some(key.as_ref().to_vec());
    }

    pub fn heal(&self) {
        self.fail_on_get_key.borrow_mut().take();
        self.fail_on_put_key.borrow_mut().take();
    }
}

impl ContentAddressedStore for FailingStore {
    fn get<K: AsRef<[u8]>>(&self, key: K) -> CostResult<Option<Vec<u8>>, Error> {
        if self.fail_on_get_key.borrow().as_deref() == Some(key.as_ref()) {
            return Err(Error::Unavailable(format!(
                "simulated get failure for {}",
                hex::encode(key.as_ref())
            )))
            .wrap_with_cost(OperationCost::with_seek_count(1));
        }
        self.inner.get(key)
    }

    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> CostResult<(), Error> {
        if self.fail_on_put_key.borrow().as_deref() == Some(key.as_ref()) {
            return Err(Error::Unavailable(format!(
                "simulated put failure for {}",
                hex::encode(key.as_ref())
            )))
            .wrap_with_cost(OperationCost::with_seek_count(1));
        }
        self.inner.put(key, value)
    }
}

/// Leaf value filled with `byte`.
pub(crate) fn leaf(byte: u8) -> [u8; 64] {
    [byte; 64]
}

/// Digest from a hex literal.
pub(crate) fn digest_from_hex(s: &str) -> crate::Digest {
    hex::decode(s)
        .expect("valid hex")
        .try_into()
        .expect("32 bytes")
}
