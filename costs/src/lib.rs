#![deny(missing_docs)]
//! Cost accounting shared by the store and the Merkle tree.
//!
//! Every store access returns a [`CostResult`]: the operation's result plus
//! an [`OperationCost`] describing the seeks, bytes and hash calls it took.
//! Callers accumulate costs with [`CostContext::unwrap_add_cost`] or the
//! [`cost_return_on_error!`] macro.

mod context;

use std::ops::{Add, AddAssign};

pub use context::{CostContext, CostResult, CostsExt};

/// Approximate resources consumed by an operation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// Number of store lookups (reads and writes).
    pub seek_count: u32,
    /// Bytes written to the store, keys included.
    pub storage_written_bytes: u64,
    /// Bytes loaded from the store.
    pub storage_loaded_bytes: u64,
    /// Number of `hash`/`compress` invocations.
    pub hash_node_calls: u32,
}

impl OperationCost {
    /// Cost of `seek_count` seeks and nothing else.
    pub fn with_seek_count(seek_count: u32) -> Self {
        OperationCost {
            seek_count,
            ..Default::default()
        }
    }

    /// Cost of `hash_node_calls` hash invocations and nothing else.
    pub fn with_hash_node_calls(hash_node_calls: u32) -> Self {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }

    /// Cost of one read that loaded `loaded` bytes.
    pub fn for_read(loaded: usize) -> Self {
        OperationCost {
            seek_count: 1,
            storage_loaded_bytes: loaded as u64,
            ..Default::default()
        }
    }

    /// Cost of one write of `written` bytes.
    pub fn for_write(written: usize) -> Self {
        OperationCost {
            seek_count: 1,
            storage_written_bytes: written as u64,
            ..Default::default()
        }
    }

    /// True if nothing was spent.
    pub fn is_nothing(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            seek_count: self.seek_count + rhs.seek_count,
            storage_written_bytes: self.storage_written_bytes + rhs.storage_written_bytes,
            storage_loaded_bytes: self.storage_loaded_bytes + rhs.storage_loaded_bytes,
            hash_node_calls: self.hash_node_calls + rhs.hash_node_calls,
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.seek_count += rhs.seek_count;
        self.storage_written_bytes += rhs.storage_written_bytes;
        self.storage_loaded_bytes += rhs.storage_loaded_bytes;
        self.hash_node_calls += rhs.hash_node_calls;
    }
}

/// Like `?` for `CostResult`: adds the cost of the expression to the
/// accumulator `$cost`, unwraps `Ok`, and on `Err` returns early with
/// everything accumulated so far.
#[macro_export]
macro_rules! cost_return_on_error {
    ( &mut $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result_with_cost = { $($body)+ };
            let result = result_with_cost.unwrap_add_cost(&mut $cost);
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}

/// Like [`cost_return_on_error!`] but for a plain `Result`: nothing is added,
/// the early return carries the costs accumulated so far.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}
