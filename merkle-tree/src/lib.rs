//! Fixed-depth binary Merkle tree over a content-addressed store.
//!
//! Every leaf of a new tree holds 64 zero bytes. Internal nodes are stored
//! under `sha256(left || right)` with value `left || right`; leaves are not
//! stored, a leaf digest is `sha256(value)` with `value` zero-padded to 64
//! bytes. Because all leaves start equal,
//! a new tree of depth `d` needs only `d` store entries.
//!
//! The tree's root and depth are persisted under its name as
//! `root || depth (u32 LE) || [0; 4]`, so a tree can be reopened without
//! recomputation.
//!
//! ```ignore
//! let store = MemStore::new();
//! let mut tree = MerkleTree::new(&store, "notes", 32).unwrap()?;
//! let root = tree.update_element(5, &[1u8; 64]).unwrap()?;
//! let path = tree.hash_path(5).unwrap()?;
//! path.verify(&root, 5, &[1u8; 64])?;
//! ```

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
pub(crate) mod hash_path;
pub(crate) mod metadata;
pub(crate) mod node;
mod storage_adapter;
pub(crate) mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::MerkleTreeError;
pub use hash::{
    DEFAULT_DEPTH, Digest, LEAF_VALUE_SIZE, MAX_DEPTH, ZERO_LEAF_VALUE, compress, hash, leaf_hash,
    leaf_value, zero_leaf_hash, zero_root,
};
pub use hash_path::HashPath;
pub use merkle_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use metadata::METADATA_LEN;
pub use node::NODE_LEN;
pub use tree::MerkleTree;
