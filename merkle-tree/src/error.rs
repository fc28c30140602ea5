use thiserror::Error;

/// Errors from Merkle tree operations.
#[derive(Debug, Error)]
pub enum MerkleTreeError {
    /// Tree parameters rejected before touching the store.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The underlying store failed to serve a read or write.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] merkle_storage::Error),
    /// A node or metadata entry the traversal depends on is missing or
    /// malformed. The tree is corrupt; never recovered silently.
    #[error("integrity error: {0}")]
    Integrity(String),
    /// Leaf index outside `[0, 2^depth)`.
    #[error("index {index} is out of range for a tree of depth {depth}")]
    InvalidIndex {
        /// Requested leaf index
        index: u64,
        /// Depth of the tree
        depth: u32,
    },
    /// Leaf value longer than a leaf can hold.
    #[error("leaf value of {len} bytes exceeds the {max} byte leaf size")]
    LeafValueTooLong {
        /// Length of the rejected value
        len: usize,
        /// Leaf size
        max: usize,
    },
    /// A hash path failed to decode or to verify.
    #[error("invalid hash path: {0}")]
    InvalidProof(String),
}
