//! SHA-256 hashing for leaves and internal nodes.

use sha2::{Digest as _, Sha256};

use crate::MerkleTreeError;

/// A 32-byte SHA-256 digest. Identifies nodes and keys their store entries.
pub type Digest = [u8; 32];

/// Size of a leaf value. Shorter values are zero-padded to this size
/// before hashing; longer ones are rejected.
pub const LEAF_VALUE_SIZE: usize = 64;

/// Value every leaf holds in a freshly constructed tree.
pub const ZERO_LEAF_VALUE: [u8; LEAF_VALUE_SIZE] = [0u8; LEAF_VALUE_SIZE];

/// Deepest supported tree; a 32-bit index space.
pub const MAX_DEPTH: u32 = 32;

/// Depth used when the caller has no preference.
pub const DEFAULT_DEPTH: u32 = 32;

/// Validate that depth is in the allowed range [1, 32].
pub(crate) fn validate_depth(depth: u32) -> Result<(), MerkleTreeError> {
    if !(1..=MAX_DEPTH).contains(&depth) {
        return Err(MerkleTreeError::InvalidConfiguration(format!(
            "depth must be between 1 and {}, got {}",
            MAX_DEPTH, depth
        )));
    }
    Ok(())
}

/// SHA-256 of arbitrary bytes.
pub fn hash(data: &[u8]) -> Digest {
    Sha256::digest(data).into()
}

/// Parent digest of two children: `sha256(left || right)`.
///
/// Order matters, `compress(a, b) != compress(b, a)` for `a != b`.
pub fn compress(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// `value` zero-padded to [`LEAF_VALUE_SIZE`] bytes.
pub fn leaf_value(value: &[u8]) -> Result<[u8; LEAF_VALUE_SIZE], MerkleTreeError> {
    if value.len() > LEAF_VALUE_SIZE {
        return Err(MerkleTreeError::LeafValueTooLong {
            len: value.len(),
            max: LEAF_VALUE_SIZE,
        });
    }
    let mut leaf = ZERO_LEAF_VALUE;
    leaf[..value.len()].copy_from_slice(value);
    Ok(leaf)
}

/// Digest of the leaf holding `value`, padded as by [`leaf_value`].
pub fn leaf_hash(value: &[u8]) -> Result<Digest, MerkleTreeError> {
    Ok(hash(&leaf_value(value)?))
}

/// Digest of a leaf holding [`ZERO_LEAF_VALUE`].
pub fn zero_leaf_hash() -> Digest {
    hash(&ZERO_LEAF_VALUE)
}

/// Root of a tree of the given depth whose leaves are all zero, computed
/// without a store.
pub fn zero_root(depth: u32) -> Result<Digest, MerkleTreeError> {
    validate_depth(depth)?;
    let mut digest = zero_leaf_hash();
    for _ in 0..depth {
        digest = compress(&digest, &digest);
    }
    Ok(digest)
}
