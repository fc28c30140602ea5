//! Hash path verification.
//!
//! Pure functions, no store required. Starting from the leaf digest, each
//! pair must contain the running digest on the side the index selects; the
//! pair is then compressed into the next running digest. The last one must
//! equal the root.

use crate::{
    Digest, HashPath, MerkleTreeError,
    hash::{compress, leaf_hash},
    hash_path::validate_len,
};

impl HashPath {
    /// Root implied by this path for `leaf_value` at `index`. The value is
    /// zero-padded to a full leaf, as `update_element` does.
    pub fn compute_root(&self, index: u64, leaf_value: &[u8]) -> Result<Digest, MerkleTreeError> {
        self.compute_root_from_leaf_hash(index, &leaf_hash(leaf_value)?)
    }

    /// Root implied by this path for a leaf whose digest is `leaf_hash`.
    pub fn compute_root_from_leaf_hash(
        &self,
        index: u64,
        leaf_hash: &Digest,
    ) -> Result<Digest, MerkleTreeError> {
        // Paths decoded through bincode directly skip the length check.
        validate_len(self.pairs().len())?;
        let depth = self.depth();
        if index.checked_shr(depth).unwrap_or(0) != 0 {
            return Err(MerkleTreeError::InvalidProof(format!(
                "index {} does not fit a path of depth {}",
                index, depth
            )));
        }

        let mut digest = *leaf_hash;
        for (level, (left, right)) in self.pairs().iter().enumerate() {
            // Pair 0 sits right above the leaves and is selected by bit 0.
            let on_route = if (index >> level) & 1 == 1 {
                right
            } else {
                left
            };
            if *on_route != digest {
                return Err(MerkleTreeError::InvalidProof(format!(
                    "pair {} does not contain digest {} on the route of index {}",
                    level,
                    hex::encode(digest),
                    index
                )));
            }
            digest = compress(left, right);
        }
        Ok(digest)
    }

    /// Check that `leaf_value` sits at `index` in the tree with root `root`.
    pub fn verify(
        &self,
        root: &Digest,
        index: u64,
        leaf_value: &[u8],
    ) -> Result<(), MerkleTreeError> {
        let computed = self.compute_root(index, leaf_value)?;
        if &computed != root {
            return Err(MerkleTreeError::InvalidProof(format!(
                "root hash mismatch: expected {}, got {}",
                hex::encode(root),
                hex::encode(computed)
            )));
        }
        Ok(())
    }
}
