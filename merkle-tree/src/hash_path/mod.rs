//! Hash paths: the sibling pairs proving a leaf under a root.
//!
//! A `HashPath` holds, for each internal level on the route from a leaf to
//! the root, both children of the node visited there. Pairs are ordered from
//! the leaf-adjacent level up to the root-adjacent level. Verification lives
//! in `verify.rs`.

use bincode::{Decode, Encode};

use crate::{Digest, MerkleTreeError, hash::MAX_DEPTH};

mod tests;

/// Ordered `(left, right)` sibling pairs from the leaf up to the root.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct HashPath {
    pairs: Vec<(Digest, Digest)>,
}

impl HashPath {
    /// Build a hash path from pairs ordered leaf-adjacent first.
    ///
    /// Rejects an empty path and paths longer than the maximum tree depth.
    pub fn new(pairs: Vec<(Digest, Digest)>) -> Result<Self, MerkleTreeError> {
        validate_len(pairs.len())?;
        Ok(HashPath { pairs })
    }

    /// Trees only produce paths of their own depth, no validation needed.
    pub(crate) fn from_pairs(pairs: Vec<(Digest, Digest)>) -> Self {
        HashPath { pairs }
    }

    /// All pairs, leaf-adjacent first.
    pub fn pairs(&self) -> &[(Digest, Digest)] {
        &self.pairs
    }

    /// Depth of the tree this path was taken from.
    pub fn depth(&self) -> u32 {
        self.pairs.len() as u32
    }

    /// Pair holding the leaf digest and its sibling.
    pub fn leaf_pair(&self) -> Option<&(Digest, Digest)> {
        self.pairs.first()
    }

    /// Pair holding the two children of the root.
    pub fn root_pair(&self) -> Option<&(Digest, Digest)> {
        self.pairs.last()
    }

    /// Consume the path, returning its pairs.
    pub fn into_pairs(self) -> Vec<(Digest, Digest)> {
        self.pairs
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, MerkleTreeError> {
        let config = bincode::config::standard().with_big_endian();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Validates the number of pairs and rejects trailing bytes.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (path, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(MerkleTreeError::InvalidProof(format!(
                "{} trailing bytes after hash path",
                bytes.len() - read
            )));
        }
        validate_len(path.pairs.len())?;
        Ok(path)
    }
}

pub(crate) fn validate_len(len: usize) -> Result<(), MerkleTreeError> {
    if len == 0 || len > MAX_DEPTH as usize {
        return Err(MerkleTreeError::InvalidProof(format!(
            "hash path must have between 1 and {} pairs, got {}",
            MAX_DEPTH, len
        )));
    }
    Ok(())
}
