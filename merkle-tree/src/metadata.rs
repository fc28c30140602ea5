//! Persisted tree metadata: `root (32 bytes) || depth (u32 little-endian)`,
//! followed by four zero bytes of padding.

use crate::{
    Digest, MerkleTreeError,
    hash::{MAX_DEPTH, validate_depth},
};

/// Length of an encoded metadata record.
pub const METADATA_LEN: usize = 40;

/// Root and depth of a named tree, as stored under the tree's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeMetadata {
    pub root: Digest,
    pub depth: u32,
}

impl TreeMetadata {
    pub fn encode(&self) -> [u8; METADATA_LEN] {
        let mut bytes = [0u8; METADATA_LEN];
        bytes[..32].copy_from_slice(&self.root);
        bytes[32..36].copy_from_slice(&self.depth.to_le_bytes());
        bytes
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        if bytes.len() != METADATA_LEN {
            return Err(MerkleTreeError::Integrity(format!(
                "metadata record must be {} bytes, got {}",
                METADATA_LEN,
                bytes.len()
            )));
        }
        let mut root = [0u8; 32];
        root.copy_from_slice(&bytes[..32]);
        let mut depth = [0u8; 4];
        depth.copy_from_slice(&bytes[32..36]);
        let depth = u32::from_le_bytes(depth);
        validate_depth(depth).map_err(|_| {
            MerkleTreeError::Integrity(format!(
                "persisted depth {} is outside 1..={}",
                depth, MAX_DEPTH
            ))
        })?;
        Ok(TreeMetadata { root, depth })
    }
}
