use crate::{Digest, MerkleTreeError, hash::compress};

/// Length of an internal node entry: two child digests.
pub const NODE_LEN: usize = 64;

/// An internal node as stored: the digests of its two children. The node's
/// own digest (its store key) is `compress(left, right)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub left: Digest,
    pub right: Digest,
}

impl Node {
    pub fn new(left: Digest, right: Digest) -> Self {
        Node { left, right }
    }

    pub fn digest(&self) -> Digest {
        compress(&self.left, &self.right)
    }

    /// Child on the route selected by `go_right`.
    pub fn child(&self, go_right: bool) -> Digest {
        if go_right { self.right } else { self.left }
    }

    pub fn encode(&self) -> [u8; NODE_LEN] {
        let mut bytes = [0u8; NODE_LEN];
        bytes[..32].copy_from_slice(&self.left);
        bytes[32..].copy_from_slice(&self.right);
        bytes
    }

    /// Decode the entry stored under `key`.
    pub fn decode(key: &Digest, bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        if bytes.len() != NODE_LEN {
            return Err(MerkleTreeError::Integrity(format!(
                "node {} must be {} bytes, got {}",
                hex::encode(key),
                NODE_LEN,
                bytes.len()
            )));
        }
        let mut left = [0u8; 32];
        let mut right = [0u8; 32];
        left.copy_from_slice(&bytes[..32]);
        right.copy_from_slice(&bytes[32..]);
        Ok(Node { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_concatenates_children() {
        let node = Node::new([1; 32], [2; 32]);
        let bytes = node.encode();
        assert_eq!(&bytes[..32], &[1; 32]);
        assert_eq!(&bytes[32..], &[2; 32]);
        assert_eq!(Node::decode(&node.digest(), &bytes).expect("decode"), node);
    }

    #[test]
    fn test_child_selection() {
        let node = Node::new([1; 32], [2; 32]);
        assert_eq!(node.child(false), [1; 32]);
        assert_eq!(node.child(true), [2; 32]);
    }

    #[test]
    fn test_decode_rejects_truncated_entry() {
        assert!(Node::decode(&[0; 32], &[0u8; 63]).is_err());
    }
}
