use merkle_costs::{
    CostResult, CostsExt, OperationCost, cost_return_on_error, cost_return_on_error_no_add,
};
use merkle_storage::ContentAddressedStore;
use tracing::{debug, warn};

use crate::{
    Digest, HashPath, MerkleTreeError,
    hash::{hash, leaf_value, validate_depth, zero_leaf_hash},
    metadata::TreeMetadata,
    node::Node,
    storage_adapter::NodeStore,
};

/// A fully populated binary Merkle tree of fixed depth, persisted in a
/// content-addressed store.
///
/// Internal nodes live in the store keyed by their digest, with the two child
/// digests as value. Leaves are never stored: a leaf digest is the hash of
/// its value. Entries are never overwritten, so every root the tree ever had
/// stays readable.
///
/// Leaf `index` is reached from the root by reading its bits most
/// significant first: at level `k` (root is level 0) bit `depth - k - 1`
/// selects the right child when set.
///
/// `update_element` takes `&mut self`; two instances sharing a name in the
/// same store must be serialized by the caller, the last metadata write wins.
pub struct MerkleTree<S> {
    store: NodeStore<S>,
    name: String,
    depth: u32,
    root: Digest,
}

impl<S: ContentAddressedStore> MerkleTree<S> {
    /// Open the tree `name` in `store`, creating it with all-zero leaves if
    /// no metadata exists for that name yet.
    ///
    /// A fresh tree costs `depth` node writes and one metadata write: every
    /// node of a level shares the same digest, so one entry per level
    /// describes the whole tree. When the tree already exists its persisted
    /// depth is used and `depth` is only checked for range.
    pub fn new(store: S, name: impl Into<String>, depth: u32) -> CostResult<Self, MerkleTreeError> {
        let mut cost = OperationCost::default();
        let name = name.into();
        cost_return_on_error_no_add!(cost, validate_depth(depth));

        let store = NodeStore::new(store);
        let existing = cost_return_on_error!(&mut cost, store.get_metadata(&name));
        if let Some(metadata) = existing {
            if metadata.depth != depth {
                warn!(
                    tree = %name,
                    requested = depth,
                    persisted = metadata.depth,
                    "requested depth differs from persisted depth, keeping persisted depth"
                );
            }
            return Ok(Self::from_metadata(store, name, metadata)).wrap_with_cost(cost);
        }

        let root = cost_return_on_error!(&mut cost, Self::initialize(&store, depth));
        let metadata = TreeMetadata { root, depth };
        cost_return_on_error!(&mut cost, store.put_metadata(&name, &metadata));
        debug!(tree = %name, depth, root = %hex::encode(root), "created merkle tree");

        Ok(MerkleTree {
            store,
            name,
            depth,
            root,
        })
        .wrap_with_cost(cost)
    }

    /// Open an existing tree. Fails with `Integrity` if `name` has no
    /// metadata in `store`.
    pub fn restore(store: S, name: impl Into<String>) -> CostResult<Self, MerkleTreeError> {
        let mut cost = OperationCost::default();
        let name = name.into();
        let store = NodeStore::new(store);
        let existing = cost_return_on_error!(&mut cost, store.get_metadata(&name));
        match existing {
            Some(metadata) => Ok(Self::from_metadata(store, name, metadata)).wrap_with_cost(cost),
            None => Err(MerkleTreeError::Integrity(format!(
                "no metadata for tree {}",
                name
            )))
            .wrap_with_cost(cost),
        }
    }

    fn from_metadata(store: NodeStore<S>, name: String, metadata: TreeMetadata) -> Self {
        debug!(
            tree = %name,
            depth = metadata.depth,
            root = %hex::encode(metadata.root),
            "restored merkle tree"
        );
        MerkleTree {
            store,
            name,
            depth: metadata.depth,
            root: metadata.root,
        }
    }

    /// Write one node per level, from the leaves up, and return the root.
    fn initialize(store: &NodeStore<S>, depth: u32) -> CostResult<Digest, MerkleTreeError> {
        let mut cost = OperationCost::with_hash_node_calls(1);
        let mut digest = zero_leaf_hash();
        for _ in 0..depth {
            digest = cost_return_on_error!(&mut cost, store.put_node(&Node::new(digest, digest)));
        }
        Ok(digest).wrap_with_cost(cost)
    }

    /// Hash path for leaf `index` under the current root, leaf-adjacent pair
    /// first. Costs exactly `depth` node reads.
    pub fn hash_path(&self, index: u64) -> CostResult<HashPath, MerkleTreeError> {
        self.hash_path_at(&self.root, index)
    }

    /// Hash path for leaf `index` under any root this tree has had.
    pub fn hash_path_at(&self, root: &Digest, index: u64) -> CostResult<HashPath, MerkleTreeError> {
        let mut cost = OperationCost::default();
        cost_return_on_error_no_add!(cost, self.check_index(index));

        let mut pairs = Vec::with_capacity(self.depth as usize);
        let mut digest = *root;
        for level in 0..self.depth {
            let node = cost_return_on_error!(&mut cost, self.store.get_node(&digest));
            digest = node.child(self.goes_right(index, level));
            pairs.push((node.left, node.right));
        }
        pairs.reverse();

        Ok(HashPath::from_pairs(pairs)).wrap_with_cost(cost)
    }

    /// Set leaf `index` to `value` and return the new root.
    ///
    /// `value` is zero-padded to [`LEAF_VALUE_SIZE`](crate::LEAF_VALUE_SIZE)
    /// bytes; a longer value fails with `LeafValueTooLong` before any store
    /// access.
    ///
    /// Writes one new node per level plus the metadata record; no existing
    /// entry is modified. If any store access fails the in-memory root is
    /// left as it was, and nodes already written stay behind unreferenced.
    pub fn update_element(
        &mut self,
        index: u64,
        value: &[u8],
    ) -> CostResult<Digest, MerkleTreeError> {
        let mut cost = OperationCost::default();
        cost_return_on_error_no_add!(cost, self.check_index(index));
        let value = cost_return_on_error_no_add!(cost, leaf_value(value));

        let mut route = Vec::with_capacity(self.depth as usize);
        let mut digest = self.root;
        for level in 0..self.depth {
            let node = cost_return_on_error!(&mut cost, self.store.get_node(&digest));
            let go_right = self.goes_right(index, level);
            digest = node.child(go_right);
            route.push((node, go_right));
        }

        let mut digest = hash(&value);
        cost.hash_node_calls += 1;
        for (node, went_right) in route.into_iter().rev() {
            let updated = if went_right {
                Node::new(node.left, digest)
            } else {
                Node::new(digest, node.right)
            };
            digest = cost_return_on_error!(&mut cost, self.store.put_node(&updated));
        }

        let metadata = TreeMetadata {
            root: digest,
            depth: self.depth,
        };
        cost_return_on_error!(&mut cost, self.store.put_metadata(&self.name, &metadata));
        debug!(
            tree = %self.name,
            index,
            root = %hex::encode(digest),
            "updated merkle tree leaf"
        );
        self.root = digest;

        Ok(digest).wrap_with_cost(cost)
    }

    fn check_index(&self, index: u64) -> Result<(), MerkleTreeError> {
        if index >> self.depth != 0 {
            return Err(MerkleTreeError::InvalidIndex {
                index,
                depth: self.depth,
            });
        }
        Ok(())
    }

    fn goes_right(&self, index: u64, level: u32) -> bool {
        (index >> (self.depth - level - 1)) & 1 == 1
    }
}

impl<S> MerkleTree<S> {
    /// Current root digest.
    pub fn root(&self) -> Digest {
        self.root
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of leaves, `2^depth`.
    pub fn capacity(&self) -> u64 {
        1u64 << self.depth
    }

    /// Name the metadata record is stored under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        self.store.inner()
    }

    /// Give the backing store back.
    pub fn into_store(self) -> S {
        self.store.into_inner()
    }
}

impl<S> std::fmt::Debug for MerkleTree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerkleTree")
            .field("name", &self.name)
            .field("depth", &self.depth)
            .field("root", &hex::encode(self.root))
            .finish()
    }
}
