//! Typed access to node and metadata entries on top of a
//! `ContentAddressedStore`.
//!
//! Store failures become `StoreUnavailable`; absent or malformed entries
//! become `Integrity` errors.

use merkle_costs::{CostResult, CostsExt, OperationCost, cost_return_on_error};
use merkle_storage::ContentAddressedStore;

use crate::{Digest, MerkleTreeError, metadata::TreeMetadata, node::Node};

/// Wraps a store and speaks in nodes and metadata records.
pub(crate) struct NodeStore<S> {
    store: S,
}

impl<S> NodeStore<S> {
    pub fn new(store: S) -> Self {
        NodeStore { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: ContentAddressedStore> NodeStore<S> {
    /// Load the internal node whose digest is `digest`.
    pub fn get_node(&self, digest: &Digest) -> CostResult<Node, MerkleTreeError> {
        let mut cost = OperationCost::default();
        let bytes = cost_return_on_error!(
            &mut cost,
            self.store.get(digest).map_err(MerkleTreeError::from)
        );
        match bytes {
            Some(bytes) => Node::decode(digest, &bytes).wrap_with_cost(cost),
            None => Err(MerkleTreeError::Integrity(format!(
                "missing node {}",
                hex::encode(digest)
            )))
            .wrap_with_cost(cost),
        }
    }

    /// Persist `node` under its digest and return that digest.
    pub fn put_node(&self, node: &Node) -> CostResult<Digest, MerkleTreeError> {
        let mut cost = OperationCost::with_hash_node_calls(1);
        let digest = node.digest();
        cost_return_on_error!(
            &mut cost,
            self.store
                .put(digest, &node.encode())
                .map_err(MerkleTreeError::from)
        );
        Ok(digest).wrap_with_cost(cost)
    }

    pub fn get_metadata(&self, name: &str) -> CostResult<Option<TreeMetadata>, MerkleTreeError> {
        self.store
            .get(name.as_bytes())
            .map_err(MerkleTreeError::from)
            .map(|result| {
                result.and_then(|bytes| bytes.as_deref().map(TreeMetadata::decode).transpose())
            })
    }

    pub fn put_metadata(
        &self,
        name: &str,
        metadata: &TreeMetadata,
    ) -> CostResult<(), MerkleTreeError> {
        self.store
            .put(name.as_bytes(), &metadata.encode())
            .map_err(MerkleTreeError::from)
    }
}
