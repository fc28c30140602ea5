#[cfg(test)]
mod hash_path_tests {
    use assert_matches::assert_matches;
    use merkle_storage::MemStore;

    use crate::{
        HashPath, MerkleTree, MerkleTreeError, ZERO_LEAF_VALUE, compress, hash,
        test_utils::leaf, zero_leaf_hash,
    };

    /// Depth-3 tree with leaves 1, 4 and 6 set.
    fn make_tree_d3(store: &MemStore) -> MerkleTree<&MemStore> {
        let mut tree = MerkleTree::new(store, "paths", 3)
            .unwrap()
            .expect("construction should succeed");
        for index in [1u64, 4, 6] {
            tree.update_element(index, &leaf(index as u8))
                .unwrap()
                .expect("update should succeed");
        }
        tree
    }

    #[test]
    fn test_verify_every_leaf() {
        let store = MemStore::new();
        let tree = make_tree_d3(&store);
        for index in 0..8u64 {
            let value = if [1, 4, 6].contains(&index) {
                leaf(index as u8)
            } else {
                ZERO_LEAF_VALUE
            };
            let path = tree.hash_path(index).unwrap().expect("hash path");
            assert_eq!(path.depth(), 3);
            path.verify(&tree.root(), index, &value)
                .expect("leaf should verify");
        }
    }

    #[test]
    fn test_verify_rejects_wrong_value() {
        let store = MemStore::new();
        let tree = make_tree_d3(&store);
        let path = tree.hash_path(4).unwrap().expect("hash path");
        assert_matches!(
            path.verify(&tree.root(), 4, &ZERO_LEAF_VALUE),
            Err(MerkleTreeError::InvalidProof(_))
        );
    }

    #[test]
    fn test_verify_rejects_wrong_index() {
        let store = MemStore::new();
        let tree = make_tree_d3(&store);
        let path = tree.hash_path(4).unwrap().expect("hash path");
        // 5 shares the leaf pair with 4 but sits on the other side of it.
        assert_matches!(
            path.verify(&tree.root(), 5, &leaf(4)),
            Err(MerkleTreeError::InvalidProof(_))
        );
        // 8 does not fit a depth-3 path at all.
        assert_matches!(
            path.verify(&tree.root(), 8, &leaf(4)),
            Err(MerkleTreeError::InvalidProof(_))
        );
    }

    #[test]
    fn test_overlong_path_rejected_without_overflow() {
        // What a direct `bincode::decode_from_slice::<HashPath>` may produce.
        let long = HashPath::from_pairs(vec![([0u8; 32], [0u8; 32]); 64]);
        assert_matches!(
            long.compute_root(u64::MAX, &ZERO_LEAF_VALUE),
            Err(MerkleTreeError::InvalidProof(_))
        );

        let config = bincode::config::standard().with_big_endian();
        let bytes = bincode::encode_to_vec(&long, config).expect("encode");
        let (decoded, _): (HashPath, usize) =
            bincode::decode_from_slice(&bytes, config).expect("raw decode");
        assert_matches!(
            decoded.verify(&[0u8; 32], 1, &ZERO_LEAF_VALUE),
            Err(MerkleTreeError::InvalidProof(_))
        );
        assert_matches!(
            HashPath::from_pairs(Vec::new()).compute_root(0, &ZERO_LEAF_VALUE),
            Err(MerkleTreeError::InvalidProof(_))
        );
    }

    #[test]
    fn test_verify_rejects_wrong_root() {
        let store = MemStore::new();
        let tree = make_tree_d3(&store);
        let path = tree.hash_path(6).unwrap().expect("hash path");
        let err = path
            .verify(&[0u8; 32], 6, &leaf(6))
            .expect_err("zero root must not verify");
        assert!(err.to_string().contains("root hash mismatch"));
    }

    #[test]
    fn test_verify_rejects_tampered_sibling() {
        let store = MemStore::new();
        let tree = make_tree_d3(&store);
        let mut pairs = tree
            .hash_path(1)
            .unwrap()
            .expect("hash path")
            .into_pairs();
        pairs[1].0 = hash(b"forged");
        let forged = HashPath::new(pairs).expect("valid length");
        assert_matches!(
            forged.verify(&tree.root(), 1, &leaf(1)),
            Err(MerkleTreeError::InvalidProof(_))
        );
    }

    #[test]
    fn test_compute_root_by_hand() {
        let zero = zero_leaf_hash();
        let value = leaf(0xff);
        let level_0 = (hash(&value), zero);
        let parent = compress(&level_0.0, &level_0.1);
        let level_1 = (compress(&zero, &zero), parent);
        let path = HashPath::new(vec![level_0, level_1]).expect("valid length");

        // Index 2 = 0b10: right at the top, left at the bottom.
        assert_eq!(
            path.compute_root(2, &value).expect("consistent path"),
            compress(&level_1.0, &level_1.1)
        );
        assert_eq!(
            path.compute_root_from_leaf_hash(2, &hash(&value))
                .expect("consistent path"),
            compress(&level_1.0, &level_1.1)
        );
    }

    #[test]
    fn test_new_rejects_bad_lengths() {
        assert_matches!(
            HashPath::new(Vec::new()),
            Err(MerkleTreeError::InvalidProof(_))
        );
        assert_matches!(
            HashPath::new(vec![([0u8; 32], [0u8; 32]); 33]),
            Err(MerkleTreeError::InvalidProof(_))
        );
        assert!(HashPath::new(vec![([0u8; 32], [0u8; 32]); 32]).is_ok());
    }

    #[test]
    fn test_encode_decode() {
        let store = MemStore::new();
        let tree = make_tree_d3(&store);
        let path = tree.hash_path(6).unwrap().expect("hash path");

        let bytes = path.encode_to_vec().expect("encode");
        let decoded = HashPath::decode_from_slice(&bytes).expect("decode");
        assert_eq!(decoded, path);
        decoded
            .verify(&tree.root(), 6, &leaf(6))
            .expect("decoded path verifies");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_matches!(
            HashPath::decode_from_slice(&[0xff; 7]),
            Err(MerkleTreeError::InvalidProof(_))
        );

        let empty = HashPath::from_pairs(Vec::new())
            .encode_to_vec()
            .expect("encode");
        assert_matches!(
            HashPath::decode_from_slice(&empty),
            Err(MerkleTreeError::InvalidProof(_))
        );
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let path = HashPath::new(vec![([1u8; 32], [2u8; 32])]).expect("valid length");
        let mut bytes = path.encode_to_vec().expect("encode");
        bytes.push(0);
        assert_matches!(
            HashPath::decode_from_slice(&bytes),
            Err(MerkleTreeError::InvalidProof(_))
        );
    }
}
