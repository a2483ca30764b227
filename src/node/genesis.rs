//! Genesis block generation
//!
//! Builds a network's genesis block from its fixed fields and checks the
//! derived merkle root and block hash against the network's literals.

use thiserror::Error;
use tracing::{error, info};

use crate::consensus::{Block, BlockHeader, Script, Transaction, TxIn, TxOut};
use crate::crypto::{BlockHasher, Hash, HashError};

/// Fixed inputs of a genesis block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisSpec {
    /// Headline embedded in the coinbase script
    pub timestamp: &'static str,
    /// Number pushed between `OP_0` and the headline
    pub script_number: i64,
    /// Block and coinbase transaction time
    pub time: u32,
    pub version: i32,
    pub nonce: u32,
}

/// Values the derived genesis fields must reproduce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisChecksums {
    pub hash: Hash,
    pub merkle_root: Hash,
}

/// Genesis verification failures
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("Merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch { expected: Hash, computed: Hash },
    #[error("Block hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { expected: Hash, computed: Hash },
    #[error("Hashing failed: {0}")]
    Hash(#[from] HashError),
}

/// The genesis coinbase: one input carrying the headline, one empty output.
///
/// The output cannot be spent; it never existed in the coin database.
pub fn genesis_coinbase(spec: &GenesisSpec) -> Transaction {
    let script_sig = Script::builder()
        .push_int(0)
        .push_num(spec.script_number)
        .push_slice(spec.timestamp.as_bytes())
        .into_script();

    Transaction::new(1, spec.time, vec![TxIn::coinbase(script_sig)], vec![TxOut::empty()], 0)
}

/// Create the genesis block
///
/// Reproducible byte-for-byte for a given spec, bits and hasher.
pub fn create_genesis_block(spec: &GenesisSpec, bits: u32, hasher: &impl BlockHasher) -> Block {
    let transactions = vec![genesis_coinbase(spec)];
    let merkle_root = hasher.merkle_root(&transactions);

    let header = BlockHeader::new(
        spec.version,
        Hash::zero(), // No previous block
        merkle_root,
        spec.time,
        bits,
        spec.nonce,
    );

    Block::new(header, transactions)
}

/// Build the genesis block and verify it against the expected checksums.
///
/// Returns the block together with its hash.
pub fn build_verified_genesis(
    spec: &GenesisSpec,
    bits: u32,
    expected: &GenesisChecksums,
    hasher: &impl BlockHasher,
) -> Result<(Block, Hash), GenesisError> {
    let block = create_genesis_block(spec, bits, hasher);

    let merkle_root = block.header.merkle_root;
    if merkle_root != expected.merkle_root {
        error!(expected = %expected.merkle_root, computed = %merkle_root, "genesis merkle root mismatch");
        return Err(GenesisError::MerkleRootMismatch {
            expected: expected.merkle_root,
            computed: merkle_root,
        });
    }

    let hash = block.hash_with(hasher)?;
    if hash != expected.hash {
        error!(expected = %expected.hash, computed = %hash, "genesis hash mismatch");
        return Err(GenesisError::HashMismatch {
            expected: expected.hash,
            computed: hash,
        });
    }

    info!(%hash, %merkle_root, nonce = spec.nonce, "genesis block verified");
    Ok((block, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::ScryptHasher;

    const SPEC: GenesisSpec = GenesisSpec {
        timestamp: "2016 FootyCash launches and is a huge success",
        script_number: 42,
        time: 1_456_082_001,
        version: 1,
        nonce: 449,
    };

    const MAIN_BITS: u32 = 0x1e3fffff;

    fn checksums() -> GenesisChecksums {
        GenesisChecksums {
            hash: Hash::from_hex("00005ec05d79bef930111ff31cc66e8127752a084936e0ff938fea1599324199").unwrap(),
            merkle_root: Hash::from_hex("4e448dece2984c7c9312b4d878e8493664375d4b8b9fbdf232094aae71328406").unwrap(),
        }
    }

    #[test]
    fn test_coinbase_script_layout() {
        let tx = genesis_coinbase(&SPEC);
        let script = tx.inputs[0].script_sig.as_bytes();
        assert_eq!(&script[..4], &[0x00, 0x01, 0x2a, 45]);
        assert_eq!(&script[4..], SPEC.timestamp.as_bytes());
        assert!(tx.is_coinbase());
        assert!(tx.outputs[0].is_empty());
    }

    #[test]
    fn test_genesis_is_deterministic() {
        let hasher = ScryptHasher::new().unwrap();
        let genesis1 = create_genesis_block(&SPEC, MAIN_BITS, &hasher);
        let genesis2 = create_genesis_block(&SPEC, MAIN_BITS, &hasher);

        assert_eq!(genesis1, genesis2);
        assert_eq!(genesis1.hash_with(&hasher).unwrap(), genesis2.hash_with(&hasher).unwrap());
    }

    #[test]
    fn test_genesis_verifies() {
        let hasher = ScryptHasher::new().unwrap();
        let (block, hash) = build_verified_genesis(&SPEC, MAIN_BITS, &checksums(), &hasher).unwrap();
        assert!(block.is_genesis());
        assert_eq!(hash, checksums().hash);
        assert_eq!(block.header.merkle_root, checksums().merkle_root);
    }

    #[test]
    fn test_altered_nonce_is_rejected() {
        let hasher = ScryptHasher::new().unwrap();
        let spec = GenesisSpec { nonce: 450, ..SPEC };
        let err = build_verified_genesis(&spec, MAIN_BITS, &checksums(), &hasher).unwrap_err();
        assert!(matches!(err, GenesisError::HashMismatch { .. }));
    }

    #[test]
    fn test_altered_headline_is_rejected() {
        let hasher = ScryptHasher::new().unwrap();
        let spec = GenesisSpec { timestamp: "2016 FootyCash launches", ..SPEC };
        let err = build_verified_genesis(&spec, MAIN_BITS, &checksums(), &hasher).unwrap_err();
        assert!(matches!(err, GenesisError::MerkleRootMismatch { .. }));
    }
}
