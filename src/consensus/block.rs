//! Block structure
//!
//! Defines the block and block header structures.

use serde::Serialize;

use super::Transaction;
use crate::crypto::{BlockHasher, Hash, HashError};

/// Serialized header length in bytes
pub const HEADER_SIZE: usize = 80;

/// Block header containing all metadata
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Protocol version
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root of all transactions
    pub merkle_root: Hash,
    /// Block timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Difficulty target (compact representation)
    pub bits: u32,
    /// Nonce used for PoW
    pub nonce: u32,
}

impl BlockHeader {
    /// Create a new block header
    pub fn new(version: i32, prev_hash: Hash, merkle_root: Hash, time: u32, bits: u32, nonce: u32) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            time,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_hash.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }
}

/// A complete block containing header and transactions
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in this block
    pub transactions: Vec<Transaction>,
    /// Block signature (empty for proof-of-work blocks)
    pub signature: Vec<u8>,
}

impl Block {
    /// Create a new unsigned block
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self {
            header,
            transactions,
            signature: Vec::new(),
        }
    }

    /// Get the block hash under the given hashing algorithm
    pub fn hash_with(&self, hasher: &impl BlockHasher) -> Result<Hash, HashError> {
        hasher.header_hash(&self.header)
    }

    /// Recompute the merkle root from the transactions
    pub fn build_merkle_root(&self, hasher: &impl BlockHasher) -> Hash {
        hasher.merkle_root(&self.transactions)
    }

    /// Check if this is the genesis block
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash == Hash::zero()
    }
}
