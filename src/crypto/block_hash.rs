//! Block hashing
//!
//! Transaction ids and merkle nodes use double SHA-256; the block hash is
//! scrypt(N=1024, r=1, p=1) over the 80-byte header, used as both password
//! and salt.

use super::{compute_merkle_root, Hash};
use crate::consensus::{BlockHeader, Transaction};
use thiserror::Error;

/// log2 of the scrypt cost parameter N
const SCRYPT_LOG_N: u8 = 10;
const SCRYPT_R: u32 = 1;
const SCRYPT_P: u32 = 1;

/// Hashing errors
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Invalid scrypt parameters: {0}")]
    InvalidParams(String),
    #[error("Scrypt output length rejected: {0}")]
    OutputLength(String),
}

/// The hashing algorithm blocks are identified by.
///
/// Genesis construction only depends on this trait, so alternate
/// implementations can be swapped in by tests or forks.
pub trait BlockHasher {
    /// Merkle root over the ids of `transactions`
    fn merkle_root(&self, transactions: &[Transaction]) -> Hash;

    /// Proof-of-work hash of a block header
    fn header_hash(&self, header: &BlockHeader) -> Result<Hash, HashError>;
}

/// Production hasher: SHA-256d transaction tree, scrypt header hash
#[derive(Debug, Clone)]
pub struct ScryptHasher {
    params: ::scrypt::Params,
}

impl ScryptHasher {
    pub fn new() -> Result<Self, HashError> {
        let params = ::scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, 32)
            .map_err(|e| HashError::InvalidParams(e.to_string()))?;
        Ok(Self { params })
    }
}

impl BlockHasher for ScryptHasher {
    fn merkle_root(&self, transactions: &[Transaction]) -> Hash {
        let txids: Vec<Hash> = transactions.iter().map(Transaction::txid).collect();
        compute_merkle_root(&txids)
    }

    fn header_hash(&self, header: &BlockHeader) -> Result<Hash, HashError> {
        let bytes = header.to_bytes();
        let mut out = [0u8; 32];
        ::scrypt::scrypt(&bytes, &bytes, &self.params, &mut out)
            .map_err(|e| HashError::OutputLength(e.to_string()))?;
        Ok(Hash(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_hash_deterministic() {
        let hasher = ScryptHasher::new().unwrap();
        let header = BlockHeader::new(1, Hash::zero(), Hash::zero(), 1_456_082_001, 0x1e3fffff, 0);
        let first = hasher.header_hash(&header).unwrap();
        let second = hasher.header_hash(&header).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nonce_changes_header_hash() {
        let hasher = ScryptHasher::new().unwrap();
        let a = BlockHeader::new(1, Hash::zero(), Hash::zero(), 1_456_082_001, 0x1e3fffff, 1);
        let b = BlockHeader::new(1, Hash::zero(), Hash::zero(), 1_456_082_001, 0x1e3fffff, 2);
        assert_ne!(hasher.header_hash(&a).unwrap(), hasher.header_hash(&b).unwrap());
    }

    #[test]
    fn test_merkle_root_of_nothing_is_zero() {
        let hasher = ScryptHasher::new().unwrap();
        assert_eq!(hasher.merkle_root(&[]), Hash::zero());
    }
}
