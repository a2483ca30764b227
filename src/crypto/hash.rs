//! SHA-256 hashing
//!
//! Transaction ids, merkle nodes and address checksums all use double SHA-256.
//! Hashes are stored in wire order and displayed byte-reversed.

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash output, stored in wire (little-endian) order
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for the genesis previous hash)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from bytes in wire order
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a hash from its display form (most significant byte first).
    ///
    /// An optional `0x` prefix is accepted.
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        for (dst, src) in arr.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Ok(Hash(arr))
    }

    /// Convert to display hex (byte-reversed)
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Get as bytes in wire order
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Single SHA-256 of arbitrary bytes
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Double SHA-256 (hash of hash)
pub fn double_hash(data: &[u8]) -> Hash {
    Hash(sha256(&sha256(data)))
}

/// Hash two hashes together (for the merkle tree)
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut data = Vec::with_capacity(64);
    data.extend_from_slice(&left.0);
    data.extend_from_slice(&right.0);
    double_hash(&data)
}
