//! Cryptography module - SHA-256d hashing, merkle trees, scrypt block hashes

mod hash;
mod merkle;
mod block_hash;

pub use hash::*;
pub use merkle::*;
pub use block_hash::*;
