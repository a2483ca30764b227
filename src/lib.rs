//! FootyCash (FTC) Core Library
//!
//! Network parameters and genesis block definitions for a hybrid
//! proof-of-work / proof-of-stake chain, plus the block primitives,
//! hashing and address encoding they are built from.

pub mod chainparams;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod node;
pub mod p2p;
pub mod util;
pub mod wallet;

/// Monetary units
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// One hundredth of a coin
    pub const CENT: i64 = 1_000_000;

    /// Chain name (short form for addresses/logos)
    pub const CHAIN_NAME: &str = "FTC";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "FootyCash";
}
