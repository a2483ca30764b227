//! Chain parameters
//!
//! Per-network consensus constants: genesis block, proof-of-work and
//! proof-of-stake ceilings, message-start bytes, address prefixes and the
//! economic schedule. Parameter sets are built once at startup and are
//! read-only afterwards; [`ParamsRegistry`] decides which one is active.

mod builder;
mod networks;
mod registry;

pub use builder::*;
pub use networks::*;
pub use registry::*;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::consensus::{Block, Target};
use crate::crypto::{Hash, HashError};
use crate::node::GenesisError;
use crate::p2p::{FixedSeedAddress, Magic};

/// Maximum accepted distance of a block timestamp into the future
pub const FUTURE_DRIFT: i64 = 10 * 60;

/// Network variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Network {
    /// Main network on which people trade goods and services
    Main,
    /// Public test network
    Test,
    /// Private regression-test network (no parameter set defined)
    Regtest,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Map message-start bytes back to a network
    pub fn from_magic(magic: Magic) -> Option<Network> {
        match magic {
            Magic::MAINNET => Some(Network::Main),
            Magic::TESTNET => Some(Network::Test),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            other => Err(ParamsError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Kinds of Base58-encoded data, each with a per-network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// One prefix per [`Base58Type`], indexed by the kind
pub type Base58Prefixes = [Vec<u8>; 5];

/// DNS seed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// Chain parameter errors
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{network} genesis block failed verification: {source}")]
    Genesis {
        network: Network,
        #[source]
        source: GenesisError,
    },
    #[error("Invalid {field} literal: {source}")]
    InvalidLiteral {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },
    #[error("Unimplemented network: {0}")]
    UnimplementedNetwork(Network),
    #[error("Unknown network name: {0}")]
    UnknownNetwork(String),
    #[error("Block hasher unavailable: {0}")]
    Hasher(#[from] HashError),
}

/// The parameters of one network
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    network: Network,
    genesis: Block,
    hash_genesis_block: Hash,
    message_start: Magic,
    /// Raw pub key bytes for the broadcast alert signing key
    #[serde(with = "crate::util::hex_bytes")]
    alert_key: Vec<u8>,
    #[serde(with = "crate::util::hex_bytes")]
    checkpoint_pubkey: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: Target,
    pos_limit: Target,
    subsidy_halving_interval: u32,
    data_dir: String,
    dns_seeds: Vec<DnsSeed>,
    base58_prefixes: Base58Prefixes,
    fixed_seeds: Vec<FixedSeedAddress>,

    // Chain
    target_spacing: u32,
    basic_pow_reward: i64,
    coinbase_maturity: u32,
    launch_time: i64,

    // PoW section
    last_pow_block: u32,
    pow_halving: u32,

    // PoS section
    pos_granularity: u32,
    pos_halving: u32,
    min_delay: u32,
    first_pos_block: u32,
    stake_coin_year_reward: i64,
    stake_min_age: u32,
    /// Time to elapse before a new stake modifier is computed
    modifier_interval: u32,
    stake_min_confirmations: u32,

    max_money: i64,
}

impl ChainParams {
    pub fn network_id(&self) -> Network {
        self.network
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn hash_genesis_block(&self) -> &Hash {
        &self.hash_genesis_block
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.message_start.to_bytes()
    }

    pub fn magic(&self) -> Magic {
        self.message_start
    }

    pub fn alert_key(&self) -> &[u8] {
        &self.alert_key
    }

    pub fn checkpoint_pubkey(&self) -> &[u8] {
        &self.checkpoint_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn proof_of_work_limit(&self) -> &Target {
        &self.pow_limit
    }

    pub fn proof_of_stake_limit(&self) -> &Target {
        &self.pos_limit
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    pub fn require_rpc_password(&self) -> bool {
        true
    }

    /// Data directory name, relative to the base data directory.
    /// Empty for the main network.
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        &self.base58_prefixes[kind.index()]
    }

    pub fn fixed_seeds(&self) -> &[FixedSeedAddress] {
        &self.fixed_seeds
    }

    /// Deliberately false for regression-test mode
    pub fn is_testnet(&self) -> bool {
        self.network == Network::Test
    }

    pub fn coinbase_maturity(&self) -> u32 {
        self.coinbase_maturity
    }

    pub fn stake_min_confirmations(&self) -> u32 {
        self.stake_min_confirmations
    }

    pub fn stake_min_age(&self) -> u32 {
        self.stake_min_age
    }

    pub fn modifier_interval(&self) -> u32 {
        self.modifier_interval
    }

    pub fn stake_coin_year_reward(&self) -> i64 {
        self.stake_coin_year_reward
    }

    pub fn pow_half_life(&self) -> u32 {
        self.pow_halving
    }

    pub fn pos_half_life(&self) -> u32 {
        self.pos_halving
    }

    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn first_pos_block(&self) -> u32 {
        self.first_pos_block
    }

    pub fn min_delay(&self) -> u32 {
        self.min_delay
    }

    pub fn target_spacing(&self) -> u32 {
        self.target_spacing
    }

    /// Target spacing in effect at `height` (constant on every network)
    pub fn target_spacing_at(&self, _height: u32) -> u32 {
        self.target_spacing
    }

    pub fn launch_time(&self) -> i64 {
        self.launch_time
    }

    pub fn basic_pow_reward(&self) -> i64 {
        self.basic_pow_reward
    }

    pub fn pos_granularity(&self) -> u32 {
        self.pos_granularity
    }

    /// Latest acceptable timestamp for a block at `height` given time `time`
    pub fn future_drift(&self, time: i64, _height: u32) -> i64 {
        time + FUTURE_DRIFT
    }

    pub fn max_money(&self) -> i64 {
        self.max_money
    }
}
