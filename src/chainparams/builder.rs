//! Parameter set construction
//!
//! A network is described by a [`ChainParamsBuilder`]: a plain record whose
//! fields are all public, so a derived network is written as an explicit
//! list of overrides on top of a base record with struct update syntax.

use rand::Rng;
use tracing::debug;

use super::{Base58Prefixes, ChainParams, DnsSeed, Network, ParamsError};
use crate::consensus::Target;
use crate::crypto::{BlockHasher, Hash};
use crate::node::{build_verified_genesis, GenesisChecksums, GenesisSpec};
use crate::p2p::{convert_seed6, Magic, SeedSpec6};
use crate::util::parse_hex;

/// Literal description of a network, verified and expanded by [`build`].
///
/// The genesis block's bits are the compact form of `pow_limit`.
///
/// [`build`]: ChainParamsBuilder::build
#[derive(Debug, Clone)]
pub struct ChainParamsBuilder {
    pub network: Network,
    pub message_start: Magic,
    /// Hex of the alert signing key
    pub alert_key: &'static str,
    /// Hex of the sync-checkpoint signing key
    pub checkpoint_pubkey: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit: Target,
    pub pos_limit: Target,
    pub subsidy_halving_interval: u32,
    pub data_dir: &'static str,
    /// (name, host) pairs
    pub dns_seeds: Vec<(&'static str, &'static str)>,
    pub base58_prefixes: Base58Prefixes,
    pub seed_specs: &'static [SeedSpec6],

    pub genesis: GenesisSpec,
    /// Display hex of the expected genesis block hash
    pub genesis_hash: &'static str,
    /// Display hex of the expected genesis merkle root
    pub genesis_merkle_root: &'static str,

    pub target_spacing: u32,
    pub basic_pow_reward: i64,
    pub coinbase_maturity: u32,
    pub launch_time: i64,
    pub last_pow_block: u32,
    pub pow_halving: u32,
    pub pos_granularity: u32,
    pub pos_halving: u32,
    pub min_delay: u32,
    pub first_pos_block: u32,
    pub stake_coin_year_reward: i64,
    pub stake_min_age: u32,
    pub modifier_interval: u32,
    pub stake_min_confirmations: u32,
    pub max_money: i64,
}

impl ChainParamsBuilder {
    /// Build the genesis block, verify it, convert the fixed seeds.
    ///
    /// `now` and `rng` only feed the seeds' last-seen jitter.
    pub fn build<R: Rng + ?Sized>(
        self,
        hasher: &impl BlockHasher,
        rng: &mut R,
        now: u64,
    ) -> Result<ChainParams, ParamsError> {
        let network = self.network;

        let expected = GenesisChecksums {
            hash: parse_hash("genesis hash", self.genesis_hash)?,
            merkle_root: parse_hash("genesis merkle root", self.genesis_merkle_root)?,
        };
        let (genesis, hash_genesis_block) =
            build_verified_genesis(&self.genesis, self.pow_limit.to_compact(), &expected, hasher)
                .map_err(|source| ParamsError::Genesis { network, source })?;

        let fixed_seeds = convert_seed6(self.seed_specs, now, rng);
        debug!(%network, count = fixed_seeds.len(), "converted fixed seeds");

        Ok(ChainParams {
            network,
            genesis,
            hash_genesis_block,
            message_start: self.message_start,
            alert_key: parse_key("alert key", self.alert_key)?,
            checkpoint_pubkey: parse_key("checkpoint key", self.checkpoint_pubkey)?,
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit: self.pow_limit,
            pos_limit: self.pos_limit,
            subsidy_halving_interval: self.subsidy_halving_interval,
            data_dir: self.data_dir.to_string(),
            dns_seeds: self
                .dns_seeds
                .iter()
                .map(|(name, host)| DnsSeed::new(name, host))
                .collect(),
            base58_prefixes: self.base58_prefixes,
            fixed_seeds,
            target_spacing: self.target_spacing,
            basic_pow_reward: self.basic_pow_reward,
            coinbase_maturity: self.coinbase_maturity,
            launch_time: self.launch_time,
            last_pow_block: self.last_pow_block,
            pow_halving: self.pow_halving,
            pos_granularity: self.pos_granularity,
            pos_halving: self.pos_halving,
            min_delay: self.min_delay,
            first_pos_block: self.first_pos_block,
            stake_coin_year_reward: self.stake_coin_year_reward,
            stake_min_age: self.stake_min_age,
            modifier_interval: self.modifier_interval,
            stake_min_confirmations: self.stake_min_confirmations,
            max_money: self.max_money,
        })
    }
}

fn parse_hash(field: &'static str, hex: &str) -> Result<Hash, ParamsError> {
    Hash::from_hex(hex).map_err(|source| ParamsError::InvalidLiteral { field, source })
}

fn parse_key(field: &'static str, hex: &str) -> Result<Vec<u8>, ParamsError> {
    parse_hex(hex).map_err(|source| ParamsError::InvalidLiteral { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::mainnet;
    use crate::crypto::ScryptHasher;
    use crate::node::GenesisError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bad_hash_literal_is_reported() {
        let builder = ChainParamsBuilder {
            genesis_hash: "not hex",
            ..mainnet()
        };
        let hasher = ScryptHasher::new().unwrap();
        let err = builder.build(&hasher, &mut StdRng::seed_from_u64(1), 0).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidLiteral { field: "genesis hash", .. }));
    }

    #[test]
    fn test_changed_pow_limit_changes_genesis_bits() {
        // The genesis bits follow the PoW ceiling, so loosening the ceiling
        // without a matching nonce/hash must fail verification.
        let builder = ChainParamsBuilder {
            pow_limit: Target::max_shifted(16),
            ..mainnet()
        };
        let hasher = ScryptHasher::new().unwrap();
        let err = builder.build(&hasher, &mut StdRng::seed_from_u64(1), 0).unwrap_err();
        assert!(matches!(
            err,
            ParamsError::Genesis {
                network: Network::Main,
                source: GenesisError::HashMismatch { .. }
            }
        ));
    }
}
