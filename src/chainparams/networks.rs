//! Network definitions
//!
//! The main network declares every literal; the test network is the main
//! network with the overrides listed in [`testnet`].

use super::{ChainParamsBuilder, Network};
use crate::consensus::Target;
use crate::constants::{CENT, COIN};
use crate::node::GenesisSpec;
use crate::p2p::{Magic, MAINNET_SEEDS, TESTNET_SEEDS};

/// Headline embedded in every FootyCash genesis coinbase
pub const GENESIS_TIMESTAMP: &str = "2016 FootyCash launches and is a huge success";

/// Genesis block and coinbase time
pub const GENESIS_TIME: u32 = 1_456_082_001;

const ALERT_KEY: &str = "04acdb4977a559440c1fa273cc79ef738ece2bfdc984ebcbd1defad4656b30d13d97a5f64448eb5ff4fd56420b340bf5d63ae57e929b666d5717f853a629103f61";
const CHECKPOINT_KEY: &str = "0448addbefe39432f89547603c7016cac247ad9fdffa34459d5534cf0d64f3afec95a4f20c3d80941cdc771fa2ec4a652488dcfe8cc6abf5f3f2ab05a79f8bba6e";

/// Main network
pub fn mainnet() -> ChainParamsBuilder {
    let basic_pow_reward = 1000 * COIN;
    let last_pow_block = 20_160;
    let pos_granularity = 15;

    ChainParamsBuilder {
        network: Network::Main,
        message_start: Magic::MAINNET,
        alert_key: ALERT_KEY,
        checkpoint_pubkey: CHECKPOINT_KEY,
        default_port: 19_199,
        rpc_port: 19_200,
        pow_limit: Target::max_shifted(18),
        pos_limit: Target::max_shifted(5),
        subsidy_halving_interval: 0,
        data_dir: "",
        dns_seeds: vec![("seed.footycash.com", "seed.footycash.com")],
        base58_prefixes: [
            vec![30, 101, 250],
            vec![85, 85, 85],
            vec![153, 153, 153],
            vec![0x04, 0x88, 0xB2, 0x1E],
            vec![0x04, 0x88, 0xAD, 0xE4],
        ],
        seed_specs: MAINNET_SEEDS,

        genesis: GenesisSpec {
            timestamp: GENESIS_TIMESTAMP,
            script_number: 42,
            time: GENESIS_TIME,
            version: 1,
            nonce: 449,
        },
        genesis_hash: "00005ec05d79bef930111ff31cc66e8127752a084936e0ff938fea1599324199",
        genesis_merkle_root: "4e448dece2984c7c9312b4d878e8493664375d4b8b9fbdf232094aae71328406",

        target_spacing: (pos_granularity + 1) * 4,
        basic_pow_reward,
        coinbase_maturity: 20,
        launch_time: GENESIS_TIME as i64,
        last_pow_block,
        pow_halving: 2000,
        pos_granularity,
        pos_halving: 1350 * 365,
        min_delay: 2, // seconds
        first_pos_block: 10_000,
        stake_coin_year_reward: 3 * CENT,
        stake_min_age: 8 * 60 * 60,
        modifier_interval: 10 * 60,
        stake_min_confirmations: 20,
        max_money: last_pow_block as i64 * basic_pow_reward,
    }
}

/// Test network: the main network's coinbase and schedule with its own
/// magic, looser PoW ceiling, ports, seeds, prefixes and staking rules.
pub fn testnet() -> ChainParamsBuilder {
    let main = mainnet();

    ChainParamsBuilder {
        network: Network::Test,
        message_start: Magic::TESTNET,
        pow_limit: Target::max_shifted(16),
        default_port: 20_199,
        rpc_port: 20_200,
        data_dir: "testnet",

        // Same coinbase and time; only the header's bits, nonce and hash move.
        genesis: GenesisSpec { nonce: 136, ..main.genesis },
        genesis_hash: "00d864d0d5e1e6c08d8a9b6cdf66a62bc1c9a68d5c82e6088f368eaf770905f3",

        dns_seeds: Vec::new(),
        seed_specs: TESTNET_SEEDS,
        base58_prefixes: [
            vec![111],
            vec![196],
            vec![239],
            vec![0x04, 0x35, 0x87, 0xCF],
            vec![0x04, 0x35, 0x83, 0x94],
        ],

        pos_limit: Target::max_shifted(20),
        coinbase_maturity: 10,
        stake_min_confirmations: 10,
        stake_min_age: 8 * 60,
        modifier_interval: 10 * 60,
        stake_coin_year_reward: 5 * CENT,
        last_pow_block: 1350 * 5 * 6,
        max_money: 3_141_592_654 * COIN,
        ..main
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_schedule() {
        let main = mainnet();
        assert_eq!(main.target_spacing, 64);
        assert_eq!(main.max_money, 20_160 * 1000 * COIN);
        assert_eq!(main.launch_time, GENESIS_TIME as i64);
        assert_eq!(main.pos_halving, 492_750);
    }

    #[test]
    fn test_testnet_inherits_coinbase() {
        let main = mainnet();
        let test = testnet();
        assert_eq!(test.genesis.timestamp, main.genesis.timestamp);
        assert_eq!(test.genesis.time, main.genesis.time);
        assert_eq!(test.genesis.script_number, main.genesis.script_number);
        assert_eq!(test.genesis_merkle_root, main.genesis_merkle_root);
        assert_ne!(test.genesis.nonce, main.genesis.nonce);
    }

    #[test]
    fn test_testnet_keeps_unlisted_fields() {
        let main = mainnet();
        let test = testnet();
        assert_eq!(test.alert_key, main.alert_key);
        assert_eq!(test.first_pos_block, main.first_pos_block);
        assert_eq!(test.pos_granularity, main.pos_granularity);
        assert_eq!(test.basic_pow_reward, main.basic_pow_reward);
        assert_eq!(test.launch_time, main.launch_time);
    }

    #[test]
    fn test_testnet_pow_limit_is_looser() {
        assert!(testnet().pow_limit > mainnet().pow_limit);
        assert!(testnet().pos_limit < mainnet().pos_limit);
    }
}
