//! FootyCash (FTC) Node
//!
//! Builds and verifies every network's parameters, selects the active one
//! from configuration and reports it.

use clap::Parser;
use footy_core::chainparams::{Base58Type, ChainParams, ParamsRegistry};
use footy_core::config::{NodeConfig, CONFIG_FILE_NAME};
use footy_core::constants::{CHAIN_FULL_NAME, COIN};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Command line arguments for the node.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (JSON); defaults to footycash.json in the data directory
    #[arg(long)]
    conf: Option<PathBuf>,

    /// Use the test network
    #[arg(long)]
    testnet: bool,

    /// Base data directory
    #[arg(long)]
    datadir: Option<PathBuf>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the active parameters as JSON and exit
    #[arg(long)]
    dump_params: bool,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

/// Initializes tracing; RUST_LOG takes precedence over `level`.
fn init_tracing(level: &str, ansi: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .init();
}

/// Explicit `--conf` must exist; the default location is optional.
fn load_config(args: &Args) -> Result<NodeConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.conf {
        Some(path) => NodeConfig::load(path)?,
        None => {
            let defaults = NodeConfig {
                data_dir: args.datadir.clone(),
                ..Default::default()
            };
            let path = defaults.base_data_dir()?.join(CONFIG_FILE_NAME);
            if path.is_file() {
                NodeConfig::load(&path)?
            } else {
                defaults
            }
        }
    };

    // Command line wins over the file.
    config.testnet |= args.testnet;
    if args.datadir.is_some() {
        config.data_dir = args.datadir.clone();
    }
    if args.log_level.is_some() {
        config.log_level = args.log_level.clone();
    }
    Ok(config)
}

fn log_summary(params: &ChainParams, config: &NodeConfig) {
    info!(
        network = %params.network_id(),
        genesis = %params.hash_genesis_block(),
        merkle_root = %params.genesis_block().header.merkle_root,
        magic = %params.magic(),
        "active chain parameters"
    );
    info!(
        p2p_port = params.default_port(),
        rpc_port = params.rpc_port(),
        dns_seeds = params.dns_seeds().len(),
        fixed_seeds = params.fixed_seeds().len(),
        "network endpoints"
    );
    info!(
        pow_limit = %format!("0x{:08x}", params.proof_of_work_limit().to_compact()),
        last_pow_block = params.last_pow_block(),
        first_pos_block = params.first_pos_block(),
        max_money = params.max_money() / COIN,
        "consensus schedule"
    );
    info!(
        pubkey_prefix = %hex::encode(params.base58_prefix(Base58Type::PubkeyAddress)),
        script_prefix = %hex::encode(params.base58_prefix(Base58Type::ScriptAddress)),
        "address prefixes"
    );
    match config.network_data_dir(params) {
        Ok(dir) => info!(data_dir = %dir.display(), "data directory"),
        Err(e) => error!("Cannot resolve data directory: {}", e),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(args.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL), !args.no_color);
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(
        config.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL),
        !args.no_color,
    );
    info!("Starting {} node", CHAIN_FULL_NAME);

    // Genesis mismatch means a corrupted build; nothing to recover.
    let mut registry = match ParamsRegistry::build_default() {
        Ok(registry) => registry,
        Err(e) => {
            error!("Chain parameter construction failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !registry.select_from_command_line(config.testnet) {
        error!("Network selection failed: --testnet is not accepted at startup");
        return ExitCode::FAILURE;
    }

    let params = registry.active();
    if args.dump_params {
        return match serde_json::to_string_pretty(params) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize parameters: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    log_summary(params, &config);
    ExitCode::SUCCESS
}
