//! Seed Node Configuration
//!
//! Hardcoded bootstrap nodes for initial peer discovery.
//! New nodes connect to these first to discover the rest of the network.

use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// One week in seconds
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// Raw seed record: IPv6 (or IPv4-mapped) address bytes and port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn new(addr: [u8; 16], port: u16) -> Self {
        Self { addr, port }
    }

    /// Endpoint for this record. IPv4-mapped addresses come back as IPv4.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = Ipv6Addr::from(self.addr);
        let ip = match ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Bootstrap peer with a synthetic last-seen time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedSeedAddress {
    pub addr: SocketAddr,
    /// Unix timestamp the peer was supposedly last seen at
    pub last_seen: u64,
}

/// Mainnet fixed seeds. None are compiled in; peers come from DNS seeds.
pub const MAINNET_SEEDS: &[SeedSpec6] = &[];

/// Testnet fixed seeds (for development/testing)
pub const TESTNET_SEEDS: &[SeedSpec6] = &[
    // ::ffff:127.0.0.1, local development node
    SeedSpec6::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 127, 0, 0, 1], 20199),
];

/// Convert seed records into fixed seed addresses.
///
/// Seed nodes get a random last-seen time between one and two weeks ago, so
/// that the fresher addresses gossiped after the first connection win.
pub fn convert_seed6<R: Rng + ?Sized>(
    specs: &[SeedSpec6],
    now: u64,
    rng: &mut R,
) -> Vec<FixedSeedAddress> {
    specs
        .iter()
        .map(|spec| {
            let age = rng.gen_range(ONE_WEEK..2 * ONE_WEEK);
            FixedSeedAddress {
                addr: spec.socket_addr(),
                last_seen: now.saturating_sub(age),
            }
        })
        .collect()
}
