//! Active network selection
//!
//! The registry owns every constructed parameter set and knows which one is
//! active. It is an ordinary value owned by the node: selection needs
//! `&mut self`, so it cannot interleave with outstanding `active()` borrows.
//! Wrap it in a lock if it has to be rebound after workers are running.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

use super::{mainnet, testnet, ChainParams, Network, ParamsError};
use crate::crypto::{BlockHasher, ScryptHasher};

/// Constructed parameter sets plus the active selection (Main by default)
#[derive(Debug, Clone)]
pub struct ParamsRegistry {
    main: ChainParams,
    test: ChainParams,
    active: Network,
}

impl ParamsRegistry {
    /// Wrap already-built parameter sets; Main starts active.
    pub fn new(main: ChainParams, test: ChainParams) -> Self {
        Self {
            main,
            test,
            active: Network::Main,
        }
    }

    /// Build and verify every network.
    pub fn build<R: Rng + ?Sized>(
        hasher: &impl BlockHasher,
        rng: &mut R,
        now: u64,
    ) -> Result<Self, ParamsError> {
        let main = mainnet().build(hasher, rng, now)?;
        let test = testnet().build(hasher, rng, now)?;
        Ok(Self::new(main, test))
    }

    /// Build with the scrypt hasher, the thread RNG and the system clock.
    pub fn build_default() -> Result<Self, ParamsError> {
        let hasher = ScryptHasher::new()?;
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::build(&hasher, &mut rand::thread_rng(), now)
    }

    /// Parameter set of `network`, if one is defined
    pub fn get(&self, network: Network) -> Option<&ChainParams> {
        match network {
            Network::Main => Some(&self.main),
            Network::Test => Some(&self.test),
            Network::Regtest => None,
        }
    }

    /// The currently selected parameters
    pub fn active(&self) -> &ChainParams {
        match self.active {
            Network::Test => &self.test,
            // select() never stores a network without a parameter set
            Network::Main | Network::Regtest => &self.main,
        }
    }

    pub fn active_network(&self) -> Network {
        self.active
    }

    /// Make `network` the active parameter set.
    ///
    /// Fails, leaving the selection unchanged, for networks without one.
    pub fn select(&mut self, network: Network) -> Result<&ChainParams, ParamsError> {
        if self.get(network).is_none() {
            return Err(ParamsError::UnimplementedNetwork(network));
        }
        self.active = network;
        info!(%network, "selected chain parameters");
        Ok(self.active())
    }

    /// Startup selection from the "test network requested" flag.
    ///
    /// A testnet request is reported as a failed resolution and leaves the
    /// selection untouched, so this always resolves to the main network.
    pub fn select_from_command_line(&mut self, testnet_requested: bool) -> bool {
        if testnet_requested {
            warn!("test network requested; command-line selection only resolves to main");
            return false;
        }

        // Main always has a parameter set.
        self.select(Network::Main).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> ParamsRegistry {
        let hasher = ScryptHasher::new().unwrap();
        ParamsRegistry::build(&hasher, &mut StdRng::seed_from_u64(11), 1_700_000_000).unwrap()
    }

    #[test]
    fn test_defaults_to_main() {
        let registry = registry();
        assert_eq!(registry.active_network(), Network::Main);
        assert_eq!(registry.active().network_id(), Network::Main);
    }

    #[test]
    fn test_select_test_and_back() {
        let mut registry = registry();
        assert_eq!(registry.select(Network::Test).unwrap().network_id(), Network::Test);
        assert_eq!(registry.active().network_id(), Network::Test);
        assert!(registry.active().is_testnet());

        registry.select(Network::Main).unwrap();
        assert_eq!(registry.active().network_id(), Network::Main);
    }

    #[test]
    fn test_select_regtest_fails_and_keeps_selection() {
        let mut registry = registry();
        registry.select(Network::Test).unwrap();

        let err = registry.select(Network::Regtest).unwrap_err();
        assert!(matches!(err, ParamsError::UnimplementedNetwork(Network::Regtest)));
        assert_eq!(registry.active_network(), Network::Test);
        assert!(registry.get(Network::Regtest).is_none());
    }

    #[test]
    fn test_command_line_without_testnet_selects_main() {
        let mut registry = registry();
        registry.select(Network::Test).unwrap();
        assert!(registry.select_from_command_line(false));
        assert_eq!(registry.active_network(), Network::Main);
    }

    #[test]
    fn test_command_line_testnet_request_is_rejected() {
        let mut registry = registry();
        assert!(!registry.select_from_command_line(true));
        assert_eq!(registry.active_network(), Network::Main);
    }
}
