//! Node configuration
//!
//! Optional JSON file merged under command-line overrides by the binary.
//! Only the inputs the parameter layer needs live here.

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::chainparams::ChainParams;

/// Directory under the home directory holding all node data
pub const DATA_DIR_NAME: &str = ".footycash";

/// Default config file name inside the base data directory
pub const CONFIG_FILE_NAME: &str = "footycash.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No home directory to derive the data directory from")]
    NoHomeDir,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    /// Test network requested
    pub testnet: bool,
    /// Base data directory; defaults to `~/.footycash`
    pub data_dir: Option<PathBuf>,
    /// `tracing` filter directive, e.g. "info" or "footy_core=debug"
    pub log_level: Option<String>,
}

impl NodeConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a config file. A missing file is an error; callers decide
    /// whether a config file is optional.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Base data directory, before the per-network subdirectory
    pub fn base_data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => home_dir()
                .map(|home| home.join(DATA_DIR_NAME))
                .ok_or(ConfigError::NoHomeDir),
        }
    }

    /// Data directory for `params`: the base directory itself for main,
    /// a named subdirectory otherwise.
    pub fn network_data_dir(&self, params: &ChainParams) -> Result<PathBuf, ConfigError> {
        let base = self.base_data_dir()?;
        Ok(match params.data_dir() {
            "" => base,
            sub => base.join(sub),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::{Network, ParamsRegistry};
    use crate::crypto::ScryptHasher;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(NodeConfig::from_json("{}").unwrap(), NodeConfig::default());
    }

    #[test]
    fn test_parse_fields() {
        let config =
            NodeConfig::from_json(r#"{"testnet": true, "data_dir": "/srv/ftc", "log_level": "debug"}"#)
                .unwrap();
        assert!(config.testnet);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/ftc")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = NodeConfig::from_json(r#"{"regtest": true}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/nonexistent/footycash.json");
        match NodeConfig::load(path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_network_data_dir() {
        let hasher = ScryptHasher::new().unwrap();
        let registry =
            ParamsRegistry::build(&hasher, &mut StdRng::seed_from_u64(5), 1_700_000_000).unwrap();
        let config = NodeConfig {
            data_dir: Some(PathBuf::from("/srv/ftc")),
            ..Default::default()
        };

        let main = registry.get(Network::Main).unwrap();
        let test = registry.get(Network::Test).unwrap();
        assert_eq!(config.network_data_dir(main).unwrap(), PathBuf::from("/srv/ftc"));
        assert_eq!(
            config.network_data_dir(test).unwrap(),
            PathBuf::from("/srv/ftc/testnet")
        );
    }
}
