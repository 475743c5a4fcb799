//! # Generator Configuration
//!
//! Resolution order: built-in defaults, then `H2_*` environment variables,
//! then CLI flags.
//!
//! ## Environment
//!
//! - `H2_NETWORK` - `mainnet`, `testnet` or `dev`
//! - `H2_CHAIN_ID` - chain id override (dev only)
//! - `H2_VALIDATORS_FILE` - path to a `validators.conf`
//! - `H2_HOLDERS_FILE` - path to a `holders.conf`

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown network {0:?}: expected mainnet, testnet or dev")]
    UnknownNetwork(String),

    #[error("Unknown output format {0:?}: expected text or json")]
    UnknownFormat(String),

    #[error("Invalid chain id {0:?}")]
    InvalidChainId(String),

    /// The system contract stores the chain id as `uint16`.
    #[error("Chain id {0} does not fit in 16 bits")]
    ChainIdOutOfRange(u64),

    #[error("Chain id is fixed to {fixed} on {network}")]
    ChainIdFixed { network: Network, fixed: u64 },
}

/// Target network. Selects the chain id and the preset validator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    Mainnet,
    Testnet,
    #[default]
    Dev,
}

impl Network {
    pub fn default_chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 2582,
            Network::Testnet => 25821,
            Network::Dev => 714,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Dev => "dev",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "dev" | "devnet" => Ok(Network::Dev),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

/// How artefacts are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Where the init-holder table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HolderSource {
    /// The built-in allocation.
    #[default]
    BuiltIn,
    /// A `holders.conf` file of `address,balance` lines.
    File(PathBuf),
    /// Comma-separated addresses sharing one decimal balance.
    Inline { addresses: String, balance: String },
}

/// Complete generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub network: Network,
    /// Chain id override. Only honoured on dev.
    pub chain_id: Option<u64>,
    /// Validator table file. Falls back to the network preset.
    pub validators_file: Option<PathBuf>,
    pub holders: HolderSource,
    pub format: OutputFormat,
}

impl GeneratorConfig {
    /// Effective chain id.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
            .unwrap_or_else(|| self.network.default_chain_id())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = self.chain_id {
            let fixed = self.network.default_chain_id();
            if self.network != Network::Dev && id != fixed {
                return Err(ConfigError::ChainIdFixed {
                    network: self.network,
                    fixed,
                });
            }
        }

        let id = self.chain_id();
        if id > u64::from(u16::MAX) {
            return Err(ConfigError::ChainIdOutOfRange(id));
        }
        Ok(())
    }

    /// Apply `H2_*` overrides from an arbitrary lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(network) = lookup("H2_NETWORK") {
            self.network = network.parse()?;
            info!(network = %self.network, "Loaded network from environment");
        }

        if let Some(chain_id) = lookup("H2_CHAIN_ID") {
            let id = chain_id
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidChainId(chain_id.clone()))?;
            self.chain_id = Some(id);
        }

        if let Some(path) = lookup("H2_VALIDATORS_FILE") {
            self.validators_file = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("H2_HOLDERS_FILE") {
            self.holders = HolderSource::File(PathBuf::from(path));
        }

        Ok(())
    }
}

/// Lowercase hex chain id, zero-padded to at least four digits.
pub fn hex_chain_id(chain_id: u64) -> String {
    format!("{:04x}", chain_id)
}
