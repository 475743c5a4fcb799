//! # Command Line
//!
//! `h2-genesis` arguments and how they layer over the environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{ConfigError, GeneratorConfig, HolderSource, Network, OutputFormat};

/// H2 genesis data generator
#[derive(Parser, Debug)]
#[command(name = "h2-genesis")]
#[command(about = "Generate genesis validator-set bytes and init holders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode the validator table and init holders for a network
    Generate(GenerateArgs),

    /// Decode an init_validator_set_bytes payload and list its validators
    Verify {
        /// Hex payload, with or without 0x
        payload: String,
    },

    /// Print the zero-padded hex form of a chain id
    ChainId {
        chain_id: u64,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Target network: mainnet, testnet or dev
    #[arg(short, long)]
    pub network: Option<Network>,

    /// Chain id override (dev only)
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// validators.conf with one consensusAddr,feeAddr,bbcFeeAddr,votingPower,blsPublicKey per line
    #[arg(long, value_name = "FILE")]
    pub validators: Option<PathBuf>,

    /// holders.conf with one address,balance per line
    #[arg(long, value_name = "FILE", conflicts_with = "init_holders")]
    pub holders: Option<PathBuf>,

    /// Comma-separated init holder addresses
    #[arg(long, value_name = "ADDRESSES", requires = "holder_balance")]
    pub init_holders: Option<String>,

    /// Balance in wei given to every --init-holders address
    #[arg(long, value_name = "WEI", requires = "init_holders")]
    pub holder_balance: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl GenerateArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply_to(self, config: &mut GeneratorConfig) {
        if let Some(network) = self.network {
            config.network = network;
        }
        if let Some(chain_id) = self.chain_id {
            config.chain_id = Some(chain_id);
        }
        if let Some(path) = self.validators {
            config.validators_file = Some(path);
        }
        if let Some(path) = self.holders {
            config.holders = HolderSource::File(path);
        }
        if let (Some(addresses), Some(balance)) = (self.init_holders, self.holder_balance) {
            config.holders = HolderSource::Inline { addresses, balance };
        }
        config.format = self.format;
    }
}

/// Defaults, then `H2_*` variables from `lookup`, then CLI flags.
pub fn resolve_config<F>(args: GenerateArgs, lookup: F) -> Result<GeneratorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GeneratorConfig::default();
    config.apply_overrides_from(lookup)?;
    args.apply_to(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::collections::HashMap;

    const HOLDER: &str = "0x2ad76bd308a856837539cbc0ac74b6cde4d7726d";

    fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("h2-genesis").chain(argv.iter().copied()))
    }

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["generate"];
        full.extend_from_slice(argv);
        match parse(&full).unwrap().command {
            Command::Generate(args) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    fn env(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key: &str| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_holder_balance_requires_init_holders() {
        let err = parse(&["generate", "--holder-balance", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["generate", "--init-holders", HOLDER]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_holders_file_conflicts_with_inline_list() {
        let err = parse(&[
            "generate",
            "--holders",
            "holders.conf",
            "--init-holders",
            HOLDER,
            "--holder-balance",
            "5",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_inline_holders_from_flags() {
        let args = generate_args(&["--init-holders", HOLDER, "--holder-balance", "5"]);
        let config = resolve_config(args, env(&[])).unwrap();
        assert_eq!(
            config.holders,
            HolderSource::Inline {
                addresses: HOLDER.to_string(),
                balance: "5".to_string()
            }
        );
    }

    #[test]
    fn test_flags_take_precedence_over_env() {
        let lookup = env(&[
            ("H2_NETWORK", "testnet"),
            ("H2_HOLDERS_FILE", "/etc/h2/holders.conf"),
            ("H2_VALIDATORS_FILE", "/etc/h2/validators.conf"),
        ]);
        let args = generate_args(&[
            "--network",
            "dev",
            "--chain-id",
            "1337",
            "--init-holders",
            HOLDER,
            "--holder-balance",
            "5",
            "--format",
            "json",
        ]);

        let config = resolve_config(args, lookup).unwrap();
        assert_eq!(config.network, Network::Dev);
        assert_eq!(config.chain_id(), 1337);
        assert!(matches!(config.holders, HolderSource::Inline { .. }));
        assert_eq!(
            config.validators_file,
            Some(PathBuf::from("/etc/h2/validators.conf"))
        );
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_applies_without_flags() {
        let config = resolve_config(generate_args(&[]), env(&[("H2_NETWORK", "mainnet")])).unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.holders, HolderSource::BuiltIn);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_bad_env_value_is_rejected() {
        let err = resolve_config(generate_args(&[]), env(&[("H2_NETWORK", "moonnet")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownNetwork("moonnet".to_string()));
    }
}
