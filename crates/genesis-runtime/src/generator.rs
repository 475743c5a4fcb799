//! # Genesis Generator
//!
//! Runs both validator encoders over the same table and pairs the results
//! with the init-holder table. Pure apart from reading the configured files:
//! identical inputs always yield identical artefacts.

use genesis_types::{strip_hex_prefix, Validator};
use gn_01_init_holders::HolderTable;
use gn_02_validator_set::{encode_extra_data, encode_validators};
use tracing::{info, warn};

use crate::loader::{load_holders_file, load_validators_file, parse_holder_list};
use crate::presets::{preset_table, published_validator_set_bytes};
use crate::{GeneratorConfig, HolderSource, Network, RuntimeError};

/// Everything a genesis build consumes from this tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisArtifacts {
    pub network: Network,
    pub chain_id: u64,
    /// Header extra-data field: vanity, signer addresses, seal.
    pub extra_validator_bytes: Vec<u8>,
    /// `0x`-prefixed RLP validator-set package.
    pub validator_set_bytes: String,
    pub init_holders: HolderTable,
}

/// Encode a resolved validator table and holder table.
pub fn generate(
    network: Network,
    chain_id: u64,
    validators: &[Validator],
    init_holders: HolderTable,
) -> GenesisArtifacts {
    if validators.is_empty() {
        warn!("Validator table is empty; genesis will have no signers");
    }

    let extra_validator_bytes = encode_extra_data(validators);
    let validator_set_bytes = encode_validators(validators);

    if let Some(published) = published_validator_set_bytes(network) {
        if strip_hex_prefix(&validator_set_bytes) == published {
            info!(%network, "Validator set matches the deployed package");
        } else {
            warn!(%network, "Validator set differs from the deployed package");
        }
    }

    GenesisArtifacts {
        network,
        chain_id,
        extra_validator_bytes,
        validator_set_bytes,
        init_holders,
    }
}

/// Resolve every input named by `config` and generate the artefacts.
///
/// Fails on the first bad input; nothing is returned partially.
pub fn run(config: &GeneratorConfig) -> Result<GenesisArtifacts, RuntimeError> {
    config.validate()?;

    let validators = match &config.validators_file {
        Some(path) => load_validators_file(path)?,
        None => preset_table(config.network)?,
    };

    let init_holders = match &config.holders {
        HolderSource::BuiltIn => HolderTable::default_holders()?,
        HolderSource::File(path) => load_holders_file(path)?,
        HolderSource::Inline { addresses, balance } => parse_holder_list(addresses, balance)?,
    };

    info!(
        network = %config.network,
        chain_id = config.chain_id(),
        validators = validators.len(),
        holders = init_holders.len(),
        "Generating genesis data"
    );

    Ok(generate(
        config.network,
        config.chain_id(),
        &validators,
        init_holders,
    ))
}
