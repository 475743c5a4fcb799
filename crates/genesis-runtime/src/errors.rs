use genesis_types::MalformedInput;
use gn_01_init_holders::HolderError;
use gn_02_validator_set::ValidatorSetError;
use thiserror::Error;

use crate::{ConfigError, LoadError};

/// Any failure that aborts a generator run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Holders(#[from] HolderError),

    #[error(transparent)]
    ValidatorSet(#[from] ValidatorSetError),

    #[error("Malformed preset table")]
    Malformed(#[from] MalformedInput),
}
