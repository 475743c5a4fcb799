//! # gn-02-validator-set
//!
//! Genesis validator-set encoders.
//!
//! ## Outputs
//!
//! ```text
//! extra data:     [ 32 × 0x00 vanity ][ consensusAddr × n ][ 65 × 0x00 seal ]
//!
//! update package: RLP([ 0, [ [consensusAddr, bbcFeeAddr, feeAddr,
//!                              votingPower, blsPublicKey], ... ] ])
//! ```
//!
//! Both outputs are derived from the same validator table and are computed
//! independently of each other. Validator order is significant in both: it
//! fixes the initial proposer rotation.

pub mod errors;
pub mod extra_data;
pub mod package;

pub use errors::ValidatorSetError;
pub use extra_data::{encode_extra_data, split_extra_data, EXTRA_SEAL_LEN, EXTRA_VANITY_LEN};
pub use package::{
    decode_validator_set, encode_package, encode_validator_set, encode_validators,
    VALIDATOR_SET_TAG,
};
