//! # Genesis Extra Data
//!
//! The genesis header's extra-data field carries the initial signer list
//! between a zeroed vanity prefix and a zeroed seal. The seal is filled by
//! block signing, never by this generator.

use genesis_types::{Address, Validator, ADDRESS_LEN};
use tracing::debug;

use crate::ValidatorSetError;

/// Zeroed vanity prefix length.
pub const EXTRA_VANITY_LEN: usize = 32;

/// Zeroed seal placeholder length (secp256k1 signature size).
pub const EXTRA_SEAL_LEN: usize = 65;

/// Build the extra-data field: vanity, consensus addresses in table order, seal.
///
/// The output is always `32 + 20 * validators.len() + 65` bytes.
pub fn encode_extra_data(validators: &[Validator]) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(EXTRA_VANITY_LEN + ADDRESS_LEN * validators.len() + EXTRA_SEAL_LEN);

    out.resize(EXTRA_VANITY_LEN, 0);
    for validator in validators {
        out.extend_from_slice(&validator.consensus_addr);
    }
    out.resize(out.len() + EXTRA_SEAL_LEN, 0);

    debug!(
        validators = validators.len(),
        bytes = out.len(),
        "Encoded genesis extra data"
    );
    out
}

/// Recover the consensus addresses from an extra-data field.
pub fn split_extra_data(extra: &[u8]) -> Result<Vec<Address>, ValidatorSetError> {
    let len = extra.len();
    let fixed = EXTRA_VANITY_LEN + EXTRA_SEAL_LEN;
    if len < fixed || (len - fixed) % ADDRESS_LEN != 0 {
        return Err(ValidatorSetError::InvalidExtraDataLength { len });
    }

    let signers = &extra[EXTRA_VANITY_LEN..len - EXTRA_SEAL_LEN];
    Ok(signers
        .chunks_exact(ADDRESS_LEN)
        .map(|chunk| {
            let mut address = [0u8; ADDRESS_LEN];
            address.copy_from_slice(chunk);
            address
        })
        .collect())
}
