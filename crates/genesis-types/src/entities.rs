//! # Core Genesis Entities
//!
//! ## Validator table
//!
//! A genesis validator table is authored as two parallel sequences: the
//! address/power rows and the BLS public keys. Row `i` pairs with key `i`.
//! [`Validator::pair_with_bls_keys`] joins them and enforces equal length.

use crate::{
    parse_address, parse_bls_public_key, parse_voting_power, Address, BlsPublicKey,
    MalformedInput,
};

/// One row of the validator table before its BLS key is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorRecord {
    /// Address that signs blocks. Also its position in the extra-data field.
    pub consensus_addr: Address,
    /// Address that receives block fees.
    pub fee_addr: Address,
    /// Address that receives cross-chain fees.
    pub bbc_fee_addr: Address,
    /// Consensus vote weight.
    pub voting_power: u64,
}

impl ValidatorRecord {
    /// Parse a row from hex address text and a hex or decimal voting power.
    pub fn from_hex(
        consensus_addr: &str,
        fee_addr: &str,
        bbc_fee_addr: &str,
        voting_power: &str,
    ) -> Result<Self, MalformedInput> {
        Ok(Self {
            consensus_addr: parse_address("consensusAddr", consensus_addr)?,
            fee_addr: parse_address("feeAddr", fee_addr)?,
            bbc_fee_addr: parse_address("bbcFeeAddr", bbc_fee_addr)?,
            voting_power: parse_voting_power(voting_power)?,
        })
    }

    /// Row where one address serves as consensus, fee and cross-chain fee address.
    pub fn single_address(address: Address, voting_power: u64) -> Self {
        Self {
            consensus_addr: address,
            fee_addr: address,
            bbc_fee_addr: address,
            voting_power,
        }
    }

    /// Attach a BLS key to this row.
    pub fn with_bls_key(self, bls_public_key: BlsPublicKey) -> Validator {
        Validator {
            consensus_addr: self.consensus_addr,
            fee_addr: self.fee_addr,
            bbc_fee_addr: self.bbc_fee_addr,
            voting_power: self.voting_power,
            bls_public_key,
        }
    }
}

/// A genesis validator with all five fields of the update package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    pub consensus_addr: Address,
    pub fee_addr: Address,
    pub bbc_fee_addr: Address,
    pub voting_power: u64,
    pub bls_public_key: BlsPublicKey,
}

impl Validator {
    /// Parse all five fields from their text form.
    pub fn from_hex(
        consensus_addr: &str,
        fee_addr: &str,
        bbc_fee_addr: &str,
        voting_power: &str,
        bls_public_key: &str,
    ) -> Result<Self, MalformedInput> {
        let record = ValidatorRecord::from_hex(consensus_addr, fee_addr, bbc_fee_addr, voting_power)?;
        Ok(record.with_bls_key(parse_bls_public_key(bls_public_key)?))
    }

    /// Join the row table with the positional BLS key table.
    ///
    /// Returns `LengthMismatch` when the sequences differ in length; no
    /// partial result is produced.
    pub fn pair_with_bls_keys(
        records: &[ValidatorRecord],
        bls_public_keys: &[BlsPublicKey],
    ) -> Result<Vec<Validator>, MalformedInput> {
        if records.len() != bls_public_keys.len() {
            return Err(MalformedInput::LengthMismatch {
                validators: records.len(),
                keys: bls_public_keys.len(),
            });
        }

        Ok(records
            .iter()
            .zip(bls_public_keys)
            .map(|(record, key)| record.with_bls_key(*key))
            .collect())
    }
}
