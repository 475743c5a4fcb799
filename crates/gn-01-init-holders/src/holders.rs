//! # Init Holder Table
//!
//! ## Type Decisions
//!
//! - `balance: U256` - the largest default allocation is 2.5 * 10^26 wei,
//!   past `u64` and close enough to `u128` limits that total-supply style
//!   values would not fit. U256 matches the on-chain balance width.

use genesis_types::{parse_address, to_prefixed_hex, Address, MalformedInput, U256};
use serde::Serialize;
use tracing::debug;

use crate::HolderError;

/// Built-in initial holders: `(address, balance in wei as decimal)`.
pub const DEFAULT_INIT_HOLDERS: &[(&str, &str)] = &[
    ("0x2ad76bd308a856837539cbc0ac74b6cde4d7726d", "250000000000000000000000000"),
    ("0x4658dd438d65fb3db31c27196885904a3343ddb8", "250000000000000000000000000"),
    ("0x33fd7918417d0d3b5ef187b892d5166f753323b3", "250000000000000000000000000"),
    ("0x32d20149708859df46e6ac4502a009b66f1591cd", "50000000000000000000000000"),
    ("0xf20471a09f17ad9666611584c6fecbf0e6879002", "200000000000000000000000000"),
];

/// Convert a decimal balance to minimal lowercase hex without a prefix.
pub fn normalize_balance(decimal: &str) -> Result<String, MalformedInput> {
    Ok(format!("{:x}", parse_balance(decimal)?))
}

fn parse_balance(decimal: &str) -> Result<U256, MalformedInput> {
    let digits = decimal.trim();
    if digits.is_empty() {
        return Err(MalformedInput::InvalidBalance {
            value: decimal.to_string(),
            reason: "empty".to_string(),
        });
    }

    U256::from_dec_str(digits).map_err(|e| MalformedInput::InvalidBalance {
        value: decimal.to_string(),
        reason: format!("{:?}", e),
    })
}

/// A genesis account with a preset balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitHolder {
    pub address: Address,
    /// Balance in wei.
    pub balance: U256,
}

/// Text form of an [`InitHolder`] as written into the genesis allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolderEntry {
    /// Lowercase `0x`-prefixed address.
    pub address: String,
    /// Unprefixed minimal hex balance.
    pub balance: String,
}

impl InitHolder {
    pub fn from_decimal(address: &str, balance: &str) -> Result<Self, MalformedInput> {
        Ok(Self {
            address: parse_address("address", address)?,
            balance: parse_balance(balance)?,
        })
    }

    pub fn balance_hex(&self) -> String {
        format!("{:x}", self.balance)
    }

    pub fn entry(&self) -> HolderEntry {
        HolderEntry {
            address: to_prefixed_hex(&self.address),
            balance: self.balance_hex(),
        }
    }
}

/// Ordered list of initial holders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolderTable {
    holders: Vec<InitHolder>,
}

impl HolderTable {
    pub fn from_holders(holders: Vec<InitHolder>) -> Self {
        Self { holders }
    }

    /// Parse `(address, decimal balance)` pairs. Fails on the first bad entry.
    pub fn from_entries<A, B>(entries: &[(A, B)]) -> Result<Self, HolderError>
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let holders = entries
            .iter()
            .enumerate()
            .map(|(index, (address, balance))| {
                InitHolder::from_decimal(address.as_ref(), balance.as_ref())
                    .map_err(|source| HolderError::InvalidEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = holders.len(), "Parsed init holder table");
        Ok(Self { holders })
    }

    /// The built-in holder allocation.
    pub fn default_holders() -> Result<Self, HolderError> {
        Self::from_entries(DEFAULT_INIT_HOLDERS)
    }

    /// Give every address in `addresses` the same decimal balance.
    pub fn uniform<A: AsRef<str>>(addresses: &[A], balance: &str) -> Result<Self, HolderError> {
        let entries: Vec<(&str, &str)> = addresses.iter().map(|a| (a.as_ref(), balance)).collect();
        Self::from_entries(&entries)
    }

    /// `(address, hex balance)` pairs in table order.
    pub fn entries(&self) -> Vec<HolderEntry> {
        self.holders.iter().map(InitHolder::entry).collect()
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}
