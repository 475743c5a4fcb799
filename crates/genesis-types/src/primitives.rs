//! # Primitive Types
//!
//! Fixed-width byte types and the hex codecs that produce them.

use sha3::{Digest, Keccak256};

use crate::MalformedInput;

// Re-export U256 from primitive-types for balances
pub use primitive_types::U256;

/// Width of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Width of a compressed BLS12-381 public key in bytes.
pub const BLS_PUBLIC_KEY_LEN: usize = 48;

/// A 20-byte Ethereum-style account address.
pub type Address = [u8; ADDRESS_LEN];

/// A 48-byte BLS public key.
pub type BlsPublicKey = [u8; BLS_PUBLIC_KEY_LEN];

/// Strip an optional `0x` / `0X` prefix.
pub fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Decode hex text into exactly `N` bytes.
///
/// Accepts an optional `0x` prefix and either letter case. Fails if the text
/// is not hex or does not decode to exactly `N` bytes; nothing is padded or
/// truncated.
pub fn decode_fixed_hex<const N: usize>(
    field: &'static str,
    input: &str,
) -> Result<[u8; N], MalformedInput> {
    let digits = strip_hex_prefix(input.trim());
    let bytes = hex::decode(digits).map_err(|source| MalformedInput::InvalidHex {
        field,
        value: input.to_string(),
        source,
    })?;

    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| MalformedInput::WrongLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

/// Parse a 20-byte address from hex text.
pub fn parse_address(field: &'static str, input: &str) -> Result<Address, MalformedInput> {
    decode_fixed_hex::<ADDRESS_LEN>(field, input)
}

/// Parse a 48-byte BLS public key from hex text.
pub fn parse_bls_public_key(input: &str) -> Result<BlsPublicKey, MalformedInput> {
    decode_fixed_hex::<BLS_PUBLIC_KEY_LEN>("blsPublicKey", input)
}

/// Parse a voting power written either as `0x`-prefixed hex or as decimal.
pub fn parse_voting_power(input: &str) -> Result<u64, MalformedInput> {
    let trimmed = input.trim();
    let invalid = || MalformedInput::InvalidVotingPower {
        value: input.to_string(),
    };

    let digits = strip_hex_prefix(trimmed);
    if digits.len() != trimmed.len() {
        if digits.is_empty() {
            return Err(invalid());
        }
        u64::from_str_radix(digits, 16).map_err(|_| invalid())
    } else {
        trimmed.parse::<u64>().map_err(|_| invalid())
    }
}

/// Lowercase `0x`-prefixed hex rendering of arbitrary bytes.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// EIP-55 mixed-case checksum rendering of an address.
pub fn to_checksum_address(address: &Address) -> String {
    let lower = hex::encode(address);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(2 + 2 * ADDRESS_LEN);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
