//! # Error Types
//!
//! The single input-error class shared across the generator crates.

use thiserror::Error;

/// An address, key, or scalar from an input table could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInput {
    /// The field is not valid hexadecimal.
    #[error("{field}: invalid hex {value:?}")]
    InvalidHex {
        field: &'static str,
        value: String,
        #[source]
        source: hex::FromHexError,
    },

    /// The field decoded to the wrong number of bytes.
    #[error("{field}: expected {expected} bytes, got {actual}")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Parallel sequences (validators and BLS keys) differ in length.
    #[error("validator count {validators} does not match BLS key count {keys}")]
    LengthMismatch { validators: usize, keys: usize },

    /// Voting power is not a valid unsigned 64-bit integer.
    #[error("invalid voting power {value:?}")]
    InvalidVotingPower { value: String },

    /// Balance is not a valid unsigned decimal integer.
    #[error("invalid balance {value:?}: {reason}")]
    InvalidBalance { value: String, reason: String },
}
