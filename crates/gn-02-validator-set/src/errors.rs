use genesis_types::MalformedInput;
use rlp::DecoderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidatorSetError {
    #[error(transparent)]
    Malformed(#[from] MalformedInput),

    #[error("Package is not valid RLP")]
    Rlp(#[from] DecoderError),

    #[error("Package is not valid hex")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Package is followed by {0} trailing bytes")]
    TrailingBytes(usize),

    #[error("Package is not in canonical RLP form")]
    NonCanonical,

    #[error("Unexpected package tag: expected 0, got {0}")]
    UnexpectedTag(u64),

    #[error("Package must be [tag, validators], got {0} elements")]
    InvalidPackageShape(usize),

    #[error("Validator #{index}: expected 5 fields, got {actual}")]
    InvalidEntryShape { index: usize, actual: usize },

    #[error("Validator #{index}: {field} has {actual} bytes, expected {expected}")]
    InvalidFieldWidth {
        index: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Validator #{index}: undecodable field")]
    InvalidField {
        index: usize,
        #[source]
        source: DecoderError,
    },

    #[error("Extra data of {len} bytes is not vanity + 20·n + seal")]
    InvalidExtraDataLength { len: usize },
}
