//! # Validator-Set Update Package
//!
//! The system validator contract is initialised from an RLP package:
//!
//! ```text
//! [ tag = 0, [ [consensusAddr, bbcFeeAddr, feeAddr, votingPower, blsPublicKey], ... ] ]
//! ```
//!
//! Field order inside an entry is fixed by the contract: the cross-chain fee
//! address comes before the fee address.
//!
//! The tag is an RLP integer, so it serializes as the empty string `0x80`.

use genesis_types::{
    strip_hex_prefix, to_prefixed_hex, BlsPublicKey, Validator, ValidatorRecord, ADDRESS_LEN,
    BLS_PUBLIC_KEY_LEN,
};
use rlp::{DecoderError, Rlp, RlpStream};
use tracing::{debug, info};

use crate::ValidatorSetError;

/// Package tag for the genesis validator set.
pub const VALIDATOR_SET_TAG: u64 = 0;

const PACKAGE_FIELDS: usize = 2;
const ENTRY_FIELDS: usize = 5;

/// RLP-encode the package for a validator table.
pub fn encode_package(validators: &[Validator]) -> Vec<u8> {
    let mut stream = RlpStream::new_list(PACKAGE_FIELDS);
    stream.append(&VALIDATOR_SET_TAG);
    stream.begin_list(validators.len());

    for (index, v) in validators.iter().enumerate() {
        debug!(
            index,
            consensus = %hex::encode(v.consensus_addr),
            voting_power = v.voting_power,
            "Packing validator"
        );
        stream.begin_list(ENTRY_FIELDS);
        stream.append(&v.consensus_addr.to_vec());
        stream.append(&v.bbc_fee_addr.to_vec());
        stream.append(&v.fee_addr.to_vec());
        stream.append(&v.voting_power);
        stream.append(&v.bls_public_key.to_vec());
    }

    stream.out().to_vec()
}

/// Encode a validator table as `0x`-prefixed lowercase hex.
pub fn encode_validators(validators: &[Validator]) -> String {
    let encoded = encode_package(validators);
    info!(
        validators = validators.len(),
        bytes = encoded.len(),
        "Encoded validator-set package"
    );
    to_prefixed_hex(&encoded)
}

/// Encode a row table and its positional BLS key table.
///
/// Fails with `LengthMismatch` before anything is encoded if the two
/// sequences differ in length.
pub fn encode_validator_set(
    records: &[ValidatorRecord],
    bls_public_keys: &[BlsPublicKey],
) -> Result<String, ValidatorSetError> {
    let validators = Validator::pair_with_bls_keys(records, bls_public_keys)?;
    Ok(encode_validators(&validators))
}

/// Decode a package produced by [`encode_validators`].
///
/// Accepts the hex text with or without the `0x` prefix. The input must be
/// the canonical encoding of the decoded table.
pub fn decode_validator_set(hex_text: &str) -> Result<Vec<Validator>, ValidatorSetError> {
    let bytes = hex::decode(strip_hex_prefix(hex_text.trim()))?;
    let package = Rlp::new(&bytes);

    let total = package.payload_info()?.total();
    if total > bytes.len() {
        return Err(DecoderError::RlpIsTooShort.into());
    }
    if total < bytes.len() {
        return Err(ValidatorSetError::TrailingBytes(bytes.len() - total));
    }

    let parts = package.item_count()?;
    if parts != PACKAGE_FIELDS {
        return Err(ValidatorSetError::InvalidPackageShape(parts));
    }

    let tag: u64 = package.val_at(0)?;
    if tag != VALIDATOR_SET_TAG {
        return Err(ValidatorSetError::UnexpectedTag(tag));
    }

    let entries = package.at(1)?;
    let validators = (0..entries.item_count()?)
        .map(|index| {
            let entry = entries
                .at(index)
                .map_err(|source| ValidatorSetError::InvalidField { index, source })?;
            decode_entry(index, &entry)
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Item iteration stops at the first undecodable item, so anything
    // skipped shows up as a re-encoding mismatch.
    if encode_package(&validators) != bytes {
        return Err(ValidatorSetError::NonCanonical);
    }
    Ok(validators)
}

fn decode_entry(index: usize, entry: &Rlp<'_>) -> Result<Validator, ValidatorSetError> {
    let fields = entry
        .item_count()
        .map_err(|source| ValidatorSetError::InvalidField { index, source })?;
    if fields != ENTRY_FIELDS {
        return Err(ValidatorSetError::InvalidEntryShape {
            index,
            actual: fields,
        });
    }

    Ok(Validator {
        consensus_addr: fixed_field::<ADDRESS_LEN>(entry, index, 0, "consensusAddr")?,
        bbc_fee_addr: fixed_field::<ADDRESS_LEN>(entry, index, 1, "bbcFeeAddr")?,
        fee_addr: fixed_field::<ADDRESS_LEN>(entry, index, 2, "feeAddr")?,
        voting_power: entry
            .val_at(3)
            .map_err(|source| ValidatorSetError::InvalidField { index, source })?,
        bls_public_key: fixed_field::<BLS_PUBLIC_KEY_LEN>(entry, index, 4, "blsPublicKey")?,
    })
}

fn fixed_field<const N: usize>(
    entry: &Rlp<'_>,
    index: usize,
    position: usize,
    field: &'static str,
) -> Result<[u8; N], ValidatorSetError> {
    let data: Vec<u8> = entry
        .val_at(position)
        .map_err(|source| ValidatorSetError::InvalidField { index, source })?;
    <[u8; N]>::try_from(data.as_slice()).map_err(|_| ValidatorSetError::InvalidFieldWidth {
        index,
        field,
        expected: N,
        actual: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_types::MalformedInput;
    use proptest::prelude::*;

    const ADDR: &str = "0x563322cc646B29348998b48f0A781a72de0E885B";
    const BLS: &str = "0x93c6fb41d8897eb68ad25e966de3cb309cbf1807da6e3032a88707fb80c9e4a98f110f72f6b7bba588c2c38017d8eab7";

    fn entry_stream(stream: &mut RlpStream, address: &[u8], power_raw: &[u8]) {
        stream.begin_list(ENTRY_FIELDS);
        stream.append(&address.to_vec());
        stream.append(&vec![0x01u8; 20]);
        stream.append(&vec![0x01u8; 20]);
        stream.append_raw(power_raw, 1);
        stream.append(&vec![0x22u8; 48]);
    }

    fn single_entry_package(address: &[u8], power_raw: &[u8]) -> String {
        let mut stream = RlpStream::new_list(PACKAGE_FIELDS);
        stream.append(&VALIDATOR_SET_TAG);
        stream.begin_list(1);
        entry_stream(&mut stream, address, power_raw);
        hex::encode(stream.out())
    }

    #[test]
    fn test_integer_canonical_form() {
        assert_eq!(rlp::encode(&0u64).to_vec(), vec![0x80]);
        assert_eq!(rlp::encode(&100u64).to_vec(), vec![0x64]);
        assert_eq!(rlp::encode(&0x80u64).to_vec(), vec![0x81, 0x80]);
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(encode_validators(&[]), "0xc280c0");
        assert!(decode_validator_set("0xc280c0").unwrap().is_empty());
    }

    #[test]
    fn test_single_validator_bytes() {
        let v = Validator::from_hex(ADDR, ADDR, ADDR, "0x0000000000000064", BLS).unwrap();
        let expected = concat!(
            "0xf87680f873f871",
            "94563322cc646b29348998b48f0a781a72de0e885b",
            "94563322cc646b29348998b48f0a781a72de0e885b",
            "94563322cc646b29348998b48f0a781a72de0e885b",
            "64",
            "b093c6fb41d8897eb68ad25e966de3cb309cbf1807da6e3032a88707fb80c9e4a98f110f72f6b7bba588c2c38017d8eab7",
        );
        assert_eq!(encode_validators(&[v]), expected);
    }

    #[test]
    fn test_fee_address_order() {
        let v = Validator {
            consensus_addr: [0x01; 20],
            fee_addr: [0x02; 20],
            bbc_fee_addr: [0x03; 20],
            voting_power: 0,
            bls_public_key: [0x04; 48],
        };
        let encoded = encode_package(&[v]);
        let package = Rlp::new(&encoded);
        let entry = package.at(1).unwrap().at(0).unwrap();

        assert_eq!(entry.val_at::<Vec<u8>>(0).unwrap(), vec![0x01; 20]);
        assert_eq!(entry.val_at::<Vec<u8>>(1).unwrap(), vec![0x03; 20]);
        assert_eq!(entry.val_at::<Vec<u8>>(2).unwrap(), vec![0x02; 20]);
        // Zero power is the empty string.
        assert!(entry.at(3).unwrap().is_empty());

        let decoded = decode_validator_set(&to_prefixed_hex(&encoded)).unwrap();
        assert_eq!(decoded, vec![v]);
    }

    #[test]
    fn test_encode_validator_set_rejects_mismatch() {
        let records = [ValidatorRecord::single_address([0x01; 20], 100)];
        let err = encode_validator_set(&records, &[[0u8; 48], [1u8; 48]]).unwrap_err();
        assert_eq!(
            err,
            ValidatorSetError::Malformed(MalformedInput::LengthMismatch { validators: 1, keys: 2 })
        );
    }

    #[test]
    fn test_decode_rejects_wrong_tag() {
        let mut stream = RlpStream::new_list(PACKAGE_FIELDS);
        stream.append(&1u64);
        stream.begin_list(0);
        let err = decode_validator_set(&hex::encode(stream.out())).unwrap_err();
        assert_eq!(err, ValidatorSetError::UnexpectedTag(1));
    }

    #[test]
    fn test_decode_rejects_zero_byte_tag() {
        // Tag written as the literal byte 0x00 instead of the empty string.
        assert!(matches!(
            decode_validator_set("0xc200c0"),
            Err(ValidatorSetError::Rlp(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_shapes() {
        let mut stream = RlpStream::new_list(1);
        stream.append(&VALIDATOR_SET_TAG);
        assert_eq!(
            decode_validator_set(&hex::encode(stream.out())).unwrap_err(),
            ValidatorSetError::InvalidPackageShape(1)
        );

        let mut stream = RlpStream::new_list(PACKAGE_FIELDS);
        stream.append(&VALIDATOR_SET_TAG);
        stream.begin_list(1);
        stream.begin_list(1);
        stream.append(&1u64);
        assert_eq!(
            decode_validator_set(&hex::encode(stream.out())).unwrap_err(),
            ValidatorSetError::InvalidEntryShape { index: 0, actual: 1 }
        );
    }

    #[test]
    fn test_decode_rejects_short_address() {
        let package = single_entry_package(&[0x01; 19], &[0x64]);
        assert_eq!(
            decode_validator_set(&package).unwrap_err(),
            ValidatorSetError::InvalidFieldWidth {
                index: 0,
                field: "consensusAddr",
                expected: 20,
                actual: 19
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_canonical_power() {
        let canonical = single_entry_package(&[0x11; 20], &[0x64]);
        assert_eq!(decode_validator_set(&canonical).unwrap()[0].voting_power, 100);

        // 100 wrapped in a one-byte string header.
        let wrapped = single_entry_package(&[0x11; 20], &[0x81, 0x64]);
        assert!(decode_validator_set(&wrapped).is_err());
    }

    #[test]
    fn test_decode_rejects_trailing_and_truncated_input() {
        assert_eq!(
            decode_validator_set("0xc280c080").unwrap_err(),
            ValidatorSetError::TrailingBytes(1)
        );
        assert!(matches!(
            decode_validator_set("0xc280"),
            Err(ValidatorSetError::Rlp(_))
        ));
        assert!(decode_validator_set("0xc380c181").is_err());
        assert!(decode_validator_set("0x").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        assert!(matches!(
            decode_validator_set("0xzz"),
            Err(ValidatorSetError::InvalidHex(_))
        ));
    }

    fn arb_validator() -> impl Strategy<Value = Validator> {
        (
            any::<[u8; 20]>(),
            any::<[u8; 20]>(),
            any::<[u8; 20]>(),
            any::<u64>(),
            prop::collection::vec(any::<u8>(), 48),
        )
            .prop_map(|(consensus_addr, fee_addr, bbc_fee_addr, voting_power, bls)| {
                let mut bls_public_key = [0u8; 48];
                bls_public_key.copy_from_slice(&bls);
                Validator {
                    consensus_addr,
                    fee_addr,
                    bbc_fee_addr,
                    voting_power,
                    bls_public_key,
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_package_roundtrip(validators in prop::collection::vec(arb_validator(), 0..=255)) {
            let encoded = encode_validators(&validators);
            prop_assert!(encoded.starts_with("0x"));
            let decoded = decode_validator_set(&encoded).unwrap();
            prop_assert_eq!(decoded, validators);
        }
    }
}
