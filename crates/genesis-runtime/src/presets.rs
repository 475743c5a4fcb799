//! # Network Presets
//!
//! Built-in validator tables. Every preset validator uses one address for
//! consensus, fee and cross-chain fee, and a voting power of `0x64`.
//!
//! The mainnet and testnet packages below are the values baked into the
//! deployed `ValidatorSet` contracts. Encoding the matching preset table must
//! reproduce them exactly.

use genesis_types::{
    parse_address, parse_bls_public_key, MalformedInput, Validator, ValidatorRecord,
};

use crate::Network;

/// Voting power of every preset validator.
pub const PRESET_VOTING_POWER: u64 = 0x64;

/// A preset table row in text form.
#[derive(Debug, Clone, Copy)]
pub struct PresetValidator {
    pub address: &'static str,
    pub bls_public_key: &'static str,
}

pub const MAINNET_VALIDATORS: &[PresetValidator] = &[
    PresetValidator {
        address: "0x563322cc646B29348998b48f0A781a72de0E885B",
        bls_public_key: "0x93c6fb41d8897eb68ad25e966de3cb309cbf1807da6e3032a88707fb80c9e4a98f110f72f6b7bba588c2c38017d8eab7",
    },
    PresetValidator {
        address: "0x4dDf403FAb2C9953e87b713AF8650b47a506E4e3",
        bls_public_key: "0xa6450af15c45c559954660cf3d01d8cf6ed93c8f4a2ae147363274ceb21252bfc3544841ac5e63fd62508e544e3bd63a",
    },
    PresetValidator {
        address: "0xE1094a64b9E6A35CF504D97782084Dd0208E49A8",
        bls_public_key: "0x90dc7f1c9792e2d2ab1461ee15c612d70b79819c24b3eaf74bee343e61766e02bfc912257e593955651d35ec14de3612",
    },
    PresetValidator {
        address: "0xEf5e9dE1e55cCe5c86A19D71A9EEbEc286394b33",
        bls_public_key: "0x9722fc855ae18ea61969c26f0fccd93296cc47d07e7e9d0ce445c6ee6a1d14eb2e7fef75dcd41bf4b0bca8ac95738ada",
    },
    PresetValidator {
        address: "0xE11fe867Fff43D89465b8d2e0DB05DEE5504d7ce",
        bls_public_key: "0x93bc9190bf418f4f20db8c31f3111010138fcbdd6e3e98d5e360e4237d3eca4fef1aa39552557d8e812c86e6c4979933",
    },
    PresetValidator {
        address: "0x4ED4C4aA45a69C5BE22c2CA646Db0887b266B862",
        bls_public_key: "0x937bb0f0b8f504c3397b774f9d5e7127f4b9c15fda859410e873d55c4bdbd014566e082d9a1c8a1c38f36a634fbdd25b",
    },
    PresetValidator {
        address: "0x4615415aac8609577C4A2aDd55af25FECF5F862f",
        bls_public_key: "0x81fbeb9dbca53bdc16da942059eb5327aac6c2929ae3b0348d5c55b786e2e44d32bc68483ddc3a4bb8dc598c41bdc396",
    },
    PresetValidator {
        address: "0x2E7AC7Fb5c3Ccb279b5C1168a117b4D0f3Fb2cD2",
        bls_public_key: "0x90fbc2dc507a55c5dec905aa093b22b2956eb12e8cd861b2150b1077822ff4b0892cd363c5e68994fc37eacba4106609",
    },
    PresetValidator {
        address: "0x632Aab1eD1054D2A43d4077662ABee5557e46457",
        bls_public_key: "0xb892aff71e0f9537e70adb94a80876c4b7f4859bac606f76fff6f08f30f0363ee2bc3e4a65f9b993b27c655657f69f49",
    },
];

pub const TESTNET_VALIDATORS: &[PresetValidator] = &[
    PresetValidator {
        address: "0x035ba39085b3a149b1b186252e639f2fdeb6aa8c",
        bls_public_key: "0x8ec997c9c836f53a48c21c433c9ddfea2be2f6ea15a1d058b634d42341f54197a7489d939d635ae4234fdc0f1bd7cce5",
    },
    PresetValidator {
        address: "0xa29c7351b54aae166e4f651ef22eff1b47d49a2d",
        bls_public_key: "0x8483e5b831c8b6a0a14c4db8c9b1fd81b8f2c5f28c2d2e0b2647b2399032834bea67ed48c1efc3b7ce98e66458332bc2",
    },
    PresetValidator {
        address: "0x0931f2a9a600eb04d216f15da75ece6769717b89",
        bls_public_key: "0x95a1471f5671cc92ed80f8246d056f1cb379b57fb7122e572715140ef15223c1a5db3a7822f12286fe0c4112592ae677",
    },
];

/// Published mainnet `INIT_VALIDATORSET_BYTES`, without prefix.
pub const MAINNET_INIT_VALIDATOR_SET_BYTES: &str = concat!(
    "f9040f80f9040bf87194563322cc646b29348998b48f0a781a72de0e885b94563322cc646b293489",
    "98b48f0a781a72de0e885b94563322cc646b29348998b48f0a781a72de0e885b64b093c6fb41d889",
    "7eb68ad25e966de3cb309cbf1807da6e3032a88707fb80c9e4a98f110f72f6b7bba588c2c38017d8",
    "eab7f871944ddf403fab2c9953e87b713af8650b47a506e4e3944ddf403fab2c9953e87b713af865",
    "0b47a506e4e3944ddf403fab2c9953e87b713af8650b47a506e4e364b0a6450af15c45c559954660",
    "cf3d01d8cf6ed93c8f4a2ae147363274ceb21252bfc3544841ac5e63fd62508e544e3bd63af87194",
    "e1094a64b9e6a35cf504d97782084dd0208e49a894e1094a64b9e6a35cf504d97782084dd0208e49",
    "a894e1094a64b9e6a35cf504d97782084dd0208e49a864b090dc7f1c9792e2d2ab1461ee15c612d7",
    "0b79819c24b3eaf74bee343e61766e02bfc912257e593955651d35ec14de3612f87194ef5e9de1e5",
    "5cce5c86a19d71a9eebec286394b3394ef5e9de1e55cce5c86a19d71a9eebec286394b3394ef5e9d",
    "e1e55cce5c86a19d71a9eebec286394b3364b09722fc855ae18ea61969c26f0fccd93296cc47d07e",
    "7e9d0ce445c6ee6a1d14eb2e7fef75dcd41bf4b0bca8ac95738adaf87194e11fe867fff43d89465b",
    "8d2e0db05dee5504d7ce94e11fe867fff43d89465b8d2e0db05dee5504d7ce94e11fe867fff43d89",
    "465b8d2e0db05dee5504d7ce64b093bc9190bf418f4f20db8c31f3111010138fcbdd6e3e98d5e360",
    "e4237d3eca4fef1aa39552557d8e812c86e6c4979933f871944ed4c4aa45a69c5be22c2ca646db08",
    "87b266b862944ed4c4aa45a69c5be22c2ca646db0887b266b862944ed4c4aa45a69c5be22c2ca646",
    "db0887b266b86264b0937bb0f0b8f504c3397b774f9d5e7127f4b9c15fda859410e873d55c4bdbd0",
    "14566e082d9a1c8a1c38f36a634fbdd25bf871944615415aac8609577c4a2add55af25fecf5f862f",
    "944615415aac8609577c4a2add55af25fecf5f862f944615415aac8609577c4a2add55af25fecf5f",
    "862f64b081fbeb9dbca53bdc16da942059eb5327aac6c2929ae3b0348d5c55b786e2e44d32bc6848",
    "3ddc3a4bb8dc598c41bdc396f871942e7ac7fb5c3ccb279b5c1168a117b4d0f3fb2cd2942e7ac7fb",
    "5c3ccb279b5c1168a117b4d0f3fb2cd2942e7ac7fb5c3ccb279b5c1168a117b4d0f3fb2cd264b090",
    "fbc2dc507a55c5dec905aa093b22b2956eb12e8cd861b2150b1077822ff4b0892cd363c5e68994fc",
    "37eacba4106609f87194632aab1ed1054d2a43d4077662abee5557e4645794632aab1ed1054d2a43",
    "d4077662abee5557e4645794632aab1ed1054d2a43d4077662abee5557e4645764b0b892aff71e0f",
    "9537e70adb94a80876c4b7f4859bac606f76fff6f08f30f0363ee2bc3e4a65f9b993b27c655657f6",
    "9f49",
);

/// Published testnet `INIT_VALIDATORSET_BYTES`, without prefix.
pub const TESTNET_INIT_VALIDATOR_SET_BYTES: &str = concat!(
    "f9015d80f90159f87194035ba39085b3a149b1b186252e639f2fdeb6aa8c94035ba39085b3a149b1",
    "b186252e639f2fdeb6aa8c94035ba39085b3a149b1b186252e639f2fdeb6aa8c64b08ec997c9c836",
    "f53a48c21c433c9ddfea2be2f6ea15a1d058b634d42341f54197a7489d939d635ae4234fdc0f1bd7",
    "cce5f87194a29c7351b54aae166e4f651ef22eff1b47d49a2d94a29c7351b54aae166e4f651ef22e",
    "ff1b47d49a2d94a29c7351b54aae166e4f651ef22eff1b47d49a2d64b08483e5b831c8b6a0a14c4d",
    "b8c9b1fd81b8f2c5f28c2d2e0b2647b2399032834bea67ed48c1efc3b7ce98e66458332bc2f87194",
    "0931f2a9a600eb04d216f15da75ece6769717b89940931f2a9a600eb04d216f15da75ece6769717b",
    "89940931f2a9a600eb04d216f15da75ece6769717b8964b095a1471f5671cc92ed80f8246d056f1c",
    "b379b57fb7122e572715140ef15223c1a5db3a7822f12286fe0c4112592ae677",
);

/// Preset rows for a network. Dev shares the mainnet table.
pub fn preset_validators(network: Network) -> &'static [PresetValidator] {
    match network {
        Network::Mainnet | Network::Dev => MAINNET_VALIDATORS,
        Network::Testnet => TESTNET_VALIDATORS,
    }
}

/// The package deployed on a network, if it has one.
pub fn published_validator_set_bytes(network: Network) -> Option<&'static str> {
    match network {
        Network::Mainnet => Some(MAINNET_INIT_VALIDATOR_SET_BYTES),
        Network::Testnet => Some(TESTNET_INIT_VALIDATOR_SET_BYTES),
        Network::Dev => None,
    }
}

/// Parse the preset table of a network into validators.
pub fn preset_table(network: Network) -> Result<Vec<Validator>, MalformedInput> {
    let presets = preset_validators(network);

    let records = presets
        .iter()
        .map(|p| {
            parse_address("consensusAddr", p.address)
                .map(|address| ValidatorRecord::single_address(address, PRESET_VOTING_POWER))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let keys = presets
        .iter()
        .map(|p| parse_bls_public_key(p.bls_public_key))
        .collect::<Result<Vec<_>, _>>()?;

    Validator::pair_with_bls_keys(&records, &keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gn_02_validator_set::encode_validators;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(preset_table(Network::Mainnet).unwrap().len(), 9);
        assert_eq!(preset_table(Network::Testnet).unwrap().len(), 3);
        assert_eq!(preset_table(Network::Dev).unwrap().len(), 9);
    }

    #[test]
    fn test_presets_reproduce_published_packages() {
        for network in [Network::Mainnet, Network::Testnet] {
            let validators = preset_table(network).unwrap();
            let published = published_validator_set_bytes(network).unwrap();
            assert_eq!(encode_validators(&validators), format!("0x{}", published));
        }
    }

    #[test]
    fn test_preset_rows_share_address() {
        for v in preset_table(Network::Testnet).unwrap() {
            assert_eq!(v.consensus_addr, v.fee_addr);
            assert_eq!(v.consensus_addr, v.bbc_fee_addr);
            assert_eq!(v.voting_power, 100);
        }
    }
}
