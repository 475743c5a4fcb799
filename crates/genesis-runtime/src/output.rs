//! # Artefact Rendering

use genesis_types::{to_checksum_address, to_prefixed_hex, Validator};
use gn_01_init_holders::HolderEntry;
use serde::Serialize;

use crate::{hex_chain_id, GenesisArtifacts};

/// JSON document for `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsDocument<'a> {
    pub network: &'static str,
    pub chain_id: u64,
    pub hex_chain_id: String,
    pub extra_validator_bytes: String,
    pub validator_set_bytes: &'a str,
    pub init_holders: Vec<HolderEntry>,
}

impl<'a> From<&'a GenesisArtifacts> for ArtifactsDocument<'a> {
    fn from(artifacts: &'a GenesisArtifacts) -> Self {
        Self {
            network: artifacts.network.name(),
            chain_id: artifacts.chain_id,
            hex_chain_id: hex_chain_id(artifacts.chain_id),
            extra_validator_bytes: to_prefixed_hex(&artifacts.extra_validator_bytes),
            validator_set_bytes: &artifacts.validator_set_bytes,
            init_holders: artifacts.init_holders.entries(),
        }
    }
}

/// Plain-text rendering. The first line is the `init_validator_set_bytes`
/// line consumed by the contract generator.
pub fn render_text(artifacts: &GenesisArtifacts) -> String {
    let mut lines = vec![
        format!("init_validator_set_bytes: {}", artifacts.validator_set_bytes),
        format!(
            "extra_data: {}",
            to_prefixed_hex(&artifacts.extra_validator_bytes)
        ),
        format!("chain_id: {}", artifacts.chain_id),
        format!("hex_chain_id: {}", hex_chain_id(artifacts.chain_id)),
    ];
    lines.extend(
        artifacts
            .init_holders
            .entries()
            .into_iter()
            .map(|entry| format!("init_holder: {} {}", entry.address, entry.balance)),
    );
    terminate_lines(lines)
}

pub fn render_json(artifacts: &GenesisArtifacts) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ArtifactsDocument::from(artifacts))
}

/// One line per decoded validator, addresses in checksum form.
pub fn render_validators(validators: &[Validator]) -> String {
    let mut lines = vec![format!("validators: {}", validators.len())];
    lines.extend(validators.iter().enumerate().map(|(index, v)| {
        format!(
            "#{} consensus={} fee={} bbcFee={} votingPower={} bls={}",
            index,
            to_checksum_address(&v.consensus_addr),
            to_checksum_address(&v.fee_addr),
            to_checksum_address(&v.bbc_fee_addr),
            v.voting_power,
            to_prefixed_hex(&v.bls_public_key),
        )
    }));
    terminate_lines(lines)
}

fn terminate_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, Network};
    use gn_01_init_holders::HolderTable;

    fn artifacts() -> GenesisArtifacts {
        let validator = Validator {
            consensus_addr: [0x11; 20],
            fee_addr: [0x11; 20],
            bbc_fee_addr: [0x11; 20],
            voting_power: 100,
            bls_public_key: [0x22; 48],
        };
        let holders = HolderTable::from_entries(&[(
            "0x2ad76bd308a856837539cbc0ac74b6cde4d7726d",
            "250000000000000000000000000",
        )])
        .unwrap();
        generate(Network::Dev, 714, &[validator], holders)
    }

    #[test]
    fn test_render_text() {
        let a = artifacts();
        let text = render_text(&a);
        let lines: Vec<&str> = text.lines().collect();

        assert!(text.ends_with('\n'));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], format!("init_validator_set_bytes: {}", a.validator_set_bytes));
        assert!(lines[1].starts_with("extra_data: 0x"));
        assert_eq!(lines[2], "chain_id: 714");
        assert_eq!(lines[3], "hex_chain_id: 02ca");
        assert_eq!(
            lines[4],
            "init_holder: 0x2ad76bd308a856837539cbc0ac74b6cde4d7726d cecb8f27f4200f3a000000"
        );
    }

    #[test]
    fn test_render_json() {
        let a = artifacts();
        let json: serde_json::Value = serde_json::from_str(&render_json(&a).unwrap()).unwrap();

        assert_eq!(json["network"], "dev");
        assert_eq!(json["chainId"], 714);
        assert_eq!(json["hexChainId"], "02ca");
        assert_eq!(json["validatorSetBytes"], a.validator_set_bytes.as_str());
        let extra = json["extraValidatorBytes"].as_str().unwrap();
        assert_eq!(extra.len(), 2 + 2 * (32 + 20 + 65));
        assert_eq!(json["initHolders"][0]["balance"], "cecb8f27f4200f3a000000");
    }

    #[test]
    fn test_render_validators() {
        let v = Validator {
            consensus_addr: [0x11; 20],
            fee_addr: [0x11; 20],
            bbc_fee_addr: [0x11; 20],
            voting_power: 100,
            bls_public_key: [0x22; 48],
        };
        let text = render_validators(&[v]);
        assert!(text.starts_with("validators: 1\n#0 consensus=0x"));
        assert!(text.contains("votingPower=100"));
    }
}
