//! # H2 Genesis Generator
//!
//! Produces the genesis validator-set payloads and init-holder allocation.
//!
//! ```text
//! h2-genesis generate --network mainnet
//! h2-genesis generate --validators ./validators.conf --format json
//! h2-genesis verify 0xf9040f80f9040b...
//! h2-genesis chain-id 714
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); stdout carries only the
//! artefacts, printed after every step has succeeded.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use genesis_runtime::cli::{resolve_config, Cli, Command, GenerateArgs};
use genesis_runtime::output::{render_json, render_text, render_validators};
use genesis_runtime::presets::published_validator_set_bytes;
use genesis_runtime::{hex_chain_id, run, Network, OutputFormat};
use genesis_types::strip_hex_prefix;
use gn_02_validator_set::decode_validator_set;

fn generate(args: GenerateArgs) -> Result<String> {
    let config = resolve_config(args, |key| std::env::var(key).ok())
        .context("Invalid H2_* environment override")?;
    let artifacts = run(&config).context("Genesis generation failed")?;

    match config.format {
        OutputFormat::Text => Ok(render_text(&artifacts)),
        OutputFormat::Json => render_json(&artifacts).context("Failed to serialize artefacts"),
    }
}

fn verify(payload: &str) -> Result<String> {
    let validators =
        decode_validator_set(payload).context("Payload is not a valid validator-set package")?;

    let digits = strip_hex_prefix(payload.trim()).to_ascii_lowercase();
    for network in [Network::Mainnet, Network::Testnet] {
        if published_validator_set_bytes(network) == Some(digits.as_str()) {
            info!(%network, "Payload is the deployed package");
        }
    }

    Ok(render_validators(&validators))
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let output = match cli.command {
        Command::Generate(args) => generate(args)?,
        Command::Verify { payload } => verify(&payload)?,
        Command::ChainId { chain_id } => format!("{}\n", hex_chain_id(chain_id)),
    };

    print!("{}", output);
    Ok(())
}
