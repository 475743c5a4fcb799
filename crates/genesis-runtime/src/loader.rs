//! # Table Loaders
//!
//! Line-oriented config files:
//!
//! ```text
//! # validators.conf
//! consensusAddr,feeAddr,bbcFeeAddr,votingPower,blsPublicKey
//!
//! # holders.conf
//! address,balanceInWei
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. The first bad line
//! aborts the load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use genesis_types::{MalformedInput, Validator};
use gn_01_init_holders::{HolderError, HolderTable, InitHolder};
use thiserror::Error;
use tracing::info;

const HOLDER_FIELDS: usize = 2;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid validator info on line {line_no}: {line}")]
    InvalidValidatorInfo { line_no: usize, line: String },

    #[error("Invalid holder info on line {line_no}: {line}")]
    InvalidHolderInfo { line_no: usize, line: String },

    #[error("Malformed entry on line {line_no}")]
    Malformed {
        line_no: usize,
        #[source]
        source: MalformedInput,
    },

    #[error(transparent)]
    Holders(#[from] HolderError),
}

/// Non-empty, non-comment lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `validators.conf` text.
pub fn parse_validators_conf(text: &str) -> Result<Vec<Validator>, LoadError> {
    content_lines(text)
        .map(|(line_no, line)| {
            let fields = split_fields(line);
            let [consensus, fee, bbc_fee, power, bls] = fields.as_slice() else {
                return Err(LoadError::InvalidValidatorInfo {
                    line_no,
                    line: line.to_string(),
                });
            };

            Validator::from_hex(consensus, fee, bbc_fee, power, bls)
                .map_err(|source| LoadError::Malformed { line_no, source })
        })
        .collect()
}

/// Load a `validators.conf` file.
pub fn load_validators_file(path: &Path) -> Result<Vec<Validator>, LoadError> {
    let validators = parse_validators_conf(&read_file(path)?)?;
    info!(
        path = %path.display(),
        count = validators.len(),
        "Loaded validator table"
    );
    Ok(validators)
}

/// Parse `holders.conf` text.
pub fn parse_holders_conf(text: &str) -> Result<HolderTable, LoadError> {
    let holders = content_lines(text)
        .map(|(line_no, line)| {
            let fields = split_fields(line);
            if fields.len() != HOLDER_FIELDS {
                return Err(LoadError::InvalidHolderInfo {
                    line_no,
                    line: line.to_string(),
                });
            }
            InitHolder::from_decimal(fields[0], fields[1])
                .map_err(|source| LoadError::Malformed { line_no, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HolderTable::from_holders(holders))
}

/// Load a `holders.conf` file.
pub fn load_holders_file(path: &Path) -> Result<HolderTable, LoadError> {
    let table = parse_holders_conf(&read_file(path)?)?;
    info!(
        path = %path.display(),
        count = table.len(),
        "Loaded init holder table"
    );
    Ok(table)
}

/// Build a holder table from a comma-separated address list.
pub fn parse_holder_list(addresses: &str, balance: &str) -> Result<HolderTable, LoadError> {
    let addresses: Vec<&str> = addresses
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect();
    Ok(HolderTable::uniform(&addresses, balance)?)
}
