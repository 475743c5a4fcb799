//! # gn-01-init-holders
//!
//! Initial token holders for the genesis allocation.
//!
//! Balances are authored as decimal wei strings and emitted as unprefixed,
//! minimal lowercase hex, the form the genesis template consumes.

pub mod errors;
pub mod holders;

pub use errors::HolderError;
pub use holders::{normalize_balance, HolderEntry, HolderTable, InitHolder, DEFAULT_INIT_HOLDERS};
