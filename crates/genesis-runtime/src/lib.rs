//! # H2 Genesis Runtime
//!
//! Library half of the `h2-genesis` tool.
//!
//! ## Modular Structure
//!
//! - `cli/` - `h2-genesis` arguments and config resolution
//! - `config/` - Network selection, chain id, input sources, env overrides
//! - `presets/` - Built-in validator tables and published payloads per network
//! - `loader/` - `validators.conf` and `holders.conf` parsing
//! - `generator/` - Runs the encoders over the resolved tables
//! - `output/` - Text and JSON rendering
//!
//! ## Generation Sequence
//!
//! 1. Resolve configuration (defaults → environment → CLI flags)
//! 2. Validate chain id for the selected network
//! 3. Load the validator table (conf file or preset)
//! 4. Load the init-holder table (conf file, inline list, or built-in)
//! 5. Encode extra data and the validator-set package
//! 6. Print artefacts; nothing is printed if any step fails

pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod loader;
pub mod output;
pub mod presets;

pub use config::{hex_chain_id, ConfigError, GeneratorConfig, HolderSource, Network, OutputFormat};
pub use errors::RuntimeError;
pub use generator::{generate, run, GenesisArtifacts};
pub use loader::LoadError;
