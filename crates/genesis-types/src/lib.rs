//! # Genesis Types Crate
//!
//! Types shared by the genesis generator crates.
//!
//! ## Design Principles
//!
//! - **Decode once**: hex text from tables and config files is turned into
//!   fixed-width byte arrays at the edge. Encoders never see raw strings.
//! - **Typed failure**: every malformed field surfaces as a [`MalformedInput`]
//!   naming the field that failed.

pub mod entities;
pub mod errors;
pub mod primitives;

pub use entities::*;
pub use errors::*;
pub use primitives::*;
