//! Short code generators.
//!
//! [`DigestGenerator`] is the production generator: it hashes the input
//! together with the current time and a random value, so the same URL gets
//! a fresh candidate on every call. [`SeqGenerator`] produces predictable
//! codes for local runs and tests.

pub mod digest;
pub mod seq;

pub use digest::{DigestGenerator, DEFAULT_CODE_LENGTH};
pub use seq::SeqGenerator;
pub use shortlink_core::CodeGenerator;
