//! Core types and traits for the shortlink service.
//!
//! This crate provides the link record, the short code type and the two
//! seams the service is built on: [`LinkStore`] and [`CodeGenerator`].

pub mod error;
pub mod generator;
pub mod link;
pub mod shortcode;
pub mod store;

pub use error::{GeneratorError, StorageError};
pub use generator::CodeGenerator;
pub use link::Link;
pub use shortcode::ShortCode;
pub use store::LinkStore;
