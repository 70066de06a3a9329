//! Short link lifecycle engine.
//!
//! [`LinkService`] turns long URLs into short codes with bounded retry on
//! collisions, and resolves short codes back while counting visits in the
//! background through a [`VisitTracker`].

pub mod config;
pub mod error;
pub mod service;
pub mod shortener;
pub mod tracker;

pub use config::ServiceConfig;
pub use error::{Result, ShortenerError};
pub use service::LinkService;
pub use shortener::Shortener;
pub use tracker::VisitTracker;
