//! HTTP adapter for the shortlink service.
//!
//! Decodes requests, calls into a [`Shortener`](shortlink_shortener::Shortener)
//! and maps its errors to status codes. The `gateway` binary wires this up
//! with the in-memory store and owns the process lifecycle.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
