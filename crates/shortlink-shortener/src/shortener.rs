use crate::error::Result;
use async_trait::async_trait;
use shortlink_core::ShortCode;

/// The operations a transport adapter calls into.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a short link for `long_url` and returns its code.
    async fn create_short_link(&self, long_url: &str) -> Result<ShortCode>;

    /// Resolves `short_code` to its long URL and records the visit in the
    /// background. The visit is counted after this call returns.
    async fn get_and_track_long_url(&self, short_code: &str) -> Result<String>;
}
