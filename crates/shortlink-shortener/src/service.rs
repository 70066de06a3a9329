use crate::config::ServiceConfig;
use crate::error::{Result, ShortenerError};
use crate::shortener::Shortener;
use crate::tracker::VisitTracker;
use async_trait::async_trait;
use shortlink_core::{CodeGenerator, Link, LinkStore, ShortCode, StorageError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The concrete [`Shortener`].
///
/// This service wraps a [`LinkStore`] and a [`CodeGenerator`] to handle:
/// - Short code generation with bounded retry on collisions
/// - Length checks on generated and requested codes
/// - Visit tracking off the resolve path
///
/// Uniqueness is enforced by the store. The generator only has to produce a
/// fresh candidate on every call.
#[derive(Debug)]
pub struct LinkService<S, G> {
    store: Arc<S>,
    generator: G,
    config: ServiceConfig,
    tracker: VisitTracker,
}

impl<S: LinkStore, G: CodeGenerator> LinkService<S, G> {
    /// Creates a new `LinkService` and starts its visit tracker.
    ///
    /// Must be called from within a tokio runtime. Zero config values fall
    /// back to the defaults.
    pub fn new(store: Arc<S>, generator: G, config: ServiceConfig) -> Self {
        let config = config.normalized();
        let tracker = VisitTracker::spawn(Arc::clone(&store));

        Self {
            store,
            generator,
            config,
            tracker,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Records all visits still queued and stops the visit tracker.
    ///
    /// Does not close the store; the owner of the store does that afterwards.
    pub async fn shutdown(&self) {
        self.tracker.shutdown().await;
    }
}

#[async_trait]
impl<S: LinkStore, G: CodeGenerator> Shortener for LinkService<S, G> {
    async fn create_short_link(&self, long_url: &str) -> Result<ShortCode> {
        if long_url.trim().is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "long URL cannot be blank".to_string(),
            ));
        }

        let max_attempts = self.config.max_gen_attempts;
        for attempt in 1..=max_attempts {
            debug!(attempt, long_url, "generating short code");

            let code = self
                .generator
                .generate(long_url)
                .map_err(|source| ShortenerError::GenerationFailed { attempt, source })?;

            if code.len() < self.config.min_short_code_len {
                warn!(
                    attempt,
                    code = %code,
                    min_len = self.config.min_short_code_len,
                    "generated short code is too short, retrying"
                );
                continue;
            }

            match self.store.save(Link::new(code.clone(), long_url)).await {
                Ok(()) => {
                    info!(code = %code, attempt, "created short link");
                    return Ok(code);
                }
                Err(StorageError::Conflict(_)) => {
                    warn!(attempt, code = %code, "short code collision, retrying");
                }
                Err(source) => {
                    return Err(ShortenerError::Storage {
                        context: format!("attempt {attempt}: failed to save short link '{code}'"),
                        source,
                    });
                }
            }
        }

        Err(ShortenerError::AttemptsExhausted {
            attempts: max_attempts,
        })
    }

    async fn get_and_track_long_url(&self, short_code: &str) -> Result<String> {
        let min_len = self.config.min_short_code_len;
        if short_code.len() < min_len {
            return Err(ShortenerError::CodeTooShort {
                code: short_code.to_owned(),
                min_len,
            });
        }

        let link = match self.store.find_by_short_code(short_code).await {
            Ok(link) => link,
            Err(source @ StorageError::NotFound(_)) => {
                debug!(code = short_code, "short code not found");
                return Err(ShortenerError::LinkNotFound {
                    code: short_code.to_owned(),
                    source,
                });
            }
            Err(source) => {
                return Err(ShortenerError::Storage {
                    context: format!("failed to look up short code '{short_code}'"),
                    source,
                });
            }
        };

        self.tracker.track(link.short_code);
        Ok(link.long_url)
    }
}
