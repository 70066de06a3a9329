use crate::error::GeneratorError;
use crate::shortcode::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage, so
/// they make no uniqueness guarantee: the store rejects duplicates and the
/// caller retries with a fresh candidate. Calling `generate` twice with the
/// same input must be able to produce different codes, otherwise a retry
/// after a collision can never make progress.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Generates a candidate short code for the given long URL.
    ///
    /// Fails with [`GeneratorError::EmptyInput`] when `input` is blank.
    fn generate(&self, input: &str) -> Result<ShortCode, GeneratorError>;
}
