use shortlink_core::{CodeGenerator, GeneratorError, ShortCode};
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic short code generator using a sequential counter.
///
/// This generator produces codes like "wh000000", "wh000001", etc. and
/// ignores the input apart from rejecting blank URLs. Codes are unique
/// within a single instance, which makes it handy for local runs and for
/// tests that need predictable output.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl CodeGenerator for SeqGenerator {
    fn generate(&self, input: &str) -> Result<ShortCode, GeneratorError> {
        if input.trim().is_empty() {
            return Err(GeneratorError::EmptyInput);
        }
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(ShortCode::new_unchecked(format!(
            "{}{:06}",
            self.prefix, count
        )))
    }
}
