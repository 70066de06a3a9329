use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use jiff::Timestamp;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use shortlink_core::{CodeGenerator, GeneratorError, ShortCode};

/// Number of characters kept from the encoded digest.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Generates short codes from a SHA-256 digest of the input, the current
/// time and a random 63-bit value, encoded as URL-safe base64 and truncated
/// to [`DEFAULT_CODE_LENGTH`] characters.
#[derive(Debug)]
pub struct DigestGenerator {
    rng: Mutex<StdRng>,
}

impl DigestGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with an explicit random source.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn next_salt(&self) -> u64 {
        // 63 bits, always non-negative when read as i64
        self.rng.lock().random::<u64>() >> 1
    }
}

impl Default for DigestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for DigestGenerator {
    fn generate(&self, input: &str) -> Result<ShortCode, GeneratorError> {
        if input.trim().is_empty() {
            return Err(GeneratorError::EmptyInput);
        }

        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        hasher.update(Timestamp::now().to_string().as_bytes());
        hasher.update(self.next_salt().to_string().as_bytes());
        let digest = hasher.finalize();

        let mut encoded = URL_SAFE.encode(digest);
        // base64 output is ASCII, so truncating by bytes is safe
        encoded.truncate(DEFAULT_CODE_LENGTH);
        Ok(ShortCode::new_unchecked(encoded))
    }
}
