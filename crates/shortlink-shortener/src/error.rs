use shortlink_core::{GeneratorError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid long url: {0}")]
    InvalidUrl(String),
    #[error("short code '{code}' is too short: minimum length is {min_len}")]
    CodeTooShort { code: String, min_len: usize },
    #[error("attempt {attempt}: failed to generate short code")]
    GenerationFailed {
        attempt: usize,
        #[source]
        source: GeneratorError,
    },
    #[error("link not found for code '{code}'")]
    LinkNotFound {
        code: String,
        #[source]
        source: StorageError,
    },
    #[error("failed to create a unique short code after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
    #[error("{context}")]
    Storage {
        context: String,
        #[source]
        source: StorageError,
    },
}
