use crate::error::StorageError;
use crate::link::Link;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Concurrency-safe keyed storage for [`Link`] records.
///
/// All operations may be called from many tasks at once. Implementations
/// backed by a network service may block for arbitrary durations and fail
/// with [`StorageError::Timeout`] or [`StorageError::Unavailable`].
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Inserts a new record keyed by its short code.
    ///
    /// Returns `Err(Conflict)` if the code already exists, leaving the existing
    /// record untouched. On success `created_at` is set to the current time,
    /// overriding whatever the caller supplied.
    async fn save(&self, link: Link) -> Result<()>;

    /// Returns a snapshot of the record for `code`, or `Err(NotFound)`.
    async fn find_by_short_code(&self, code: &str) -> Result<Link>;

    /// Atomically adds one to the visit counter of `code`.
    ///
    /// Returns `Err(NotFound)` if the code does not exist; never creates a record.
    async fn increment_visit_count(&self, code: &str) -> Result<()>;

    /// Releases held resources. Calling it again is a no-op.
    async fn close(&self) -> Result<()>;
}
