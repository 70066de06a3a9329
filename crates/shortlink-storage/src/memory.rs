use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use shortlink_core::store::Result;
use shortlink_core::{Link, LinkStore, ShortCode, StorageError};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};

/// In-memory implementation of [`LinkStore`] using DashMap.
///
/// Each key lives in one shard, and every operation on a key holds that
/// shard's lock for its whole check-and-mutate step: `save` goes through the
/// entry API so the existence check and the insert cannot interleave with
/// another writer, and `increment_visit_count` mutates through a write guard.
/// Records are cloned on the way out, so callers never alias store state.
///
/// Writers check the closed flag while holding the shard lock. `close` sets
/// the flag before clearing, and clearing takes every shard lock, so a write
/// racing with `close` is either rejected or removed by the clear.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    storage: DashMap<ShortCode, Link>,
    closed: AtomicBool,
}

impl InMemoryLinkStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StorageError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn save(&self, mut link: Link) -> Result<()> {
        let entry = self.storage.entry(link.short_code.clone());
        self.ensure_open()?;

        match entry {
            Entry::Occupied(_) => {
                trace!(code = %link.short_code, "short code already taken");
                Err(StorageError::Conflict(link.short_code.into_string()))
            }
            Entry::Vacant(slot) => {
                link.created_at = Timestamp::now();
                slot.insert(link);
                Ok(())
            }
        }
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Link> {
        self.ensure_open()?;

        self.storage
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::NotFound(code.to_owned()))
    }

    async fn increment_visit_count(&self, code: &str) -> Result<()> {
        let Some(mut entry) = self.storage.get_mut(code) else {
            self.ensure_open()?;
            return Err(StorageError::NotFound(code.to_owned()));
        };
        self.ensure_open()?;
        entry.visit_count = entry.visit_count.saturating_add(1);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let released = self.storage.len();
        self.storage.clear();
        debug!(released, "in-memory link store closed");
        Ok(())
    }
}
