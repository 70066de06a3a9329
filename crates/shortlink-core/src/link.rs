use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A short link record.
///
/// Values handed out by a [`LinkStore`](crate::LinkStore) are snapshots: a
/// later visit does not change a `Link` that was already returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The unique key of the record.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub long_url: String,
    /// Number of tracked resolutions.
    pub visit_count: u64,
    /// When the record was first stored. Always set by the store on insert.
    pub created_at: Timestamp,
}

impl Link {
    /// Creates a record that has never been visited.
    pub fn new(short_code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            short_code,
            long_url: long_url.into(),
            visit_count: 0,
            created_at: Timestamp::now(),
        }
    }
}
