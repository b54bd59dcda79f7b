//! Readability enrichment.
//!
//! Entries carry only feed metadata; the full article body is fetched
//! through a headless browser and cached by entry identifier. The
//! reconciler diffs the durable cache against the current entry set:
//! stale records are evicted, missing ones are fetched.
//!
//! ```text
//! entries store ──┬── evict: cache keys not in the entry set
//!                 └── fill:  fetch → minify → cache record
//! ```
//!
//! Fetching is strictly sequential: the one browser is a shared resource
//! and every attempt must release its page before the next entry starts.

mod chrome;
mod config;
mod extractor;
pub mod reconciler;

pub use chrome::ChromeFetcher;
pub use config::FetchConfig;
pub use extractor::ContentExtractor;
pub use reconciler::{evict_stale, fill_missing, missing_keys, FillStats};

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Entry;

/// Trait for readable-content fetchers.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Attempt to extract readable article markup for an entry.
    ///
    /// `Ok(None)` means the page yielded nothing usable (paywall,
    /// unsupported layout, non-http link); it is not an error and is not
    /// cached, so the next run retries naturally.
    async fn fetch(&self, entry: &Entry) -> Result<Option<String>>;

    /// Release whatever resource the last fetch attempt holds.
    ///
    /// Called after every attempt, success or failure, before the next
    /// entry is processed. A leaked page per failed fetch would exhaust
    /// the browser over a feed list hundreds of entries long.
    async fn release(&self);
}
