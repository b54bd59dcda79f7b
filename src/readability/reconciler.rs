//! Cache reconciliation: evict stale records, fill missing ones.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::app::Result;
use crate::domain::{CacheRecord, Entry};
use crate::minify::minify;
use crate::readability::ContentFetcher;
use crate::store::JsonDir;

/// Outcome counts for a fill pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FillStats {
    /// Records fetched, minified and written.
    pub enriched: usize,
    /// Fetch yielded no content; not cached, retried next run.
    pub missed: usize,
    /// Fetch or cache write failed; not cached, retried next run.
    pub failed: usize,
}

/// Delete every cache record whose identifier is not in the current
/// entry set. This bounds cache growth as old feed items roll off.
/// Already-missing files are tolerated.
pub fn evict_stale(entries: &JsonDir, cache: &JsonDir) -> Result<usize> {
    let current: HashSet<String> = entries.keys()?.into_iter().collect();
    let mut evicted = 0;
    for key in cache.keys()? {
        if !current.contains(&key) {
            cache.remove(&key)?;
            debug!(%key, "evicted stale cache record");
            evicted += 1;
        }
    }
    Ok(evicted)
}

/// Entry identifiers with no cache record yet.
///
/// An existing record is assumed valid forever; there is no
/// re-validation and no TTL.
pub fn missing_keys(entries: &JsonDir, cache: &JsonDir) -> Result<Vec<String>> {
    Ok(entries
        .keys()?
        .into_iter()
        .filter(|key| !cache.contains(key))
        .collect())
}

/// Fetch and cache content for the given entry identifiers, strictly
/// sequentially.
///
/// Every failure is local to its entry: it is logged, nothing is
/// cached, and the pass moves on. The fetcher is released after every
/// attempt — success, empty result, or error — before the next entry.
pub async fn fill_missing<F: ContentFetcher + ?Sized>(
    entries: &JsonDir,
    cache: &JsonDir,
    fetcher: &F,
    keys: &[String],
) -> FillStats {
    let mut stats = FillStats::default();

    for key in keys {
        let entry: Entry = match entries.read(key) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(%key, "failed to read entry record: {}", e);
                stats.failed += 1;
                continue;
            }
        };

        let outcome = fetcher.fetch(&entry).await;
        fetcher.release().await;

        match outcome {
            Ok(Some(html)) => {
                let record = CacheRecord {
                    content: minify(&html),
                    entry,
                };
                match cache.write(key, &record) {
                    Ok(()) => {
                        info!(%key, chars = record.content.len(), "cached article content");
                        stats.enriched += 1;
                    }
                    Err(e) => {
                        warn!(%key, "failed to write cache record: {}", e);
                        stats.failed += 1;
                    }
                }
            }
            Ok(None) => {
                debug!(%key, link = %entry.link, "no content extracted");
                stats.missed += 1;
            }
            Err(e) => {
                warn!(%key, link = %entry.link, "fetch failed: {}", e);
                stats.failed += 1;
            }
        }
    }

    stats
}
