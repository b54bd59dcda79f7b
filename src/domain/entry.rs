use html_escape::decode_html_entities;
use serde::{Deserialize, Serialize};

use crate::domain::ident::content_hash;
use crate::domain::source::SourceEntry;

/// One materialized feed item.
///
/// The record is its own summary projection: the same shape is persisted
/// in the entries store, embedded in site records, and listed in the
/// per-category and global indexes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub date: i64,
    pub author: String,
    pub site_title: String,
    pub site_hash: String,
    pub entry_hash: String,
    pub category: String,
}

impl Entry {
    /// Build an entry from its raw feed form and the owning site context.
    ///
    /// HTML entities in title and author are decoded before the identity
    /// is derived, so the hash is a pure function of the decoded
    /// (title, link) pair.
    pub fn from_source(
        source: &SourceEntry,
        category: &str,
        site_title: &str,
        site_hash: &str,
    ) -> Self {
        let title = decode_html_entities(&source.title).to_string();
        let entry_hash = Self::identity(&title, &source.link);
        Self {
            title,
            link: source.link.clone(),
            date: source.date,
            author: decode_html_entities(&source.author).to_string(),
            site_title: site_title.to_string(),
            site_hash: site_hash.to_string(),
            entry_hash,
            category: category.to_string(),
        }
    }

    /// Derive the stable identifier for a (title, link) pair.
    ///
    /// Identical pairs always collide to the same identifier, which is
    /// what makes re-runs idempotent and lets the readability cache match
    /// entries across runs.
    pub fn identity(title: &str, link: &str) -> String {
        content_hash(&format!("{},{}", title, link))
    }
}

/// An entry enriched with extracted article content.
///
/// At most one record exists per entry identifier; its presence in the
/// cache directory means the entry's content was fetched on some earlier
/// run and need not be refetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    #[serde(flatten)]
    pub entry: Entry,
    pub content: String,
}
