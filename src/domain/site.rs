use serde::{Deserialize, Serialize};

use crate::domain::entry::Entry;

/// One materialized feed source and its entries, sorted date-descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub title: String,
    pub link: String,
    pub updated_at: i64,
    /// Hash of the site's source file stem, not its title, so the
    /// identifier survives title edits.
    pub site_hash: String,
    pub entries: Vec<Entry>,
}

impl Site {
    pub fn summary(&self) -> SiteSummary {
        SiteSummary {
            title: self.title.clone(),
            link: self.link.clone(),
            updated_at: self.updated_at,
            site_hash: self.site_hash.clone(),
        }
    }
}

/// Site metadata without entries, as listed in the master category index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub title: String,
    pub link: String,
    pub updated_at: i64,
    pub site_hash: String,
}

/// A named grouping of sites, created fresh each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub sites: Vec<SiteSummary>,
}
