use serde::Deserialize;

/// One site's feed file as found in the content tree.
///
/// Format: `{title, link, updatedAt, entries: [{title, link, date, author}]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSite {
    pub title: String,
    pub link: String,
    pub updated_at: i64,
    pub entries: Vec<SourceEntry>,
}

/// One raw feed item inside a [`SourceSite`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceEntry {
    pub title: String,
    pub link: String,
    pub date: i64,
    #[serde(default)]
    pub author: String,
}
