use std::fs;
use std::path::Path;

use html_escape::decode_html_entities;
use tracing::debug;

use crate::app::{AppContext, MillraceError, Result};
use crate::domain::{content_hash, Site, SourceSite};
use crate::pipeline::entries::materialize_entry;

/// Materialize one site's feed file.
///
/// The site identifier hashes the file's stem rather than its title, so
/// it survives title edits. A file that cannot be read or parsed fails
/// the whole run; there is no partial-site recovery.
pub fn materialize_site(ctx: &AppContext, category: &str, path: &Path) -> Result<Site> {
    let bytes = fs::read(path)?;
    let source: SourceSite =
        serde_json::from_slice(&bytes).map_err(|e| MillraceError::FeedParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| MillraceError::InvalidSiteFile(path.to_path_buf()))?;
    let site_hash = content_hash(stem);
    let title = decode_html_entities(&source.title).to_string();

    let mut entries = Vec::with_capacity(source.entries.len());
    for raw in &source.entries {
        entries.push(materialize_entry(
            &ctx.entries,
            raw,
            category,
            &title,
            &site_hash,
        )?);
    }
    // Stable sort: entries sharing a date keep their feed order.
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    let site = Site {
        title,
        link: source.link,
        updated_at: source.updated_at,
        site_hash,
        entries,
    };
    ctx.sites.write(&site.site_hash, &site)?;
    debug!(
        site = %site.title,
        entries = site.entries.len(),
        "materialized site"
    );
    Ok(site)
}
