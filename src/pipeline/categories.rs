use std::fs;
use std::path::Path;

use tracing::info;

use crate::app::{AppContext, Result};
use crate::domain::{Category, Entry};
use crate::pipeline::sites::materialize_site;

/// Walk the content tree and materialize every category.
///
/// Each subdirectory of the content root is one category; each JSON file
/// inside it is one site. Directory listings are sorted so output is
/// reproducible regardless of filesystem enumeration order. Any
/// unreadable directory or site file aborts the run.
pub fn aggregate(ctx: &AppContext) -> Result<Vec<Category>> {
    let mut categories = Vec::new();

    for dir in sorted_paths(&ctx.config.content_dir, |p| p.is_dir())? {
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let mut sites = Vec::new();
        let mut entries: Vec<Entry> = Vec::new();
        for file in sorted_paths(&dir, |p| {
            p.extension().and_then(|e| e.to_str()) == Some("json")
        })? {
            let site = materialize_site(ctx, name, &file)?;
            entries.extend(site.entries.iter().cloned());
            sites.push(site.summary());
        }

        // Stable sort across the category's sites.
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        ctx.data.write(name, &entries)?;
        info!(category = name, sites = sites.len(), entries = entries.len(), "aggregated category");

        categories.push(Category {
            name: name.to_string(),
            sites,
        });
    }

    write_master_index(ctx, &categories)?;
    Ok(categories)
}

/// Persist the master category index to both the embedded-data location
/// and the general data output. Serialized once and written twice so the
/// two copies are byte-identical.
fn write_master_index(ctx: &AppContext, categories: &[Category]) -> Result<()> {
    let bytes = serde_json::to_vec(categories)?;
    ctx.embed.write_bytes("categories", &bytes)?;
    ctx.data.write_bytes("categories", &bytes)?;
    Ok(())
}

fn sorted_paths(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<std::path::PathBuf>> {
    let mut paths = Vec::new();
    for dirent in fs::read_dir(dir)? {
        let path = dirent?.path();
        if keep(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
