use tracing::error;

use crate::app::{AppContext, Result};
use crate::pipeline;
use crate::readability::{evict_stale, fill_missing, missing_keys, ChromeFetcher};

/// Full pass: materialize the content tree, build the indexes, then
/// reconcile the readability cache.
pub async fn build(ctx: &AppContext, no_fetch: bool) -> Result<()> {
    let categories = pipeline::aggregate(ctx)?;
    let entry_count = pipeline::build_global_index(ctx)?;
    pipeline::write_repository_meta(ctx)?;

    let site_count: usize = categories.iter().map(|c| c.sites.len()).sum();
    println!(
        "Materialized {} entries from {} sites in {} categories",
        entry_count,
        site_count,
        categories.len()
    );

    if no_fetch {
        println!("Skipping readability enrichment");
        return Ok(());
    }

    // A broken browser environment should not fail an otherwise good
    // build; the next run retries every uncached entry anyway.
    reconcile(ctx, false).await
}

/// Reconcile the readability cache against an existing entries store.
pub async fn enrich(ctx: &AppContext) -> Result<()> {
    reconcile(ctx, true).await
}

async fn reconcile(ctx: &AppContext, browser_required: bool) -> Result<()> {
    let evicted = evict_stale(&ctx.entries, &ctx.cache)?;
    let missing = missing_keys(&ctx.entries, &ctx.cache)?;
    let cached = ctx.entries.keys()?.len() - missing.len();

    if missing.is_empty() {
        println!(
            "Cache reconciled: {} evicted, {} already cached, nothing to fetch",
            evicted, cached
        );
        return Ok(());
    }

    // The browser only starts when there is something to fetch
    let fetcher = match ChromeFetcher::new(ctx.config.fetch.clone()).await {
        Ok(fetcher) => fetcher,
        Err(e) if !browser_required => {
            error!("Failed to launch browser: {}", e);
            println!(
                "Cache reconciled: {} evicted, {} already cached, enrichment skipped",
                evicted, cached
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let stats = fill_missing(&ctx.entries, &ctx.cache, &fetcher, &missing).await;
    println!(
        "Cache reconciled: {} evicted, {} already cached, {} enriched, {} empty, {} failed",
        evicted, cached, stats.enriched, stats.missed, stats.failed
    );
    Ok(())
}
