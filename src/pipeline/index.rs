use tracing::info;

use crate::app::{AppContext, Result};
use crate::domain::Entry;

/// Build the canonical "everything" feed.
///
/// Reads back every record in the entries store (keys sorted first,
/// since directory order carries no meaning), sorts date-descending with
/// a stable sort, and writes `all.json` to the data output.
pub fn build_global_index(ctx: &AppContext) -> Result<usize> {
    let mut all: Vec<Entry> = Vec::new();
    for key in ctx.entries.keys()? {
        all.push(ctx.entries.read(&key)?);
    }
    all.sort_by(|a, b| b.date.cmp(&a.date));
    ctx.data.write("all", &all)?;
    info!(entries = all.len(), "wrote global index");
    Ok(all.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::categories::aggregate;
    use crate::pipeline::tests::{seed_content, test_context};

    #[test]
    fn test_global_index_spans_categories() {
        let (ctx, _tmp) = test_context();
        seed_content(
            &ctx,
            &[
                (
                    "tech",
                    "a.json",
                    r#"{"title":"A","link":"https://a","updatedAt":1,"entries":[
                        {"title":"A1","link":"https://a/1","date":100,"author":""}
                    ]}"#,
                ),
                (
                    "news",
                    "b.json",
                    r#"{"title":"B","link":"https://b","updatedAt":1,"entries":[
                        {"title":"B1","link":"https://b/1","date":300,"author":""},
                        {"title":"B2","link":"https://b/2","date":50,"author":""}
                    ]}"#,
                ),
            ],
        );
        aggregate(&ctx).unwrap();

        let count = build_global_index(&ctx).unwrap();
        assert_eq!(count, 3);

        let all: Vec<Entry> = ctx.data.read("all").unwrap();
        let titles: Vec<_> = all.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["B1", "A1", "B2"]);
    }

    #[test]
    fn test_duplicate_entries_folded_by_identity() {
        let (ctx, _tmp) = test_context();
        // Same (title, link) syndicated by two sites collides to one record.
        seed_content(
            &ctx,
            &[
                (
                    "tech",
                    "a.json",
                    r#"{"title":"A","link":"https://a","updatedAt":1,"entries":[
                        {"title":"Shared","link":"https://x/1","date":100,"author":""}
                    ]}"#,
                ),
                (
                    "tech",
                    "b.json",
                    r#"{"title":"B","link":"https://b","updatedAt":1,"entries":[
                        {"title":"Shared","link":"https://x/1","date":100,"author":""}
                    ]}"#,
                ),
            ],
        );
        aggregate(&ctx).unwrap();

        assert_eq!(build_global_index(&ctx).unwrap(), 1);
    }
}
