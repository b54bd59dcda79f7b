pub mod categories;
pub mod entries;
pub mod index;
pub mod sites;

pub use categories::aggregate;
pub use entries::materialize_entry;
pub use index::build_global_index;
pub use sites::materialize_site;

use serde::Serialize;

use crate::app::{AppContext, Result};

#[derive(Debug, Serialize)]
struct RepositoryMeta {
    repository: String,
}

/// Write the repository base-path fragment for the template layer.
///
/// `{"repository": "/<repo-name>"}`, or an empty string when the site is
/// served from a custom domain.
pub fn write_repository_meta(ctx: &AppContext) -> Result<()> {
    let meta = RepositoryMeta {
        repository: ctx.config.repository_fragment(),
    };
    ctx.embed.write("repository", &meta)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::{tempdir, TempDir};

    use crate::app::AppContext;
    use crate::config::Config;
    use crate::domain::{content_hash, Entry};
    use crate::readability::FetchConfig;

    /// A context over a temp directory. The content tree is not created
    /// until [`seed_content`] runs.
    pub(crate) fn test_context() -> (AppContext, TempDir) {
        let tmp = tempdir().unwrap();
        let config = test_config(tmp.path().into());
        let ctx = AppContext::for_build(config).unwrap();
        (ctx, tmp)
    }

    pub(crate) fn test_config(root: PathBuf) -> Config {
        Config {
            content_dir: root.join("sites"),
            out_dir: root.join("public").join("data"),
            embed_dir: root.join("templates").join("data"),
            cache_dir: root.join("cache"),
            custom_domain: None,
            token: None,
            repository: None,
            fetch: FetchConfig::default(),
        }
    }

    pub(crate) fn seed_content(ctx: &AppContext, files: &[(&str, &str, &str)]) {
        for (category, name, json) in files {
            let dir = ctx.config.content_dir.join(category);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(name), json).unwrap();
        }
    }

    #[test]
    fn test_repository_meta_written() {
        let (mut ctx, _tmp) = test_context();
        ctx.config.repository = Some("octocat/planet".into());

        super::write_repository_meta(&ctx).unwrap();
        let json: serde_json::Value = ctx.embed.read("repository").unwrap();
        assert_eq!(json["repository"], "/planet");
    }

    // Full-pass scenario: one category, one site, one entry.
    #[test]
    fn test_single_entry_end_to_end() {
        let (ctx, _tmp) = test_context();
        seed_content(
            &ctx,
            &[(
                "tech",
                "a.json",
                r#"{"title":"A","link":"https://a","updatedAt":1,"entries":[
                    {"title":"E1","link":"https://a/1","date":100,"author":"x"}
                ]}"#,
            )],
        );

        super::aggregate(&ctx).unwrap();
        super::build_global_index(&ctx).unwrap();

        let entry_hash = content_hash("E1,https://a/1");
        assert!(ctx.entries.path(&entry_hash).is_file());
        assert!(ctx.sites.path(&content_hash("a")).is_file());

        let category: Vec<Entry> = ctx.data.read("tech").unwrap();
        assert_eq!(category.len(), 1);
        let all: Vec<Entry> = ctx.data.read("all").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].entry_hash, entry_hash);
        assert_eq!(all[0].site_title, "A");

        // No cache record exists until a fetch succeeds.
        assert!(!ctx.cache.contains(&entry_hash));
    }
}
