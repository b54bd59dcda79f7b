use crate::app::Result;
use crate::domain::{Entry, SourceEntry};
use crate::store::JsonDir;

/// Materialize one raw feed entry into a persisted record.
///
/// The record lands in the entries store as `<entry_hash>.json`,
/// overwriting any document from the same pass. Entries with identical
/// (title, link) pairs collide to the same file, which is how duplicates
/// across sites are folded.
pub fn materialize_entry(
    store: &JsonDir,
    source: &SourceEntry,
    category: &str,
    site_title: &str,
    site_hash: &str,
) -> Result<Entry> {
    let entry = Entry::from_source(source, category, site_title, site_hash);
    store.write(&entry.entry_hash, &entry)?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content_hash;
    use tempfile::tempdir;

    #[test]
    fn test_persists_under_identity() {
        let tmp = tempdir().unwrap();
        let store = JsonDir::open(tmp.path().join("entries")).unwrap();
        let source = SourceEntry {
            title: "E1".into(),
            link: "https://a/1".into(),
            date: 100,
            author: "x".into(),
        };

        let entry = materialize_entry(&store, &source, "tech", "A", "sh").unwrap();

        assert_eq!(entry.entry_hash, content_hash("E1,https://a/1"));
        assert!(store.path(&entry.entry_hash).is_file());
        let back: Entry = store.read(&entry.entry_hash).unwrap();
        assert_eq!(back.title, "E1");
        assert_eq!(back.site_hash, "sh");
        assert_eq!(back.category, "tech");
    }

    #[test]
    fn test_rerun_overwrites_same_file() {
        let tmp = tempdir().unwrap();
        let store = JsonDir::open(tmp.path().join("entries")).unwrap();
        let source = SourceEntry {
            title: "E1".into(),
            link: "https://a/1".into(),
            date: 100,
            author: "x".into(),
        };

        let first = materialize_entry(&store, &source, "tech", "A", "sh").unwrap();
        let second = materialize_entry(&store, &source, "tech", "A", "sh").unwrap();

        assert_eq!(first.entry_hash, second.entry_hash);
        assert_eq!(store.keys().unwrap().len(), 1);
    }
}
