use crate::app::Result;
use crate::config::Config;
use crate::store::JsonDir;

/// Wires configuration and the on-disk stores together for one pass.
pub struct AppContext {
    pub config: Config,
    /// Content-addressed entry records, one file per entry hash.
    pub entries: JsonDir,
    /// Site records, one file per site hash.
    pub sites: JsonDir,
    /// General data output: per-category files, `all.json`, master index.
    pub data: JsonDir,
    /// Data bundled into the template layer of the published site.
    pub embed: JsonDir,
    /// Durable readability cache, kept across runs.
    pub cache: JsonDir,
}

impl AppContext {
    /// Open stores for a full build.
    ///
    /// The entries and sites stores are recreated: a build supersedes
    /// every record, and leftovers from a previous run would leak
    /// rolled-off entries into the indexes. The cache directory is the
    /// only store that survives across runs.
    pub fn for_build(config: Config) -> Result<Self> {
        let entries = JsonDir::recreate(config.out_dir.join("entries"))?;
        let sites = JsonDir::recreate(config.out_dir.join("sites"))?;
        Self::with_stores(config, entries, sites)
    }

    /// Open stores without clearing anything, for reconciling the cache
    /// against an entries store produced by an earlier build.
    pub fn open(config: Config) -> Result<Self> {
        let entries = JsonDir::open(config.out_dir.join("entries"))?;
        let sites = JsonDir::open(config.out_dir.join("sites"))?;
        Self::with_stores(config, entries, sites)
    }

    fn with_stores(config: Config, entries: JsonDir, sites: JsonDir) -> Result<Self> {
        let data = JsonDir::open(&config.out_dir)?;
        let embed = JsonDir::open(&config.embed_dir)?;
        let cache = JsonDir::open(&config.cache_dir)?;
        Ok(Self {
            config,
            entries,
            sites,
            data,
            embed,
            cache,
        })
    }
}
