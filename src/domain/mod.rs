pub mod entry;
pub mod ident;
pub mod site;
pub mod source;

pub use entry::{CacheRecord, Entry};
pub use ident::content_hash;
pub use site::{Category, Site, SiteSummary};
pub use source::{SourceEntry, SourceSite};
