//! # Millrace
//!
//! A one-pass feed-to-static-site preprocessor.
//!
//! ## Architecture
//!
//! Millrace follows a bottom-up materialization pipeline:
//!
//! ```text
//! Category tree → Site materializer → Entry materializer → Stores
//!                                                            ↓
//!                        Global index ← entries store → Reconciler
//! ```
//!
//! Each run reads a tree of per-site feed JSON files (one directory per
//! category, one file per site), hashes entries and sites into stable
//! identifiers, and writes denormalized JSON fragments for the site
//! generator's templates. A durable readability cache is then reconciled
//! against the current entry set: stale records are evicted and missing
//! ones are fetched through a headless browser, one page at a time.
//!
//! ## Quick Start
//!
//! ```bash
//! # Full pass: materialize, index, enrich
//! millrace build
//!
//! # Materialize and index only
//! millrace build --no-fetch
//!
//! # Reconcile the readability cache against an existing entries store
//! millrace enrich
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together configuration and the
/// three on-disk stores (entries, sites, readability cache).
pub mod app;

/// Command-line interface using clap.
///
/// - `build [--no-fetch]` - Run the full pass
/// - `enrich` - Reconcile the readability cache only
pub mod cli;

/// Run configuration.
///
/// A [`Config`](config::Config) is resolved once at startup from CLI
/// arguments and a single read of the CI environment; components never
/// touch the environment afterwards.
pub mod config;

/// Core domain models.
///
/// - [`Entry`](domain::Entry): one feed item with SHA256-derived identity
/// - [`Site`](domain::Site): one feed source and its sorted entries
/// - [`Category`](domain::Category): named grouping of site summaries
/// - [`CacheRecord`](domain::CacheRecord): an entry plus extracted content
pub mod domain;

/// HTML minification for cached article bodies.
pub mod minify;

/// Materialization pipeline.
///
/// Entry and site materializers, the category aggregator, the global
/// entry index, and the repository metadata fragment.
pub mod pipeline;

/// Readability enrichment.
///
/// - [`ContentFetcher`](readability::ContentFetcher): async fetch/release trait
/// - [`ChromeFetcher`](readability::ChromeFetcher): chromiumoxide implementation
/// - [`reconcile`](readability::reconciler): cache eviction and fill
pub mod readability;

/// Filesystem persistence.
///
/// [`JsonDir`](store::JsonDir): a directory of JSON documents keyed by
/// identifier, used as a content-addressed store.
pub mod store;
