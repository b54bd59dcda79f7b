pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "millrace")]
#[command(about = "Feed-to-static-site preprocessor", long_about = None)]
pub struct Cli {
    /// Content tree: one directory per category, one JSON file per site
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Data output directory (stores, category files, all.json)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Template data directory bundled into the published site
    #[arg(long, global = true)]
    pub embed_dir: Option<PathBuf>,

    /// Durable readability cache directory
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Custom domain the site is served from (falls back to INPUT_CUSTOM_DOMAIN)
    #[arg(long, global = true)]
    pub custom_domain: Option<String>,

    /// Push token for the publishing step (falls back to INPUT_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// TOML file tuning the headless fetcher
    #[arg(long, global = true)]
    pub fetch_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pass: materialize, index, enrich
    Build {
        /// Skip readability enrichment
        #[arg(long)]
        no_fetch: bool,
    },
    /// Reconcile the readability cache against an existing entries store
    Enrich,
}
