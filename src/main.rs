use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use millrace::app::AppContext;
use millrace::cli::{commands, Cli, Commands};
use millrace::config::{CiEnv, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli, CiEnv::capture())?;

    match cli.command {
        Commands::Build { no_fetch } => {
            let ctx = AppContext::for_build(config)?;
            commands::build(&ctx, no_fetch).await?;
        }
        Commands::Enrich => {
            let ctx = AppContext::open(config)?;
            commands::enrich(&ctx).await?;
        }
    }

    Ok(())
}
