//! menu-nutrition command-line entry point

use anyhow::Result;
use clap::Parser;
use menu_nutrition::{cli, config};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("menu-nutrition v{}", menu_nutrition::VERSION);

    let settings = config::load(args.config.as_deref())?;
    cli::run(args, settings).await
}
