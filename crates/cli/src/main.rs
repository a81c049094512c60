mod cli;
mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fxphoto_core::{load_layered_config, validate_config, Config};

use cli::{Cli, Command};

/// Environment variable naming the configuration file.
const CONFIG_ENV: &str = "FXPHOTO_CONFIG";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load(&cli)?;

    match cli.command {
        Command::Convert(args) => commands::convert(config, args, cli.json).await,
        Command::Time(args) => commands::time(config, args, cli.json).await,
        Command::Append(args) => commands::append(config, args, cli.json).await,
    }
}

fn load(cli: &Cli) -> Result<Config> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    match &config_path {
        Some(path) => debug!("Loading configuration from {:?}", path),
        None => debug!("No configuration file, using defaults"),
    }
    let config = load_layered_config(config_path.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    Ok(config)
}

/// Re-validates after command line overrides are applied.
fn validated(config: Config) -> Result<Config> {
    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}
