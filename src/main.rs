//! RustRide Plan Sync - command line entry point.
//!
//! Failures are printed, never signalled through the exit status.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rustride_plan_sync::cli::{Cli, Commands};
use rustride_plan_sync::integrations::sync::{IntervalsClient, SyncError};
use rustride_plan_sync::storage::config::{self, AppConfig};
use rustride_plan_sync::{prepare_events, sync_plan, RunError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting rustride-plan-sync v{}", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Upload { file } => upload(&cli, file.clone()).await,
        Commands::Preview { file } => preview(&cli, file.clone()),
        Commands::Config { init, print } => show_config(&cli, *init, *print),
    };

    if let Err(e) = result {
        println!("Error: {:#}", e);
    }
}

fn load(cli: &Cli) -> anyhow::Result<AppConfig> {
    config::load_config(cli.config.as_deref()).context("loading configuration")
}

async fn upload(cli: &Cli, file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load(cli)?;
    config.intervals.validate()?;

    let path = file.unwrap_or(config.input.default_plan);
    let client = IntervalsClient::new(&config.intervals)?;

    match sync_plan(&path, &client).await {
        Ok(receipt) => {
            tracing::info!("Uploaded {} events", receipt.event_count);
            println!("Trainings uploaded successfully.");
        }
        Err(RunError::Sync(SyncError::ServiceError { status, body })) => {
            println!("Failed to upload trainings. Status code: {}", status);
            println!("{}", body);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn preview(cli: &Cli, file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load(cli)?;
    let path = file.unwrap_or(config.input.default_plan);

    tracing::info!("Zone labels are {} zones", config.intervals.zone_type);

    let events = prepare_events(&path)?;
    println!("{}", serde_json::to_string_pretty(&events)?);

    Ok(())
}

fn show_config(cli: &Cli, init: bool, print: bool) -> anyhow::Result<()> {
    let path = cli.config.clone().unwrap_or_else(config::get_config_path);

    if init {
        if path.exists() {
            println!("Configuration already exists at {}", path.display());
        } else {
            config::save_config(&AppConfig::default(), &path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    if print {
        let mut effective = load(cli)?;
        effective.intervals = effective.intervals.redacted();
        println!("{}", toml::to_string_pretty(&effective)?);
    } else if !init {
        println!("{}", path.display());
    }

    Ok(())
}
