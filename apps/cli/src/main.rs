//! `castellan`: loads configuration, then idles until asked to stop.

mod cli;
mod settings;
mod shutdown;

use anyhow::Context;
use castellan_log::{error, info};
use clap::Parser;

use crate::cli::Args;
use crate::settings::ServiceSettings;
use crate::shutdown::ShutdownListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = castellan_log::auto_init_with(|mut config| {
        config.fields = config.fields.or_version(env!("CARGO_PKG_VERSION"));
        config
    })
    .context("failed to initialise logging")?;

    info!("Starting up...");

    let args = Args::parse();

    info!("Initializing configuration");

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = settings::load_config(&args, &cwd)
        .await
        .inspect_err(|e| error!(error = %e, "Could not read config file"))
        .context("Could not read config file")?;

    let service = ServiceSettings::from_config(&config).context("invalid service settings")?;
    let mut shutdown =
        ShutdownListener::install().context("failed to listen for shutdown signals")?;
    info!(
        dashboard = %service.dashboard.addr(),
        actions = service.actions.len(),
        "Configuration loaded"
    );

    let signal = shutdown
        .recv()
        .await
        .context("failed to listen for shutdown signals")?;
    info!("Received shutdown signal: {signal}");

    info!("Initiating shutdown.");
    Ok(())
}
