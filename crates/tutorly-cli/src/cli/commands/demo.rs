//! Demo command handler.

use anyhow::{Context, Result};
use tutorly_core::config::Config;
use tutorly_core::{interrupt, logging};

pub async fn run(config: &Config) -> Result<()> {
    // Held until the TUI exits so buffered log lines are flushed.
    let _guard = logging::init(&config.log).context("init logging")?;
    interrupt::init().context("install Ctrl+C handler")?;

    tracing::info!(
        latency_ms = config.demo.latency_ms,
        offline = config.demo.offline,
        "starting demo"
    );

    tutorly_tui::run_demo(config)
        .await
        .context("interactive demo failed")
}
