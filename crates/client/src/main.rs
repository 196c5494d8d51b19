//! Burst client binary.
//!
//! Composition root: reads configuration from the environment, sets up
//! logging, builds the localizer and the board, and prints the title screen.
//!
//! ```bash
//! # German, 6x6 board, logs to ./logs/burst.log
//! BURST_LOCALE=de BURST_BOARD_DIMENSION=6 BURST_LOG_DIR=logs cargo run -p burst-client
//! ```

use anyhow::Result;
use burst_client::{Client, ClientConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env()?;

    // 2. Setup logging
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting Burst");
    tracing::info!("Locale: {}", config.locale);
    tracing::info!("Board dimension: {}", config.board.dimension);

    // 3. Build client (localization errors are fatal here)
    let client = Client::builder().config(config).build().inspect_err(|e| {
        tracing::error!("Failed to start: {:#}", e);
    })?;

    // 4. Run
    client.run()?;

    tracing::info!("Shutdown complete");
    Ok(())
}
