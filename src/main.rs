//! Address book assistant - main entry point
//!
//! Reads commands from stdin and answers on stdout. Logs go to stderr.

use address_book_assistant::{repl, Assistant, Config};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(window_days = config.window_days, "Starting address book assistant");

    let mut assistant = Assistant::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut assistant, stdin.lock(), &mut stdout, &config.prompt)?;

    info!(contacts = assistant.book().len(), "Assistant shutdown complete");
    Ok(())
}
