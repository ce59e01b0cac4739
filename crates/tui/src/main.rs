mod app;
mod config;
mod error;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use crate::{config::AppConfig, error::Result};

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;
    tracing::info!(timezone = %config.timezone, "starting fittakka");

    let mut app = app::App::new(&config)?;
    app.run()?;
    Ok(())
}

/// Logs go to a file: stdout is owned by the terminal UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "fittakka={level},engine={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
