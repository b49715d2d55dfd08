//! SandFM — a sandboxed file browser driven over stdin/stdout.
//!
//! This binary wires the core session loop to the process boundary:
//! stdin carries inbound platform commands, stdout carries outbound
//! protocol JSON and nothing else. Diagnostics go to a log file.

use std::io::{self, BufReader};
use std::path::PathBuf;

use sandfm_core::{run_session, spawn_reader, Config, CoreError, Explorer, MessageWriter};
use tokio::sync::mpsc;

/// Returns the config file path under `$XDG_CONFIG_HOME` or `~/.config`.
fn config_path() -> PathBuf {
    let config_dir = if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/"))
            .join(".config")
    };
    config_dir.join("sandfm").join("config.toml")
}

/// Loads the configuration, treating a missing file as defaults.
fn load_config() -> anyhow::Result<Config> {
    match Config::load(&config_path()) {
        Ok(config) => Ok(config),
        Err(CoreError::NotFound(_)) => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to a file: stdout must carry only protocol JSON.
    tracing_subscriber::fmt()
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("/tmp/sandfm.log")
                .expect("failed to open log file")
        })
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = load_config()?;
    let start_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.start_dir());
    tracing::info!(start_dir = %start_dir.display(), "starting session");

    let explorer = Explorer::new(&start_dir, &config)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let reader = spawn_reader(BufReader::new(io::stdin()), tx);
    let mut writer = MessageWriter::new(io::stdout());

    run_session(explorer, rx, &mut writer).await?;
    reader.await?;

    tracing::info!("session ended");
    Ok(())
}
