use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use finboard::{Finboard, UiOptions};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "finboard",
    version,
    about = "Keyboard-driven treasury dashboard"
)]
struct Cli {
    /// Where to write logs; the terminal itself belongs to the UI.
    #[arg(long, default_value = "finboard.log")]
    log_file: PathBuf,

    /// Event poll interval in milliseconds.
    #[arg(long, default_value_t = 250)]
    tick_rate: u64,

    /// Hide the key hint line at the bottom of the screen.
    #[arg(long)]
    no_help: bool,

    /// Quit immediately on Ctrl+Q, even with unsaved dialog edits.
    #[arg(long)]
    no_confirm_exit: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let options = UiOptions::default()
        .with_tick_rate(Duration::from_millis(cli.tick_rate))
        .with_help(!cli.no_help)
        .with_confirm_exit(!cli.no_confirm_exit);
    Finboard::new().with_options(options).run()
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
