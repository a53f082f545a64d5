//! dotdash entry point.
//!
//! # Usage
//!
//! ```bash
//! # Compose with the reference panel, logging to a file
//! dotdash --reference --log-file dotdash.log --log-level debug
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use dotdash_tui::{Runtime, TerminalDriver, ui::RenderOptions};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Morse code composer
#[derive(Parser, Debug)]
#[command(name = "dotdash")]
#[command(about = "Compose Morse code in the terminal")]
#[command(version)]
struct Args {
    /// Write logs to this file (the terminal is owned by the UI)
    ///
    /// Logging is disabled when not provided.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Input poll timeout in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Show the Morse reference panel
    #[arg(short, long)]
    reference: bool,
}

fn init_logging(args: &Args) -> std::io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    tracing::info!("dotdash starting");

    let options = RenderOptions { show_reference: args.reference };
    let driver = TerminalDriver::new(Duration::from_millis(args.tick_ms), options)?;

    Ok(Runtime::new(driver).run().await?)
}
