//! memodeck entry point.
//!
//! # Usage
//!
//! ```bash
//! # Present the deck kept in the user data directory
//! memodeck
//!
//! # Use a specific store and log to a file
//! memodeck --store talk.json --log-file memodeck.log --log-level debug
//! ```

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use clap::Parser;
use memodeck_app::{FileStore, PresenterConfig};
use memodeck_tui::{Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Slide presenter with a stopwatch
#[derive(Parser, Debug)]
#[command(name = "memodeck")]
#[command(about = "Terminal slide and memo presenter with a stopwatch")]
#[command(version)]
struct Args {
    /// Store file holding the deck
    ///
    /// Defaults to `memodeck/store.json` under the user data directory.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Horizontal pointer travel, in columns, that counts as a swipe
    #[arg(long)]
    swipe_threshold: Option<u16>,

    /// Wheel delta reported per horizontal scroll notch
    #[arg(long)]
    wheel_step: Option<f64>,
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("memodeck")
        .join("store.json")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Stdout belongs to the UI, so logs only ever go to a file.
    if let Some(path) = &args.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let mut config = PresenterConfig::default();
    if let Some(threshold) = args.swipe_threshold {
        config.swipe_threshold = threshold;
    }
    if let Some(step) = args.wheel_step {
        config.wheel_step = step;
    }

    let store_path = args.store.unwrap_or_else(default_store_path);
    tracing::info!("memodeck starting with store {}", store_path.display());
    let store = FileStore::open(&store_path)?;

    let driver = TerminalDriver::new(config.wheel_step)?;
    Runtime::new(driver, store, &config).run().await?;
    Ok(())
}
