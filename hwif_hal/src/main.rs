//! # HWIF HAL Demo Binary
//!
//! Loads a hardware description, builds every hardware unit through the
//! driver registry and runs a fixed-period read → hold-position → write loop.
//!
//! # Usage
//!
//! ```bash
//! # Run the sample simulation setup until Ctrl-C
//! hwif_hal --config config/hardware.toml
//!
//! # Run 5000 cycles with debug logging
//! hwif_hal --config config/hardware.toml --cycles 5000 -v
//!
//! # JSON logs
//! hwif_hal --config config/hardware.toml --json
//! ```

use clap::Parser;
use hwif_common::config::{ConfigLoader, LogLevel};
use hwif_common::consts::DEFAULT_CONFIG_PATH;
use hwif_hal::config::RuntimeConfig;
use hwif_hal::driver_registry::DriverRegistry;
use hwif_hal::drivers::register_all_drivers;
use hwif_hal::runtime::Runtime;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// HWIF HAL - hardware interface core demo runtime
#[derive(Parser, Debug)]
#[command(name = "hwif_hal")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Hardware interface core with pluggable simulation drivers")]
#[command(long_about = None)]
struct Args {
    /// Path to the runtime configuration (hardware.toml).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Stop after this many cycles (overrides the configuration).
    #[arg(short = 'n', long)]
    cycles: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("HWIF HAL failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // The log level lives in the config file; parse before tracing is up.
    let mut config = RuntimeConfig::load(&args.config).map_err(|e| {
        eprintln!("Failed to load {}: {e}", args.config.display());
        e
    })?;
    setup_tracing(&args, config.shared.log_level);

    info!("HWIF HAL v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "Loaded {} hardware units from {}",
        config.hardware.len(),
        args.config.display()
    );

    if let Some(cycles) = args.cycles {
        config.cycles = Some(cycles);
    }

    let mut registry = DriverRegistry::new();
    register_all_drivers(&mut registry);

    let mut runtime = Runtime::new(config)?;

    let running = runtime.running_flag();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        running.store(false, Ordering::SeqCst);
    })?;

    runtime.init(&registry)?;

    let result = runtime.run();
    if let Err(e) = &result {
        error!("Cycle loop error: {}", e);
    }
    runtime.shutdown()?;
    result?;

    let stats = runtime.stats();
    info!(
        "HWIF HAL shutdown complete: {} cycles, avg={}us, max={}us, violations={}",
        stats.cycle_count,
        stats.average_cycle_time_us(),
        stats.max_cycle_time_us,
        stats.timing_violations
    );
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and the configured level.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.into()
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
