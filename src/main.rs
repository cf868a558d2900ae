//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `client_info` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process;

use client_info::cache::SnapshotCache;
use client_info::initialization::init_logger_with;
use client_info::report::render_report;
use client_info::{collect_snapshot, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let cache = SnapshotCache::new();

    match collect_snapshot(&config, &cache).await {
        Ok(snapshot) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
            } else {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                render_report(&mut out, &snapshot)?;
                writeln!(out)?;
            }
            Ok(())
        }
        Err(e) => {
            // Both failure arms present the same way: a generic failed-to-load
            // message with a manual retry, details on stderr for diagnosis
            eprintln!("client_info error: failed to load client information: {:#}", e);
            eprintln!("Run the command again to retry.");
            process::exit(1);
        }
    }
}
