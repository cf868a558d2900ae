//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing and programmatic configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GEO_ENDPOINT, DEFAULT_IP_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};

/// Logging verbosity, quietest to noisiest.
///
/// `Info` covers the normal run (resolved address, lookups); `Debug` adds
/// per-request detail.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal operational output
    Info,
    /// Per-request detail
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How log lines are written.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Colored, human-oriented lines (default)
    Plain,
    /// One JSON object per line, for machine consumption
    Json,
}

/// Command-line options and configuration.
///
/// Generated by `clap` from the field attributes. Every option has a
/// default, so the binary runs with no arguments; the struct can also be
/// built programmatically via `Config::default()` plus struct update
/// syntax.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// client_info
///
/// # Dump the raw snapshot instead of the formatted report
/// client_info --json
///
/// # Point at a self-hosted geo service
/// client_info --geo-endpoint http://localhost:8080/json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "client_info",
    about = "Reports the calling client's network identity, location and runtime environment."
)]
pub struct Config {
    /// Identity service endpoint returning {"ip": "<address>"}
    #[arg(long, default_value = DEFAULT_IP_ENDPOINT)]
    pub ip_endpoint: String,

    /// Geolocation/ISP service base endpoint, queried as <base>/<address>
    #[arg(long, default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value.
    ///
    /// This is both the agent sent on the outbound lookups and the agent
    /// the snapshot reports, so the two can never drift apart.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Print the raw snapshot as JSON instead of the formatted report
    #[arg(long)]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_endpoint: DEFAULT_IP_ENDPOINT.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            json: false,
        }
    }
}
