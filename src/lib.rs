//! client_info library: one-shot client environment snapshot.
//!
//! This library resolves the caller's public network address, enriches it
//! with a geolocation/ISP lookup, reads the local runtime environment, and
//! merges everything into a single read-only [`snapshot::ClientSnapshot`].
//!
//! # Example
//!
//! ```no_run
//! use client_info::cache::SnapshotCache;
//! use client_info::{collect_snapshot, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let cache = SnapshotCache::new();
//!
//! let snapshot = collect_snapshot(&config, &cache).await?;
//! println!("Public address: {}", snapshot.ip);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod environment;
pub mod error_handling;
mod geoip;
pub mod initialization;
pub mod report;
mod resolver;
pub mod snapshot;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::collect_snapshot;
pub use snapshot::{build_snapshot, fetch_snapshot, ClientSnapshot};

// Internal run module (ties config, client, environment and cache together)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};

    use crate::cache::SnapshotCache;
    use crate::config::Config;
    use crate::environment::SystemEnvironment;
    use crate::initialization::init_client;
    use crate::snapshot::{fetch_snapshot, ClientSnapshot};

    /// Collects the client snapshot through the given cache slot.
    ///
    /// This is the main entry point for the library. A cache hit answers
    /// without building anything; only on a miss are the HTTP client and
    /// the system environment constructed from `config` and the two-stage
    /// pipeline run (address resolution, then geo enrichment joined with
    /// local-facts collection).
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be constructed, or if either lookup
    /// fails or returns a body that cannot be decoded. A failure leaves the
    /// cache slot untouched, so calling again retries the fetch.
    pub async fn collect_snapshot(
        config: &Config,
        cache: &SnapshotCache,
    ) -> Result<Arc<ClientSnapshot>> {
        cache
            .get_or_fetch(|| async {
                let client = init_client(config).context("Failed to initialize HTTP client")?;
                let environment = SystemEnvironment::new(config.user_agent.clone());
                fetch_snapshot(&client, config, &environment)
                    .await
                    .context("Failed to load client information")
            })
            .await
    }
}
