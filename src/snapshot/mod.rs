//! Snapshot assembly.
//!
//! The two-stage pipeline at the heart of the crate: resolve the caller's
//! public address, then enrich it with the geo lookup and the local runtime
//! facts and merge everything into one [`ClientSnapshot`].

mod types;

pub use types::{ClientSnapshot, IspInfo, Location};

use futures::join;
use reqwest::Client;

use crate::config::Config;
use crate::environment::{collect_local_facts, Environment};
use crate::error_handling::SnapshotError;
use crate::geoip::lookup_geo;
use crate::resolver::resolve_address;

/// Builds a snapshot for an already-resolved address.
///
/// The geo lookup and the local-facts pass have no data dependency, so they
/// run side by side; the lookup is the only fallible half, and its failure
/// fails the whole build. There is no partial snapshot carrying local
/// facts alone. The address string is forwarded verbatim: whether it is
/// well-formed is the geo service's call, not ours.
pub async fn build_snapshot(
    client: &Client,
    config: &Config,
    environment: &dyn Environment,
    address: &str,
) -> Result<ClientSnapshot, SnapshotError> {
    let (geo, facts) = join!(lookup_geo(client, &config.geo_endpoint, address), async {
        collect_local_facts(environment)
    });

    Ok(ClientSnapshot::merge(address.to_string(), geo?, facts))
}

/// Resolves the caller's address, then builds the full snapshot.
///
/// The geo lookup is never issued before address resolution has settled
/// successfully; a resolver failure means no snapshot at all.
pub async fn fetch_snapshot(
    client: &Client,
    config: &Config,
    environment: &dyn Environment,
) -> Result<ClientSnapshot, SnapshotError> {
    let address = resolve_address(client, &config.ip_endpoint).await?;
    build_snapshot(client, config, environment, &address.ip).await
}
