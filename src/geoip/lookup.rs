//! Address lookup against the geo service.

use reqwest::Client;

use super::types::GeoIspResult;
use crate::config::GEO_FIELDS;
use crate::error_handling::SnapshotError;

const SERVICE: &str = "geo service";

/// Looks up geolocation and carrier details for an address.
///
/// The endpoint is queried as `<base>/<address>` with an explicit field
/// list. The address is forwarded verbatim (whether it is well-formed is
/// the service's call, not ours), and a missing optional field in the
/// answer is never an error.
pub async fn lookup_geo(
    client: &Client,
    endpoint: &str,
    address: &str,
) -> Result<GeoIspResult, SnapshotError> {
    let url = format!("{}/{}", endpoint.trim_end_matches('/'), address);
    log::debug!("Querying geo service for {}", address);

    let response = client
        .get(&url)
        .query(&[("fields", GEO_FIELDS)])
        .send()
        .await
        .map_err(|e| SnapshotError::request(SERVICE, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SnapshotError::status(SERVICE, status));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SnapshotError::request(SERVICE, e))?;

    let result: GeoIspResult =
        serde_json::from_str(&body).map_err(|e| SnapshotError::parse(SERVICE, e.to_string()))?;

    Ok(result)
}
