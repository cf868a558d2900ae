//! Address Resolver.
//!
//! Asks a public identity service which address our requests originate
//! from. This is the first stage of the snapshot pipeline: everything the
//! geo lookup produces depends on the address resolved here.

use reqwest::Client;
use serde::Deserialize;

use crate::error_handling::SnapshotError;

const SERVICE: &str = "address service";

/// The identity service's answer: the caller's public address.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressResult {
    /// Dotted or colon-separated address, exactly as the service reported it.
    pub ip: String,
}

/// Resolves the caller's public network address.
///
/// Issues a single GET to the identity endpoint and decodes the
/// `{"ip": ...}` body. There is no fallback address, since every downstream
/// enrichment needs a real one, so network errors, non-success statuses
/// and malformed bodies all surface to the caller unretried.
pub async fn resolve_address(
    client: &Client,
    endpoint: &str,
) -> Result<AddressResult, SnapshotError> {
    log::debug!("Resolving public address via {}", endpoint);

    let response = client
        .get(endpoint)
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

    let result: AddressResult =
        serde_json::from_str(&body).map_err(|e| SnapshotError::parse(SERVICE, e.to_string()))?;

    log::info!("Resolved public address: {}", result.ip);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_result_decodes_ip() {
        let result: AddressResult = serde_json::from_str(r#"{"ip":"203.0.113.7"}"#).unwrap();
        assert_eq!(result.ip, "203.0.113.7");
    }

    #[test]
    fn test_address_result_tolerates_extra_fields() {
        let result: AddressResult =
            serde_json::from_str(r#"{"ip":"2001:db8::1","version":6}"#).unwrap();
        assert_eq!(result.ip, "2001:db8::1");
    }

    #[test]
    fn test_address_result_requires_ip_field() {
        // `ip` is the one mandatory field in the whole pipeline; a body
        // without it is a decode failure, not an empty result
        let result = serde_json::from_str::<AddressResult>(r#"{"address":"203.0.113.7"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_address_result_rejects_non_json() {
        let result = serde_json::from_str::<AddressResult>("203.0.113.7");
        assert!(result.is_err());
    }
}
