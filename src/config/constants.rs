//! Configuration constants.
//!
//! This module defines the configuration constants used throughout the
//! application: the default lookup endpoints, timeouts, and the fixed
//! values the snapshot reports.

/// Default identity service endpoint.
///
/// Returns a JSON body of the form `{"ip": "<address>"}` describing the
/// caller's public address. Overridable via `--ip-endpoint`.
pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";

/// Default geolocation/ISP service base endpoint.
///
/// Queried as `<base>/<address>`. Overridable via `--geo-endpoint`.
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ip-api.com/json";

/// Field list requested from the geo service.
///
/// The service's default response omits `currency`, `asname`, `proxy` and
/// `mobile`, so we ask for the full set explicitly. A server that ignores
/// the parameter still decodes fine because every field is optional.
pub const GEO_FIELDS: &str =
    "city,regionName,country,zip,timezone,currency,lat,lon,isp,org,asname,proxy,mobile";

/// Per-request timeout in seconds (both lookups).
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default User-Agent string for outbound requests.
///
/// This is also the agent string the snapshot reports, so overriding it via
/// `--user-agent` changes both what we send and what we show.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// The constant key the single snapshot cache slot lives under.
pub const SNAPSHOT_CACHE_KEY: &str = "client-info";

/// Sentinel reported for device memory.
///
/// The underlying capability is unreliable across environments, so the
/// snapshot always carries this marker instead of attempting detection.
pub const DEVICE_MEMORY_UNAVAILABLE: &str = "Not available";
