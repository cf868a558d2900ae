//! Snapshot data structures.

use serde::Serialize;

use crate::environment::{LocalFacts, Resolution};
use crate::geoip::GeoIspResult;

/// Where the address appears to be.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    /// City name.
    pub city: Option<String>,
    /// Region or state name.
    pub region_name: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// Timezone of the area the address resolves to. Independent of the
    /// locally resolved timezone at the snapshot's top level.
    pub timezone: Option<String>,
    /// Local currency code.
    pub currency: Option<String>,
    /// Latitude.
    pub lat: Option<f64>,
    /// Longitude.
    pub lon: Option<f64>,
}

/// Who carries the address's traffic.
#[derive(Debug, Clone, Serialize)]
pub struct IspInfo {
    /// ISP name.
    pub isp: Option<String>,
    /// Owning organization.
    pub org: Option<String>,
    /// Autonomous system name.
    pub asname: Option<String>,
    /// Whether the address is a known proxy or VPN exit.
    pub proxy: Option<bool>,
    /// Whether the address belongs to a mobile carrier.
    pub mobile: Option<bool>,
}

/// The merged, read-only report: network identity, location, carrier, and
/// every local runtime fact, flattened at the top level.
///
/// Constructed fresh on each invocation and never mutated afterwards; a
/// refresh replaces the whole record, it never merges into an old one.
#[derive(Debug, Clone, Serialize)]
pub struct ClientSnapshot {
    /// The caller's public address.
    pub ip: String,
    /// Geo fields from the lookup service.
    pub location: Location,
    /// Carrier fields from the lookup service.
    pub isp: IspInfo,
    /// Operating system / architecture identifier.
    pub platform: Option<String>,
    /// Browser name derived from the agent string.
    pub browser: String,
    /// The agent string this client presents.
    pub user_agent: String,
    /// Preferred language.
    pub language: Option<String>,
    /// IANA timezone name, resolved locally.
    pub timezone: Option<String>,
    /// Comma-joined ordered language preference list.
    pub accept_languages: Option<String>,
    /// Display geometry in pixels.
    pub screen_resolution: Option<Resolution>,
    /// Viewport geometry (terminal cell grid).
    pub window_resolution: Option<Resolution>,
    /// Name of the host we are running on.
    pub host: Option<String>,
    /// Referring URL.
    pub referer: Option<String>,
    /// Automation marker.
    pub webdriver: bool,
    /// Logical core count.
    pub hardware_concurrency: u32,
    /// Always the unavailable sentinel.
    pub device_memory: &'static str,
}

impl ClientSnapshot {
    /// Structural merge of the three sources.
    ///
    /// The field sets are disjoint, so there is nothing to reconcile: geo
    /// fields split into the `location` and `isp` sub-objects, local facts
    /// land at the top level next to the address.
    pub(crate) fn merge(ip: String, geo: GeoIspResult, facts: LocalFacts) -> Self {
        ClientSnapshot {
            ip,
            location: Location {
                city: geo.city,
                region_name: geo.region_name,
                country: geo.country,
                zip: geo.zip,
                timezone: geo.timezone,
                currency: geo.currency,
                lat: geo.lat,
                lon: geo.lon,
            },
            isp: IspInfo {
                isp: geo.isp,
                org: geo.org,
                asname: geo.asname,
                proxy: geo.proxy,
                mobile: geo.mobile,
            },
            platform: facts.platform,
            browser: facts.browser,
            user_agent: facts.user_agent,
            language: facts.language,
            timezone: facts.timezone,
            accept_languages: facts.accept_languages,
            screen_resolution: facts.screen_resolution,
            window_resolution: facts.window_resolution,
            host: facts.host,
            referer: facts.referer,
            webdriver: facts.webdriver,
            hardware_concurrency: facts.hardware_concurrency,
            device_memory: facts.device_memory,
        }
    }
}
