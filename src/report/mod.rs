//! Terminal rendering of a finished snapshot.
//!
//! Presentation only: the snapshot arrives fully merged and this module
//! turns it into the sectioned report, substituting `Not available` for
//! whatever the lookups and the environment could not answer.

use std::io::{self, Write};

use colored::Colorize;

use crate::environment::Resolution;
use crate::snapshot::ClientSnapshot;

const UNAVAILABLE: &str = "Not available";

fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", title.bold())
}

fn field(out: &mut dyn Write, label: &str, value: Option<&str>) -> io::Result<()> {
    writeln!(out, "  {:<20} {}", format!("{}:", label), value.unwrap_or(UNAVAILABLE))
}

fn yes_no(value: Option<bool>) -> Option<String> {
    value.map(|v| if v { "Yes" } else { "No" }.to_string())
}

fn dimensions(value: Option<Resolution>) -> Option<String> {
    value.map(|r| format!("{} x {}", r.width, r.height))
}

fn coordinates(lat: Option<f64>, lon: Option<f64>) -> Option<String> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(format!("{}, {}", lat, lon)),
        _ => None,
    }
}

/// Writes the sectioned report for a snapshot.
///
/// Absent values render as `Not available`, booleans as `Yes`/`No`, and
/// dimensions as `W x H`. Only section titles are styled so the values stay
/// grep-able.
pub fn render_report(out: &mut dyn Write, snapshot: &ClientSnapshot) -> io::Result<()> {
    section(out, "Main")?;
    field(out, "IP Address", Some(&snapshot.ip))?;
    field(out, "Platform", snapshot.platform.as_deref())?;
    field(out, "Browser", Some(&snapshot.browser))?;

    section(out, "Location")?;
    field(out, "City", snapshot.location.city.as_deref())?;
    field(out, "Region", snapshot.location.region_name.as_deref())?;
    field(out, "Country", snapshot.location.country.as_deref())?;
    field(out, "Zip", snapshot.location.zip.as_deref())?;
    field(
        out,
        "Coordinates",
        coordinates(snapshot.location.lat, snapshot.location.lon).as_deref(),
    )?;
    field(out, "Area timezone", snapshot.location.timezone.as_deref())?;
    field(out, "Currency", snapshot.location.currency.as_deref())?;

    section(out, "Locale")?;
    field(out, "Language", snapshot.language.as_deref())?;
    field(out, "Timezone", snapshot.timezone.as_deref())?;
    field(out, "Accept-Language", snapshot.accept_languages.as_deref())?;

    section(out, "ISP")?;
    field(out, "Name", snapshot.isp.isp.as_deref())?;
    field(out, "Org", snapshot.isp.org.as_deref())?;
    field(out, "AS Name", snapshot.isp.asname.as_deref())?;
    field(out, "Proxy", yes_no(snapshot.isp.proxy).as_deref())?;
    field(out, "Mobile", yes_no(snapshot.isp.mobile).as_deref())?;

    section(out, "User Agent")?;
    field(out, "User Agent", Some(&snapshot.user_agent))?;

    section(out, "Screen size")?;
    field(
        out,
        "Screen Resolution",
        dimensions(snapshot.screen_resolution).as_deref(),
    )?;
    field(
        out,
        "Window Size",
        dimensions(snapshot.window_resolution).as_deref(),
    )?;

    section(out, "Hardware")?;
    field(out, "Cores", Some(&snapshot.hardware_concurrency.to_string()))?;
    field(out, "Device Memory", Some(snapshot.device_memory))?;

    section(out, "Host")?;
    field(out, "Host", snapshot.host.as_deref())?;
    field(out, "Referer", snapshot.referer.as_deref())?;
    field(
        out,
        "Using webdriver?",
        yes_no(Some(snapshot.webdriver)).as_deref(),
    )?;

    Ok(())
}
