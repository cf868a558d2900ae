//! Geolocation/ISP enrichment via the external lookup service.
//!
//! This module queries a public geo service for everything it knows about an
//! address (location, carrier, proxy/mobile flags) and decodes the flat
//! JSON answer field-by-field tolerant of omissions.

mod lookup;
mod types;

pub use lookup::lookup_geo;
pub use types::GeoIspResult;
