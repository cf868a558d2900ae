//! Geo/ISP data structures.

use serde::Deserialize;

/// Geo/ISP lookup result.
///
/// Every field is optional: the service omits whatever it does not know,
/// and absence is carried through untouched rather than defaulted. Decoding
/// only fails on a fundamentally malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeoIspResult {
    pub city: Option<String>,
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub isp: Option<String>,
    pub org: Option<String>,
    pub asname: Option<String>,
    pub proxy: Option<bool>,
    pub mobile: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_response() {
        let json = r#"{
            "city": "Springfield",
            "regionName": "Wonderland West",
            "country": "Wonderland",
            "zip": "12345",
            "timezone": "America/Chicago",
            "currency": "USD",
            "lat": 39.78,
            "lon": -89.64,
            "isp": "Acme Net",
            "org": "Acme Holdings",
            "asname": "ACME-AS",
            "proxy": false,
            "mobile": true
        }"#;

        let result: GeoIspResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.city.as_deref(), Some("Springfield"));
        assert_eq!(result.region_name.as_deref(), Some("Wonderland West"));
        assert_eq!(result.zip.as_deref(), Some("12345"));
        assert_eq!(result.lat, Some(39.78));
        assert_eq!(result.proxy, Some(false));
        assert_eq!(result.mobile, Some(true));
    }

    #[test]
    fn test_missing_fields_decode_as_none() {
        // The service may answer with any subset; absent fields are None,
        // never an error
        let result: GeoIspResult = serde_json::from_str(r#"{"city":"Springfield"}"#).unwrap();
        assert_eq!(result.city.as_deref(), Some("Springfield"));
        assert!(result.region_name.is_none());
        assert!(result.zip.is_none());
        assert!(result.isp.is_none());
        assert!(result.proxy.is_none());
    }

    #[test]
    fn test_empty_object_decodes() {
        let result: GeoIspResult = serde_json::from_str("{}").unwrap();
        assert!(result.city.is_none());
        assert!(result.mobile.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // ip-api answers include bookkeeping fields (status, query) we never
        // asked for; they must not break decoding
        let json = r#"{"status":"success","query":"203.0.113.7","city":"Springfield"}"#;
        let result: GeoIspResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.city.as_deref(), Some("Springfield"));
    }
}
