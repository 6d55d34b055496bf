//! GeoIP data structures.
//!
//! `IpApiResponse` mirrors the wire format; `LocationRecord` is what the rest
//! of the crate sees.

use serde::{Deserialize, Serialize};

use crate::config::UNKNOWN_ISP;

/// Result of an IP-to-location lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    /// Address the service answered for
    pub ip_address: String,
    /// Country name
    pub country: String,
    /// Region, state or province
    pub region: String,
    /// City
    pub city: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA time zone name
    pub time_zone: String,
    /// Internet service provider, when the service knows it
    pub isp: Option<String>,
}

impl LocationRecord {
    /// The ISP, or `"unknown"` when absent.
    pub fn isp_or_unknown(&self) -> &str {
        self.isp.as_deref().unwrap_or(UNKNOWN_ISP)
    }
}

/// ip-api.com JSON response.
///
/// Every field is optional here; presence is decided once in
/// [`super::extract::into_location_record`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IpApiResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub query: Option<String>,
    pub country: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
    pub isp: Option<String>,
}
