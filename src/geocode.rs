//! Reverse geocoding.
//!
//! Converts coordinates into a postal address through a Nominatim compatible
//! `reverse` endpoint. Failures here never abort a lookup; see
//! [`describe_address`].

use log::debug;
use serde::Deserialize;

use crate::config::ADDRESS_UNAVAILABLE;
use crate::error_handling::describe_reqwest_error;

#[derive(Debug, Deserialize)]
struct NominatimReverse {
    display_name: Option<String>,
    error: Option<String>,
}

/// Client for the reverse-geocoding service.
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl ReverseGeocoder {
    /// Creates a geocoder for the service at `base_url`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Looks up the address at the given coordinates.
    ///
    /// `Ok(None)` means the service answered but knows no address there.
    /// `Err` carries a user-facing reason for a failed call.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<String>, String> {
        let url = format!("{}/reverse", self.base_url.trim_end_matches('/'));
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        debug!("Reverse geocoding {lat}, {lon}");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "jsonv2"), ("lat", lat.as_str()), ("lon", lon.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| describe_reqwest_error(&e))?;

        let body: NominatimReverse = response
            .json()
            .await
            .map_err(|e| describe_reqwest_error(&e))?;

        if let Some(error) = body.error {
            debug!("Geocoder has no address for {lat}, {lon}: {error}");
            return Ok(None);
        }
        Ok(body
            .display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }
}

/// Turns a reverse-geocoding result into the address line of a summary.
///
/// Always returns a non-empty string: the address, a placeholder when none
/// is known, or the failure reason.
pub fn describe_address(result: Result<Option<String>, String>) -> String {
    match result {
        Ok(Some(address)) => address,
        Ok(None) => ADDRESS_UNAVAILABLE.to_string(),
        Err(reason) => format!("Could not get address details: {reason}"),
    }
}
