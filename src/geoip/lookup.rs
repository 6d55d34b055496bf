//! IP address lookup against the geolocation service.

use log::debug;

use super::extract::into_location_record;
use super::types::{IpApiResponse, LocationRecord};
use crate::error_handling::{describe_reqwest_error, LookupError};

/// Client for an ip-api.com compatible geolocation service.
#[derive(Debug, Clone)]
pub struct GeoIpClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoIpClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Looks up the location of `ip`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::GeolocationError` if the request fails, the
    /// status is not 2xx, the body cannot be decoded, or the service returns
    /// no usable record.
    pub async fn lookup_ip(&self, ip: &str) -> Result<LocationRecord, LookupError> {
        let url = format!("{}/json/{}", self.base_url.trim_end_matches('/'), ip);
        debug!("Requesting geolocation for {ip} from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::GeolocationError(describe_reqwest_error(&e)))?;

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| LookupError::GeolocationError(describe_reqwest_error(&e)))?;

        into_location_record(body, ip).map_err(LookupError::GeolocationError)
    }
}
