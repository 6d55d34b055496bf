//! Conversion from the service response to a `LocationRecord`.

use super::types::{IpApiResponse, LocationRecord};

/// Builds a record from a decoded response.
///
/// Returns the reason as `Err` when the service reported a failure or left
/// out the coordinates. Missing text fields become empty strings and an
/// empty or missing ISP becomes `None`.
pub(crate) fn into_location_record(
    response: IpApiResponse,
    requested_ip: &str,
) -> Result<LocationRecord, String> {
    if response.status.as_deref() == Some("fail") {
        let message = response
            .message
            .unwrap_or_else(|| "lookup failed".to_string());
        return Err(format!("the service rejected {requested_ip}: {message}"));
    }

    let (Some(latitude), Some(longitude)) = (response.lat, response.lon) else {
        return Err(format!("no usable location returned for {requested_ip}"));
    };

    let isp = response
        .isp
        .map(|isp| isp.trim().to_string())
        .filter(|isp| !isp.is_empty());

    Ok(LocationRecord {
        ip_address: response
            .query
            .unwrap_or_else(|| requested_ip.to_string()),
        country: response.country.unwrap_or_default(),
        region: response.region_name.unwrap_or_default(),
        city: response.city.unwrap_or_default(),
        latitude,
        longitude,
        time_zone: response.timezone.unwrap_or_default(),
        isp,
    })
}
