//! GeoIP lookup using an ip-api.com compatible web service.
//!
//! This module turns an IPv4 address into a [`LocationRecord`]. Field
//! presence is settled once, when the service response is converted.

mod extract;
mod lookup;
mod types;

// Re-export public API
pub use lookup::GeoIpClient;
pub use types::LocationRecord;
