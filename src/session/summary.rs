//! Lookup summary text.

use crate::geoip::LocationRecord;

/// Formats the multi-line summary shown to the user and saved in reports.
pub fn format_summary(record: &LocationRecord, address: &str) -> String {
    format!(
        "IP Address: {}\n\
         Country: {}\n\
         Region: {}\n\
         City: {}\n\
         Coordinates: {}, {}\n\
         Time Zone: {}\n\
         ISP: {}\n\
         \n\
         Estimated Address:\n\
         {}\n",
        record.ip_address,
        record.country,
        record.region,
        record.city,
        record.latitude,
        record.longitude,
        record.time_zone,
        record.isp_or_unknown(),
        address
    )
}
