//! Error categorization.
//!
//! Turns transport-level `reqwest` failures into the short reasons shown to
//! the user inside [`super::LookupError`] messages.

/// Describes a `reqwest::Error` in user-facing terms.
///
/// HTTP status errors (produced by `error_for_status`) are checked first,
/// then the transport error kinds.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    if let Some(status) = error.status() {
        return match status.as_u16() {
            400 => "the service rejected the request (HTTP 400)".to_string(),
            401 | 403 => format!("the service refused access (HTTP {})", status.as_u16()),
            404 => "the service endpoint was not found (HTTP 404)".to_string(),
            429 => "the service rate limit was reached (HTTP 429)".to_string(),
            500..=599 => format!("the service is unavailable (HTTP {})", status.as_u16()),
            code => format!("the service answered with HTTP {code}"),
        };
    }

    if error.is_timeout() {
        "the request timed out".to_string()
    } else if error.is_connect() {
        "could not connect to the service".to_string()
    } else if error.is_decode() {
        "the service returned an unexpected response".to_string()
    } else if error.is_body() {
        "the response body could not be read".to_string()
    } else if error.is_builder() {
        format!("invalid request: {error}")
    } else {
        error.to_string()
    }
}
