//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Initializes the HTTP client shared by the lookup services.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration (Nominatim requires one)
/// - Timeout from the configuration
/// - Rustls TLS backend (no native TLS)
///
/// The public-IP request overrides the timeout per request.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
